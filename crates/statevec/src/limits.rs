use crate::error::{QuditError, Result};

/// Largest amplitude count accepted by default (2^30, i.e. 30 qubits).
pub const MAX_AMPLITUDES: usize = 1 << 30;

/// Absolute tolerance used for unitarity checks and normalization.
pub const EPSILON: f64 = 1e-6;

/// Resource and numeric limits for a register.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    /// Upper bound on `base^size`.
    pub max_amplitudes: usize,
    /// Element-wise absolute tolerance for `M·M† = I`.
    pub tolerance: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_amplitudes: MAX_AMPLITUDES,
            tolerance: EPSILON,
        }
    }
}

impl Limits {
    /// Largest qudit count whose amplitude vector fits under `max_amplitudes`.
    pub fn max_qudits(&self, base: usize) -> usize {
        if base < 2 {
            return 0;
        }
        let mut n = 0;
        let mut dim = 1usize;
        while let Some(next) = dim.checked_mul(base) {
            if next > self.max_amplitudes {
                break;
            }
            dim = next;
            n += 1;
        }
        n
    }

    /// Check `base` and `size` and return the amplitude count `base^size`.
    pub fn dimension(&self, base: usize, size: usize) -> Result<usize> {
        if base < 2 {
            return Err(QuditError::configuration(format!(
                "base must be at least 2, got {}",
                base
            )));
        }
        if size == 0 {
            return Err(QuditError::configuration("register needs at least one qudit"));
        }
        let dim = u32::try_from(size)
            .ok()
            .and_then(|exp| base.checked_pow(exp))
            .filter(|&dim| dim <= self.max_amplitudes);
        dim.ok_or_else(|| {
            QuditError::configuration(format!(
                "{} qudits of base {} exceed the limit of {} qudits",
                size,
                base,
                self.max_qudits(base)
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bound_matches_thirty_qubits() {
        let limits = Limits::default();
        assert_eq!(limits.max_qudits(2), 30);
        assert_eq!(limits.max_qudits(3), 18);
        assert_eq!(limits.dimension(2, 30), Ok(1 << 30));
        assert!(limits.dimension(2, 31).is_err());
    }

    #[test]
    fn rejects_degenerate_configurations() {
        let limits = Limits::default();
        assert!(matches!(limits.dimension(1, 3), Err(QuditError::Configuration(_))));
        assert!(matches!(limits.dimension(2, 0), Err(QuditError::Configuration(_))));
        assert!(limits.dimension(3, 1000).is_err());
    }

    #[test]
    fn custom_bound() {
        let limits = Limits { max_amplitudes: 100, ..Limits::default() };
        assert_eq!(limits.max_qudits(3), 4);
        assert_eq!(limits.dimension(3, 4), Ok(81));
        assert!(limits.dimension(3, 5).is_err());
    }
}
