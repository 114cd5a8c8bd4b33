use crate::digits::Indexer;
use crate::error::{QuditError, Result};
use crate::limits::Limits;
use crate::matrix::C64;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

/// A register of `size` qudits of dimension `base`, stored as a dense vector
/// of `base^size` amplitudes.
///
/// The register owns its random source; every measurement draws from it.
#[derive(Clone, Debug)]
pub struct Register<R = StdRng> {
    pub(crate) amps: Vec<C64>,
    pub(crate) indexer: Indexer,
    pub(crate) limits: Limits,
    pub(crate) rng: R,
}

impl Register<StdRng> {
    /// Create a register in |0...0> with an entropy-seeded generator.
    pub fn new(base: usize, size: usize) -> Result<Self> {
        Self::with_rng(base, size, StdRng::from_entropy())
    }
}

impl<R: Rng> Register<R> {
    /// Create a register in |0...0> measuring with `rng`.
    pub fn with_rng(base: usize, size: usize, rng: R) -> Result<Self> {
        Self::with_limits(base, size, Limits::default(), rng)
    }

    pub fn with_limits(base: usize, size: usize, limits: Limits, rng: R) -> Result<Self> {
        let dim = limits.dimension(base, size)?;
        let mut amps = vec![C64::new(0.0, 0.0); dim];
        amps[0] = C64::new(1.0, 0.0);
        debug!(base, size, dim, "created register");
        Ok(Self {
            amps,
            indexer: Indexer::new(base, size),
            limits,
            rng,
        })
    }
}

impl<R> Register<R> {
    pub fn base(&self) -> usize {
        self.indexer.base()
    }

    /// Number of qudits.
    pub fn size(&self) -> usize {
        self.indexer.size()
    }

    /// Number of amplitudes, `base^size`.
    pub fn dim(&self) -> usize {
        self.amps.len()
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn indexer(&self) -> &Indexer {
        &self.indexer
    }

    pub fn amplitudes(&self) -> &[C64] {
        &self.amps
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Collapse the register onto basis state `k`.
    pub fn set_state(&mut self, k: usize) -> Result<()> {
        if k >= self.dim() {
            return Err(QuditError::state_index(k, self.dim()));
        }
        self.amps.iter_mut().for_each(|a| *a = C64::new(0.0, 0.0));
        self.amps[k] = C64::new(1.0, 0.0);
        Ok(())
    }

    /// Probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    /// `Σ |a_i|^2`.
    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum()
    }

    /// `true` if the total probability is 1 within the register tolerance.
    pub fn is_normalized(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() <= self.limits.tolerance
    }

    /// Copy of the state driven by another random source.
    pub fn fork_with_rng<R2>(&self, rng: R2) -> Register<R2> {
        Register {
            amps: self.amps.clone(),
            indexer: self.indexer.clone(),
            limits: self.limits,
            rng,
        }
    }

    pub(crate) fn check_qudit(&self, qudit: usize) -> Result<()> {
        if qudit >= self.size() {
            return Err(QuditError::qudit_index(qudit, self.size()));
        }
        Ok(())
    }

    /// Validate a classical value for one qudit.
    pub fn check_value(&self, value: usize) -> Result<()> {
        if value >= self.base() {
            return Err(QuditError::value_out_of_range(value, self.base()));
        }
        Ok(())
    }
}
