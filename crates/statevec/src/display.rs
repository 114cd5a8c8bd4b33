//! Text rendering of amplitudes and probabilities, one basis state per line.

use crate::register::Register;
use std::fmt;

/// Prints `label: amplitude` for every basis state.
///
/// With the alternate flag (`{:#}`) zero amplitudes are skipped.
impl<R> fmt::Display for Register<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, a) in self.amplitudes().iter().enumerate() {
            if f.alternate() && a.norm_sqr() == 0.0 {
                continue;
            }
            writeln!(f, "{}: {:+.6}{:+.6}i", self.indexer().label(i), a.re, a.im)?;
        }
        Ok(())
    }
}

/// Borrowing view that prints `label: probability` for every basis state.
pub struct ProbabilityTable<'a, R> {
    register: &'a Register<R>,
}

impl<R> Register<R> {
    pub fn probability_table(&self) -> ProbabilityTable<'_, R> {
        ProbabilityTable { register: self }
    }
}

impl<R> fmt::Display for ProbabilityTable<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ix = self.register.indexer();
        for (i, p) in self.register.probabilities().into_iter().enumerate() {
            if f.alternate() && p == 0.0 {
                continue;
            }
            writeln!(f, "{}: {:.6}", ix.label(i), p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Register;

    #[test]
    fn lists_every_basis_state() {
        let mut reg = Register::new(3, 1).unwrap();
        reg.set_state(2).unwrap();
        let text = reg.to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("2: +1.000000+0.000000i"));
        assert_eq!(format!("{:#}", reg.probability_table()), "2: 1.000000\n");
    }
}
