use crate::error::{QuditError, Result};
use crate::matrix::{GateMatrix, C64};
use crate::register::Register;
use tracing::trace;

impl<R> Register<R> {
    /// Apply a `base × base` unitary to `qudit`.
    pub fn apply_single(&mut self, qudit: usize, u: &GateMatrix) -> Result<()> {
        self.check_qudit(qudit)?;
        u.validate(self.base(), 1, self.limits.tolerance)?;
        trace!(qudit, "apply single-qudit gate");

        let d = self.base();
        let mut idx = vec![0usize; d];
        let mut old = vec![C64::new(0.0, 0.0); d];
        let mut new = vec![C64::new(0.0, 0.0); d];

        for packed in 0..self.indexer.combinations(1) {
            for (v, i) in idx.iter_mut().enumerate() {
                *i = self.indexer.insert(packed, qudit, v);
            }
            for (o, &i) in old.iter_mut().zip(&idx) {
                *o = self.amps[i];
            }
            u.mul_into(&old, &mut new);
            for (&i, &n) in idx.iter().zip(&new) {
                self.amps[i] = n;
            }
        }
        Ok(())
    }

    /// Apply a `base² × base²` unitary to the ordered pair (`qudit_a`,
    /// `qudit_b`).
    ///
    /// Local index `j * base + k` addresses `qudit_a = j`, `qudit_b = k`.
    pub fn apply_two(&mut self, qudit_a: usize, qudit_b: usize, u: &GateMatrix) -> Result<()> {
        self.check_qudit(qudit_a)?;
        self.check_qudit(qudit_b)?;
        if qudit_a == qudit_b {
            return Err(QuditError::RepeatedQudit(qudit_a));
        }
        u.validate(self.base(), 2, self.limits.tolerance)?;
        trace!(qudit_a, qudit_b, "apply two-qudit gate");

        let d = self.base();
        let mut idx = vec![0usize; d * d];
        let mut old = vec![C64::new(0.0, 0.0); d * d];
        let mut new = vec![C64::new(0.0, 0.0); d * d];

        for packed in 0..self.indexer.combinations(2) {
            let template = self.indexer.pair_template(packed, qudit_a, qudit_b);
            for j in 0..d {
                for k in 0..d {
                    idx[j * d + k] = self.indexer.pair_index(template, qudit_a, qudit_b, j, k);
                }
            }
            for (o, &i) in old.iter_mut().zip(&idx) {
                *o = self.amps[i];
            }
            u.mul_into(&old, &mut new);
            for (&i, &n) in idx.iter().zip(&new) {
                self.amps[i] = n;
            }
        }
        Ok(())
    }
}
