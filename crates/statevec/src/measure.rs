use crate::error::{QuditError, Result};
use crate::matrix::C64;
use crate::register::Register;
use rand::Rng;
use tracing::debug;

impl<R> Register<R> {
    /// Marginal probability of each outcome of `qudit`.
    ///
    /// The first `base - 1` values are summed from the amplitudes; the last is
    /// `1 - Σ(others)`, clamped at 0.
    pub fn outcome_probabilities(&self, qudit: usize) -> Result<Vec<f64>> {
        self.check_qudit(qudit)?;
        let d = self.base();
        let mut probs = vec![0.0f64; d];
        for packed in 0..self.indexer.combinations(1) {
            for (v, p) in probs.iter_mut().enumerate().take(d - 1) {
                *p += self.amps[self.indexer.insert(packed, qudit, v)].norm_sqr();
            }
        }
        let rest: f64 = probs[..d - 1].iter().sum();
        probs[d - 1] = (1.0 - rest).max(0.0);
        Ok(probs)
    }

    /// Zero every amplitude where `qudit != outcome` and scale the rest by
    /// `1 / sqrt(mass)`, where `mass` is the probability actually held by the
    /// surviving amplitudes.
    ///
    /// Fails without touching the amplitudes if the surviving mass is zero.
    fn collapse(&mut self, qudit: usize, outcome: usize) -> Result<f64> {
        let mass: f64 = (0..self.indexer.combinations(1))
            .map(|packed| self.amps[self.indexer.insert(packed, qudit, outcome)].norm_sqr())
            .sum();
        if mass <= 0.0 {
            return Err(QuditError::ZeroProbabilityBranch { qudit, outcome });
        }

        let scale = 1.0 / mass.sqrt();
        for packed in 0..self.indexer.combinations(1) {
            for v in 0..self.base() {
                let i = self.indexer.insert(packed, qudit, v);
                if v == outcome {
                    self.amps[i] *= scale;
                } else {
                    self.amps[i] = C64::new(0.0, 0.0);
                }
            }
        }
        Ok(mass)
    }
}

impl<R: Rng> Register<R> {
    /// Projectively measure `qudit` in the computational basis and collapse
    /// the state onto the sampled outcome.
    ///
    /// If every outcome but the last has exactly zero probability, the last
    /// outcome is returned without drawing a random number and without
    /// touching the amplitudes.
    pub fn measure(&mut self, qudit: usize) -> Result<usize> {
        let probs = self.outcome_probabilities(qudit)?;
        let last = self.base() - 1;

        if probs[..last].iter().all(|&p| p == 0.0) {
            debug!(qudit, outcome = last, "deterministic measurement");
            return Ok(last);
        }

        let r: f64 = self.rng.gen();
        let mut cumulative = 0.0;
        let mut outcome = last;
        for (v, p) in probs[..last].iter().enumerate() {
            cumulative += p;
            if r < cumulative {
                outcome = v;
                break;
            }
        }

        let prob = self.collapse(qudit, outcome)?;
        debug!(qudit, outcome, prob, "measured qudit");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use crate::{GateMatrix, QuditError, Register, C64};
    use rand::RngCore;
    use rng::ONDRng;

    fn c(re: f64) -> C64 {
        C64::new(re, 0.0)
    }

    /// Generator that returns the same word forever; `gen::<f64>()` maps
    /// `1 << 63` to exactly 0.5.
    struct Fixed(u64);

    impl RngCore for Fixed {
        fn next_u32(&mut self) -> u32 {
            (self.0 >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for (i, b) in dest.iter_mut().enumerate() {
                *b = self.0.to_le_bytes()[i % 8];
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    /// sqrt(X): sends |0> to amplitudes of modulus exactly 1/sqrt(2).
    fn sqrt_x() -> GateMatrix {
        GateMatrix::from_array([
            [C64::new(0.5, 0.5), C64::new(0.5, -0.5)],
            [C64::new(0.5, -0.5), C64::new(0.5, 0.5)],
        ])
    }

    #[test]
    fn draw_on_boundary_selects_next_outcome() {
        let mut reg = Register::with_rng(2, 1, Fixed(1 << 63)).unwrap();
        reg.apply_single(0, &sqrt_x()).unwrap();
        assert_eq!(reg.outcome_probabilities(0).unwrap(), vec![0.5, 0.5]);
        assert_eq!(reg.measure(0).unwrap(), 1);
        assert_eq!(reg.amplitudes()[0], c(0.0));
        assert!(reg.is_normalized());

        let mut reg = Register::with_rng(2, 1, Fixed(0)).unwrap();
        reg.apply_single(0, &sqrt_x()).unwrap();
        assert_eq!(reg.measure(0).unwrap(), 0);
        assert!(reg.is_normalized());
    }

    #[test]
    fn empty_last_branch_is_rejected() {
        // within tolerance of unitary, leaves |0> slightly short of norm 1
        let shrink = GateMatrix::from_rows(vec![
            vec![c(1.0 - 1e-9), c(0.0)],
            vec![c(0.0), c(1.0)],
        ])
        .unwrap();
        let mut reg = Register::with_rng(2, 1, Fixed(u64::MAX)).unwrap();
        reg.apply_single(0, &shrink).unwrap();
        let before = reg.amplitudes().to_vec();

        let probs = reg.outcome_probabilities(0).unwrap();
        assert!(probs[1] > 0.0);
        assert_eq!(
            reg.measure(0),
            Err(QuditError::ZeroProbabilityBranch { qudit: 0, outcome: 1 })
        );
        assert_eq!(reg.amplitudes(), before.as_slice());
    }

    #[test]
    fn basis_state_probabilities() {
        let mut reg = Register::with_rng(3, 2, ONDRng::new(b"probs")).unwrap();
        reg.set_state(7).unwrap(); // "21"
        assert_eq!(reg.outcome_probabilities(0).unwrap(), vec![0.0, 1.0, 0.0]);
        assert_eq!(reg.outcome_probabilities(1).unwrap(), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn last_outcome_skips_the_draw() {
        let mut reg = Register::with_rng(2, 1, ONDRng::new(b"skip")).unwrap();
        reg.set_state(1).unwrap();
        assert_eq!(reg.measure(0).unwrap(), 1);
        assert_eq!(reg.rng_mut().step(), 0);
        assert_eq!(reg.amplitudes(), &[c(0.0), c(1.0)]);
    }

    #[test]
    fn collapse_renormalizes() {
        let s = 1.0 / 3.0f64.sqrt();
        // 3x3 unitary sending |0> to an equal superposition
        let f = GateMatrix::from_rows(vec![
            vec![c(s), c(s), c(s)],
            vec![c(s), C64::from_polar(s, 2.0 * std::f64::consts::PI / 3.0), C64::from_polar(s, 4.0 * std::f64::consts::PI / 3.0)],
            vec![c(s), C64::from_polar(s, 4.0 * std::f64::consts::PI / 3.0), C64::from_polar(s, 8.0 * std::f64::consts::PI / 3.0)],
        ])
        .unwrap();
        for seed in 0..20u8 {
            let mut reg = Register::with_rng(3, 2, ONDRng::new(&[seed])).unwrap();
            reg.apply_single(1, &f).unwrap();
            let probs = reg.outcome_probabilities(1).unwrap();
            assert!(probs.iter().all(|p| (p - 1.0 / 3.0).abs() < 1e-9));

            let v = reg.measure(1).unwrap();
            assert!(v < 3);
            assert!(reg.is_normalized());
            let amp = reg.amplitudes()[reg.indexer().insert(0, 1, v)];
            assert!((amp.norm() - 1.0).abs() < 1e-9);
        }
    }
}
