use crate::circuits::Circuit;
use quantum::{measure_all, measurement::outcome_label};
use rayon::prelude::*;
use rng::ONDRng;
use statevec::{Indexer, Limits, Register, Result};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Tally of full-register measurement outcomes, keyed by basis label.
///
/// Every one of the `base^size` labels is present, unobserved ones with a
/// count of 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShotCounts {
    pub base: usize,
    pub size: usize,
    pub shots: usize,
    pub counts: BTreeMap<String, usize>,
}

impl ShotCounts {
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Labels with a non-zero count.
    pub fn observed(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts
            .iter()
            .filter(|(_, &n)| n > 0)
            .map(|(k, &n)| (k.as_str(), n))
    }
}

/// Run `circuit` on `shots` fresh registers and measure every qudit in
/// ascending order after each run.
///
/// Shot `i` draws from `ONDRng::new("{seed}-shot-{i}")`, so counts depend on
/// the seed only, not on the number of worker threads.
pub fn run_shots<F>(
    base: usize,
    size: usize,
    shots: usize,
    seed: &str,
    circuit: F,
) -> Result<ShotCounts>
where
    F: Fn(&mut Register<ONDRng>) -> Result<()> + Sync,
{
    let dim = Limits::default().dimension(base, size)?;

    let labels: Vec<String> = (0..shots)
        .into_par_iter()
        .map(|shot| -> Result<String> {
            let rng = ONDRng::new(format!("{}-shot-{}", seed, shot).as_bytes());
            let mut reg = Register::with_rng(base, size, rng)?;
            circuit(&mut reg)?;
            if !reg.is_normalized() {
                warn!(shot, norm = reg.norm_sqr(), "register drifted from unit norm");
            }
            Ok(outcome_label(&measure_all(&mut reg)?))
        })
        .collect::<Result<Vec<_>>>()?;

    let indexer = Indexer::new(base, size);
    let mut counts: BTreeMap<String, usize> = (0..dim).map(|k| (indexer.label(k), 0)).collect();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    info!(base, size, shots, seed, "finished shot run");
    Ok(ShotCounts { base, size, shots, counts })
}

/// [`run_shots`] for one of the built-in circuits.
pub fn run_circuit(circuit: Circuit, shots: usize, seed: &str) -> Result<ShotCounts> {
    run_shots(circuit.base(), circuit.size(), shots, seed, |reg| circuit.apply(reg))
}
