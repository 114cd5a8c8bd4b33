use crate::gates::swap_levels;
use rand::Rng;
use statevec::{Register, Result};
use tracing::debug;

/// Force `qudit` to the classical `value`.
///
/// Measures the qudit and, if the outcome differs, swaps the outcome level
/// with `value` (the bit flip for qubits). The measurement is irreversible and
/// breaks any entanglement with the rest of the register.
pub fn write<R: Rng>(reg: &mut Register<R>, qudit: usize, value: usize) -> Result<()> {
    reg.check_value(value)?;
    let outcome = reg.measure(qudit)?;
    if outcome != value {
        debug!(qudit, outcome, value, "flipping measured qudit");
        reg.apply_single(qudit, &swap_levels(reg.base(), outcome, value)?)?;
    }
    Ok(())
}

/// Measure every qudit in ascending order.
pub fn measure_all<R: Rng>(reg: &mut Register<R>) -> Result<Vec<usize>> {
    (0..reg.size()).map(|q| reg.measure(q)).collect()
}

/// Basis label of a full set of outcomes, qudit 0 rightmost.
pub fn outcome_label(outcomes: &[usize]) -> String {
    outcomes
        .iter()
        .rev()
        .map(|&v| std::char::from_digit(v as u32, 36).unwrap_or('?'))
        .collect()
}
