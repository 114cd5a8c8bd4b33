use quantum::gates::{cnot, hadamard};
use rng::ONDRng;
use statevec::{Register, Result};
use std::time::Instant;
use tracing::info;

pub mod circuits;
mod output;
pub mod shots;
pub use circuits::Circuit;
pub use output::write_csv;
pub use shots::{run_circuit, run_shots, ShotCounts};

/// Time `depth` layers of H + CNOT on an `n`-qubit register; returns seconds.
pub fn benchmark(n: usize, depth: usize) -> Result<f64> {
    let mut psi = Register::with_rng(2, n, ONDRng::new(b"benchmark"))?;
    let h = hadamard();
    let cx = cnot();

    let start = Instant::now();
    for t in 0..depth {
        psi.apply_single(t % n, &h)?;
        if n > 1 {
            let k = t % (n - 1);
            psi.apply_two(k, k + 1, &cx)?;
        }
    }
    let secs = start.elapsed().as_secs_f64();

    info!(n, depth, secs, "benchmark finished");
    Ok(secs)
}
