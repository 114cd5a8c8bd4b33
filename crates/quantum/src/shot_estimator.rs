use rng::ONDRng;
use statevec::{Register, Result};

/// Estimate the outcome distribution of qudit `k` via projective
/// measurements (shots).
///
/// Each shot measures a copy of `reg` driven by its own generator seeded from
/// `seed` and the shot number; `reg` itself is left untouched.
pub fn estimate_outcome_frequencies<R>(
    reg: &Register<R>,
    k: usize,
    seed: &str,
    shots: usize,
) -> Result<Vec<f64>> {
    let mut freq = vec![0.0; reg.base()];
    if shots == 0 {
        return Ok(freq);
    }

    for shot in 0..shots {
        let rng = ONDRng::new(format!("{}-estimate-{}", seed, shot).as_bytes());
        let mut copy = reg.fork_with_rng(rng);
        freq[copy.measure(k)?] += 1.0;
    }

    freq.iter_mut().for_each(|f| *f /= shots as f64);
    Ok(freq)
}

/// Estimate ⟨Z_i Z_j⟩ for qubits via shots, `Z = +1` for outcome 0 and `-1`
/// otherwise.
pub fn estimate_zz_shots<R>(
    reg: &Register<R>,
    i: usize,
    j: usize,
    seed: &str,
    shots: usize,
) -> Result<f64> {
    if shots == 0 {
        return Ok(0.0);
    }

    let mut sum = 0.0;
    for shot in 0..shots {
        let rng = ONDRng::new(format!("{}-zz-{}", seed, shot).as_bytes());
        let mut copy = reg.fork_with_rng(rng);
        let mi = copy.measure(i)?;
        let mj = copy.measure(j)?;

        let zi = if mi == 0 { 1.0 } else { -1.0 };
        let zj = if mj == 0 { 1.0 } else { -1.0 };

        sum += zi * zj;
    }

    Ok(sum / shots as f64)
}
