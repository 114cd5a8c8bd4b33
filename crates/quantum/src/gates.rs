use statevec::{block_diagonal, GateMatrix, QuditError, Result};

pub use statevec::C64;

pub fn hadamard() -> GateMatrix {
    let s = 1.0 / 2.0_f64.sqrt();
    GateMatrix::from_array([
        [C64::new(s, 0.0), C64::new(s, 0.0)],
        [C64::new(s, 0.0), C64::new(-s, 0.0)],
    ])
}

/// Bit flip.
pub fn pauli_x() -> GateMatrix {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    GateMatrix::from_array([[z, o], [o, z]])
}

/// Bit and phase flip.
pub fn pauli_y() -> GateMatrix {
    let z = C64::new(0.0, 0.0);
    let i = C64::new(0.0, 1.0);
    let ni = C64::new(0.0, -1.0);
    GateMatrix::from_array([[z, ni], [i, z]])
}

/// Phase flip.
pub fn pauli_z() -> GateMatrix {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    let m = C64::new(-1.0, 0.0);
    GateMatrix::from_array([[o, z], [z, m]])
}

/// Real rotation of the (|0>, |1>) plane by `theta`.
pub fn rot(theta: f64) -> GateMatrix {
    let c = theta.cos();
    let s = theta.sin();
    GateMatrix::from_array([
        [C64::new(c, 0.0), C64::new(-s, 0.0)],
        [C64::new(s, 0.0), C64::new(c, 0.0)],
    ])
}

/// |00>→|00>, |01>→|01>, |10>→|11>, |11>→|10>
///
/// The first qudit of the pair is the control.
pub fn cnot() -> GateMatrix {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    GateMatrix::from_array([
        [o, z, z, z],
        [z, o, z, z],
        [z, z, z, o],
        [z, z, o, z],
    ])
}

/// Permutation matrix sending basis state `i` to `v[i]`.
///
/// `v` must contain each of `0..v.len()` exactly once.
pub fn permutation(v: &[usize]) -> Result<GateMatrix> {
    let d = v.len();
    let mut seen = vec![false; d];
    for &dst in v {
        if dst >= d || seen[dst] {
            return Err(QuditError::InvalidPermutation(v.to_vec()));
        }
        seen[dst] = true;
    }
    let mut rows = vec![vec![C64::new(0.0, 0.0); d]; d];
    for (src, &dst) in v.iter().enumerate() {
        rows[dst][src] = C64::new(1.0, 0.0);
    }
    GateMatrix::from_rows(rows)
}

/// Two-qudit gate applying permutation `vs[c]` to the target (second) qudit
/// when the control (first) qudit holds `c`.
///
/// There must be one permutation per control value, each of the same length.
pub fn controlled_permutation(vs: &[&[usize]]) -> Result<GateMatrix> {
    let d = vs.len();
    let blocks = vs
        .iter()
        .map(|v| {
            if v.len() != d {
                return Err(QuditError::matrix_dimension(d, v.len()));
            }
            permutation(v)
        })
        .collect::<Result<Vec<_>>>()?;
    block_diagonal(&blocks)
}

/// Transposition of levels `a` and `b` of a `base`-level qudit.
///
/// For `base = 2`, `swap_levels(2, 0, 1)` is [`pauli_x`].
pub fn swap_levels(base: usize, a: usize, b: usize) -> Result<GateMatrix> {
    if a >= base {
        return Err(QuditError::value_out_of_range(a, base));
    }
    if b >= base {
        return Err(QuditError::value_out_of_range(b, base));
    }
    let mut v: Vec<usize> = (0..base).collect();
    v.swap(a, b);
    permutation(&v)
}
