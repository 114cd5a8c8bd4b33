//! Qutrit (base 3) gates.
//!
//! The rotations act on the real 3-dimensional space spanned by |0>, |1> and
//! |2>; they are not Bloch-sphere rotations.

use crate::gates::{controlled_permutation, permutation, C64};
use statevec::{GateMatrix, Result};

fn real3(m: [[f64; 3]; 3]) -> GateMatrix {
    GateMatrix::from_array(m.map(|row| row.map(|x| C64::new(x, 0.0))))
}

/// Rotation about the |0> axis (mixes |1> and |2>).
pub fn rx(theta: f64) -> GateMatrix {
    let (c, s) = (theta.cos(), theta.sin());
    real3([
        [1.0, 0.0, 0.0],
        [0.0, c, -s],
        [0.0, s, c],
    ])
}

/// Rotation about the |1> axis (mixes |0> and |2>).
pub fn ry(theta: f64) -> GateMatrix {
    let (c, s) = (theta.cos(), theta.sin());
    real3([
        [c, 0.0, s],
        [0.0, 1.0, 0.0],
        [-s, 0.0, c],
    ])
}

/// Rotation about the |2> axis (mixes |0> and |1>).
pub fn rz(theta: f64) -> GateMatrix {
    let (c, s) = (theta.cos(), theta.sin());
    real3([
        [c, -s, 0.0],
        [s, c, 0.0],
        [0.0, 0.0, 1.0],
    ])
}

/// Relative phase `theta` on |1> and `phi` on |2>.
pub fn phase(theta: f64, phi: f64) -> GateMatrix {
    let z = C64::new(0.0, 0.0);
    GateMatrix::from_array([
        [C64::new(1.0, 0.0), z, z],
        [z, C64::from_polar(1.0, theta), z],
        [z, z, C64::from_polar(1.0, phi)],
    ])
}

/// Qutrit permutation; `[1, 2, 0]` maps a|0> + b|1> + c|2> to
/// c|0> + a|1> + b|2>.
pub fn permute(v: [usize; 3]) -> Result<GateMatrix> {
    permutation(&v)
}

/// Controlled permutation: `pv0`, `pv1` or `pv2` is applied to the target
/// when the control is |0>, |1> or |2>.
pub fn cpermute(pv0: [usize; 3], pv1: [usize; 3], pv2: [usize; 3]) -> Result<GateMatrix> {
    controlled_permutation(&[&pv0, &pv1, &pv2])
}
