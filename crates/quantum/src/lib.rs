//! Named gates for qubit and qutrit registers, and the register operations
//! built on them.

pub mod gates;
pub mod measurement;
pub mod shot_estimator;
pub mod trinary;

pub use measurement::{measure_all, write};

use statevec::{Register, Result};

pub fn apply_x<R>(reg: &mut Register<R>, k: usize) -> Result<()> {
    reg.apply_single(k, &gates::pauli_x())
}

pub fn apply_y<R>(reg: &mut Register<R>, k: usize) -> Result<()> {
    reg.apply_single(k, &gates::pauli_y())
}

pub fn apply_z<R>(reg: &mut Register<R>, k: usize) -> Result<()> {
    reg.apply_single(k, &gates::pauli_z())
}

pub fn apply_h<R>(reg: &mut Register<R>, k: usize) -> Result<()> {
    reg.apply_single(k, &gates::hadamard())
}

pub fn apply_rot<R>(reg: &mut Register<R>, k: usize, theta: f64) -> Result<()> {
    reg.apply_single(k, &gates::rot(theta))
}

pub fn apply_cnot<R>(reg: &mut Register<R>, control: usize, target: usize) -> Result<()> {
    reg.apply_two(control, target, &gates::cnot())
}

pub fn apply_rx3<R>(reg: &mut Register<R>, k: usize, theta: f64) -> Result<()> {
    reg.apply_single(k, &trinary::rx(theta))
}

pub fn apply_ry3<R>(reg: &mut Register<R>, k: usize, theta: f64) -> Result<()> {
    reg.apply_single(k, &trinary::ry(theta))
}

pub fn apply_rz3<R>(reg: &mut Register<R>, k: usize, theta: f64) -> Result<()> {
    reg.apply_single(k, &trinary::rz(theta))
}

pub fn apply_phase3<R>(reg: &mut Register<R>, k: usize, theta: f64, phi: f64) -> Result<()> {
    reg.apply_single(k, &trinary::phase(theta, phi))
}

/// Permute the levels of qudit `k`; works for any base matching `v.len()`.
pub fn apply_permute<R>(reg: &mut Register<R>, k: usize, v: &[usize]) -> Result<()> {
    reg.apply_single(k, &gates::permutation(v)?)
}

/// Apply `vs[c]` to `target` when `control` holds `c`.
pub fn apply_cpermute<R>(
    reg: &mut Register<R>,
    control: usize,
    target: usize,
    vs: &[&[usize]],
) -> Result<()> {
    reg.apply_two(control, target, &gates::controlled_permutation(vs)?)
}
