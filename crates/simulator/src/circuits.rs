//! Demonstration circuits, each preparing a small entangled register.

use quantum::{apply_cnot, apply_cpermute, apply_h, apply_rx3, apply_rz3};
use statevec::{Register, Result};
use std::f64::consts::FRAC_PI_4;
use std::fmt;

/// Control-value-indexed cyclic shifts: control `c` adds `c` (mod 3) to the
/// target.
pub const CYCLIC_SHIFTS: [&[usize]; 3] = [&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Circuit {
    /// H on qubit 0, then CNOT(0, 1).
    Bell,
    /// Mix qutrit 0 with rz(π/4), rx(π/4), then copy it onto qutrit 1 with a
    /// controlled cyclic shift.
    TrinaryBell,
}

impl Circuit {
    pub fn base(self) -> usize {
        match self {
            Self::Bell => 2,
            Self::TrinaryBell => 3,
        }
    }

    pub fn size(self) -> usize {
        2
    }

    pub fn apply<R>(self, reg: &mut Register<R>) -> Result<()> {
        match self {
            Self::Bell => bell(reg),
            Self::TrinaryBell => trinary_bell(reg),
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bell => write!(f, "bell"),
            Self::TrinaryBell => write!(f, "trinary-bell"),
        }
    }
}

pub fn bell<R>(reg: &mut Register<R>) -> Result<()> {
    apply_h(reg, 0)?;
    apply_cnot(reg, 0, 1)
}

pub fn trinary_bell<R>(reg: &mut Register<R>) -> Result<()> {
    apply_rz3(reg, 0, FRAC_PI_4)?;
    apply_rx3(reg, 0, FRAC_PI_4)?;
    apply_cpermute(reg, 0, 1, &CYCLIC_SHIFTS)
}
