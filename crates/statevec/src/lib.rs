//! Dense state-vector simulation of a single register of qudits.
//!
//! A register of `n` qudits of dimension `d` is a vector of `d^n` complex
//! amplitudes, index `i` read as an `n`-digit base-`d` numeral with digit `q`
//! belonging to qudit `q`. Gates are unitary matrices applied in place to
//! the `d` (or `d²`) amplitudes that differ only in the addressed qudits;
//! measurement samples one qudit's marginal distribution from the register's
//! own random source and renormalizes the surviving amplitudes.
//!
//! # Example
//! ```
//! use statevec::{GateMatrix, Register, C64};
//! use rng::ONDRng;
//!
//! let s = std::f64::consts::FRAC_1_SQRT_2;
//! let h = GateMatrix::from_array([
//!     [C64::new(s, 0.0), C64::new(s, 0.0)],
//!     [C64::new(s, 0.0), C64::new(-s, 0.0)],
//! ]);
//!
//! let mut reg = Register::with_rng(2, 1, ONDRng::new(b"doc")).unwrap();
//! reg.apply_single(0, &h).unwrap();
//! let outcome = reg.measure(0).unwrap();
//! assert!(outcome < 2);
//! ```

mod apply;
pub mod digits;
mod display;
pub mod error;
pub mod limits;
pub mod matrix;
mod measure;
pub mod register;

pub use digits::Indexer;
pub use display::ProbabilityTable;
pub use error::{QuditError, Result};
pub use limits::{Limits, EPSILON, MAX_AMPLITUDES};
pub use matrix::{block_diagonal, GateMatrix, C64};
pub use register::Register;
