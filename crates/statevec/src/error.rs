//! Error types for register construction, gate application and measurement.

use thiserror::Error;

/// Result type alias for state-vector operations.
pub type Result<T> = std::result::Result<T, QuditError>;

/// Errors raised synchronously by register operations.
///
/// Every operation validates its inputs before touching the amplitudes, so an
/// `Err` always leaves the register exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuditError {
    /// Base below 2, zero qudits, or `base^size` exceeds the amplitude limit.
    #[error("Invalid register configuration: {0}")]
    Configuration(String),

    /// Qudit index outside `[0, size)`.
    #[error("Qudit index {index} out of range for a register of {size} qudits")]
    QuditIndex {
        /// Offending qudit index.
        index: usize,
        /// Number of qudits in the register.
        size: usize,
    },

    /// Basis-state index outside `[0, base^size)`.
    #[error("Basis state {index} out of range for {dim} amplitudes")]
    StateIndex {
        /// Offending basis index.
        index: usize,
        /// Number of amplitudes in the register.
        dim: usize,
    },

    /// A two-qudit gate was addressed to the same qudit twice.
    #[error("Two-qudit gate needs distinct qudits, got {0} twice")]
    RepeatedQudit(usize),

    /// Classical value outside `[0, base)`.
    #[error("Value {value} out of range for base {base}")]
    ValueOutOfRange {
        /// Offending value.
        value: usize,
        /// Register base.
        base: usize,
    },

    /// A permutation vector is not a rearrangement of `0..len`.
    #[error("Invalid permutation {0:?}")]
    InvalidPermutation(Vec<usize>),

    /// Gate matrix dimension does not match `base^arity`.
    #[error("Gate matrix dimension mismatch: expected {expected}, got {actual}")]
    MatrixDimension {
        /// Dimension required by the register and gate arity.
        expected: usize,
        /// Dimension of the supplied matrix.
        actual: usize,
    },

    /// Gate matrix rows are ragged or the row count differs from the width.
    #[error("Gate matrix is not square")]
    NotSquare,

    /// `M·M†` deviates from the identity by more than the tolerance.
    #[error("Gate matrix is not unitary: max |M·M† - I| = {deviation:.3e} > {tolerance:.1e}")]
    NotUnitary {
        /// Largest absolute element-wise deviation from the identity.
        deviation: f64,
        /// Tolerance in force.
        tolerance: f64,
    },

    /// Sampling selected an outcome whose probability is zero.
    #[error("Measurement of qudit {qudit} selected outcome {outcome} with zero probability")]
    ZeroProbabilityBranch {
        /// Measured qudit.
        qudit: usize,
        /// Selected outcome.
        outcome: usize,
    },

    /// Writing results to disk failed.
    #[error("Failed to write {path}: {reason}")]
    Output {
        /// Destination that could not be written.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },
}

impl QuditError {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a qudit index error.
    pub fn qudit_index(index: usize, size: usize) -> Self {
        Self::QuditIndex { index, size }
    }

    /// Create a basis-state index error.
    pub fn state_index(index: usize, dim: usize) -> Self {
        Self::StateIndex { index, dim }
    }

    /// Create a value-constraint error.
    pub fn value_out_of_range(value: usize, base: usize) -> Self {
        Self::ValueOutOfRange { value, base }
    }

    /// Create an output error from an I/O failure on `path`.
    pub fn output(path: impl Into<String>, err: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Create a matrix dimension error.
    pub fn matrix_dimension(expected: usize, actual: usize) -> Self {
        Self::MatrixDimension { expected, actual }
    }
}
