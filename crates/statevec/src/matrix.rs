use crate::error::{QuditError, Result};
use faer::Mat;
use num_complex::Complex64;

pub type C64 = Complex64;

/// A square complex gate matrix acting on one or two qudits.
///
/// Row and column `i` enumerate the local basis states of the addressed
/// qudits; for two qudits `i = digit_a * base + digit_b`, where `digit_a`
/// belongs to the first qudit argument of the gate.
#[derive(Clone, Debug)]
pub struct GateMatrix {
    data: Mat<C64>,
}

impl GateMatrix {
    pub fn from_array<const D: usize>(rows: [[C64; D]; D]) -> Self {
        let mut data = Mat::<C64>::zeros(D, D);
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                data.write(i, j, v);
            }
        }
        Self { data }
    }

    /// Build from row vectors; every row must be as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<C64>>) -> Result<Self> {
        let dim = rows.len();
        if dim == 0 || rows.iter().any(|row| row.len() != dim) {
            return Err(QuditError::NotSquare);
        }
        let mut data = Mat::<C64>::zeros(dim, dim);
        for (i, row) in rows.into_iter().enumerate() {
            for (j, v) in row.into_iter().enumerate() {
                data.write(i, j, v);
            }
        }
        Ok(Self { data })
    }

    pub fn identity(dim: usize) -> Self {
        let mut data = Mat::<C64>::zeros(dim, dim);
        for i in 0..dim {
            data.write(i, i, C64::new(1.0, 0.0));
        }
        Self { data }
    }

    /// Set entry `(row, col)`, for builders that start from [`Self::zeros`].
    pub(crate) fn set(&mut self, row: usize, col: usize, v: C64) {
        self.data.write(row, col, v);
    }

    pub(crate) fn zeros(dim: usize) -> Self {
        Self { data: Mat::<C64>::zeros(dim, dim) }
    }

    pub fn dim(&self) -> usize {
        self.data.nrows()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> C64 {
        self.data.read(row, col)
    }

    /// Largest element-wise `|(M·M†)_ij - δ_ij|`.
    pub fn unitarity_deviation(&self) -> f64 {
        let d = self.dim();
        let mut worst = 0.0f64;
        for i in 0..d {
            for j in 0..d {
                let mut acc = C64::new(0.0, 0.0);
                for k in 0..d {
                    acc += self.data.read(i, k) * self.data.read(j, k).conj();
                }
                if i == j {
                    acc -= C64::new(1.0, 0.0);
                }
                worst = worst.max(acc.norm());
            }
        }
        worst
    }

    /// Check the matrix can act on `arity` qudits of the given base.
    pub fn validate(&self, base: usize, arity: u32, tolerance: f64) -> Result<()> {
        let expected = base.pow(arity);
        if self.dim() != expected {
            return Err(QuditError::matrix_dimension(expected, self.dim()));
        }
        let deviation = self.unitarity_deviation();
        // NaN entries fail the check too
        if !(deviation <= tolerance) {
            return Err(QuditError::NotUnitary { deviation, tolerance });
        }
        Ok(())
    }

    /// Matrix-vector product written into `out`.
    #[inline]
    pub(crate) fn mul_into(&self, v: &[C64], out: &mut [C64]) {
        for (r, o) in out.iter_mut().enumerate() {
            let mut acc = C64::new(0.0, 0.0);
            for (c, &x) in v.iter().enumerate() {
                acc += self.data.read(r, c) * x;
            }
            *o = acc;
        }
    }
}

/// Block-diagonal matrix, block `k` occupying rows and columns
/// `k*b..(k+1)*b`. All blocks must share one dimension.
pub fn block_diagonal(blocks: &[GateMatrix]) -> Result<GateMatrix> {
    let b = match blocks.first() {
        Some(first) => first.dim(),
        None => return Err(QuditError::NotSquare),
    };
    if let Some(bad) = blocks.iter().find(|m| m.dim() != b) {
        return Err(QuditError::matrix_dimension(b, bad.dim()));
    }
    let mut out = GateMatrix::zeros(b * blocks.len());
    for (k, block) in blocks.iter().enumerate() {
        for i in 0..b {
            for j in 0..b {
                out.set(k * b + i, k * b + j, block.get(i, j));
            }
        }
    }
    Ok(out)
}
