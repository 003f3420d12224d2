//! Result-combination rules for [`foreach`](crate::foreach) loops.
//!
//! | Rule | Per-iteration value | Output |
//! |------|---------------------|--------|
//! | [`Collect`] | `R` | `Vec<R>` |
//! | [`Concat`] | `Vec<R>` | `Vec<R>` |
//! | [`RowBind`] | `Vec<f64>` | [`Matrix`], one row per iteration |
//! | [`ColumnBind`] | `Vec<f64>` | [`Matrix`], one column per iteration |
//! | [`Reduce`] | `R` | `R` |

use crate::error::ParallelError;

/// Folds the ordered per-iteration results of a loop into one value.
pub trait Combine<R> {
    /// The combined value.
    type Output;

    /// Combines `results`, which are in iteration order.
    fn combine(self, results: Vec<R>) -> Result<Self::Output, ParallelError>;
}

/// Keeps every result as one element of a sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collect;

impl<R> Combine<R> for Collect {
    type Output = Vec<R>;

    fn combine(self, results: Vec<R>) -> Result<Vec<R>, ParallelError> {
        Ok(results)
    }
}

/// Flattens per-iteration vectors into one vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct Concat;

impl<R> Combine<Vec<R>> for Concat {
    type Output = Vec<R>;

    fn combine(self, results: Vec<Vec<R>>) -> Result<Vec<R>, ParallelError> {
        Ok(results.into_iter().flatten().collect())
    }
}

/// Stacks per-iteration vectors as matrix rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowBind;

impl Combine<Vec<f64>> for RowBind {
    type Output = Matrix;

    fn combine(self, results: Vec<Vec<f64>>) -> Result<Matrix, ParallelError> {
        let n_cols = common_width(&results)?;
        let n_rows = results.len();
        let data = results.into_iter().flatten().collect();
        Ok(Matrix::from_row_major(n_rows, n_cols, data))
    }
}

/// Places per-iteration vectors side by side as matrix columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnBind;

impl Combine<Vec<f64>> for ColumnBind {
    type Output = Matrix;

    fn combine(self, results: Vec<Vec<f64>>) -> Result<Matrix, ParallelError> {
        let n_rows = common_width(&results)?;
        let n_cols = results.len();
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for r in 0..n_rows {
            data.extend(results.iter().map(|col| col[r]));
        }
        Ok(Matrix::from_row_major(n_rows, n_cols, data))
    }
}

/// Folds results left to right with a binary operator.
///
/// # Example
///
/// ```
/// use birthday_parallel::{Combine, Reduce};
///
/// let total = Reduce::new(|a: u32, b: u32| a + b).combine(vec![1, 2, 3]).unwrap();
/// assert_eq!(total, 6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reduce<F> {
    op: F,
}

impl<F> Reduce<F> {
    /// Creates a reduction with the given operator.
    pub fn new(op: F) -> Self {
        Self { op }
    }
}

impl<R, F> Combine<R> for Reduce<F>
where
    F: Fn(R, R) -> R,
{
    type Output = R;

    fn combine(self, results: Vec<R>) -> Result<R, ParallelError> {
        results
            .into_iter()
            .reduce(&self.op)
            .ok_or(ParallelError::EmptyReduction)
    }
}

/// Checks that all vectors share one length and returns it (0 if empty).
fn common_width(results: &[Vec<f64>]) -> Result<usize, ParallelError> {
    let Some(first) = results.first() else {
        return Ok(0);
    };
    let expected = first.len();
    for (iteration, r) in results.iter().enumerate() {
        if r.len() != expected {
            return Err(ParallelError::RaggedBind {
                iteration,
                expected,
                got: r.len(),
            });
        }
    }
    Ok(expected)
}

/// Dense row-major matrix produced by the binding rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Wraps a row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != n_rows * n_cols`.
    pub fn from_row_major(n_rows: usize, n_cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            n_rows * n_cols,
            "matrix buffer does not match {n_rows}x{n_cols}"
        );
        Self {
            n_rows,
            n_cols,
            data,
        }
    }

    /// Returns the number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n_rows && col < self.n_cols, "index out of bounds");
        self.data[row * self.n_cols + col]
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n_cols..(row + 1) * self.n_cols]
    }

    /// Returns one column as a new vector.
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.n_rows).map(|r| self.get(r, col)).collect()
    }

    /// Returns the underlying row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns `true` if the matrix has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
