use derive_getters::Getters;
use tracing::{debug, trace};

use crate::{
    constraint::{satisfies_all, Constraint},
    error::MatrixError,
};

/// A rectangular grid of integers
/// with constraints on every stored value.
///
/// Dimensions are fixed at construction.
/// Every value written into the grid,
/// whether by construction or by replacing a row or column,
/// is checked against every constraint
/// before anything is stored,
/// so a failed operation never leaves a partial write behind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Getters)]
pub struct Matrix {
    #[getter(skip)]
    rows: usize,
    #[getter(skip)]
    columns: usize,
    /// Row-major,
    /// `rows * columns` long.
    #[getter(skip)]
    cells: Vec<i32>,
    /// Constraints every stored value satisfies,
    /// in the order they are checked.
    constraints: Vec<Constraint>,
}

impl Matrix {
    /// Return a `rows` by `columns` matrix
    /// with every element set to `fill_with`,
    /// if `fill_with` satisfies every constraint.
    ///
    /// ```
    /// use constrained_matrix::{Constraint, Matrix, MatrixError};
    ///
    /// let matrix = Matrix::new(2, 3, 1, vec![Constraint::greater(0)]).unwrap();
    /// assert_eq!(matrix.row(1), Ok(&[1, 1, 1][..]));
    ///
    /// assert_eq!(
    ///     Matrix::new(2, 3, 0, vec![Constraint::greater(0)]),
    ///     Err(MatrixError::ConstraintViolation)
    /// );
    /// ```
    pub fn new(
        rows: usize,
        columns: usize,
        fill_with: i32,
        constraints: Vec<Constraint>,
    ) -> Result<Self, MatrixError> {
        if !satisfies_all(&constraints, fill_with) {
            debug!(fill_with, "fill value violates constraints");
            return Err(MatrixError::ConstraintViolation);
        }
        let len = rows.checked_mul(columns).ok_or(MatrixError::InvalidSize)?;
        trace!(rows, columns, fill_with, "filled matrix");
        Ok(Self {
            rows,
            columns,
            cells: vec![fill_with; len],
            constraints,
        })
    }

    /// Return a `rows` by `columns` matrix of zeros
    /// without constraints.
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![0; rows * columns],
            constraints: Vec::new(),
        }
    }

    /// Return a matrix holding the given rows,
    /// if every row has the same length
    /// and every value satisfies every constraint.
    ///
    /// The number of columns is the length of the first row,
    /// or zero if there are no rows.
    /// Row lengths are checked before values.
    ///
    /// ```
    /// use constrained_matrix::{Constraint, Matrix, MatrixError};
    ///
    /// let matrix = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]], vec![]).unwrap();
    /// assert_eq!(matrix.column(1), Ok(vec![2, 4]));
    ///
    /// assert_eq!(
    ///     Matrix::from_rows(vec![vec![1, 2], vec![3]], vec![]),
    ///     Err(MatrixError::InvalidSize)
    /// );
    /// assert_eq!(
    ///     Matrix::from_rows(vec![vec![1, -2]], vec![Constraint::greater_or_equal(0)]),
    ///     Err(MatrixError::ConstraintViolation)
    /// );
    /// ```
    pub fn from_rows(
        data: Vec<Vec<i32>>,
        constraints: Vec<Constraint>,
    ) -> Result<Self, MatrixError> {
        let rows = data.len();
        let columns = data.first().map_or(0, Vec::len);
        if data.iter().any(|row| row.len() != columns) {
            debug!(rows, columns, "ragged rows");
            return Err(MatrixError::InvalidSize);
        }
        check_values(&constraints, data.iter().flatten().copied())?;
        trace!(rows, columns, "matrix from rows");
        Ok(Self {
            rows,
            columns,
            cells: data.into_iter().flatten().collect(),
            constraints,
        })
    }

    /// Return number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Return whether `value` could be stored in this matrix.
    pub fn satisfies(&self, value: i32) -> bool {
        satisfies_all(&self.constraints, value)
    }

    /// Return the row at `index`.
    pub fn row(&self, index: usize) -> Result<&[i32], MatrixError> {
        let range = self.row_range(index)?;
        Ok(&self.cells[range])
    }

    /// Replace the row at `index` with `data`.
    ///
    /// Fails with [`MatrixError::OutOfRange`] if `index` is not a row,
    /// [`MatrixError::InvalidSize`] if `data` does not have one value per column,
    /// and [`MatrixError::ConstraintViolation`] if any value violates a constraint.
    ///
    /// ```
    /// use constrained_matrix::{Constraint, Matrix, MatrixError};
    ///
    /// let mut matrix = Matrix::new(2, 3, 0, vec![Constraint::greater_or_equal(0)]).unwrap();
    /// matrix.set_row(0, [1, 2, 3]).unwrap();
    /// assert_eq!(
    ///     matrix.set_row(0, [1, -2, 3]),
    ///     Err(MatrixError::ConstraintViolation)
    /// );
    /// assert_eq!(matrix.row(0), Ok(&[1, 2, 3][..]));
    /// ```
    pub fn set_row<D>(&mut self, index: usize, data: D) -> Result<(), MatrixError>
    where
        D: AsRef<[i32]>,
    {
        let data = data.as_ref();
        let range = self.row_range(index)?;
        if data.len() != self.columns {
            debug!(index, len = data.len(), columns = self.columns, "row has wrong length");
            return Err(MatrixError::InvalidSize);
        }
        check_values(&self.constraints, data.iter().copied())?;
        self.cells[range].copy_from_slice(data);
        trace!(index, "set row");
        Ok(())
    }

    /// Return a copy of the column at `index`,
    /// one value per row.
    pub fn column(&self, index: usize) -> Result<Vec<i32>, MatrixError> {
        self.check_column(index)?;
        Ok(self.column_indices(index).map(|i| self.cells[i]).collect())
    }

    /// Replace the column at `index` with `data`,
    /// top to bottom.
    ///
    /// Fails under the same conditions as [`Matrix::set_row`],
    /// with `data` needing one value per row.
    pub fn set_column<D>(&mut self, index: usize, data: D) -> Result<(), MatrixError>
    where
        D: AsRef<[i32]>,
    {
        let data = data.as_ref();
        self.check_column(index)?;
        if data.len() != self.rows {
            debug!(index, len = data.len(), rows = self.rows, "column has wrong length");
            return Err(MatrixError::InvalidSize);
        }
        check_values(&self.constraints, data.iter().copied())?;
        for (i, x) in self.column_indices(index).zip(data) {
            self.cells[i] = *x;
        }
        trace!(index, "set column");
        Ok(())
    }

    /// Unwrap into rows.
    pub fn into_rows(self) -> Vec<Vec<i32>> {
        if self.columns == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells
            .chunks_exact(self.columns)
            .map(<[i32]>::to_vec)
            .collect()
    }

    fn row_range(&self, index: usize) -> Result<std::ops::Range<usize>, MatrixError> {
        if index >= self.rows {
            debug!(index, rows = self.rows, "row index out of range");
            return Err(MatrixError::OutOfRange);
        }
        let start = index * self.columns;
        Ok(start..start + self.columns)
    }

    fn check_column(&self, index: usize) -> Result<(), MatrixError> {
        if index >= self.columns {
            debug!(index, columns = self.columns, "column index out of range");
            Err(MatrixError::OutOfRange)
        } else {
            Ok(())
        }
    }

    fn column_indices(&self, index: usize) -> impl Iterator<Item = usize> {
        (index..self.cells.len()).step_by(self.columns)
    }
}

/// Check every value against every constraint,
/// in order,
/// failing on the first violation.
fn check_values<I>(constraints: &[Constraint], values: I) -> Result<(), MatrixError>
where
    I: IntoIterator<Item = i32>,
{
    match values
        .into_iter()
        .find(|x| !satisfies_all(constraints, *x))
    {
        Some(value) => {
            debug!(value, "value violates constraints");
            Err(MatrixError::ConstraintViolation)
        }
        None => Ok(()),
    }
}
