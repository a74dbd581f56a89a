use derive_builder::Builder;

use crate::{constraint::Constraint, error::MatrixError, matrix::Matrix};

/// Parameters for a filled [`Matrix`].
///
/// Every field has a default,
/// so a builder with nothing set
/// describes an empty matrix without constraints.
///
/// ```
/// use constrained_matrix::{Constraint, MatrixConfigBuilder};
///
/// let matrix = MatrixConfigBuilder::default()
///     .rows(2)
///     .columns(3)
///     .constraint(">= 0".parse::<Constraint>().unwrap())
///     .constraint(Constraint::less(10))
///     .matrix()
///     .unwrap();
/// assert_eq!(matrix.row(1), Ok(&[0, 0, 0][..]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Builder)]
#[builder(build_fn(skip))]
pub struct MatrixConfig {
    /// Number of rows.
    #[builder(default)]
    pub rows: usize,
    /// Number of columns.
    #[builder(default)]
    pub columns: usize,
    /// Initial value of every element.
    #[builder(default)]
    pub fill_with: i32,
    /// Constraints every element must satisfy.
    #[builder(default, setter(each(name = "constraint")))]
    pub constraints: Vec<Constraint>,
}

impl MatrixConfig {
    /// Return a matrix with these parameters,
    /// if `fill_with` satisfies every constraint.
    pub fn into_matrix(self) -> Result<Matrix, MatrixError> {
        Matrix::new(self.rows, self.columns, self.fill_with, self.constraints)
    }
}

impl MatrixConfigBuilder {
    /// Return a matrix with the parameters set so far,
    /// defaulting the rest.
    pub fn matrix(&self) -> Result<Matrix, MatrixError> {
        self.build().into_matrix()
    }

    /// Builds a new [`MatrixConfig`].
    pub fn build(&self) -> MatrixConfig {
        MatrixConfig {
            rows: self.rows.unwrap_or_default(),
            columns: self.columns.unwrap_or_default(),
            fill_with: self.fill_with.unwrap_or_default(),
            constraints: self.constraints.clone().unwrap_or_default(),
        }
    }
}
