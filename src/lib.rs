#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

//! A rectangular grid of integers
//! with value constraints
//! enforced on construction
//! and on every mutation.
//!
//! A [`Matrix`] has fixed dimensions
//! and an ordered list of [`Constraint`]s.
//! Values enter the matrix
//! when it is filled at construction,
//! when it is built from rows,
//! or when a row or column is replaced.
//! Every entering value is checked
//! against every constraint
//! before anything is written,
//! so a rejected operation never leaves a partial write.
//!
//! Failures are reported as [`MatrixError`]:
//! a value violating a constraint,
//! a row or column of the wrong length,
//! or an index outside the matrix.
//!
//! # Examples
//!
//! ```
//! use constrained_matrix::{Constraint, Matrix, MatrixError};
//!
//! let mut matrix = Matrix::new(2, 3, 0, vec![Constraint::greater_or_equal(0)]).unwrap();
//!
//! matrix.set_row(0, [1, 2, 3]).unwrap();
//! matrix.set_column(2, [7, 8]).unwrap();
//! assert_eq!(matrix.row(0), Ok(&[1, 2, 7][..]));
//! assert_eq!(matrix.column(2), Ok(vec![7, 8]));
//!
//! assert_eq!(matrix.set_row(1, [0, -1, 0]), Err(MatrixError::ConstraintViolation));
//! assert_eq!(matrix.set_row(1, [0, 0]), Err(MatrixError::InvalidSize));
//! assert_eq!(matrix.row(2), Err(MatrixError::OutOfRange));
//! assert_eq!(matrix.row(1), Ok(&[0, 0, 8][..]));
//! ```
//!
//! Default dimensions,
//! fill value,
//! and constraints
//! can be built up with [`MatrixConfigBuilder`].

mod config;
mod constraint;
mod error;
mod matrix;

pub use self::{
    config::{MatrixConfig, MatrixConfigBuilder},
    constraint::{Constraint, ConstraintKind},
    error::{MatrixError, ParseConstraintError},
    matrix::Matrix,
};
