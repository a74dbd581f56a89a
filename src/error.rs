//! Errors returned by matrix construction,
//! accessors,
//! and constraint parsing.

use std::num::ParseIntError;

use derive_more::IsVariant;

/// Error returned when a matrix operation is rejected.
///
/// Every operation returning this error
/// leaves the matrix unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IsVariant, thiserror::Error)]
pub enum MatrixError {
    /// A value entering the matrix
    /// does not satisfy every constraint.
    #[error("One or more elements of matrix violate constraints.")]
    ConstraintViolation,
    /// A row or column has a length
    /// inconsistent with the matrix dimensions.
    #[error("All rows in matrix must have the same size.")]
    InvalidSize,
    /// A row or column index is not less than
    /// the respective dimension.
    #[error("Index is out of range when requested row/column data.")]
    OutOfRange,
}

/// Error returned when failing to parse a [`Constraint`](crate::Constraint) from a string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseConstraintError {
    /// String does not start with a comparison operator.
    #[error("unknown comparison operator in '{0}'")]
    UnknownOperator(String),
    /// Text after the operator is not an integer.
    #[error("invalid operand: {0}")]
    InvalidOperand(#[from] ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_has_its_own_message() {
        let messages = [
            MatrixError::ConstraintViolation.to_string(),
            MatrixError::InvalidSize.to_string(),
            MatrixError::OutOfRange.to_string(),
        ];
        assert_eq!(
            messages[0],
            "One or more elements of matrix violate constraints."
        );
        assert_eq!(messages[1], "All rows in matrix must have the same size.");
        assert_eq!(
            messages[2],
            "Index is out of range when requested row/column data."
        );
    }

    #[test]
    fn variants_are_distinguishable() {
        assert!(MatrixError::ConstraintViolation.is_constraint_violation());
        assert!(MatrixError::InvalidSize.is_invalid_size());
        assert!(MatrixError::OutOfRange.is_out_of_range());
        assert!(!MatrixError::OutOfRange.is_invalid_size());
    }
}
