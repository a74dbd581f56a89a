//! Value constraints for matrix elements.
//!
//! A constraint pairs a comparison with an operand.
//! A candidate value satisfies a constraint
//! if `candidate <kind> operand` holds.
//!
//! ```
//! use constrained_matrix::{Constraint, ConstraintKind};
//!
//! let non_negative = Constraint::new(ConstraintKind::GreaterOrEqual, 0);
//! assert!(non_negative.check(0));
//! assert!(!non_negative.check(-1));
//! assert_eq!(non_negative, ">= 0".parse::<Constraint>().unwrap());
//! ```

use std::str::FromStr;

use derive_more::Display;

use crate::error::ParseConstraintError;

/// Comparison applied by a [`Constraint`].
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum ConstraintKind {
    /// `candidate == operand`.
    #[display(fmt = "==")]
    Equal,
    /// `candidate != operand`.
    #[display(fmt = "!=")]
    NotEqual,
    /// `candidate > operand`.
    #[display(fmt = ">")]
    Greater,
    /// `candidate >= operand`.
    #[display(fmt = ">=")]
    GreaterOrEqual,
    /// `candidate < operand`.
    #[display(fmt = "<")]
    Less,
    /// `candidate <= operand`.
    #[display(fmt = "<=")]
    LessOrEqual,
}

impl ConstraintKind {
    // Two-character operators come first
    // so `>=` is not read as `>` followed by `=0`.
    const OPERATORS: [(&'static str, ConstraintKind); 6] = [
        ("==", ConstraintKind::Equal),
        ("!=", ConstraintKind::NotEqual),
        (">=", ConstraintKind::GreaterOrEqual),
        ("<=", ConstraintKind::LessOrEqual),
        (">", ConstraintKind::Greater),
        ("<", ConstraintKind::Less),
    ];

    /// Return whether `lhs <self> rhs`.
    pub fn holds(self, lhs: i32, rhs: i32) -> bool {
        match self {
            ConstraintKind::Equal => lhs == rhs,
            ConstraintKind::NotEqual => lhs != rhs,
            ConstraintKind::Greater => lhs > rhs,
            ConstraintKind::GreaterOrEqual => lhs >= rhs,
            ConstraintKind::Less => lhs < rhs,
            ConstraintKind::LessOrEqual => lhs <= rhs,
        }
    }
}

/// A predicate every value stored in a matrix must satisfy.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{} {}", kind, operand)]
pub struct Constraint {
    /// Comparison to apply.
    pub kind: ConstraintKind,
    /// Right-hand side of the comparison.
    pub operand: i32,
}

impl Constraint {
    /// Return a constraint comparing candidates
    /// against `operand`.
    pub fn new(kind: ConstraintKind, operand: i32) -> Self {
        Self { kind, operand }
    }

    /// Return a constraint requiring `candidate == operand`.
    pub fn equal(operand: i32) -> Self {
        Self::new(ConstraintKind::Equal, operand)
    }

    /// Return a constraint requiring `candidate != operand`.
    pub fn not_equal(operand: i32) -> Self {
        Self::new(ConstraintKind::NotEqual, operand)
    }

    /// Return a constraint requiring `candidate > operand`.
    pub fn greater(operand: i32) -> Self {
        Self::new(ConstraintKind::Greater, operand)
    }

    /// Return a constraint requiring `candidate >= operand`.
    pub fn greater_or_equal(operand: i32) -> Self {
        Self::new(ConstraintKind::GreaterOrEqual, operand)
    }

    /// Return a constraint requiring `candidate < operand`.
    pub fn less(operand: i32) -> Self {
        Self::new(ConstraintKind::Less, operand)
    }

    /// Return a constraint requiring `candidate <= operand`.
    pub fn less_or_equal(operand: i32) -> Self {
        Self::new(ConstraintKind::LessOrEqual, operand)
    }

    /// Return whether `candidate` satisfies this constraint.
    pub fn check(&self, candidate: i32) -> bool {
        self.kind.holds(candidate, self.operand)
    }
}

impl FromStr for Constraint {
    type Err = ParseConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (kind, rest) = ConstraintKind::OPERATORS
            .iter()
            .find_map(|(op, kind)| s.strip_prefix(*op).map(|rest| (*kind, rest)))
            .ok_or_else(|| ParseConstraintError::UnknownOperator(s.to_owned()))?;
        let operand = rest.trim_start().parse()?;
        Ok(Self::new(kind, operand))
    }
}

impl TryFrom<&str> for Constraint {
    type Error = ParseConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Return whether `value` satisfies every constraint in `constraints`.
///
/// Constraints are checked in order,
/// stopping at the first failure.
pub(crate) fn satisfies_all(constraints: &[Constraint], value: i32) -> bool {
    constraints.iter().all(|c| c.check(value))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;

    #[test]
    fn shorthand_constructors_match_kinds() {
        assert_eq!(Constraint::equal(1).kind, ConstraintKind::Equal);
        assert_eq!(Constraint::not_equal(1).kind, ConstraintKind::NotEqual);
        assert_eq!(Constraint::greater(1).kind, ConstraintKind::Greater);
        assert_eq!(Constraint::greater_or_equal(1).kind, ConstraintKind::GreaterOrEqual);
        assert_eq!(Constraint::less(1).kind, ConstraintKind::Less);
        assert_eq!(Constraint::less_or_equal(1).kind, ConstraintKind::LessOrEqual);
    }

    #[test]
    fn check_is_inclusive_only_for_or_equal_kinds() {
        assert!(Constraint::equal(3).check(3));
        assert!(!Constraint::not_equal(3).check(3));
        assert!(!Constraint::greater(3).check(3));
        assert!(Constraint::greater_or_equal(3).check(3));
        assert!(!Constraint::less(3).check(3));
        assert!(Constraint::less_or_equal(3).check(3));
    }

    #[test]
    fn parses_with_or_without_spaces() {
        assert_eq!(">=0".parse::<Constraint>(), Ok(Constraint::greater_or_equal(0)));
        assert_eq!("  < -5 ".parse::<Constraint>(), Ok(Constraint::less(-5)));
        assert_eq!("!= 7".parse::<Constraint>(), Ok(Constraint::not_equal(7)));
        assert_eq!(Constraint::try_from("== 2"), Ok(Constraint::equal(2)));
    }

    #[test]
    fn rejects_unknown_operator() {
        assert_eq!(
            "=> 1".parse::<Constraint>(),
            Err(ParseConstraintError::UnknownOperator("=> 1".to_owned()))
        );
    }

    #[test]
    fn rejects_bad_operand() {
        assert!(matches!(
            ">= x".parse::<Constraint>(),
            Err(ParseConstraintError::InvalidOperand(_))
        ));
        assert!(matches!(
            "<".parse::<Constraint>(),
            Err(ParseConstraintError::InvalidOperand(_))
        ));
    }

    #[test]
    fn empty_constraint_list_accepts_anything() {
        assert!(satisfies_all(&[], i32::MIN));
        assert!(satisfies_all(&[], i32::MAX));
    }

    #[proptest]
    fn check_agrees_with_comparison_operators(candidate: i32, operand: i32) {
        prop_assert_eq!(Constraint::equal(operand).check(candidate), candidate == operand);
        prop_assert_eq!(Constraint::not_equal(operand).check(candidate), candidate != operand);
        prop_assert_eq!(Constraint::greater(operand).check(candidate), candidate > operand);
        prop_assert_eq!(Constraint::greater_or_equal(operand).check(candidate), candidate >= operand);
        prop_assert_eq!(Constraint::less(operand).check(candidate), candidate < operand);
        prop_assert_eq!(Constraint::less_or_equal(operand).check(candidate), candidate <= operand);
    }

    #[proptest]
    fn display_parses_back(constraint: Constraint) {
        prop_assert_eq!(constraint.to_string().parse::<Constraint>(), Ok(constraint));
    }

    #[proptest]
    fn satisfies_all_requires_every_constraint(constraints: Vec<Constraint>, value: i32) {
        prop_assert_eq!(
            satisfies_all(&constraints, value),
            constraints.iter().filter(|c| !c.check(value)).count() == 0
        );
    }
}
