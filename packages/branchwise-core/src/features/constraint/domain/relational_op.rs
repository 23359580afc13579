//! Relational comparison operators

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four ordering comparisons a branch point may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationalOp {
    /// Less than (<)
    Lt,
    /// Greater than (>)
    Gt,
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
}

impl RelationalOp {
    /// Operator with operands swapped: `c < x` is `x > c`
    pub fn flip(self) -> Self {
        match self {
            Self::Lt => Self::Gt,
            Self::Gt => Self::Lt,
            Self::Le => Self::Ge,
            Self::Ge => Self::Le,
        }
    }

    /// Word used in condition descriptions (`XIsLessThan0`)
    pub fn description_word(self) -> &'static str {
        match self {
            Self::Lt => "IsLessThan",
            Self::Gt => "IsGreaterThan",
            Self::Le => "IsLessThanOrEqual",
            Self::Ge => "IsGreaterThanOrEqual",
        }
    }
}

impl fmt::Display for RelationalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lt => write!(f, "<"),
            Self::Gt => write!(f, ">"),
            Self::Le => write!(f, "<="),
            Self::Ge => write!(f, ">="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_is_involution() {
        for op in [RelationalOp::Lt, RelationalOp::Gt, RelationalOp::Le, RelationalOp::Ge] {
            assert_eq!(op.flip().flip(), op);
        }
        assert_eq!(RelationalOp::Lt.flip(), RelationalOp::Gt);
        assert_eq!(RelationalOp::Le.flip(), RelationalOp::Ge);
    }

    #[test]
    fn test_description_word() {
        assert_eq!(RelationalOp::Ge.description_word(), "IsGreaterThanOrEqual");
        assert_eq!(RelationalOp::Lt.to_string(), "<");
    }
}
