//! Interval-with-exclusion Domain
//!
//! A Domain constrains one variable along one path: an optional inclusive
//! minimum, an optional inclusive maximum and a single excluded point. The
//! excluded point is what a strict comparison forbids at its boundary, so
//! no open/closed flag is needed.
//!
//! # Examples
//!
//! ```rust
//! use branchwise_core::features::constraint::{Domain, RelationalOp};
//! use branchwise_core::shared::Number;
//!
//! // if x < 0
//! let (taken, not_taken) = Domain::unset().refine(RelationalOp::Lt, Number::Int(0));
//! assert!(taken.legal(Number::Int(-1)));
//! assert!(!taken.legal(Number::Int(0)));
//! assert!(not_taken.legal(Number::Int(0)));
//! ```

use super::relational_op::RelationalOp;
use crate::shared::Number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Constraint on one variable's legal values; `None` means unset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded: Option<Number>,
}

impl Domain {
    /// Domain with every field unset (any value is legal)
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn is_unset(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.excluded.is_none()
    }

    /// Check whether `value` satisfies this Domain
    pub fn legal(&self, value: Number) -> bool {
        if matches!(self.min, Some(min) if value < min) {
            return false;
        }
        if matches!(self.max, Some(max) if value > max) {
            return false;
        }
        if matches!(self.excluded, Some(excluded) if value == excluded) {
            return false;
        }
        true
    }

    /// Split this Domain at `variable <op> constant`.
    ///
    /// Returns `(true_branch, false_branch)`. Fields named by the operator are
    /// overwritten, the rest are inherited:
    ///
    /// | op   | true branch               | false branch              |
    /// |------|---------------------------|---------------------------|
    /// | `<`  | max = c, excluded = c     | min = c                   |
    /// | `>`  | min = c, excluded = c     | max = c                   |
    /// | `<=` | max = c                   | min = c, excluded = c     |
    /// | `>=` | min = c                   | max = c, excluded = c     |
    pub fn refine(&self, op: RelationalOp, constant: Number) -> (Domain, Domain) {
        let mut on_true = *self;
        let mut on_false = *self;

        match op {
            RelationalOp::Lt => {
                on_true.max = Some(constant);
                on_true.excluded = Some(constant);
                on_false.min = Some(constant);
            }
            RelationalOp::Gt => {
                on_true.min = Some(constant);
                on_true.excluded = Some(constant);
                on_false.max = Some(constant);
            }
            RelationalOp::Le => {
                on_true.max = Some(constant);
                on_false.min = Some(constant);
                on_false.excluded = Some(constant);
            }
            RelationalOp::Ge => {
                on_true.min = Some(constant);
                on_false.max = Some(constant);
                on_false.excluded = Some(constant);
            }
        }

        (on_true, on_false)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<Number>| match v {
            Some(n) => n.to_string(),
            None => "unset".to_string(),
        };
        write!(
            f,
            "{{min={}, max={}, excluded={}}}",
            show(&self.min),
            show(&self.max),
            show(&self.excluded)
        )
    }
}
