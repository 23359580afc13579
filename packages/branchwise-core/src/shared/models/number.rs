//! Numeric literal values
//!
//! Constants in conditions, Domain bounds and synthesized witnesses are all
//! `Number`s. Integers are kept exact; mixed comparisons fall back to `f64`.

use super::type_tag::NumericKind;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Integer or floating-point value
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(v) => *v as f64,
            Self::Float(v) => *v,
        }
    }

    /// True when the value has no fractional part
    pub fn is_integral(&self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(v) => v.is_finite() && v.fract() == 0.0,
        }
    }

    /// Add `delta`, staying in integers when both sides are integers.
    ///
    /// Returns `None` on integer overflow.
    pub fn offset(self, delta: Number) -> Option<Number> {
        match (self, delta) {
            (Self::Int(a), Self::Int(b)) => a.checked_add(b).map(Self::Int),
            (a, b) => Some(Self::Float(a.as_f64() + b.as_f64())),
        }
    }

    /// Represent this value in the given numeric kind.
    ///
    /// Integer kinds only accept integral values that fit in `i64`.
    pub fn to_kind(self, kind: NumericKind) -> Option<Number> {
        match (kind, self) {
            (NumericKind::Integer, Self::Int(v)) => Some(Self::Int(v)),
            (NumericKind::Integer, Self::Float(v)) => {
                // i64::MAX as f64 rounds up to 2^63, which does not fit
                if self.is_integral() && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                    Some(Self::Int(v as i64))
                } else {
                    None
                }
            }
            (NumericKind::Float, n) => Some(Self::Float(n.as_f64())),
        }
    }

    /// Smallest integer >= self (saturating)
    pub fn ceil_i64(&self) -> i64 {
        match self {
            Self::Int(v) => *v,
            Self::Float(v) => v.ceil() as i64,
        }
    }

    /// Largest integer <= self (saturating)
    pub fn floor_i64(&self) -> i64 {
        match self {
            Self::Int(v) => *v,
            Self::Float(v) => v.floor() as i64,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}
