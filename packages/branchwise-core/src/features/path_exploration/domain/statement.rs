//! Simplified statement representation handed over by a front-end
//!
//! Only three statement shapes carry meaning: a conditional over one
//! relational comparison, a return, and anything else (ignored). Shapes the
//! front-end recognized but the engine cannot model arrive as `Unsupported`
//! so exploration fails instead of guessing.

use crate::shared::Number;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::constraint::RelationalOp;

/// One node of a function body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    /// `if <condition> { body }`
    Conditional {
        line: usize,
        condition: Expr,
        #[serde(default)]
        body: Vec<Statement>,
    },

    /// `return ...`
    Return { line: usize },

    /// Assignment or other statement with no control-flow effect
    Other { line: usize },

    /// Loop, switch, call, ... (always rejected)
    Unsupported { line: usize, description: String },
}

impl Statement {
    pub fn line(&self) -> usize {
        match self {
            Self::Conditional { line, .. }
            | Self::Return { line }
            | Self::Other { line }
            | Self::Unsupported { line, .. } => *line,
        }
    }
}

/// Condition expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    Literal {
        value: Number,
    },
    Identifier {
        name: String,
    },
    BinaryComparison {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unsupported {
        description: String,
    },
}

impl Expr {
    pub fn literal(value: impl Into<Number>) -> Self {
        Self::Literal {
            value: value.into(),
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    pub fn compare(op: BinaryOperator, left: Expr, right: Expr) -> Self {
        Self::BinaryComparison {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{}", value),
            Self::Identifier { name } => write!(f, "{}", name),
            Self::BinaryComparison { op, left, right } => write!(f, "{} {} {}", left, op, right),
            Self::Unsupported { description } => write!(f, "<{}>", description),
        }
    }
}

/// Binary operator as written in the source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BinaryOperator {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Neq,
    /// Arithmetic, logical or any other operator
    Other(String),
}

impl BinaryOperator {
    /// The ordering comparison, if this is one
    pub fn relational(&self) -> Option<RelationalOp> {
        match self {
            Self::Lt => Some(RelationalOp::Lt),
            Self::Gt => Some(RelationalOp::Gt),
            Self::Le => Some(RelationalOp::Le),
            Self::Ge => Some(RelationalOp::Ge),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Other(op) => op,
        }
    }
}

impl From<String> for BinaryOperator {
    fn from(op: String) -> Self {
        match op.as_str() {
            "<" => Self::Lt,
            ">" => Self::Gt,
            "<=" => Self::Le,
            ">=" => Self::Ge,
            "==" => Self::Eq,
            "!=" => Self::Neq,
            _ => Self::Other(op),
        }
    }
}

impl From<BinaryOperator> for String {
    fn from(op: BinaryOperator) -> Self {
        op.symbol().to_string()
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
