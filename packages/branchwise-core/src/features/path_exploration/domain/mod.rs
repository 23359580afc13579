//! Path Exploration Domain Models

pub mod condition;
pub mod path;
pub mod statement;

pub use condition::BranchCondition;
pub use path::{Path, PathMap};
pub use statement::{BinaryOperator, Expr, Statement};
