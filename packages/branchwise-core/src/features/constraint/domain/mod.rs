//! Constraint Domain Models

pub mod relational_op;
pub mod value_domain;

pub use relational_op::RelationalOp;
pub use value_domain::Domain;
