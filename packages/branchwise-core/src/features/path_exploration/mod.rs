//! Path Exploration Module
//!
//! Walks a simplified function body, splitting the Domain of the compared
//! variable at every conditional, and returns one finalized Path per
//! feasible route.
//!
//! ## Architecture
//!
//! ```text
//! path_exploration
//! ├── domain/
//! │   ├── statement     # Statement / Expr / BinaryOperator (closed variants)
//! │   ├── condition     # BranchCondition extraction + description
//! │   └── path          # Path { steps, chain, domains, params, result }
//! └── infrastructure/
//!     └── explorer      # recursive PathExplorer
//! ```
//!
//! ## Cost
//!
//! Exponential in branch count: `k` conditionals yield up to `2^k` paths
//! before keying. Recursion depth equals conditional nesting depth.

pub mod domain;
pub mod infrastructure;

pub use domain::{BinaryOperator, BranchCondition, Expr, Path, PathMap, Statement};
pub use infrastructure::PathExplorer;
