//! Constraint Module
//!
//! Interval-with-exclusion Domains and their refinement at relational
//! branch points.
//!
//! ## Architecture
//!
//! ```text
//! constraint
//! └── domain/
//!     ├── value_domain     # Domain { min, max, excluded }, legal, refine
//!     └── relational_op    # <, >, <=, >=
//! ```

pub mod domain;

pub use domain::{Domain, RelationalOp};
