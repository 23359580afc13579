//! Shared Models
//!
//! Value and type representations exchanged between the exploration engine
//! and its collaborators.

pub mod number;
pub mod type_tag;

pub use number::Number;
pub use type_tag::{NumericKind, TypeTag};
