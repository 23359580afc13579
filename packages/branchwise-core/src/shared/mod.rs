//! Shared models used across features

pub mod models;

pub use models::{Number, NumericKind, TypeTag};
