//! Path exploration infrastructure

pub mod explorer;

pub use explorer::PathExplorer;
