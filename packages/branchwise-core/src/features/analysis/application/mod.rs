//! Analysis application layer

pub mod analyzer;

pub use analyzer::Analyzer;
