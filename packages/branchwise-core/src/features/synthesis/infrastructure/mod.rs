//! Synthesis infrastructure

pub mod witness_synthesizer;

pub use witness_synthesizer::{SynthesisError, SynthesisStats, WitnessSynthesizer};
