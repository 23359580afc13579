//! Witness Synthesis Module
//!
//! Produces one concrete, deterministic value satisfying a Domain.
//!
//! ## Strategy
//!
//! 1. **Canonical candidates**: `0, 1, -1, min, max, min + unit, max - unit`,
//!    first legal one wins
//! 2. **Bounded search**: a generator seeded from a fixed constant draws from
//!    `[min or search_min, max or search_max]` for a fixed attempt budget
//! 3. **Failure**: `SynthesisError::Unsatisfiable`
//!
//! The fallback generator is a local instance restarted from the configured
//! seed on every search, so identical Domains always draw identical
//! sequences no matter what ran before.

pub mod infrastructure;

pub use infrastructure::{SynthesisError, SynthesisStats, WitnessSynthesizer};
