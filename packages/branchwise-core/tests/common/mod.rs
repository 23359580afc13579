//! Common test utilities for branchwise-core
//!
//! Shared fixtures, builders and oracle doubles for integration tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
