/*
 * Branchwise - path-sensitive test input synthesis
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Number, TypeTag)
 * - features/    : Vertical slices (constraint → synthesis → path_exploration → analysis → oracle)
 * - config/      : YAML-loadable analysis configuration
 * - errors       : AnalysisError
 *
 * Given a simplified function body (relational conditionals over one
 * parameter and a constant, nested bodies, returns), enumerates every
 * execution path, derives the Domain each parameter must satisfy on it,
 * and synthesizes a deterministic witness value per parameter. An external
 * oracle supplies the expected output of each path.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::AnalysisConfig;
pub use errors::{AnalysisError, Result};
pub use features::analysis::{
    AnalysisResult, Analyzer, ExecutionOracle, FrontEnd, Function, FunctionDecl, JsonFrontEnd,
    OracleCall, OracleOutput, ParamDecl, SourceUnit,
};
pub use features::constraint::{Domain, RelationalOp};
pub use features::path_exploration::{BinaryOperator, Expr, Path, PathExplorer, PathMap, Statement};
pub use features::synthesis::WitnessSynthesizer;
pub use shared::{Number, NumericKind, TypeTag};
