//! Analysis Ports - Interface Layer (Hexagonal Architecture)
//!
//! The engine never parses real source text and never runs the analyzed
//! function itself. Both are collaborators behind these traits.

use crate::errors::Result;
use crate::features::analysis::domain::SourceUnit;
use crate::shared::Number;
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════════
// Front-end Port - input side
// ═══════════════════════════════════════════════════════════════════════════

/// Turns source text into simplified statement form
///
/// # Implementors
/// - `JsonFrontEnd` (infrastructure/json_front_end.rs)
pub trait FrontEnd {
    fn parse(&self, source: &str) -> Result<SourceUnit>;
}

// ═══════════════════════════════════════════════════════════════════════════
// Execution Oracle Port - output side
// ═══════════════════════════════════════════════════════════════════════════

/// One invocation of the real function with synthesized arguments
#[derive(Debug, Clone, PartialEq)]
pub struct OracleCall {
    pub function: String,
    pub path_id: String,
    /// Arguments in declaration order
    pub args: Vec<(String, Number)>,
}

impl OracleCall {
    /// Key of this call's entry in the oracle output: `"<function>:<pathId>"`
    pub fn key(&self) -> String {
        format!("{}:{}", self.function, self.path_id)
    }
}

/// Raw JSON-encoded return value per `OracleCall::key`
pub type OracleOutput = HashMap<String, String>;

/// Runs the analyzed function and reports its true output
///
/// Errors are returned as the collaborator's raw diagnostic text and surface
/// as `AnalysisError::OracleFailure`.
pub trait ExecutionOracle {
    fn run(&self, calls: &[OracleCall]) -> std::result::Result<OracleOutput, String>;
}
