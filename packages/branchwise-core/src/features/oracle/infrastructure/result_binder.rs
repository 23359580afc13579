//! Oracle result binding
//!
//! One oracle run per function; every path's `Result` is filled from the
//! decoded output. Any missing or undecodable output aborts the analysis.

use super::result_decoder::{decode_result, is_decodable, DecodeError};
use crate::errors::{AnalysisError, Result};
use crate::features::analysis::domain::{AnalysisResult, Function};
use crate::features::analysis::ports::{ExecutionOracle, OracleCall};

/// Ask `oracle` for the true output of every path and store it on the path
pub fn bind_results(result: &mut AnalysisResult, oracle: &dyn ExecutionOracle) -> Result<()> {
    for (name, function) in result.functions.iter_mut() {
        if function.paths.is_empty() {
            continue;
        }

        // Checked up front: the outcome cannot depend on what the oracle returns
        if !is_decodable(&function.return_type) {
            return Err(AnalysisError::UnsupportedType {
                function: name.clone(),
                type_name: function.return_type.to_string(),
            });
        }

        let calls = oracle_calls(name, function);
        let output = oracle
            .run(&calls)
            .map_err(|reason| AnalysisError::OracleFailure {
                function: name.clone(),
                path_id: None,
                reason: "oracle run failed".into(),
                raw_output: Some(reason),
            })?;

        for call in &calls {
            let raw = output
                .get(&call.key())
                .ok_or_else(|| AnalysisError::OracleFailure {
                    function: name.clone(),
                    path_id: Some(call.path_id.clone()),
                    reason: format!("no output for '{}'", call.key()),
                    raw_output: None,
                })?;

            let value = decode_result(&function.return_type, raw).map_err(|e| match e {
                DecodeError::UnsupportedType(type_name) => AnalysisError::UnsupportedType {
                    function: name.clone(),
                    type_name,
                },
                DecodeError::Malformed { reason, .. } => AnalysisError::OracleFailure {
                    function: name.clone(),
                    path_id: Some(call.path_id.clone()),
                    reason,
                    raw_output: Some(raw.clone()),
                },
            })?;

            if let Some(path) = function.paths.get_mut(&call.path_id) {
                path.result = Some(value);
            }
        }

        tracing::debug!("{}: bound {} oracle results", name, calls.len());
    }

    Ok(())
}

/// One call per path, arguments in declaration order
fn oracle_calls(name: &str, function: &Function) -> Vec<OracleCall> {
    let parameters = function.parameter_names();

    function
        .paths
        .iter()
        .map(|(path_id, path)| OracleCall {
            function: name.to_string(),
            path_id: path_id.clone(),
            args: parameters
                .iter()
                .filter_map(|param| path.params.get(*param).map(|v| (param.to_string(), *v)))
                .collect(),
        })
        .collect()
}
