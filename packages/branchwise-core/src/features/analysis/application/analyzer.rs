//! Analyzer - function/analysis assembly
//!
//! For each declared function: one entry path with every parameter's Domain
//! unset, a full exploration of the body, and the resulting path map stored
//! with the declared type tags. Parameters are synthesized independently;
//! no cross-variable coupling is modeled.

use crate::config::AnalysisConfig;
use crate::errors::{AnalysisError, Result};
use crate::features::analysis::domain::{AnalysisResult, Function, FunctionDecl, SourceUnit};
use crate::features::analysis::ports::{ExecutionOracle, FrontEnd};
use crate::features::oracle::bind_results;
use crate::features::path_exploration::PathExplorer;
use crate::features::synthesis::WitnessSynthesizer;
use crate::shared::NumericKind;
use std::collections::BTreeMap;

/// Entry point of the engine
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }
}

impl Analyzer {
    /// Create an analyzer from a validated configuration
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Explore every function of `unit`; results carry no oracle output yet
    pub fn analyze(&self, unit: &SourceUnit) -> Result<AnalysisResult> {
        let mut synthesizer = WitnessSynthesizer::new(self.config.synthesis.clone());
        let mut result = AnalysisResult::new();

        for decl in &unit.functions {
            let function = self.analyze_function(decl, &unit.text, &mut synthesizer)?;
            tracing::info!("{}: {} paths", decl.name, function.paths.len());
            result.functions.insert(decl.name.clone(), function);
        }

        let stats = synthesizer.stats();
        tracing::debug!(
            "witnesses: {} canonical, {} fallback, {} memoized",
            stats.canonical_hits,
            stats.fallback_hits,
            stats.cache_hits
        );

        Ok(result)
    }

    /// Explore one function body
    pub fn analyze_function(
        &self,
        decl: &FunctionDecl,
        source: &str,
        synthesizer: &mut WitnessSynthesizer,
    ) -> Result<Function> {
        let parameters = numeric_parameters(decl)?;

        let mut explorer = PathExplorer::new(
            &decl.name,
            &parameters,
            source,
            &self.config.exploration,
            synthesizer,
        );
        let entry = explorer.entry_path();
        let paths = explorer.explore(&decl.body, entry)?;

        let args: BTreeMap<_, _> = decl
            .params
            .iter()
            .map(|p| (p.name.clone(), p.type_tag.clone()))
            .collect();

        Ok(Function {
            return_type: decl.return_type.clone(),
            args,
            paths,
            param_order: decl.params.iter().map(|p| p.name.clone()).collect(),
        })
    }

    /// Parse with `front_end`, then explore
    pub fn analyze_source(&self, front_end: &dyn FrontEnd, source: &str) -> Result<AnalysisResult> {
        let unit = front_end.parse(source)?;
        self.analyze(&unit)
    }

    /// Full pipeline: parse, explore, then fill every path's result from `oracle`
    pub fn run(
        &self,
        front_end: &dyn FrontEnd,
        source: &str,
        oracle: &dyn ExecutionOracle,
    ) -> Result<AnalysisResult> {
        let mut result = self.analyze_source(front_end, source)?;
        bind_results(&mut result, oracle)?;
        tracing::info!(
            "analysis complete: {} functions, {} paths",
            result.functions.len(),
            result.path_count()
        );
        Ok(result)
    }
}

/// Declared parameters with their numeric kind; non-numeric parameters cannot carry a Domain
fn numeric_parameters(decl: &FunctionDecl) -> Result<Vec<(String, NumericKind)>> {
    decl.params
        .iter()
        .map(|p| {
            p.type_tag
                .numeric_kind()
                .map(|kind| (p.name.clone(), kind))
                .ok_or_else(|| {
                    AnalysisError::unsupported(
                        &decl.name,
                        0,
                        format!("parameter '{}' has non-numeric type '{}'", p.name, p.type_tag),
                    )
                })
        })
        .collect()
}
