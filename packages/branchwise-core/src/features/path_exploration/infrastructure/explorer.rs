/*
 * Path Explorer
 *
 * Recursive walk over a simplified statement sequence:
 *
 *   Other        -> skipped
 *   Conditional  -> step recorded, Domain split via refine(), then
 *                   true branch explores (body ++ rest), false branch explores rest;
 *                   results merged, false branch wins on id collision
 *   Return       -> terminal step, parameters synthesized, one-entry result
 *   Unsupported  -> UnsupportedConstruct, whole analysis aborts
 *
 * Example:
 *
 *   1: func f(x int) bool {
 *   2:     if x < 0 {
 *   3:         return true
 *   4:     }
 *   5:     return false
 *   6: }
 *
 *   "XIsLessThan0" -> x in {max=0, excluded=0} -> x = -1
 *   ""             -> x in {min=0}             -> x = 0
 *
 * Cost is exponential in the number of conditionals (2^k leaves).
 */

use crate::config::ExplorationConfig;
use crate::errors::{AnalysisError, Result};
use crate::features::path_exploration::domain::{BranchCondition, Path, PathMap, Statement};
use crate::features::synthesis::{SynthesisError, WitnessSynthesizer};
use crate::shared::NumericKind;

/// Explores one function body
pub struct PathExplorer<'a> {
    function: &'a str,
    /// Declared parameters in declaration order
    parameters: &'a [(String, NumericKind)],
    source_lines: Vec<&'a str>,
    config: &'a ExplorationConfig,
    synthesizer: &'a mut WitnessSynthesizer,
}

impl<'a> PathExplorer<'a> {
    pub fn new(
        function: &'a str,
        parameters: &'a [(String, NumericKind)],
        source: &'a str,
        config: &'a ExplorationConfig,
        synthesizer: &'a mut WitnessSynthesizer,
    ) -> Self {
        Self {
            function,
            parameters,
            source_lines: source.lines().collect(),
            config,
            synthesizer,
        }
    }

    /// Initial path for this function: every parameter's Domain unset
    pub fn entry_path(&self) -> Path {
        Path::new(self.parameters.iter().map(|(name, _)| name.as_str()))
    }

    /// Explore `body` from `path`, returning every finalized path by id
    pub fn explore(&mut self, body: &'a [Statement], path: Path) -> Result<PathMap> {
        let nodes: Vec<&'a Statement> = body.iter().collect();
        self.explore_nodes(&nodes, path)
    }

    fn explore_nodes(&mut self, nodes: &[&'a Statement], mut path: Path) -> Result<PathMap> {
        for (i, &node) in nodes.iter().enumerate() {
            match node {
                Statement::Other { .. } => continue,

                Statement::Unsupported { line, description } => {
                    return Err(AnalysisError::unsupported(
                        self.function,
                        *line,
                        format!("unsupported statement: {}", description),
                    ));
                }

                Statement::Return { line } => {
                    path.steps.push(format!("{}: return", line));
                    return self.finalize(path);
                }

                Statement::Conditional {
                    line,
                    condition,
                    body,
                } => {
                    let cond = BranchCondition::from_expr(condition)
                        .map_err(|detail| AnalysisError::unsupported(self.function, *line, detail))?;

                    let current = *path.domain(&cond.variable).ok_or_else(|| {
                        AnalysisError::unsupported(
                            self.function,
                            *line,
                            format!("condition on '{}' which is not a parameter", cond.variable),
                        )
                    })?;

                    path.steps.push(self.step_text(*line));
                    let mut taken = path;
                    let mut not_taken = taken.clone();

                    let (on_true, on_false) = current.refine(cond.op, cond.constant);
                    taken.domains.insert(cond.variable.clone(), on_true);
                    not_taken.domains.insert(cond.variable.clone(), on_false);
                    taken.condition_chain.push(cond.description.clone());

                    tracing::debug!(
                        "{}:{} split '{}' into {} / {}",
                        self.function,
                        line,
                        cond.description,
                        on_true,
                        on_false
                    );

                    let rest = &nodes[i + 1..];
                    let true_nodes: Vec<&'a Statement> =
                        body.iter().chain(rest.iter().copied()).collect();

                    let mut merged = self.explore_nodes(&true_nodes, taken)?;
                    let false_paths = self.explore_nodes(rest, not_taken)?;
                    self.merge(&mut merged, false_paths)?;

                    // Idempotent; the synthesizer's memo makes this a lookup
                    for path in merged.values_mut() {
                        self.synthesize_params(path)?;
                    }

                    return Ok(merged);
                }
            }
        }

        // Fell off the end of the body without a return
        self.finalize(path)
    }

    fn finalize(&mut self, mut path: Path) -> Result<PathMap> {
        self.synthesize_params(&mut path)?;
        let id = path.path_id(self.config.path_key);
        tracing::debug!("{}: finalized path '{}'", self.function, id);

        let mut paths = PathMap::new();
        paths.insert(id, path);
        Ok(paths)
    }

    /// Fold the false-branch paths into `merged`; false branch wins on collision
    fn merge(&self, merged: &mut PathMap, false_paths: PathMap) -> Result<()> {
        for (id, path) in false_paths {
            if merged.contains_key(&id) {
                if self.config.reject_collisions {
                    return Err(AnalysisError::PathCollision {
                        function: self.function.to_string(),
                        path_id: id,
                    });
                }
                tracing::warn!(
                    "{}: path id '{}' produced by two paths, keeping the false branch",
                    self.function,
                    id
                );
            }
            merged.insert(id, path);
        }
        Ok(())
    }

    fn synthesize_params(&mut self, path: &mut Path) -> Result<()> {
        for (name, kind) in self.parameters {
            let domain = path.domain(name).copied().unwrap_or_default();
            let value = self
                .synthesizer
                .synthesize(&domain, *kind)
                .map_err(|SynthesisError::Unsatisfiable { domain, .. }| {
                    AnalysisError::UnsatisfiableDomain {
                        function: self.function.to_string(),
                        path_id: path.path_id(self.config.path_key),
                        variable: name.clone(),
                        domain,
                    }
                })?;
            path.params.insert(name.clone(), value);
        }
        Ok(())
    }

    /// `"<line>: <trimmed source line>"`
    fn step_text(&self, line: usize) -> String {
        let text = line
            .checked_sub(1)
            .and_then(|index| self.source_lines.get(index))
            .map(|text| text.trim())
            .unwrap_or("");
        format!("{}: {}", line, text)
    }
}
