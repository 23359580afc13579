//! Execution path state
//!
//! A Path is value-like: branching clones it (steps, condition chain and
//! every Domain), so a refinement on one branch never reaches its sibling.

use crate::config::PathKeyStrategy;
use crate::features::constraint::Domain;
use crate::shared::Number;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Finalized paths keyed by path id
pub type PathMap = BTreeMap<String, Path>;

/// One route through the conditionals of a function body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Human-readable control-flow decisions, in order
    #[serde(rename = "Steps")]
    pub steps: Vec<String>,

    /// Descriptions of the conditions taken (true branches only)
    #[serde(skip)]
    pub condition_chain: Vec<String>,

    #[serde(rename = "Domains")]
    pub domains: BTreeMap<String, Domain>,

    /// Synthesized witness per parameter
    #[serde(rename = "Params")]
    pub params: BTreeMap<String, Number>,

    /// Oracle output, decoded per the declared return type
    #[serde(rename = "Result")]
    pub result: Option<serde_json::Value>,
}

impl Path {
    /// Entry path: empty history, every parameter's Domain unset
    pub fn new<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: parameters
                .into_iter()
                .map(|name| (name.into(), Domain::unset()))
                .collect(),
            ..Default::default()
        }
    }

    /// Domain currently constraining `variable`
    pub fn domain(&self, variable: &str) -> Option<&Domain> {
        self.domains.get(variable)
    }

    /// Key under which this path is stored once finalized
    pub fn path_id(&self, strategy: PathKeyStrategy) -> String {
        match strategy {
            PathKeyStrategy::FullChain => self.condition_chain.join("And"),
            PathKeyStrategy::LastCondition => {
                self.condition_chain.last().cloned().unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::constraint::RelationalOp;

    #[test]
    fn test_new_path_has_unset_domains() {
        let path = Path::new(["x", "y"]);
        assert_eq!(path.domains.len(), 2);
        assert!(path.domain("x").unwrap().is_unset());
        assert!(path.steps.is_empty());
        assert!(path.params.is_empty());
        assert_eq!(path.path_id(PathKeyStrategy::FullChain), "");
    }

    #[test]
    fn test_clone_does_not_alias_domains() {
        let mut original = Path::new(["x"]);
        let mut sibling = original.clone();

        let (t, f) = Domain::unset().refine(RelationalOp::Gt, Number::Int(3));
        original.domains.insert("x".into(), t);
        sibling.domains.insert("x".into(), f);
        original.steps.push("1: if x > 3 {".into());

        assert_ne!(original.domain("x"), sibling.domain("x"));
        assert!(sibling.steps.is_empty());
    }

    #[test]
    fn test_path_id_strategies() {
        let mut path = Path::new(["x"]);
        path.condition_chain = vec!["XIsLessThan0".into(), "XIsGreaterThan5".into()];
        assert_eq!(
            path.path_id(PathKeyStrategy::FullChain),
            "XIsLessThan0AndXIsGreaterThan5"
        );
        assert_eq!(path.path_id(PathKeyStrategy::LastCondition), "XIsGreaterThan5");
    }

    #[test]
    fn test_serialized_field_names() {
        let mut path = Path::new(["x"]);
        path.steps.push("3: return".into());
        path.params.insert("x".into(), Number::Int(0));
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["Steps"][0], "3: return");
        assert_eq!(json["Params"]["x"], 0);
        assert!(json["Result"].is_null());
        assert!(json.get("condition_chain").is_none());
    }
}
