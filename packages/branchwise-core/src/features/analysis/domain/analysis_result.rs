//! Analysis output exchanged with downstream collaborators
//!
//! Serialized shape (all maps key-sorted):
//!
//! ```text
//! {
//!   "Functions": {
//!     "<name>": {
//!       "Type": "bool",
//!       "Args": { "x": "int" },
//!       "Paths": {
//!         "<pathId>": { "Steps": [..], "Domains": {..}, "Params": {..}, "Result": .. }
//!       }
//!     }
//!   }
//! }
//! ```

use crate::errors::Result;
use crate::features::path_exploration::PathMap;
use crate::shared::TypeTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Explored paths of one function together with its declared signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    #[serde(rename = "Type")]
    pub return_type: TypeTag,

    #[serde(rename = "Args")]
    pub args: BTreeMap<String, TypeTag>,

    #[serde(rename = "Paths")]
    pub paths: PathMap,

    /// Declaration order of `args`; not part of the exchanged schema
    #[serde(skip)]
    pub param_order: Vec<String>,
}

impl Function {
    /// Parameter names in declaration order.
    ///
    /// Falls back to key order for functions read back from JSON.
    pub fn parameter_names(&self) -> Vec<&str> {
        if self.param_order.is_empty() {
            self.args.keys().map(|name| name.as_str()).collect()
        } else {
            self.param_order.iter().map(|name| name.as_str()).collect()
        }
    }
}

/// Function name -> Function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "Functions")]
    pub functions: BTreeMap<String, Function>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Total number of paths across all functions
    pub fn path_count(&self) -> usize {
        self.functions.values().map(|f| f.paths.len()).sum()
    }

    /// Two-space indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::path_exploration::Path;
    use crate::shared::Number;

    fn sample() -> AnalysisResult {
        let mut path = Path::new(["x"]);
        path.steps.push("5: return".into());
        path.params.insert("x".into(), Number::Int(0));
        path.result = Some(serde_json::json!(false));

        let mut paths = PathMap::new();
        paths.insert(String::new(), path);

        let mut args = BTreeMap::new();
        args.insert("x".to_string(), TypeTag::parse("int"));

        let mut result = AnalysisResult::new();
        result.functions.insert(
            "LessThanInt".into(),
            Function {
                return_type: TypeTag::Bool,
                args,
                paths,
                param_order: vec!["x".into()],
            },
        );
        result
    }

    #[test]
    fn test_schema_field_names() {
        let json: serde_json::Value =
            serde_json::from_str(&sample().to_json_pretty().unwrap()).unwrap();
        let function = &json["Functions"]["LessThanInt"];
        assert_eq!(function["Type"], "bool");
        assert_eq!(function["Args"]["x"], "int");
        assert_eq!(function["Paths"][""]["Params"]["x"], 0);
        assert_eq!(function["Paths"][""]["Result"], false);
    }

    #[test]
    fn test_json_roundtrip_drops_only_internal_fields() {
        let original = sample();
        let recovered = AnalysisResult::from_json(&original.to_json_pretty().unwrap()).unwrap();
        let function = recovered.function("LessThanInt").unwrap();
        assert!(function.param_order.is_empty());
        assert_eq!(function.parameter_names(), vec!["x"]);
        assert_eq!(recovered.path_count(), 1);
        assert_eq!(
            function.paths[""].params,
            original.function("LessThanInt").unwrap().paths[""].params
        );
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let text = sample().to_json_pretty().unwrap();
        assert!(text.starts_with("{\n  \"Functions\""));
    }
}
