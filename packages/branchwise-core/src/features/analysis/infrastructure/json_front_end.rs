//! JSON front-end adapter
//!
//! Reads a `SourceUnit` that an external parser already produced.

use crate::errors::Result;
use crate::features::analysis::domain::SourceUnit;
use crate::features::analysis::ports::FrontEnd;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFrontEnd;

impl FrontEnd for JsonFrontEnd {
    fn parse(&self, source: &str) -> Result<SourceUnit> {
        let unit: SourceUnit = serde_json::from_str(source)?;
        tracing::debug!("front-end produced {} functions", unit.functions.len());
        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnalysisError;
    use crate::features::path_exploration::Statement;
    use crate::shared::TypeTag;

    #[test]
    fn test_parse_unit() {
        let json = r#"{
            "text": "package main\n\nfunc Int8() int8 {\n  return 101\n}",
            "functions": [
                {
                    "name": "Int8",
                    "return_type": "int8",
                    "body": [{"kind": "return", "line": 4}]
                }
            ]
        }"#;
        let unit = JsonFrontEnd.parse(json).unwrap();
        assert_eq!(unit.functions.len(), 1);
        let function = &unit.functions[0];
        assert_eq!(function.name, "Int8");
        assert!(matches!(function.return_type, TypeTag::Int { signed: true, bits: Some(8), .. }));
        assert!(function.params.is_empty());
        assert_eq!(function.body, vec![Statement::Return { line: 4 }]);
    }

    #[test]
    fn test_malformed_json() {
        let err = JsonFrontEnd.parse("{\"functions\": [").unwrap_err();
        assert!(matches!(err, AnalysisError::Json(_)));
    }
}
