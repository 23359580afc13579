//! Test fixtures: a comparison suite in source + statement form, and oracles

use super::builders::{cond, ret, FunctionBuilder};
use branchwise_core::{ExecutionOracle, Number, OracleCall, OracleOutput, SourceUnit};

/// (name, parameter type, operator, constant)
pub const COMPARISONS: &[(&str, &str, &str, f64)] = &[
    ("LessThanInt", "int", "<", 0.0),
    ("LessThanFloat", "float32", "<", 0.5),
    ("GreaterThanInt", "int", ">", 0.0),
    ("GreaterThanFloat", "float32", ">", 0.5),
    ("LessThanEqualInt", "int", "<=", 0.0),
    ("LessThanEqualFloat", "float32", "<=", 0.5),
    ("GreaterThanEqualInt", "int", ">=", 0.0),
    ("GreaterThanEqualFloat", "float32", ">=", 0.5),
];

fn constant(value: f64) -> Number {
    if value.fract() == 0.0 {
        Number::Int(value as i64)
    } else {
        Number::Float(value)
    }
}

/// Source text and statement form of the comparison suite.
///
/// Every function is laid out as:
///
/// ```text
/// func Name(x T) bool {
///     if x OP C {
///         return true
///     }
///
///     return false
/// }
/// ```
pub fn comparison_unit() -> SourceUnit {
    let mut lines = vec!["package main".to_string(), String::new()];
    let mut functions = Vec::new();

    for (name, type_name, op, value) in COMPARISONS {
        let c = constant(*value);
        let func_line = lines.len() + 1;
        lines.push(format!("func {}(x {}) bool {{", name, type_name));
        lines.push(format!("\tif x {} {} {{", op, c));
        lines.push("\t\treturn true".to_string());
        lines.push("\t}".to_string());
        lines.push(String::new());
        lines.push("\treturn false".to_string());
        lines.push("}".to_string());
        lines.push(String::new());

        functions.push(
            FunctionBuilder::new(name, "bool")
                .param("x", type_name)
                .stmt(cond(func_line + 1, "x", op, c, vec![ret(func_line + 2)]))
                .stmt(ret(func_line + 5))
                .build(),
        );
    }

    SourceUnit {
        text: lines.join("\n"),
        functions,
    }
}

/// Oracle backed by a closure computing the raw output of one call
pub struct FnOracle<F>(pub F);

impl<F> ExecutionOracle for FnOracle<F>
where
    F: Fn(&OracleCall) -> Option<String>,
{
    fn run(&self, calls: &[OracleCall]) -> Result<OracleOutput, String> {
        Ok(calls
            .iter()
            .filter_map(|call| (self.0)(call).map(|raw| (call.key(), raw)))
            .collect())
    }
}

/// Evaluates the comparison suite for real
pub fn comparison_oracle() -> FnOracle<impl Fn(&OracleCall) -> Option<String>> {
    FnOracle(|call: &OracleCall| {
        let (_, _, op, value) = COMPARISONS.iter().find(|(name, ..)| *name == call.function)?;
        let x = call.args.first()?.1.as_f64();
        let taken = match *op {
            "<" => x < *value,
            ">" => x > *value,
            "<=" => x <= *value,
            ">=" => x >= *value,
            _ => return None,
        };
        Some(taken.to_string())
    })
}
