//! Front-end output: functions in simplified statement form

use crate::features::path_exploration::Statement;
use crate::shared::TypeTag;
use serde::{Deserialize, Serialize};

/// A parsed source file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Original source text, used to annotate steps with their line
    #[serde(default)]
    pub text: String,

    pub functions: Vec<FunctionDecl>,
}

/// One function declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,

    pub return_type: TypeTag,

    /// Parameters in declaration order
    #[serde(default)]
    pub params: Vec<ParamDecl>,

    #[serde(default)]
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,

    #[serde(rename = "type")]
    pub type_tag: TypeTag,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, type_name: &str) -> Self {
        Self {
            name: name.into(),
            type_tag: TypeTag::parse(type_name),
        }
    }
}
