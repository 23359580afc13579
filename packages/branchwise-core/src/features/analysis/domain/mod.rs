//! Analysis Domain Models

pub mod analysis_result;
pub mod declaration;

pub use analysis_result::{AnalysisResult, Function};
pub use declaration::{FunctionDecl, ParamDecl, SourceUnit};
