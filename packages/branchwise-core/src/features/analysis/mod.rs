//! Analysis Module
//!
//! Binds explored paths to each function's declared signature and hands
//! them to the execution oracle.
//!
//! ## Architecture
//!
//! ```text
//! analysis
//! ├── domain/            # FunctionDecl / SourceUnit (input), Function / AnalysisResult (output)
//! ├── ports/             # FrontEnd, ExecutionOracle
//! ├── infrastructure/    # JsonFrontEnd
//! └── application/       # Analyzer
//! ```
//!
//! ## Usage
//!
//! ```text
//! use branchwise_core::features::analysis::{Analyzer, JsonFrontEnd};
//!
//! let analyzer = Analyzer::new(AnalysisConfig::default())?;
//! let result = analyzer.run(&JsonFrontEnd, &source_json, &my_oracle)?;
//! println!("{}", result.to_json_pretty()?);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::Analyzer;
pub use domain::{AnalysisResult, Function, FunctionDecl, ParamDecl, SourceUnit};
pub use infrastructure::JsonFrontEnd;
pub use ports::{ExecutionOracle, FrontEnd, OracleCall, OracleOutput};
