//! Analysis Configuration
//!
//! Defaults reproduce the fixed constants of the witness search and the
//! path keying of the explorer. A YAML file (schema `version: 1`) may
//! override any subset of them.
//!
//! # Examples
//!
//! ```rust,ignore
//! use branchwise_core::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::default();
//! let config = AnalysisConfig::from_yaml("branchwise.yaml")?;
//! ```

pub mod analysis_config;
pub mod error;
pub mod stage_configs;

pub use analysis_config::AnalysisConfig;
pub use error::{ConfigError, ConfigResult};
pub use stage_configs::{ExplorationConfig, PathKeyStrategy, SynthesisConfig};
