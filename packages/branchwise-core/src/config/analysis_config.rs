//! Top-level analysis configuration and YAML I/O

use super::error::{ConfigError, ConfigResult};
use super::stage_configs::{ExplorationConfig, SynthesisConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

const SUPPORTED_VERSIONS: &[u64] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Schema version (always 1 for v1)
    pub version: u64,

    #[serde(default)]
    pub synthesis: SynthesisConfig,

    #[serde(default)]
    pub exploration: ExplorationConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            version: 1,
            synthesis: SynthesisConfig::default(),
            exploration: ExplorationConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML configuration document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;

        // Version check before the strict parse so the error names the real problem
        let version = raw
            .get("version")
            .ok_or(ConfigError::MissingVersion)?
            .as_u64()
            .ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config: AnalysisConfig = serde_yaml::from_value(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self).map_err(ConfigError::Yaml)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.synthesis.validate()
    }
}
