//! Per-stage configuration: witness synthesis and path exploration

use super::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Witness synthesis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Lower search bound used when the Domain has no minimum
    pub search_min: i64,

    /// Upper search bound used when the Domain has no maximum
    pub search_max: i64,

    /// Fallback search attempts before giving up (1..=100000)
    pub max_attempts: usize,

    /// Seed the fallback generator restarts from on every search
    pub seed: u64,

    /// Memoize witnesses per (kind, Domain)
    pub memoize: bool,

    /// Memo cache capacity (1..=1000000)
    pub cache_capacity: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            search_min: -101,
            search_max: 100,
            max_attempts: 100,
            seed: 0,
            memoize: true,
            cache_capacity: 256,
        }
    }
}

impl SynthesisConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.search_min > self.search_max {
            return Err(ConfigError::range_with_hint(
                "search_min",
                self.search_min,
                i64::MIN,
                self.search_max,
                "search_min must not exceed search_max",
            ));
        }

        if self.max_attempts == 0 || self.max_attempts > 100_000 {
            return Err(ConfigError::range_with_hint(
                "max_attempts",
                self.max_attempts,
                1,
                100_000,
                "At least one fallback attempt is required",
            ));
        }

        if self.cache_capacity == 0 || self.cache_capacity > 1_000_000 {
            return Err(ConfigError::range_with_hint(
                "cache_capacity",
                self.cache_capacity,
                1,
                1_000_000,
                "Disable memoization with 'memoize: false' instead of a zero capacity",
            ));
        }

        Ok(())
    }
}

/// How finalized paths are keyed in a function's path map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKeyStrategy {
    /// Every condition taken on the path, joined with `And`
    #[default]
    FullChain,

    /// Only the last true condition inherited by the path (collides easily)
    LastCondition,
}

/// Path exploration configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorationConfig {
    pub path_key: PathKeyStrategy,

    /// Fail with `PathCollision` instead of letting the false branch overwrite
    pub reject_collisions: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesis_defaults_valid() {
        let config = SynthesisConfig::default();
        assert_eq!(config.search_min, -101);
        assert_eq!(config.search_max, 100);
        assert_eq!(config.max_attempts, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_search_range_rejected() {
        let config = SynthesisConfig {
            search_min: 10,
            search_max: -10,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Range { ref field, .. }) if field == "search_min"
        ));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = SynthesisConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_exploration_default_keys_by_full_chain() {
        let config = ExplorationConfig::default();
        assert_eq!(config.path_key, PathKeyStrategy::FullChain);
        assert!(!config.reject_collisions);
    }
}
