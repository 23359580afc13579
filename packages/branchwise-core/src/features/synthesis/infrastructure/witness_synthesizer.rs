//! Witness Synthesizer - canonical candidates, then seeded bounded search
//!
//! # Examples
//!
//! ```rust
//! use branchwise_core::config::SynthesisConfig;
//! use branchwise_core::features::constraint::{Domain, RelationalOp};
//! use branchwise_core::features::synthesis::WitnessSynthesizer;
//! use branchwise_core::shared::{Number, NumericKind};
//!
//! let mut synthesizer = WitnessSynthesizer::new(SynthesisConfig::default());
//!
//! // x < 0
//! let (taken, _) = Domain::unset().refine(RelationalOp::Lt, Number::Int(0));
//! let witness = synthesizer.synthesize(&taken, NumericKind::Integer).unwrap();
//! assert_eq!(witness, Number::Int(-1));
//! ```

use crate::config::SynthesisConfig;
use crate::features::constraint::Domain;
use crate::shared::{Number, NumericKind};
use lru::LruCache;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Synthesis failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthesisError {
    #[error("no legal witness for {domain} after {attempts} attempts")]
    Unsatisfiable { domain: Domain, attempts: usize },
}

/// Where witnesses came from (diagnostics only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisStats {
    pub canonical_hits: usize,
    pub fallback_hits: usize,
    pub cache_hits: usize,
}

/// Hashable view of a bound (`f64` by bit pattern)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum BoundKey {
    Int(i64),
    Float(u64),
}

impl From<Number> for BoundKey {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(v) => Self::Int(v),
            Number::Float(v) => Self::Float(v.to_bits()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SynthesisKey {
    kind: NumericKind,
    min: Option<BoundKey>,
    max: Option<BoundKey>,
    excluded: Option<BoundKey>,
}

impl SynthesisKey {
    fn new(domain: &Domain, kind: NumericKind) -> Self {
        Self {
            kind,
            min: domain.min.map(BoundKey::from),
            max: domain.max.map(BoundKey::from),
            excluded: domain.excluded.map(BoundKey::from),
        }
    }
}

/// Deterministic witness synthesizer with optional memoization
pub struct WitnessSynthesizer {
    config: SynthesisConfig,
    cache: Option<LruCache<SynthesisKey, Number>>,
    stats: SynthesisStats,
}

impl WitnessSynthesizer {
    pub fn new(config: SynthesisConfig) -> Self {
        let cache = if config.memoize {
            NonZeroUsize::new(config.cache_capacity).map(LruCache::new)
        } else {
            None
        };

        Self {
            config,
            cache,
            stats: SynthesisStats::default(),
        }
    }

    pub fn stats(&self) -> SynthesisStats {
        self.stats
    }

    /// Produce a legal value for `domain`.
    ///
    /// Identical `(domain, kind)` inputs always yield the identical witness.
    pub fn synthesize(&mut self, domain: &Domain, kind: NumericKind) -> Result<Number, SynthesisError> {
        let key = SynthesisKey::new(domain, kind);
        if let Some(cache) = self.cache.as_mut() {
            if let Some(hit) = cache.get(&key) {
                self.stats.cache_hits += 1;
                return Ok(*hit);
            }
        }

        let witness = match Self::canonical_candidate(domain, kind) {
            Some(value) => {
                self.stats.canonical_hits += 1;
                value
            }
            None => {
                let value = self.search(domain, kind)?;
                self.stats.fallback_hits += 1;
                value
            }
        };

        if let Some(cache) = self.cache.as_mut() {
            cache.put(key, witness);
        }
        Ok(witness)
    }

    /// First legal value of `0, 1, -1, min, max, min + unit, max - unit`.
    ///
    /// Candidates that cannot be represented in `kind` (a fractional bound for
    /// an integer parameter) are skipped.
    pub fn canonical_candidate(domain: &Domain, kind: NumericKind) -> Option<Number> {
        let (unit, neg_unit) = match kind {
            NumericKind::Integer => (Number::Int(1), Number::Int(-1)),
            NumericKind::Float => (Number::Float(1.0), Number::Float(-1.0)),
        };

        let candidates = [
            Some(Number::Int(0)),
            Some(Number::Int(1)),
            Some(Number::Int(-1)),
            domain.min,
            domain.max,
            domain.min.and_then(|min| min.offset(unit)),
            domain.max.and_then(|max| max.offset(neg_unit)),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter_map(|candidate| candidate.to_kind(kind))
            .find(|candidate| domain.legal(*candidate))
    }

    /// Bounded pseudo-random search from the fixed seed
    pub fn search(&self, domain: &Domain, kind: NumericKind) -> Result<Number, SynthesisError> {
        let attempts = self.config.max_attempts;
        let unsatisfiable = |attempts| SynthesisError::Unsatisfiable {
            domain: *domain,
            attempts,
        };

        let mut rng = StdRng::seed_from_u64(self.config.seed);

        match kind {
            NumericKind::Integer => {
                let low = domain
                    .min
                    .map(|min| min.ceil_i64())
                    .unwrap_or(self.config.search_min);
                let high = domain
                    .max
                    .map(|max| max.floor_i64())
                    .unwrap_or(self.config.search_max);
                if low > high {
                    return Err(unsatisfiable(0));
                }

                for _ in 0..attempts {
                    let value = Number::Int(rng.gen_range(low..=high));
                    if domain.legal(value) {
                        tracing::debug!("fallback witness {} for {}", value, domain);
                        return Ok(value);
                    }
                }
            }
            NumericKind::Float => {
                let low = domain
                    .min
                    .map(|min| min.as_f64())
                    .unwrap_or(self.config.search_min as f64);
                let high = domain
                    .max
                    .map(|max| max.as_f64())
                    .unwrap_or(self.config.search_max as f64);
                if !(low.is_finite() && high.is_finite() && low <= high) {
                    return Err(unsatisfiable(0));
                }

                for _ in 0..attempts {
                    let value = Number::Float(rng.gen_range(low..=high));
                    if domain.legal(value) {
                        tracing::debug!("fallback witness {} for {}", value, domain);
                        return Ok(value);
                    }
                }
            }
        }

        tracing::debug!("fallback search exhausted for {}", domain);
        Err(unsatisfiable(attempts))
    }
}
