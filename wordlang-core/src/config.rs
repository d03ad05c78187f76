//! Configuration types for detection

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Points added on top of a word's frequency for an exact match
pub const DEFAULT_EXACT_BONUS: u64 = 10;

/// A fuzzy match at distance `d` scores `DEFAULT_FUZZY_CEILING - d`
pub const DEFAULT_FUZZY_CEILING: u64 = 3;

/// Largest edit distance that still counts as a fuzzy match
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Scoring policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Bonus for an exact dictionary hit
    pub exact_bonus: u64,
    /// Fuzzy score ceiling
    pub fuzzy_ceiling: u64,
    /// Maximum accepted edit distance for fuzzy hits
    pub max_distance: usize,
    /// Skip dictionary words whose length alone rules them out
    pub prune_by_length: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            exact_bonus: DEFAULT_EXACT_BONUS,
            fuzzy_ceiling: DEFAULT_FUZZY_CEILING,
            max_distance: DEFAULT_MAX_DISTANCE,
            prune_by_length: true,
        }
    }
}

impl DetectorConfig {
    /// Create a builder
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::default()
    }

    /// Exhaustive configuration: every dictionary word is measured
    pub fn exhaustive() -> Self {
        Self {
            prune_by_length: false,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Score for a fuzzy hit at `distance`, `None` when too far
    pub fn fuzzy_score(&self, distance: usize) -> Option<u64> {
        if distance > self.max_distance {
            return None;
        }
        self.fuzzy_ceiling.checked_sub(distance as u64)
    }

    /// Check that every accepted distance contributes a positive score
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_distance as u64 >= self.fuzzy_ceiling {
            return Err(ConfigError::DistanceOutOfRange {
                max_distance: self.max_distance,
                ceiling: self.fuzzy_ceiling,
            });
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct DetectorConfigBuilder {
    config: DetectorConfig,
}

impl DetectorConfigBuilder {
    /// Set the exact-match bonus
    pub fn exact_bonus(mut self, bonus: u64) -> Self {
        self.config.exact_bonus = bonus;
        self
    }

    /// Set the fuzzy ceiling
    pub fn fuzzy_ceiling(mut self, ceiling: u64) -> Self {
        self.config.fuzzy_ceiling = ceiling;
        self
    }

    /// Set the maximum fuzzy distance
    pub fn max_distance(mut self, distance: usize) -> Self {
        self.config.max_distance = distance;
        self
    }

    /// Enable or disable length pruning
    pub fn prune_by_length(mut self, enabled: bool) -> Self {
        self.config.prune_by_length = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DetectorConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
