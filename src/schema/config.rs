//! Configuration types for the predation automaton.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default ring length for the precomputed random selector.
fn default_cycle_length() -> usize {
    128
}

/// Top-level automaton configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonConfig {
    /// Grid width in cells, border included.
    pub width: usize,
    /// Grid height in cells, border included.
    pub height: usize,
    /// How each cell picks the neighbor it interacts with.
    #[serde(default)]
    pub neighbor_mode: NeighborMode,
    /// Predation rule and its level parameters.
    #[serde(default)]
    pub rule: RuleConfig,
    /// Ring length of the precomputed random selector (power of two).
    #[serde(default = "default_cycle_length")]
    pub cycle_length: usize,
    /// Seed for the random selectors. `None` draws from entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            neighbor_mode: NeighborMode::default(),
            rule: RuleConfig::default(),
            cycle_length: default_cycle_length(),
            random_seed: None,
        }
    }
}

impl AutomatonConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 3 || self.height < 3 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.cycle_length.is_power_of_two() {
            return Err(ConfigError::InvalidCycleLength(self.cycle_length));
        }
        self.rule.validate()
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Predation rule parameters. Changes take effect from the next tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub variant: RuleVariant,
    /// Level given to a cell that has just been eaten (its "birth" level).
    pub initial_level: u32,
    /// Cells at or below this level can be eaten (Waves).
    pub edible_level: u32,
    /// Waves only: predators must have a higher level than their prey.
    #[serde(default)]
    pub young_banquet: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            variant: RuleVariant::default(),
            initial_level: 30,
            edible_level: 1,
            young_banquet: false,
        }
    }
}

impl RuleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_level == 0 {
            return Err(ConfigError::InvalidInitialLevel);
        }
        if self.edible_level > self.initial_level {
            return Err(ConfigError::EdibleAboveInitial {
                edible: self.edible_level,
                initial: self.initial_level,
            });
        }
        Ok(())
    }
}

/// Neighbor selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborMode {
    /// Fresh random offset every call.
    #[default]
    Uniform,
    /// Clockwise walk over the eight neighbors.
    FixedCycle,
    /// Walk over a ring of random offsets generated once.
    PrecomputedCycle,
}

impl NeighborMode {
    pub fn as_str(self) -> &'static str {
        match self {
            NeighborMode::Uniform => "uniform",
            NeighborMode::FixedCycle => "fixed-cycle",
            NeighborMode::PrecomputedCycle => "precomputed-cycle",
        }
    }
}

impl fmt::Display for NeighborMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NeighborMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(NeighborMode::Uniform),
            "fixed-cycle" => Ok(NeighborMode::FixedCycle),
            "precomputed-cycle" => Ok(NeighborMode::PrecomputedCycle),
            other => Err(ConfigError::UnknownNeighborMode(other.to_string())),
        }
    }
}

/// Predation rule variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleVariant {
    /// Successful predators gain a level.
    #[default]
    Classic,
    /// Levels age toward edibility; a kill resets both cells.
    Waves,
}

impl RuleVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleVariant::Classic => "classic",
            RuleVariant::Waves => "waves",
        }
    }
}

impl fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(RuleVariant::Classic),
            "waves" => Ok(RuleVariant::Waves),
            other => Err(ConfigError::UnknownRuleVariant(other.to_string())),
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid must be at least 3x3, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Cycle length {0} must be a non-zero power of two")]
    InvalidCycleLength(usize),
    #[error("Initial level must be positive")]
    InvalidInitialLevel,
    #[error("Edible level {edible} exceeds initial level {initial}")]
    EdibleAboveInitial { edible: u32, initial: u32 },
    #[error("Unknown neighbor selection mode '{0}'")]
    UnknownNeighborMode(String),
    #[error("Unknown rule variant '{0}'")]
    UnknownRuleVariant(String),
}

/// Errors from loading configuration or seed files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
