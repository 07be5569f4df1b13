//! Configuration system for ShiftForge.
//!
//! Load planner configuration from TOML or YAML files to control staffing
//! targets, rest quotas, the consecutive-work rule and the weekend policy
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use shiftforge_config::{PlannerConfig, WeekendPolicy};
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     [staffing]
//!     default_target = 4
//!
//!     [[staffing.overrides]]
//!     day = 24
//!     target = 6
//!
//!     [streak]
//!     window_length = 5
//!
//!     [weekend]
//!     policy = "prefer_rest"
//! "#).unwrap();
//!
//! assert_eq!(config.staffing_targets().target(24), 6);
//! assert_eq!(config.streak_policy().window_length, 5);
//! assert_eq!(config.weekend.policy, WeekendPolicy::PreferRest);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use shiftforge_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("planner.toml").unwrap_or_default();
//! assert_eq!(config.staffing.default_target, 3);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shiftforge_core::domain::{DEFAULT_DAILY_TARGET, DEFAULT_REQUIRED_REST_DAYS};
use shiftforge_core::streak::{DEFAULT_TOLERATED_WINDOWS, DEFAULT_WINDOW_LENGTH};
use shiftforge_core::{StaffingTargets, StreakPolicy};
use thiserror::Error;

/// Recommended minimum of rest days falling on Saturday or Sunday.
pub const DEFAULT_MIN_WEEKEND_REST_DAYS: u32 = 2;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Daily headcount targets.
    #[serde(default)]
    pub staffing: StaffingConfig,

    /// Rest quota defaults.
    #[serde(default)]
    pub rest: RestConfig,

    /// Consecutive working-day rule.
    #[serde(default)]
    pub streak: StreakConfig,

    /// Weekend rest handling.
    #[serde(default)]
    pub weekend: WeekendConfig,
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`PlannerConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the planner cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.streak.window_length == 0 {
            return Err(ConfigError::Invalid(
                "streak.window_length must be at least 1".to_string(),
            ));
        }
        if let Some(o) = self.staffing.overrides.iter().find(|o| !(1..=31).contains(&o.day)) {
            return Err(ConfigError::Invalid(format!(
                "staffing override for day {} is outside 1..=31",
                o.day
            )));
        }
        Ok(())
    }

    /// Sets the default daily target.
    pub fn with_default_target(mut self, target: u32) -> Self {
        self.staffing.default_target = target;
        self
    }

    /// Adds a per-day target override.
    pub fn with_day_target(mut self, day: u32, target: u32) -> Self {
        self.staffing.overrides.push(DayTarget { day, target });
        self
    }

    /// Sets the rest quota given to new employees.
    pub fn with_default_rest_days(mut self, days: u32) -> Self {
        self.rest.default_required_rest_days = days;
        self
    }

    /// Sets the consecutive-work rule.
    pub fn with_streak(mut self, window_length: u32, tolerated_windows: usize) -> Self {
        self.streak = StreakConfig {
            window_length,
            tolerated_windows,
        };
        self
    }

    /// Sets the weekend policy.
    pub fn with_weekend_policy(mut self, policy: WeekendPolicy) -> Self {
        self.weekend.policy = policy;
        self
    }

    /// Returns the streak rule as the core analyzer type.
    pub fn streak_policy(&self) -> StreakPolicy {
        StreakPolicy::new(self.streak.window_length, self.streak.tolerated_windows)
    }

    /// Returns the staffing targets, later overrides winning.
    pub fn staffing_targets(&self) -> StaffingTargets {
        self.staffing
            .overrides
            .iter()
            .fold(StaffingTargets::new(self.staffing.default_target), |t, o| {
                t.with_override(o.day, o.target)
            })
    }
}

/// Staffing target configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StaffingConfig {
    /// Headcount wanted on a day without an override.
    #[serde(default = "default_target")]
    pub default_target: u32,

    /// Per-day overrides.
    #[serde(default)]
    pub overrides: Vec<DayTarget>,
}

impl Default for StaffingConfig {
    fn default() -> Self {
        Self {
            default_target: DEFAULT_DAILY_TARGET,
            overrides: Vec::new(),
        }
    }
}

/// A single day's headcount override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DayTarget {
    pub day: u32,
    pub target: u32,
}

/// Rest quota configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RestConfig {
    /// Quota given to newly added employees.
    #[serde(default = "default_rest_days")]
    pub default_required_rest_days: u32,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            default_required_rest_days: DEFAULT_REQUIRED_REST_DAYS,
        }
    }
}

/// Consecutive working-day rule.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StreakConfig {
    /// Length of a counted window.
    #[serde(default = "default_window_length")]
    pub window_length: u32,

    /// Windows allowed per employee per month.
    #[serde(default = "default_tolerated_windows")]
    pub tolerated_windows: usize,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            window_length: DEFAULT_WINDOW_LENGTH,
            tolerated_windows: DEFAULT_TOLERATED_WINDOWS,
        }
    }
}

/// Weekend rest configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WeekendConfig {
    /// Advisory minimum of weekend rest days.
    #[serde(default = "default_min_weekend_rest")]
    pub min_rest_days: u32,

    /// Whether the weekend minimum influences generation.
    #[serde(default)]
    pub policy: WeekendPolicy,
}

impl Default for WeekendConfig {
    fn default() -> Self {
        Self {
            min_rest_days: DEFAULT_MIN_WEEKEND_REST_DAYS,
            policy: WeekendPolicy::default(),
        }
    }
}

/// How the weekend rest minimum is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendPolicy {
    /// Only reported by diagnostics.
    #[default]
    Advisory,

    /// Also used as a candidate ordering key on weekend days.
    PreferRest,
}

fn default_target() -> u32 {
    DEFAULT_DAILY_TARGET
}

fn default_rest_days() -> u32 {
    DEFAULT_REQUIRED_REST_DAYS
}

fn default_window_length() -> u32 {
    DEFAULT_WINDOW_LENGTH
}

fn default_tolerated_windows() -> usize {
    DEFAULT_TOLERATED_WINDOWS
}

fn default_min_weekend_rest() -> u32 {
    DEFAULT_MIN_WEEKEND_REST_DAYS
}
