//! Engine settings derived from the planner configuration.

use shiftforge_config::{PlannerConfig, WeekendPolicy, DEFAULT_MIN_WEEKEND_REST_DAYS};
use shiftforge_core::StreakPolicy;

/// Knobs the allocation engine reads while generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Consecutive-work rule checked for every tentative placement.
    pub streak: StreakPolicy,
    /// Whether weekend rest influences candidate order.
    pub weekend_policy: WeekendPolicy,
    /// Weekend rest days an employee should keep.
    pub min_weekend_rest: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            streak: StreakPolicy::default(),
            weekend_policy: WeekendPolicy::Advisory,
            min_weekend_rest: DEFAULT_MIN_WEEKEND_REST_DAYS,
        }
    }
}

impl EngineSettings {
    pub fn with_streak(mut self, streak: StreakPolicy) -> Self {
        self.streak = streak;
        self
    }

    pub fn with_weekend_policy(mut self, policy: WeekendPolicy) -> Self {
        self.weekend_policy = policy;
        self
    }
}

impl From<&PlannerConfig> for EngineSettings {
    fn from(config: &PlannerConfig) -> Self {
        Self {
            streak: config.streak_policy(),
            weekend_policy: config.weekend.policy,
            min_weekend_rest: config.weekend.min_rest_days,
        }
    }
}
