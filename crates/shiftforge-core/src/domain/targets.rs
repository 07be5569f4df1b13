//! Per-day staffing targets.

use std::collections::BTreeMap;

/// Daily headcount target used when no configuration says otherwise.
pub const DEFAULT_DAILY_TARGET: u32 = 3;

/// A global default headcount plus sparse per-day overrides.
///
/// # Examples
///
/// ```
/// use shiftforge_core::StaffingTargets;
///
/// let targets = StaffingTargets::new(3).with_override(10, 5);
/// assert_eq!(targets.target(9), 3);
/// assert_eq!(targets.target(10), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaffingTargets {
    default_target: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    overrides: BTreeMap<u32, u32>,
}

impl Default for StaffingTargets {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_TARGET)
    }
}

impl StaffingTargets {
    pub fn new(default_target: u32) -> Self {
        Self {
            default_target,
            overrides: BTreeMap::new(),
        }
    }

    pub fn with_override(mut self, day: u32, target: u32) -> Self {
        self.overrides.insert(day, target);
        self
    }

    /// Target for `day`: the override if present, else the default.
    pub fn target(&self, day: u32) -> u32 {
        self.overrides.get(&day).copied().unwrap_or(self.default_target)
    }

    pub fn default_target(&self) -> u32 {
        self.default_target
    }

    pub fn set_default_target(&mut self, target: u32) {
        self.default_target = target;
    }

    pub fn set_override(&mut self, day: u32, target: u32) {
        self.overrides.insert(day, target);
    }

    pub fn clear_override(&mut self, day: u32) -> Option<u32> {
        self.overrides.remove(&day)
    }

    pub fn overrides(&self) -> &BTreeMap<u32, u32> {
        &self.overrides
    }
}
