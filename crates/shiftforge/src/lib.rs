//! ShiftForge - Monthly Shift Assignment in Rust
//!
//! Builds a month of working days for a small roster under hard date
//! constraints, daily headcount targets, rest quotas and a consecutive-work
//! limit, then lets the caller edit cells by hand and inspect diagnostics.
//!
//! # Example
//!
//! ```rust
//! use shiftforge::prelude::*;
//!
//! let mut plan = MonthPlan::for_month(2025, 6, PlannerConfig::default()).unwrap();
//! let sato = plan.add_employee();
//! plan.add_employee();
//!
//! plan.generate();
//! let report = plan.diagnose();
//! assert_eq!(report.employees.len(), 2);
//!
//! // Hand edits go through the streak check.
//! let day = if plan.assignment().is_working(10, sato) { 10 } else { 11 };
//! let _ = plan.toggle(sato, day);
//! ```

// Core types
pub use shiftforge_core::{
    Assignment, DateCategory, Employee, EmployeeId, LockSet, MonthCalendar, Roster, ShiftError,
    StaffingTargets, StreakPolicy, StreakWindow,
};

// Configuration
pub use shiftforge_config::{ConfigError, PlannerConfig, WeekendPolicy};

// Engine, editor and diagnostics
pub use shiftforge_solver::{
    diagnose, generate, set_lock, toggle, toggle_lock, AllocationEngine, DiagnosticsReport,
    DiagnosticsSettings, EngineSettings, Finding, FindingKind, ScheduleProblem, Subject,
    ToggleRejected, Toggled,
};

mod plan;
pub use plan::MonthPlan;

#[cfg(feature = "console")]
pub use shiftforge_console as console;

pub mod prelude {
    pub use super::{
        Assignment, DateCategory, EmployeeId, LockSet, MonthCalendar, MonthPlan, PlannerConfig,
        Roster, StaffingTargets,
    };
    pub use super::{DiagnosticsReport, FindingKind, ToggleRejected, Toggled};
}
