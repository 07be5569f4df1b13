//! ShiftForge Core - Core types for monthly shift planning
//!
//! This crate provides the fundamental abstractions for ShiftForge:
//! - Calendar arithmetic for a single planning month
//! - Domain records: employees, date categories, rosters, staffing targets
//! - Assignments (day to working employees) and day locks
//! - The consecutive-streak analyzer used by generation and editing

pub mod assignment;
pub mod calendar;
pub mod domain;
pub mod error;
pub mod streak;

pub use assignment::{Assignment, LockSet};
pub use calendar::MonthCalendar;
pub use domain::{DateCategory, Employee, EmployeeId, Roster, StaffingTargets};
pub use error::{Result, ShiftError};
pub use streak::{
    find_four_plus_runs, has_excess_four_plus_runs, work_runs, StreakPolicy, StreakWindow, WorkRun,
};
