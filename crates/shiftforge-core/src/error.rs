//! Error types for ShiftForge

use thiserror::Error;

use crate::domain::EmployeeId;

/// Main error type for ShiftForge boundary validation.
///
/// Planning itself never fails; these errors only arise when a caller asks
/// the core to validate input before handing it to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftError {
    /// Month number outside 1..=12
    #[error("Invalid month: {0} (expected 1..=12)")]
    InvalidMonth(u32),

    /// Day number outside the active month
    #[error("Day {day} is outside the month (1..={days_in_month})")]
    DayOutOfRange { day: u32, days_in_month: u32 },

    /// No employee with this id in the roster
    #[error("Unknown employee: {0}")]
    UnknownEmployee(EmployeeId),

    /// Roster already holds an employee with this id
    #[error("Duplicate employee: {0}")]
    DuplicateEmployee(EmployeeId),
}

/// Result type alias for ShiftForge operations
pub type Result<T> = std::result::Result<T, ShiftError>;
