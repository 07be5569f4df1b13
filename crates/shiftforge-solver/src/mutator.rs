//! Single-cell edits of an existing assignment.
//!
//! A toggle removes a working employee unconditionally and adds a resting
//! one only if the streak rule still holds afterwards. Locked days refuse
//! every toggle. A rejected toggle leaves the assignment exactly as it was.
//!
//! # Examples
//!
//! ```
//! use shiftforge_core::{Assignment, EmployeeId, LockSet, MonthCalendar, StreakPolicy};
//! use shiftforge_solver::{toggle, ToggleRejected, Toggled};
//!
//! let cal = MonthCalendar::new(2025, 6).unwrap();
//! let policy = StreakPolicy::default();
//! let id = EmployeeId(1);
//! let mut a = Assignment::new();
//! for day in [1, 2, 3, 4, 6, 7, 8] {
//!     a.insert(day, id);
//! }
//!
//! // Day 5 would join two runs into one eight-day run.
//! let err = toggle(&mut a, &cal, &LockSet::new(), &policy, id, 5).unwrap_err();
//! assert!(matches!(err, ToggleRejected::ExcessStreak { .. }));
//! assert!(!a.is_working(5, id));
//!
//! assert_eq!(toggle(&mut a, &cal, &LockSet::new(), &policy, id, 8), Ok(Toggled::Removed));
//! ```

use shiftforge_core::{Assignment, EmployeeId, LockSet, MonthCalendar, StreakPolicy};
use thiserror::Error;
use tracing::debug;

/// What a successful toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    /// The employee now works the day.
    Added,
    /// The employee no longer works the day.
    Removed,
}

/// Why a toggle was refused. The assignment is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleRejected {
    /// Locked days cannot be edited.
    #[error("Day {0} is locked")]
    DayLocked(u32),

    /// The day does not exist in the month.
    #[error("Day {day} is outside the month (1..={days_in_month})")]
    DayOutOfRange { day: u32, days_in_month: u32 },

    /// Adding the employee would exceed the tolerated streak windows.
    #[error("Adding {employee} on day {day} would make {windows} consecutive-work windows")]
    ExcessStreak {
        employee: EmployeeId,
        day: u32,
        windows: usize,
    },
}

/// Flips whether `employee` works `day`.
///
/// # Errors
///
/// Returns [`ToggleRejected`] when the day is locked or out of range, or when
/// adding the employee would break the streak rule.
pub fn toggle(
    assignment: &mut Assignment,
    calendar: &MonthCalendar,
    locks: &LockSet,
    policy: &StreakPolicy,
    employee: EmployeeId,
    day: u32,
) -> Result<Toggled, ToggleRejected> {
    let days_in_month = calendar.days_in_month();
    if !calendar.contains(day) {
        return Err(ToggleRejected::DayOutOfRange { day, days_in_month });
    }
    if locks.is_locked(day) {
        debug!(event = "toggle_rejected", day, employee = employee.0, reason = "locked");
        return Err(ToggleRejected::DayLocked(day));
    }

    if assignment.remove(day, employee) {
        debug!(event = "toggle_applied", day, employee = employee.0, working = false);
        return Ok(Toggled::Removed);
    }

    assignment.insert(day, employee);
    let windows = policy.window_count(assignment, employee, days_in_month);
    if windows > policy.tolerated_windows {
        assignment.remove(day, employee);
        debug!(
            event = "toggle_rejected",
            day,
            employee = employee.0,
            reason = "streak",
            windows,
        );
        return Err(ToggleRejected::ExcessStreak {
            employee,
            day,
            windows,
        });
    }

    debug!(event = "toggle_applied", day, employee = employee.0, working = true);
    Ok(Toggled::Added)
}

/// Returns `locks` with `day` flipped.
#[must_use]
pub fn toggle_lock(locks: &LockSet, day: u32) -> LockSet {
    locks.toggled(day)
}

/// Locks or unlocks `day` in place.
pub fn set_lock(locks: &mut LockSet, day: u32, locked: bool) {
    locks.set(day, locked);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftforge_test::{assignment_of, block, june_2025};

    const ID: EmployeeId = EmployeeId(1);

    #[test]
    fn test_add_then_remove_round_trip() {
        let cal = june_2025();
        let policy = StreakPolicy::default();
        let original = assignment_of(&[(1, &[2]), (3, &[1, 2])]);
        let mut a = original.clone();

        assert_eq!(toggle(&mut a, &cal, &LockSet::new(), &policy, ID, 10), Ok(Toggled::Added));
        assert!(a.is_working(10, ID));
        assert_eq!(toggle(&mut a, &cal, &LockSet::new(), &policy, ID, 10), Ok(Toggled::Removed));
        assert_eq!(a, original);
    }

    #[test]
    fn test_remove_is_unconditional() {
        let cal = june_2025();
        let policy = StreakPolicy::default();
        let mut a = Assignment::new();
        block(&mut a, 1, 1, 6);

        // Already violating; removal is still allowed.
        assert_eq!(toggle(&mut a, &cal, &LockSet::new(), &policy, ID, 3), Ok(Toggled::Removed));
        assert!(!a.is_working(3, ID));
    }

    #[test]
    fn test_second_run_is_rejected() {
        let cal = june_2025();
        let policy = StreakPolicy::default();
        let mut a = Assignment::new();
        block(&mut a, 1, 1, 4);
        block(&mut a, 1, 10, 12);
        let before = a.clone();

        let err = toggle(&mut a, &cal, &LockSet::new(), &policy, ID, 13).unwrap_err();
        assert_eq!(
            err,
            ToggleRejected::ExcessStreak {
                employee: ID,
                day: 13,
                windows: 2
            }
        );
        assert_eq!(a, before);
    }

    #[test]
    fn test_extending_single_run_is_rejected() {
        let cal = june_2025();
        let policy = StreakPolicy::default();
        let mut a = Assignment::new();
        block(&mut a, 1, 1, 4);

        assert!(toggle(&mut a, &cal, &LockSet::new(), &policy, ID, 5).is_err());
        // A gap keeps the run at one window.
        assert_eq!(toggle(&mut a, &cal, &LockSet::new(), &policy, ID, 6), Ok(Toggled::Added));
    }

    #[test]
    fn test_locked_day_rejects_both_directions() {
        let cal = june_2025();
        let policy = StreakPolicy::default();
        let mut a = assignment_of(&[(2, &[1])]);
        let locks: LockSet = [2].into_iter().collect();

        assert_eq!(
            toggle(&mut a, &cal, &locks, &policy, ID, 2),
            Err(ToggleRejected::DayLocked(2))
        );
        assert_eq!(
            toggle(&mut a, &cal, &locks, &policy, EmployeeId(2), 2),
            Err(ToggleRejected::DayLocked(2))
        );
        assert_eq!(a, assignment_of(&[(2, &[1])]));
    }

    #[test]
    fn test_out_of_range_day() {
        let cal = june_2025();
        let mut a = Assignment::new();
        assert_eq!(
            toggle(&mut a, &cal, &LockSet::new(), &StreakPolicy::default(), ID, 31),
            Err(ToggleRejected::DayOutOfRange {
                day: 31,
                days_in_month: 30
            })
        );
    }

    #[test]
    fn test_lock_helpers() {
        let mut locks = LockSet::new();
        set_lock(&mut locks, 5, true);
        assert!(locks.is_locked(5));

        let flipped = toggle_lock(&locks, 5);
        assert!(!flipped.is_locked(5));
        assert!(locks.is_locked(5));

        set_lock(&mut locks, 5, false);
        assert!(locks.is_empty());
    }
}
