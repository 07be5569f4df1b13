//! Consecutive working-day analysis.
//!
//! A run of `L` unbroken working days with `L >= window_length` is reported
//! as `L - window_length + 1` overlapping windows, so a long run weighs more
//! than a short one. A run reaching the last day of the month is closed as if
//! a rest day followed it.
//!
//! # Examples
//!
//! ```
//! use shiftforge_core::{Assignment, EmployeeId, StreakPolicy, StreakWindow};
//!
//! let id = EmployeeId(1);
//! let mut a = Assignment::new();
//! for day in 1..=6 {
//!     a.insert(day, id);
//! }
//!
//! let policy = StreakPolicy::default();
//! assert_eq!(
//!     policy.windows(&a, id, 30),
//!     vec![StreakWindow::new(1, 4), StreakWindow::new(2, 5), StreakWindow::new(3, 6)]
//! );
//! assert!(policy.has_excess(&a, id, 30));
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::assignment::Assignment;
use crate::domain::EmployeeId;

/// Length of the window the labor policy counts.
pub const DEFAULT_WINDOW_LENGTH: u32 = 4;

/// How many windows a month may contain before it is a violation.
pub const DEFAULT_TOLERATED_WINDOWS: usize = 1;

/// A maximal run of consecutive working days, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkRun {
    pub start: u32,
    pub end: u32,
}

impl WorkRun {
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }
}

/// A fixed-length window inside a work run, inclusive.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreakWindow {
    pub start: u32,
    pub end: u32,
}

impl StreakWindow {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, day: u32) -> bool {
        (self.start..=self.end).contains(&day)
    }

    pub fn days(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

impl fmt::Debug for StreakWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Maximal runs of working days for `employee` within `1..=days_in_month`.
pub fn work_runs(assignment: &Assignment, employee: EmployeeId, days_in_month: u32) -> Vec<WorkRun> {
    let mut runs = Vec::new();
    let mut start = None;

    for day in 1..=days_in_month {
        match (assignment.is_working(day, employee), start) {
            (true, None) => start = Some(day),
            (false, Some(s)) => {
                runs.push(WorkRun { start: s, end: day - 1 });
                start = None;
            }
            _ => {}
        }
    }
    // Month end drains an open run.
    if let Some(s) = start {
        runs.push(WorkRun {
            start: s,
            end: days_in_month,
        });
    }
    runs
}

/// The consecutive-work rule: window length and how many windows are tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreakPolicy {
    pub window_length: u32,
    pub tolerated_windows: usize,
}

impl Default for StreakPolicy {
    fn default() -> Self {
        Self {
            window_length: DEFAULT_WINDOW_LENGTH,
            tolerated_windows: DEFAULT_TOLERATED_WINDOWS,
        }
    }
}

impl StreakPolicy {
    pub fn new(window_length: u32, tolerated_windows: usize) -> Self {
        Self {
            window_length,
            tolerated_windows,
        }
    }

    fn effective_length(&self) -> u32 {
        self.window_length.max(1)
    }

    /// Every window of `employee`, in chronological order.
    pub fn windows(
        &self,
        assignment: &Assignment,
        employee: EmployeeId,
        days_in_month: u32,
    ) -> Vec<StreakWindow> {
        let w = self.effective_length();
        work_runs(assignment, employee, days_in_month)
            .into_iter()
            .filter(|run| run.len() >= w)
            .flat_map(|run| (run.start..=run.end + 1 - w).map(move |s| StreakWindow::new(s, s + w - 1)))
            .collect()
    }

    /// Number of windows without materializing them.
    pub fn window_count(&self, assignment: &Assignment, employee: EmployeeId, days_in_month: u32) -> usize {
        let w = self.effective_length();
        work_runs(assignment, employee, days_in_month)
            .iter()
            .filter(|run| run.len() >= w)
            .map(|run| (run.len() - w + 1) as usize)
            .sum()
    }

    /// Whether `employee` has more windows than the policy tolerates.
    pub fn has_excess(&self, assignment: &Assignment, employee: EmployeeId, days_in_month: u32) -> bool {
        self.window_count(assignment, employee, days_in_month) > self.tolerated_windows
    }

    /// Days covered by any window, or nothing when the count is tolerated.
    pub fn violation_days(
        &self,
        assignment: &Assignment,
        employee: EmployeeId,
        days_in_month: u32,
    ) -> BTreeSet<u32> {
        let windows = self.windows(assignment, employee, days_in_month);
        if windows.len() <= self.tolerated_windows {
            return BTreeSet::new();
        }
        windows.iter().flat_map(StreakWindow::days).collect()
    }
}

/// Four-day windows of `employee` under the default policy.
pub fn find_four_plus_runs(
    assignment: &Assignment,
    employee: EmployeeId,
    days_in_month: u32,
) -> Vec<StreakWindow> {
    StreakPolicy::default().windows(assignment, employee, days_in_month)
}

/// True iff `employee` has two or more four-day windows.
pub fn has_excess_four_plus_runs(assignment: &Assignment, employee: EmployeeId, days_in_month: u32) -> bool {
    StreakPolicy::default().has_excess(assignment, employee, days_in_month)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: EmployeeId = EmployeeId(1);

    fn working(days: &[u32]) -> Assignment {
        let mut a = Assignment::new();
        for &d in days {
            a.insert(d, ID);
        }
        a
    }

    #[test]
    fn test_six_day_run_yields_three_windows() {
        let a = working(&[1, 2, 3, 4, 5, 6]);
        let windows = find_four_plus_runs(&a, ID, 30);
        assert_eq!(
            windows,
            vec![
                StreakWindow::new(1, 4),
                StreakWindow::new(2, 5),
                StreakWindow::new(3, 6)
            ]
        );
        assert!(has_excess_four_plus_runs(&a, ID, 30));
    }

    #[test]
    fn test_single_four_day_run_is_tolerated() {
        let a = working(&[10, 11, 12, 13]);
        assert_eq!(find_four_plus_runs(&a, ID, 30), vec![StreakWindow::new(10, 13)]);
        assert!(!has_excess_four_plus_runs(&a, ID, 30));
        assert!(StreakPolicy::default().violation_days(&a, ID, 30).is_empty());
    }

    #[test]
    fn test_two_separate_runs_violate() {
        let a = working(&[1, 2, 3, 4, 10, 11, 12, 13]);
        let policy = StreakPolicy::default();
        assert_eq!(policy.window_count(&a, ID, 30), 2);
        assert!(policy.has_excess(&a, ID, 30));

        let days: Vec<u32> = policy.violation_days(&a, ID, 30).into_iter().collect();
        assert_eq!(days, vec![1, 2, 3, 4, 10, 11, 12, 13]);
    }

    #[test]
    fn test_run_touching_month_end_is_drained() {
        let a = working(&[26, 27, 28, 29, 30]);
        assert_eq!(
            find_four_plus_runs(&a, ID, 30),
            vec![StreakWindow::new(26, 29), StreakWindow::new(27, 30)]
        );
        // Days past the month end are ignored.
        let b = working(&[28, 29, 30, 31]);
        assert!(find_four_plus_runs(&b, ID, 30).is_empty());
    }

    #[test]
    fn test_short_runs_produce_nothing() {
        let a = working(&[1, 2, 3, 5, 6, 7, 9]);
        assert!(find_four_plus_runs(&a, ID, 30).is_empty());
        assert_eq!(
            work_runs(&a, ID, 30),
            vec![
                WorkRun { start: 1, end: 3 },
                WorkRun { start: 5, end: 7 },
                WorkRun { start: 9, end: 9 }
            ]
        );
    }

    #[test]
    fn test_custom_policy() {
        let a = working(&[1, 2, 3, 4, 5, 6]);
        let policy = StreakPolicy::new(6, 0);
        assert_eq!(policy.windows(&a, ID, 30), vec![StreakWindow::new(1, 6)]);
        assert!(policy.has_excess(&a, ID, 30));
        assert!(!StreakPolicy::new(6, 1).has_excess(&a, ID, 30));
    }
}
