//! The input of one generation run.

use shiftforge_core::{Assignment, LockSet, MonthCalendar, Roster, StaffingTargets};

/// Everything the allocation engine reads, borrowed from the caller.
///
/// # Examples
///
/// ```
/// use shiftforge_core::{Assignment, LockSet, MonthCalendar, Roster, StaffingTargets};
/// use shiftforge_solver::ScheduleProblem;
///
/// let cal = MonthCalendar::new(2025, 6).unwrap();
/// let roster = Roster::new();
/// let targets = StaffingTargets::new(3);
/// let prior = Assignment::new();
/// let locks: LockSet = [1, 2].into_iter().collect();
///
/// let problem = ScheduleProblem::new(cal, &roster, &targets).with_prior(&prior, &locks);
/// assert!(problem.is_locked(2));
/// assert!(!problem.is_locked(3));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScheduleProblem<'a> {
    pub calendar: MonthCalendar,
    pub roster: &'a Roster,
    pub targets: &'a StaffingTargets,
    pub prior: Option<&'a Assignment>,
    pub locks: Option<&'a LockSet>,
}

impl<'a> ScheduleProblem<'a> {
    pub fn new(calendar: MonthCalendar, roster: &'a Roster, targets: &'a StaffingTargets) -> Self {
        Self {
            calendar,
            roster,
            targets,
            prior: None,
            locks: None,
        }
    }

    /// Regenerates against a previous assignment, keeping `locks` verbatim.
    pub fn with_prior(mut self, prior: &'a Assignment, locks: &'a LockSet) -> Self {
        self.prior = Some(prior);
        self.locks = Some(locks);
        self
    }

    pub fn is_locked(&self, day: u32) -> bool {
        self.locks.is_some_and(|l| l.is_locked(day))
    }

    pub fn days_in_month(&self) -> u32 {
        self.calendar.days_in_month()
    }

    /// Locked days inside the month, ascending.
    pub fn locked_days(&self) -> impl Iterator<Item = u32> + '_ {
        let cal = self.calendar;
        self.locks
            .into_iter()
            .flat_map(LockSet::iter)
            .filter(move |d| cal.contains(*d))
    }
}
