//! Assignments of employees to working days, and day locks.
//!
//! An [`Assignment`] is kept in canonical form: a day with nobody working has
//! no entry, so two assignments with the same working sets compare equal.

use std::collections::{BTreeMap, BTreeSet};

use crate::calendar::MonthCalendar;
use crate::domain::EmployeeId;

/// Mapping from day number to the set of employees working that day.
///
/// # Examples
///
/// ```
/// use shiftforge_core::{Assignment, EmployeeId};
///
/// let mut a = Assignment::new();
/// a.insert(3, EmployeeId(1));
/// a.insert(4, EmployeeId(1));
///
/// assert!(a.is_working(3, EmployeeId(1)));
/// assert_eq!(a.days_worked(EmployeeId(1)), 2);
/// assert_eq!(a.headcount(5), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Assignment {
    days: BTreeMap<u32, BTreeSet<EmployeeId>>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Employees working `day`, in id order.
    pub fn workers(&self, day: u32) -> impl Iterator<Item = EmployeeId> + '_ {
        self.days.get(&day).into_iter().flatten().copied()
    }

    /// The working set of `day`, if anyone works it.
    pub fn day(&self, day: u32) -> Option<&BTreeSet<EmployeeId>> {
        self.days.get(&day)
    }

    pub fn is_working(&self, day: u32, employee: EmployeeId) -> bool {
        self.days.get(&day).is_some_and(|set| set.contains(&employee))
    }

    /// Adds `employee` to `day`. Returns false if already present.
    pub fn insert(&mut self, day: u32, employee: EmployeeId) -> bool {
        self.days.entry(day).or_default().insert(employee)
    }

    /// Removes `employee` from `day`. Returns false if they were not working.
    pub fn remove(&mut self, day: u32, employee: EmployeeId) -> bool {
        let Some(set) = self.days.get_mut(&day) else {
            return false;
        };
        let removed = set.remove(&employee);
        if set.is_empty() {
            self.days.remove(&day);
        }
        removed
    }

    /// Replaces the whole working set of `day`.
    pub fn set_day(&mut self, day: u32, workers: BTreeSet<EmployeeId>) {
        if workers.is_empty() {
            self.days.remove(&day);
        } else {
            self.days.insert(day, workers);
        }
    }

    pub fn clear_day(&mut self, day: u32) -> Option<BTreeSet<EmployeeId>> {
        self.days.remove(&day)
    }

    /// Number of employees working `day`.
    pub fn headcount(&self, day: u32) -> usize {
        self.days.get(&day).map_or(0, BTreeSet::len)
    }

    /// Number of days `employee` works across the whole assignment.
    pub fn days_worked(&self, employee: EmployeeId) -> usize {
        self.days.values().filter(|set| set.contains(&employee)).count()
    }

    /// Days `employee` works, ascending.
    pub fn working_days(&self, employee: EmployeeId) -> Vec<u32> {
        self.days
            .iter()
            .filter(|(_, set)| set.contains(&employee))
            .map(|(d, _)| *d)
            .collect()
    }

    /// Non-empty days with their working sets, ascending by day.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &BTreeSet<EmployeeId>)> {
        self.days.iter().map(|(d, set)| (*d, set))
    }

    /// Every employee id that appears on any day.
    pub fn employee_ids(&self) -> BTreeSet<EmployeeId> {
        self.days.values().flatten().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Days excluded from regeneration and from hand toggling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct LockSet {
    days: BTreeSet<u32>,
}

impl LockSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks every day of the month.
    pub fn all(cal: &MonthCalendar) -> Self {
        Self {
            days: cal.days().collect(),
        }
    }

    pub fn is_locked(&self, day: u32) -> bool {
        self.days.contains(&day)
    }

    /// Flips the lock on `day`. Returns whether the day is locked afterwards.
    pub fn toggle(&mut self, day: u32) -> bool {
        if self.days.remove(&day) {
            false
        } else {
            self.days.insert(day);
            true
        }
    }

    /// Pure form of [`LockSet::toggle`]: the symmetric difference with `{day}`.
    #[must_use]
    pub fn toggled(&self, day: u32) -> Self {
        let mut next = self.clone();
        next.toggle(day);
        next
    }

    pub fn set(&mut self, day: u32, locked: bool) {
        if locked {
            self.days.insert(day);
        } else {
            self.days.remove(&day);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }
}

impl FromIterator<u32> for LockSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_keeps_canonical_form() {
        let mut a = Assignment::new();
        a.insert(1, EmployeeId(1));
        assert!(a.remove(1, EmployeeId(1)));
        assert!(!a.remove(1, EmployeeId(1)));
        assert_eq!(a, Assignment::new());
        assert!(a.is_empty());
    }

    #[test]
    fn test_insert_is_duplicate_free() {
        let mut a = Assignment::new();
        assert!(a.insert(2, EmployeeId(5)));
        assert!(!a.insert(2, EmployeeId(5)));
        assert_eq!(a.headcount(2), 1);
    }

    #[test]
    fn test_set_day_empty_clears() {
        let mut a = Assignment::new();
        a.insert(3, EmployeeId(1));
        a.set_day(3, BTreeSet::new());
        assert_eq!(a.day(3), None);
    }

    #[test]
    fn test_working_days_and_ids() {
        let mut a = Assignment::new();
        a.insert(5, EmployeeId(2));
        a.insert(1, EmployeeId(2));
        a.insert(1, EmployeeId(3));

        assert_eq!(a.working_days(EmployeeId(2)), vec![1, 5]);
        assert_eq!(a.workers(1).collect::<Vec<_>>(), vec![EmployeeId(2), EmployeeId(3)]);
        assert_eq!(a.employee_ids().len(), 2);
    }

    #[test]
    fn test_lock_toggle_is_symmetric_difference() {
        let locks = LockSet::new();
        let once = locks.toggled(4);
        assert!(once.is_locked(4));
        assert_eq!(once.toggled(4), locks);

        let mut set: LockSet = [1, 2].into_iter().collect();
        assert!(!set.toggle(2));
        assert!(set.toggle(3));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_lock_all() {
        let cal = MonthCalendar::new(2023, 2).unwrap();
        let locks = LockSet::all(&cal);
        assert_eq!(locks.len(), 28);
        assert!(locks.is_locked(28));
        assert!(!locks.is_locked(29));
    }
}
