//! Employees and their per-date constraint categories.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::calendar::MonthCalendar;

/// Rest-day quota given to newly created employees.
pub const DEFAULT_REQUIRED_REST_DAYS: u32 = 8;

/// Opaque, unique employee identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct EmployeeId(pub u64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        EmployeeId(id)
    }
}

/// Constraint category attached to a single date for one employee.
///
/// A date carries at most one category per employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
pub enum DateCategory {
    /// Hard exclusion: never scheduled on this date.
    AbsoluteOff,
    /// Soft preference: kept off when staffing allows.
    RequestedOff,
    /// Hard inclusion: always scheduled on this date.
    MandatoryWork,
}

/// An employee who can be placed on working days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use shiftforge_core::{DateCategory, Employee, EmployeeId};
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
/// let mut emp = Employee::new(EmployeeId(1), "Sato", 8);
///
/// emp.set_category(date, Some(DateCategory::AbsoluteOff));
/// emp.set_category(date, Some(DateCategory::MandatoryWork));
///
/// // Setting a category evicts the previous one.
/// assert!(emp.is_mandatory_work(date));
/// assert!(!emp.is_absolute_off(date));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// Minimum number of non-working days in the month.
    pub required_rest_days: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    categories: BTreeMap<NaiveDate, DateCategory>,
}

impl Employee {
    pub fn new(id: impl Into<EmployeeId>, name: impl Into<String>, required_rest_days: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            required_rest_days,
            categories: BTreeMap::new(),
        }
    }

    /// Builder form of [`Employee::set_category`].
    pub fn with_category(mut self, date: NaiveDate, category: DateCategory) -> Self {
        self.set_category(date, Some(category));
        self
    }

    pub fn category(&self, date: NaiveDate) -> Option<DateCategory> {
        self.categories.get(&date).copied()
    }

    /// Puts `date` into `category` (or clears it with `None`).
    ///
    /// This is the single place the one-category-per-date rule is enforced.
    /// Returns the category the date had before.
    pub fn set_category(
        &mut self,
        date: NaiveDate,
        category: Option<DateCategory>,
    ) -> Option<DateCategory> {
        match category {
            Some(c) => self.categories.insert(date, c),
            None => self.categories.remove(&date),
        }
    }

    /// Clears `date` if it already has `category`, otherwise moves it there.
    ///
    /// Returns the category the date has afterwards.
    pub fn toggle_category(&mut self, date: NaiveDate, category: DateCategory) -> Option<DateCategory> {
        let next = if self.category(date) == Some(category) {
            None
        } else {
            Some(category)
        };
        self.set_category(date, next);
        next
    }

    pub fn is_absolute_off(&self, date: NaiveDate) -> bool {
        self.category(date) == Some(DateCategory::AbsoluteOff)
    }

    pub fn is_requested_off(&self, date: NaiveDate) -> bool {
        self.category(date) == Some(DateCategory::RequestedOff)
    }

    pub fn is_mandatory_work(&self, date: NaiveDate) -> bool {
        self.category(date) == Some(DateCategory::MandatoryWork)
    }

    /// Category of `day` in the month described by `cal`.
    pub fn category_on(&self, cal: &MonthCalendar, day: u32) -> Option<DateCategory> {
        cal.date(day).and_then(|date| self.category(date))
    }

    /// Dates carrying `category`, in ascending order.
    pub fn dates(&self, category: DateCategory) -> impl Iterator<Item = NaiveDate> + '_ {
        self.categories
            .iter()
            .filter(move |(_, c)| **c == category)
            .map(|(d, _)| *d)
    }

    pub fn absolute_off(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates(DateCategory::AbsoluteOff)
    }

    pub fn requested_off(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates(DateCategory::RequestedOff)
    }

    pub fn mandatory_work(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates(DateCategory::MandatoryWork)
    }

    /// Day numbers within `cal` that carry `category`.
    pub fn days_in(&self, cal: &MonthCalendar, category: DateCategory) -> Vec<u32> {
        self.dates(category).filter_map(|d| cal.day_of(d)).collect()
    }
}
