//! Calendar arithmetic for a single planning month.
//!
//! Days are plain `u32` numbers `1..=days_in_month`. Dates in employee
//! constraint sets are `chrono::NaiveDate`s; [`MonthCalendar`] converts
//! between the two.
//!
//! # Examples
//!
//! ```
//! use chrono::Weekday;
//! use shiftforge_core::MonthCalendar;
//!
//! let cal = MonthCalendar::new(2024, 2).unwrap();
//! assert_eq!(cal.days_in_month(), 29);
//! assert_eq!(cal.weekday(1), Weekday::Thu);
//! assert!(cal.is_weekend(3));
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{Result, ShiftError};

/// Returns the last day number of `month` in `year`.
///
/// Returns 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day of week for a calendar date, `None` if the date does not exist.
pub fn weekday_of(year: i32, month: u32, day: u32) -> Option<Weekday> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.weekday())
}

/// Whether a calendar date falls on Saturday or Sunday.
pub fn is_weekend(year: i32, month: u32, day: u32) -> bool {
    weekday_of(year, month, day).is_some_and(is_weekend_day)
}

fn is_weekend_day(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// A validated year/month pair with its day count and first weekday cached.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MonthKey", into = "MonthKey")
)]
pub struct MonthCalendar {
    year: i32,
    month: u32,
    days: u32,
    first: NaiveDate,
}

impl MonthCalendar {
    /// Creates a calendar for `month` (1-based) of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::InvalidMonth`] if `month` is outside 1..=12 or
    /// the year is outside chrono's supported range.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(ShiftError::InvalidMonth(month))?;
        Ok(Self {
            year,
            month,
            days: days_in_month(year, month),
            first,
        })
    }

    /// Calendar for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            days: days_in_month(date.year(), date.month()),
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in this month (28..=31).
    pub fn days_in_month(&self) -> u32 {
        self.days
    }

    /// All day numbers of the month, in order.
    pub fn days(&self) -> RangeInclusive<u32> {
        1..=self.days
    }

    pub fn contains(&self, day: u32) -> bool {
        (1..=self.days).contains(&day)
    }

    /// Validates that `day` belongs to this month.
    pub fn check_day(&self, day: u32) -> Result<()> {
        if self.contains(day) {
            Ok(())
        } else {
            Err(ShiftError::DayOutOfRange {
                day,
                days_in_month: self.days,
            })
        }
    }

    /// Day of week of `day`.
    ///
    /// Days past the end of the month keep counting forward from the first.
    pub fn weekday(&self, day: u32) -> Weekday {
        let offset = day.saturating_sub(1) % 7;
        (0..offset).fold(self.first.weekday(), |w, _| w.succ())
    }

    /// Whether `day` is a Saturday or Sunday.
    pub fn is_weekend(&self, day: u32) -> bool {
        is_weekend_day(self.weekday(day))
    }

    /// Weekend day numbers of the month.
    pub fn weekend_days(&self) -> impl Iterator<Item = u32> + '_ {
        self.days().filter(|&d| self.is_weekend(d))
    }

    /// The calendar date of `day`, `None` if outside the month.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        if self.contains(day) {
            NaiveDate::from_ymd_opt(self.year, self.month, day)
        } else {
            None
        }
    }

    /// Day number of `date` if it falls in this month.
    pub fn day_of(&self, date: NaiveDate) -> Option<u32> {
        (date.year() == self.year && date.month() == self.month).then(|| date.day())
    }

    /// The preceding month, wrapping into the previous year after January.
    pub fn previous(&self) -> Self {
        let date = self.first.pred_opt().unwrap_or(self.first);
        Self::containing(date)
    }

    /// The following month, wrapping into the next year after December.
    pub fn next(&self) -> Self {
        let last = self.first.with_day(self.days).unwrap_or(self.first);
        let date = last.succ_opt().unwrap_or(last);
        Self::containing(date)
    }
}

impl fmt::Debug for MonthCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MonthCalendar({:04}-{:02})", self.year, self.month)
    }
}

impl fmt::Display for MonthCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Serialized form of a [`MonthCalendar`].
#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct MonthKey {
    year: i32,
    month: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<MonthKey> for MonthCalendar {
    type Error = ShiftError;

    fn try_from(key: MonthKey) -> Result<Self> {
        MonthCalendar::new(key.year, key.month)
    }
}

#[cfg(feature = "serde")]
impl From<MonthCalendar> for MonthKey {
    fn from(cal: MonthCalendar) -> Self {
        MonthKey {
            year: cal.year,
            month: cal.month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 1), 31);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(MonthCalendar::new(2024, 0), Err(ShiftError::InvalidMonth(0)));
        assert_eq!(MonthCalendar::new(2024, 13), Err(ShiftError::InvalidMonth(13)));
    }

    #[test]
    fn test_weekday_matches_chrono() {
        let cal = MonthCalendar::new(2025, 6).unwrap();
        for day in cal.days() {
            assert_eq!(Some(cal.weekday(day)), weekday_of(2025, 6, day));
            assert_eq!(cal.is_weekend(day), is_weekend(2025, 6, day));
        }
    }

    #[test]
    fn test_weekend_days() {
        // June 2025 starts on a Sunday.
        let cal = MonthCalendar::new(2025, 6).unwrap();
        let weekends: Vec<u32> = cal.weekend_days().collect();
        assert_eq!(weekends, vec![1, 7, 8, 14, 15, 21, 22, 28, 29]);
    }

    #[test]
    fn test_date_conversion() {
        let cal = MonthCalendar::new(2024, 3).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(cal.date(15), Some(date));
        assert_eq!(cal.day_of(date), Some(15));
        assert_eq!(cal.date(32), None);
        assert_eq!(cal.day_of(NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()), None);
    }

    #[test]
    fn test_navigation_wraps_year() {
        let jan = MonthCalendar::new(2024, 1).unwrap();
        let dec = jan.previous();
        assert_eq!((dec.year(), dec.month()), (2023, 12));
        assert_eq!(dec.next(), jan);
        assert_eq!(dec.days_in_month(), 31);
    }

    #[test]
    fn test_check_day() {
        let cal = MonthCalendar::new(2023, 2).unwrap();
        assert!(cal.check_day(28).is_ok());
        assert_eq!(
            cal.check_day(29),
            Err(ShiftError::DayOutOfRange {
                day: 29,
                days_in_month: 28
            })
        );
    }
}
