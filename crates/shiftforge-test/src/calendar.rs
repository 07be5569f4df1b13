//! Calendar fixtures.
//!
//! June 2025 has 30 days and starts on a Sunday, so its weekends are
//! 1, 7-8, 14-15, 21-22 and 28-29. February 2024 is a leap month.

use chrono::NaiveDate;
use shiftforge_core::MonthCalendar;

/// A 30-day month starting on Sunday.
pub fn june_2025() -> MonthCalendar {
    MonthCalendar::new(2025, 6).expect("valid month")
}

/// A 29-day leap month starting on Thursday.
pub fn february_2024() -> MonthCalendar {
    MonthCalendar::new(2024, 2).expect("valid month")
}

/// Date of `day` in `cal`.
pub fn date(cal: &MonthCalendar, day: u32) -> NaiveDate {
    cal.date(day).expect("day inside the month")
}
