//! Employee and roster fixtures.
//!
//! # Example
//!
//! ```
//! use shiftforge_test::calendar::june_2025;
//! use shiftforge_test::roster::EmployeeBuilder;
//!
//! let cal = june_2025();
//! let emp = EmployeeBuilder::new(1, 8)
//!     .absolute_off(&cal, &[3])
//!     .mandatory(&cal, &[5])
//!     .build();
//! assert_eq!(emp.absolute_off().count(), 1);
//! ```

use shiftforge_core::{DateCategory, Employee, EmployeeId, MonthCalendar, Roster};

/// Fluent builder for employees with day-number constraints.
#[derive(Debug, Clone)]
pub struct EmployeeBuilder {
    employee: Employee,
}

impl EmployeeBuilder {
    /// Employee `id` named `Staff {id}` with the given rest quota.
    pub fn new(id: u64, required_rest_days: u32) -> Self {
        Self {
            employee: Employee::new(EmployeeId(id), format!("Staff {id}"), required_rest_days),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.employee.name = name.to_string();
        self
    }

    pub fn absolute_off(self, cal: &MonthCalendar, days: &[u32]) -> Self {
        self.with(cal, days, DateCategory::AbsoluteOff)
    }

    pub fn requested_off(self, cal: &MonthCalendar, days: &[u32]) -> Self {
        self.with(cal, days, DateCategory::RequestedOff)
    }

    pub fn mandatory(self, cal: &MonthCalendar, days: &[u32]) -> Self {
        self.with(cal, days, DateCategory::MandatoryWork)
    }

    fn with(mut self, cal: &MonthCalendar, days: &[u32], category: DateCategory) -> Self {
        for &day in days {
            let date = cal.date(day).expect("day inside the month");
            self.employee.set_category(date, Some(category));
        }
        self
    }

    pub fn build(self) -> Employee {
        self.employee
    }
}

/// Two employees with quotas 8 and 10, the planner's starter roster.
pub fn default_roster() -> Roster {
    Roster::from_employees([
        EmployeeBuilder::new(1, 8).named("Sato").build(),
        EmployeeBuilder::new(2, 10).named("Tanaka").build(),
    ])
    .expect("unique ids")
}

/// `n` unconstrained employees with ids `1..=n` and the same quota.
pub fn uniform_roster(n: u64, required_rest_days: u32) -> Roster {
    Roster::from_employees((1..=n).map(|id| EmployeeBuilder::new(id, required_rest_days).build()))
        .expect("unique ids")
}
