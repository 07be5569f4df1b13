//! Advisory diagnostics over a finished assignment.
//!
//! Nothing here blocks generation or editing. [`diagnose`] summarizes each
//! employee and each day and lists [`Finding`]s for anything short of its
//! threshold.

use std::collections::BTreeSet;
use std::fmt;

use chrono::Weekday;
use shiftforge_config::{PlannerConfig, DEFAULT_MIN_WEEKEND_REST_DAYS};
use shiftforge_core::{
    Assignment, DateCategory, Employee, EmployeeId, MonthCalendar, Roster, StaffingTargets,
    StreakPolicy,
};

use crate::settings::EngineSettings;


/// Thresholds used while diagnosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticsSettings {
    pub streak: StreakPolicy,
    /// Weekend rest days below which a [`FindingKind::WeekendShortfall`] is raised.
    pub min_weekend_rest: u32,
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            streak: StreakPolicy::default(),
            min_weekend_rest: DEFAULT_MIN_WEEKEND_REST_DAYS,
        }
    }
}

impl From<&PlannerConfig> for DiagnosticsSettings {
    fn from(config: &PlannerConfig) -> Self {
        Self {
            streak: config.streak_policy(),
            min_weekend_rest: config.weekend.min_rest_days,
        }
    }
}

impl From<&EngineSettings> for DiagnosticsSettings {
    fn from(settings: &EngineSettings) -> Self {
        Self {
            streak: settings.streak,
            min_weekend_rest: settings.min_weekend_rest,
        }
    }
}

/// Category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FindingKind {
    /// Fewer rest days than the employee's quota.
    RestShortfall,
    /// Fewer weekend rest days than the advisory minimum.
    WeekendShortfall,
    /// Headcount below the day's target.
    UnderStaffed,
    /// Headcount above the day's target.
    OverStaffed,
    /// More consecutive-work windows than tolerated.
    StreakViolation,
    /// Working on a day marked absolute off.
    AbsoluteOffBreach,
    /// Not working on a day marked mandatory.
    MandatoryMissing,
}

impl FindingKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::RestShortfall => "rest shortfall",
            Self::WeekendShortfall => "weekend rest shortfall",
            Self::UnderStaffed => "under-staffed",
            Self::OverStaffed => "over-staffed",
            Self::StreakViolation => "consecutive work",
            Self::AbsoluteOffBreach => "absolute day off worked",
            Self::MandatoryMissing => "mandatory day missed",
        }
    }
}

/// What a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Subject {
    Day(u32),
    Employee(EmployeeId),
    Shift { employee: EmployeeId, day: u32 },
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(day) => write!(f, "day {day}"),
            Self::Employee(id) => write!(f, "{id}"),
            Self::Shift { employee, day } => write!(f, "{employee} on day {day}"),
        }
    }
}

/// One advisory finding.
///
/// `magnitude` is the size of the gap: missing rest days, missing or extra
/// heads, or window count for streak violations. `days` lists the days the
/// finding points at, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Finding {
    pub kind: FindingKind,
    pub subject: Subject,
    pub magnitude: u32,
    pub days: Vec<u32>,
}

impl Finding {
    fn new(kind: FindingKind, subject: Subject, magnitude: u32) -> Self {
        Self {
            kind,
            subject,
            magnitude,
            days: Vec::new(),
        }
    }

    fn with_days(mut self, days: impl IntoIterator<Item = u32>) -> Self {
        self.days = days.into_iter().collect();
        self
    }

    /// A short hint for fixing the finding by hand.
    pub fn suggestion(&self) -> &'static str {
        match self.kind {
            FindingKind::RestShortfall => "take this employee off a day that is over target",
            FindingKind::WeekendShortfall => "swap one of their weekend shifts for a weekday",
            FindingKind::UnderStaffed => "move a rested employee onto this day",
            FindingKind::OverStaffed => "give one of the workers this day off",
            FindingKind::StreakViolation => "insert a rest day inside the highlighted run",
            FindingKind::AbsoluteOffBreach => "remove the employee from this day",
            FindingKind::MandatoryMissing => "put the employee back on this day",
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.subject, self.kind.label(), self.magnitude)
    }
}

/// Per-employee totals for the month.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmployeeSummary {
    pub id: EmployeeId,
    pub name: String,
    pub required_rest_days: u32,
    pub days_worked: u32,
    pub rest_days: u32,
    pub weekend_rest_days: u32,
    pub requests_total: u32,
    pub requests_honored: u32,
    pub streak_windows: usize,
    pub violation_days: BTreeSet<u32>,
}

impl EmployeeSummary {
    /// Honored requested-off days as a rounded percentage, 100 with no requests.
    pub fn fulfillment_percent(&self) -> u32 {
        if self.requests_total == 0 {
            return 100;
        }
        (self.requests_honored * 100 + self.requests_total / 2) / self.requests_total
    }

    pub fn rest_shortfall(&self) -> u32 {
        self.required_rest_days.saturating_sub(self.rest_days)
    }
}

/// Headcount against target for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySummary {
    pub day: u32,
    pub weekday: Weekday,
    pub target: u32,
    pub headcount: u32,
}

impl DaySummary {
    /// Headcount minus target; negative when under-staffed.
    pub fn delta(&self) -> i64 {
        i64::from(self.headcount) - i64::from(self.target)
    }
}

/// Everything [`diagnose`] found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticsReport {
    pub calendar: MonthCalendar,
    pub employees: Vec<EmployeeSummary>,
    pub days: Vec<DaySummary>,
    pub findings: Vec<Finding>,
}

impl DiagnosticsReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn findings_of(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&EmployeeSummary> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn day(&self, day: u32) -> Option<&DaySummary> {
        self.days.iter().find(|d| d.day == day)
    }
}

/// Derives summaries and findings for `assignment`.
///
/// Employee findings come first in roster order, followed by day findings in
/// day order.
pub fn diagnose(
    calendar: &MonthCalendar,
    roster: &Roster,
    targets: &StaffingTargets,
    assignment: &Assignment,
    settings: &DiagnosticsSettings,
) -> DiagnosticsReport {
    let mut findings = Vec::new();

    let employees: Vec<EmployeeSummary> = roster
        .iter()
        .map(|employee| {
            let summary = summarize_employee(calendar, employee, assignment, settings);
            employee_findings(calendar, employee, &summary, assignment, settings, &mut findings);
            summary
        })
        .collect();

    let days: Vec<DaySummary> = calendar
        .days()
        .map(|day| DaySummary {
            day,
            weekday: calendar.weekday(day),
            target: targets.target(day),
            headcount: assignment.headcount(day) as u32,
        })
        .collect();

    for summary in &days {
        let kind = match summary.delta() {
            d if d < 0 => FindingKind::UnderStaffed,
            d if d > 0 => FindingKind::OverStaffed,
            _ => continue,
        };
        let magnitude = summary.delta().unsigned_abs() as u32;
        findings.push(Finding::new(kind, Subject::Day(summary.day), magnitude));
    }

    DiagnosticsReport {
        calendar: *calendar,
        employees,
        days,
        findings,
    }
}

fn summarize_employee(
    calendar: &MonthCalendar,
    employee: &Employee,
    assignment: &Assignment,
    settings: &DiagnosticsSettings,
) -> EmployeeSummary {
    let id = employee.id;
    let dim = calendar.days_in_month();

    let days_worked = calendar.days().filter(|&d| assignment.is_working(d, id)).count() as u32;
    let weekend_rest_days = calendar
        .weekend_days()
        .filter(|&d| !assignment.is_working(d, id))
        .count() as u32;

    let requested = employee.days_in(calendar, DateCategory::RequestedOff);
    let requests_honored = requested.iter().filter(|&&d| !assignment.is_working(d, id)).count() as u32;

    EmployeeSummary {
        id,
        name: employee.name.clone(),
        required_rest_days: employee.required_rest_days,
        days_worked,
        rest_days: dim - days_worked,
        weekend_rest_days,
        requests_total: requested.len() as u32,
        requests_honored,
        streak_windows: settings.streak.window_count(assignment, id, dim),
        violation_days: settings.streak.violation_days(assignment, id, dim),
    }
}

fn employee_findings(
    calendar: &MonthCalendar,
    employee: &Employee,
    summary: &EmployeeSummary,
    assignment: &Assignment,
    settings: &DiagnosticsSettings,
    findings: &mut Vec<Finding>,
) {
    let id = employee.id;
    let subject = Subject::Employee(id);

    let shortfall = summary.rest_shortfall();
    if shortfall > 0 {
        findings.push(Finding::new(FindingKind::RestShortfall, subject, shortfall));
    }

    if summary.weekend_rest_days < settings.min_weekend_rest {
        let worked_weekends = calendar.weekend_days().filter(|&d| assignment.is_working(d, id));
        findings.push(
            Finding::new(
                FindingKind::WeekendShortfall,
                subject,
                settings.min_weekend_rest - summary.weekend_rest_days,
            )
            .with_days(worked_weekends),
        );
    }

    if !summary.violation_days.is_empty() {
        findings.push(
            Finding::new(FindingKind::StreakViolation, subject, summary.streak_windows as u32)
                .with_days(summary.violation_days.iter().copied()),
        );
    }

    for day in employee.days_in(calendar, DateCategory::AbsoluteOff) {
        if assignment.is_working(day, id) {
            findings.push(
                Finding::new(FindingKind::AbsoluteOffBreach, Subject::Shift { employee: id, day }, 1)
                    .with_days([day]),
            );
        }
    }
    for day in employee.days_in(calendar, DateCategory::MandatoryWork) {
        if !assignment.is_working(day, id) {
            findings.push(
                Finding::new(FindingKind::MandatoryMissing, Subject::Shift { employee: id, day }, 1)
                    .with_days([day]),
            );
        }
    }
}
