//! Caller-owned planning session for one month.

use chrono::NaiveDate;
use shiftforge_config::PlannerConfig;
use shiftforge_core::{
    Assignment, DateCategory, Employee, EmployeeId, LockSet, MonthCalendar, Roster, ShiftError,
    StaffingTargets,
};
use shiftforge_solver::{
    self as solver, AllocationEngine, DiagnosticsReport, DiagnosticsSettings, EngineSettings,
    ScheduleProblem, ToggleRejected, Toggled,
};
use tracing::debug;

/// A month being planned: calendar, roster, targets, the current assignment
/// and its locked days.
///
/// Every operation is a plain method on the value. Nothing is cached between
/// calls, so diagnostics always reflect the state at the time they are asked
/// for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthPlan {
    calendar: MonthCalendar,
    roster: Roster,
    targets: StaffingTargets,
    assignment: Assignment,
    locks: LockSet,
    config: PlannerConfig,
}

impl MonthPlan {
    /// Empty plan for `calendar` with targets taken from `config`.
    pub fn new(calendar: MonthCalendar, config: PlannerConfig) -> Self {
        Self {
            calendar,
            roster: Roster::new(),
            targets: config.staffing_targets(),
            assignment: Assignment::new(),
            locks: LockSet::new(),
            config,
        }
    }

    /// Empty plan for the given year and 1-based month.
    pub fn for_month(year: i32, month: u32, config: PlannerConfig) -> Result<Self, ShiftError> {
        Ok(Self::new(MonthCalendar::new(year, month)?, config))
    }

    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    pub fn calendar(&self) -> &MonthCalendar {
        &self.calendar
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn targets(&self) -> &StaffingTargets {
        &self.targets
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn locks(&self) -> &LockSet {
        &self.locks
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings::from(&self.config)
    }

    pub fn diagnostics_settings(&self) -> DiagnosticsSettings {
        DiagnosticsSettings::from(&self.config)
    }

    // ----- generation and editing -----

    /// Regenerates the month, keeping locked days as they are.
    pub fn generate(&mut self) -> &Assignment {
        let problem = ScheduleProblem::new(self.calendar, &self.roster, &self.targets)
            .with_prior(&self.assignment, &self.locks);
        self.assignment = AllocationEngine::new(self.engine_settings()).generate(&problem);
        &self.assignment
    }

    /// Flips one cell, refusing locked days and streak violations.
    pub fn toggle(&mut self, employee: EmployeeId, day: u32) -> Result<Toggled, ToggleRejected> {
        let policy = self.config.streak_policy();
        solver::toggle(
            &mut self.assignment,
            &self.calendar,
            &self.locks,
            &policy,
            employee,
            day,
        )
    }

    /// Flips the lock on `day` and returns whether it is now locked.
    pub fn toggle_lock(&mut self, day: u32) -> bool {
        self.locks = solver::toggle_lock(&self.locks, day);
        self.locks.is_locked(day)
    }

    pub fn set_lock(&mut self, day: u32, locked: bool) {
        solver::set_lock(&mut self.locks, day, locked);
    }

    pub fn clear_locks(&mut self) {
        self.locks.clear();
    }

    pub fn diagnose(&self) -> DiagnosticsReport {
        solver::diagnose(
            &self.calendar,
            &self.roster,
            &self.targets,
            &self.assignment,
            &self.diagnostics_settings(),
        )
    }

    // ----- roster -----

    /// Appends `Staff N` with the configured default rest quota.
    pub fn add_employee(&mut self) -> EmployeeId {
        let id = self
            .roster
            .add_new(self.config.rest.default_required_rest_days);
        debug!(event = "employee_added", employee = id.0);
        id
    }

    pub fn insert_employee(&mut self, employee: Employee) -> Result<(), ShiftError> {
        self.roster.add(employee)
    }

    /// Removes an employee. Days they already work stay in the assignment.
    pub fn remove_employee(&mut self, id: EmployeeId) -> Option<Employee> {
        self.roster.remove(id)
    }

    pub fn rename_employee(&mut self, id: EmployeeId, name: impl Into<String>) -> Result<(), ShiftError> {
        self.roster.require_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn set_required_rest_days(&mut self, id: EmployeeId, days: u32) -> Result<(), ShiftError> {
        self.roster.require_mut(id)?.required_rest_days = days;
        Ok(())
    }

    /// Sets or clears the category of `day` for one employee.
    ///
    /// Returns the category the day had before.
    pub fn set_date_category(
        &mut self,
        id: EmployeeId,
        day: u32,
        category: Option<DateCategory>,
    ) -> Result<Option<DateCategory>, ShiftError> {
        let date = self.date(day)?;
        Ok(self.roster.require_mut(id)?.set_category(date, category))
    }

    /// Clears `day` if it has `category`, otherwise moves it there.
    ///
    /// Returns the category the day has afterwards.
    pub fn toggle_date_category(
        &mut self,
        id: EmployeeId,
        day: u32,
        category: DateCategory,
    ) -> Result<Option<DateCategory>, ShiftError> {
        let date = self.date(day)?;
        Ok(self.roster.require_mut(id)?.toggle_category(date, category))
    }

    // ----- targets -----

    pub fn set_default_target(&mut self, target: u32) {
        self.targets.set_default_target(target);
    }

    pub fn set_day_target(&mut self, day: u32, target: u32) -> Result<(), ShiftError> {
        self.calendar.check_day(day)?;
        self.targets.set_override(day, target);
        Ok(())
    }

    pub fn clear_day_target(&mut self, day: u32) -> Option<u32> {
        self.targets.clear_override(day)
    }

    // ----- navigation -----

    /// Moves to the previous month, clearing the assignment and locks.
    pub fn previous_month(&mut self) {
        self.switch_to(self.calendar.previous());
    }

    /// Moves to the next month, clearing the assignment and locks.
    pub fn next_month(&mut self) {
        self.switch_to(self.calendar.next());
    }

    pub fn set_month(&mut self, year: i32, month: u32) -> Result<(), ShiftError> {
        self.switch_to(MonthCalendar::new(year, month)?);
        Ok(())
    }

    fn switch_to(&mut self, calendar: MonthCalendar) {
        debug!(event = "month_changed", from = %self.calendar, to = %calendar);
        self.calendar = calendar;
        self.assignment = Assignment::new();
        self.locks.clear();
    }

    fn date(&self, day: u32) -> Result<NaiveDate, ShiftError> {
        self.calendar.date(day).ok_or(ShiftError::DayOutOfRange {
            day,
            days_in_month: self.calendar.days_in_month(),
        })
    }
}
