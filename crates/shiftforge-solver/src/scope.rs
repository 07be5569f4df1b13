//! Generation-level scope.

use std::time::{Duration, Instant};

use shiftforge_core::{Assignment, EmployeeId};

use crate::problem::ScheduleProblem;
use crate::settings::EngineSettings;

/// Working state shared by the phases of one generation run.
///
/// Created with every locked day already copied from the prior assignment,
/// so the fill phase sees locked work when it counts load and streaks.
#[derive(Debug)]
pub struct PlanScope<'a> {
    problem: ScheduleProblem<'a>,
    settings: EngineSettings,
    working: Assignment,
    start_time: Option<Instant>,
    step_count: u64,
}

impl<'a> PlanScope<'a> {
    pub fn new(problem: ScheduleProblem<'a>, settings: EngineSettings) -> Self {
        let mut working = Assignment::new();
        if let Some(prior) = problem.prior {
            for day in problem.locked_days() {
                if let Some(set) = prior.day(day) {
                    working.set_day(day, set.clone());
                }
            }
        }
        Self {
            problem,
            settings,
            working,
            start_time: None,
            step_count: 0,
        }
    }

    pub fn problem(&self) -> &ScheduleProblem<'a> {
        &self.problem
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn working(&self) -> &Assignment {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut Assignment {
        &mut self.working
    }

    pub fn into_assignment(self) -> Assignment {
        self.working
    }

    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.step_count = 0;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.step_count += 1;
        self.step_count
    }

    /// Days `employee` works within the month in the working assignment.
    pub fn days_worked(&self, employee: EmployeeId) -> u32 {
        self.problem
            .calendar
            .days()
            .filter(|&d| self.working.is_working(d, employee))
            .count() as u32
    }

    /// Weekend days of the month `employee` is not working (yet).
    pub fn weekend_rest(&self, employee: EmployeeId) -> u32 {
        self.problem
            .calendar
            .weekend_days()
            .filter(|&d| !self.working.is_working(d, employee))
            .count() as u32
    }

    /// Whether `employee` currently breaks the streak rule.
    pub fn has_excess_streak(&self, employee: EmployeeId) -> bool {
        self.settings
            .streak
            .has_excess(&self.working, employee, self.problem.days_in_month())
    }
}
