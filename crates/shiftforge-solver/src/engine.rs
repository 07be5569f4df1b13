//! Allocation engine.
//!
//! Runs the configured phases over a fresh [`PlanScope`] and returns the
//! resulting assignment. Generation never fails: an empty roster or a
//! target above the available staff yields an under-staffed assignment.
//!
//! # Examples
//!
//! ```
//! use shiftforge_core::{EmployeeId, Employee, MonthCalendar, Roster, StaffingTargets};
//! use shiftforge_solver::{generate, EngineSettings, ScheduleProblem};
//!
//! let cal = MonthCalendar::new(2025, 6).unwrap();
//! let roster = Roster::from_employees([
//!     Employee::new(EmployeeId(1), "Sato", 8),
//!     Employee::new(EmployeeId(2), "Tanaka", 10),
//! ]).unwrap();
//! let targets = StaffingTargets::new(3);
//!
//! let assignment = generate(&ScheduleProblem::new(cal, &roster, &targets), &EngineSettings::default());
//! assert!(cal.days().all(|d| assignment.headcount(d) <= 2));
//! ```

use shiftforge_core::Assignment;
use tracing::info;

use crate::phase::{FillPhase, Phase, RebalancePhase};
use crate::problem::ScheduleProblem;
use crate::scope::PlanScope;
use crate::settings::EngineSettings;

/// Generates assignments by running phases in sequence.
#[derive(Debug)]
pub struct AllocationEngine {
    settings: EngineSettings,
    phases: Vec<Box<dyn Phase>>,
}

impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

impl AllocationEngine {
    /// Engine with the standard fill and rebalance phases.
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            phases: vec![Box::new(FillPhase::new()), Box::new(RebalancePhase::new())],
        }
    }

    /// Engine with no phases; add them with [`AllocationEngine::with_phase`].
    pub fn empty(settings: EngineSettings) -> Self {
        Self {
            settings,
            phases: Vec::new(),
        }
    }

    pub fn with_phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Names of the configured phases, in run order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|p| p.phase_type_name()).collect()
    }

    /// Builds a new assignment for `problem`.
    ///
    /// Locked days are copied from the prior assignment before any phase
    /// runs and are left as they are.
    pub fn generate(&mut self, problem: &ScheduleProblem<'_>) -> Assignment {
        let mut scope = PlanScope::new(*problem, self.settings);
        scope.start();

        info!(
            event = "generate_start",
            month = %problem.calendar,
            employee_count = problem.roster.len() as u64,
            day_count = problem.days_in_month() as u64,
            locked_days = problem.locked_days().count() as u64,
        );

        for phase in &mut self.phases {
            phase.solve(&mut scope);
        }

        let slots: usize = problem
            .calendar
            .days()
            .map(|d| scope.working().headcount(d))
            .sum();
        info!(
            event = "generate_end",
            duration_ms = scope.elapsed().as_millis() as u64,
            steps = scope.step_count(),
            assigned_slots = slots as u64,
        );

        scope.into_assignment()
    }
}

/// Generates with the standard phases.
pub fn generate(problem: &ScheduleProblem<'_>, settings: &EngineSettings) -> Assignment {
    AllocationEngine::new(*settings).generate(problem)
}
