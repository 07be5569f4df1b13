//! Greedy fill phase.
//!
//! For each unlocked day: place mandatory workers, then walk the remaining
//! eligible employees in priority order, keeping each one whose placement
//! does not break the streak rule, until the day's target is reached.

use shiftforge_config::WeekendPolicy;
use shiftforge_core::{Employee, EmployeeId};
use tracing::{debug, info, trace};

use super::Phase;
use crate::scope::PlanScope;

/// Day-by-day greedy placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillPhase;

impl FillPhase {
    pub fn new() -> Self {
        Self
    }
}

/// Sort key of a candidate, compared ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct CandidateKey {
    /// Fewer days already worked goes first.
    days_worked: u32,
    /// Employees who asked for this day off go after those who did not.
    requested_off: bool,
    /// Only set under [`WeekendPolicy::PreferRest`] on weekend days.
    needs_weekend_rest: bool,
    /// Larger rest quota goes later.
    required_rest_days: u32,
    /// Roster position keeps the order deterministic.
    roster_index: usize,
}

impl FillPhase {
    fn candidate_key(
        scope: &PlanScope<'_>,
        employee: &Employee,
        roster_index: usize,
        requested_off: bool,
        weekend_day: bool,
    ) -> CandidateKey {
        let settings = scope.settings();
        let needs_weekend_rest = weekend_day
            && settings.weekend_policy == WeekendPolicy::PreferRest
            && scope.weekend_rest(employee.id) < settings.min_weekend_rest;
        CandidateKey {
            // Locked days are seeded before the fill, so this and the streak
            // check also count locked days later in the month.
            days_worked: scope.days_worked(employee.id),
            requested_off,
            needs_weekend_rest,
            required_rest_days: employee.required_rest_days,
            roster_index,
        }
    }

    fn fill_day(scope: &mut PlanScope<'_>, day: u32) {
        let problem = *scope.problem();
        let Some(date) = problem.calendar.date(day) else {
            return;
        };
        let target = problem.targets.target(day) as usize;

        let mut mandatory = 0usize;
        for employee in problem.roster.iter().filter(|e| e.is_mandatory_work(date)) {
            scope.working_mut().insert(day, employee.id);
            mandatory += 1;
        }

        let remaining = target.saturating_sub(mandatory);
        if remaining == 0 {
            debug!(event = "day_filled", day, target, mandatory, assigned = mandatory);
            return;
        }

        let weekend_day = problem.calendar.is_weekend(day);
        let mut candidates: Vec<(CandidateKey, EmployeeId)> = {
            let view: &PlanScope<'_> = scope;
            problem
                .roster
                .iter()
                .enumerate()
                .filter(|(_, e)| !view.working().is_working(day, e.id) && !e.is_absolute_off(date))
                .map(|(idx, e)| {
                    let key = Self::candidate_key(view, e, idx, e.is_requested_off(date), weekend_day);
                    (key, e.id)
                })
                .collect()
        };
        candidates.sort_unstable();

        let mut placed = 0usize;
        for (_, id) in candidates {
            if placed == remaining {
                break;
            }
            scope.working_mut().insert(day, id);
            if scope.has_excess_streak(id) {
                scope.working_mut().remove(day, id);
                trace!(event = "candidate_rejected", day, employee = id.0, reason = "streak");
            } else {
                placed += 1;
            }
        }

        debug!(
            event = "day_filled",
            day,
            target,
            mandatory,
            assigned = mandatory + placed,
        );
    }
}

impl Phase for FillPhase {
    fn solve(&mut self, scope: &mut PlanScope<'_>) {
        let problem = *scope.problem();
        let started = scope.elapsed();

        info!(event = "phase_start", phase = "Fill", phase_index = 0);

        let mut filled_days = 0u64;
        for day in problem.calendar.days() {
            if problem.is_locked(day) {
                continue;
            }
            Self::fill_day(scope, day);
            scope.increment_step_count();
            filled_days += 1;
        }

        let short_days = problem
            .calendar
            .days()
            .filter(|&d| scope.working().headcount(d) < problem.targets.target(d) as usize)
            .count() as u64;

        info!(
            event = "phase_end",
            phase = "Fill",
            phase_index = 0,
            duration_ms = (scope.elapsed() - started).as_millis() as u64,
            steps = filled_days,
            short_days = short_days,
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "Fill"
    }
}
