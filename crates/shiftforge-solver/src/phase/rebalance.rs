//! Rest-quota rebalance phase.
//!
//! After the fill, every employee with fewer rest days than their quota is
//! taken off enough working days to close the gap. Mandatory and locked
//! days are never touched. Days this leaves under target are reported by
//! diagnostics, not refilled.

use std::cmp::Reverse;

use tracing::{debug, info};

use super::Phase;
use crate::scope::PlanScope;

/// Per-employee rest deficit repair.
#[derive(Debug, Clone, Copy, Default)]
pub struct RebalancePhase;

impl RebalancePhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for RebalancePhase {
    fn solve(&mut self, scope: &mut PlanScope<'_>) {
        let problem = *scope.problem();
        let started = scope.elapsed();
        let days_in_month = problem.days_in_month();

        info!(event = "phase_start", phase = "Rebalance", phase_index = 1);

        let mut removed_total = 0u64;
        let mut rebalanced = 0u64;

        for employee in problem.roster.iter() {
            let rest = days_in_month.saturating_sub(scope.days_worked(employee.id));
            if rest >= employee.required_rest_days {
                continue;
            }
            let deficit = (employee.required_rest_days - rest) as usize;

            // Requested-off days first, then the busiest days, then earliest.
            let mut adjustable: Vec<(bool, Reverse<usize>, u32)> = problem
                .calendar
                .days()
                .filter(|&d| scope.working().is_working(d, employee.id) && !problem.is_locked(d))
                .filter_map(|d| {
                    let date = problem.calendar.date(d)?;
                    (!employee.is_mandatory_work(date)).then(|| {
                        (
                            !employee.is_requested_off(date),
                            Reverse(scope.working().headcount(d)),
                            d,
                        )
                    })
                })
                .collect();
            adjustable.sort_unstable();

            let take = deficit.min(adjustable.len());
            for &(_, _, day) in adjustable.iter().take(take) {
                scope.working_mut().remove(day, employee.id);
            }
            scope.increment_step_count();
            rebalanced += 1;
            removed_total += take as u64;

            debug!(
                event = "rest_rebalanced",
                employee = employee.id.0,
                deficit,
                removed = take,
                remaining_deficit = deficit - take,
            );
        }

        info!(
            event = "phase_end",
            phase = "Rebalance",
            phase_index = 1,
            duration_ms = (scope.elapsed() - started).as_millis() as u64,
            steps = rebalanced,
            removed = removed_total,
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "Rebalance"
    }
}
