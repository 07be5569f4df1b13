//! Tests for the generation phases and the engine that runs them.

use shiftforge_config::WeekendPolicy;
use shiftforge_core::{Assignment, EmployeeId, LockSet, Roster, StaffingTargets, StreakPolicy};
use shiftforge_test::{assignment_of, block, default_roster, june_2025, uniform_roster, EmployeeBuilder};

use super::*;
use crate::engine::{generate, AllocationEngine};
use crate::problem::ScheduleProblem;
use crate::scope::PlanScope;
use crate::settings::EngineSettings;

fn run(roster: &Roster, targets: &StaffingTargets) -> Assignment {
    generate(
        &ScheduleProblem::new(june_2025(), roster, targets),
        &EngineSettings::default(),
    )
}

#[test]
fn test_two_staff_scenario() {
    let cal = june_2025();
    let roster = default_roster();
    let a = run(&roster, &StaffingTargets::new(3));

    for day in cal.days() {
        assert!(a.headcount(day) <= 2, "day {day}");
    }
    for employee in roster.iter() {
        let worked = cal.days().filter(|&d| a.is_working(d, employee.id)).count() as u32;
        assert_eq!(30 - worked, employee.required_rest_days, "{}", employee.name);
    }
}

#[test]
fn test_never_produces_excess_streaks() {
    let cal = june_2025();
    let roster = uniform_roster(4, 0);
    let a = run(&roster, &StaffingTargets::new(4));
    let policy = StreakPolicy::default();

    for id in roster.ids() {
        assert!(policy.window_count(&a, id, cal.days_in_month()) <= 1, "{id}");
    }
}

#[test]
fn test_absolute_off_is_never_assigned() {
    let cal = june_2025();
    let roster = Roster::from_employees([
        EmployeeBuilder::new(1, 0).absolute_off(&cal, &[3, 10, 11]).build(),
        EmployeeBuilder::new(2, 0).build(),
    ])
    .unwrap();
    let a = run(&roster, &StaffingTargets::new(2));

    for day in [3, 10, 11] {
        assert!(!a.is_working(day, EmployeeId(1)), "day {day}");
    }
}

#[test]
fn test_mandatory_is_placed_above_target() {
    let cal = june_2025();
    let roster = Roster::from_employees(
        (1..=3).map(|id| EmployeeBuilder::new(id, 20).mandatory(&cal, &[5]).build()),
    )
    .unwrap();
    let a = run(&roster, &StaffingTargets::new(1));

    assert_eq!(a.headcount(5), 3);
}

#[test]
fn test_mandatory_wins_over_streak_rule() {
    let cal = june_2025();
    let roster = Roster::from_employees([EmployeeBuilder::new(1, 0)
        .mandatory(&cal, &[1, 2, 3, 4, 5, 6])
        .build()])
    .unwrap();
    let a = run(&roster, &StaffingTargets::new(0));

    assert_eq!(a.working_days(EmployeeId(1)), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_requested_off_yields_to_other_candidates() {
    let cal = june_2025();
    let roster = Roster::from_employees([
        EmployeeBuilder::new(1, 0).requested_off(&cal, &[1]).build(),
        EmployeeBuilder::new(2, 0).build(),
    ])
    .unwrap();
    let a = run(&roster, &StaffingTargets::new(1));

    assert!(a.is_working(1, EmployeeId(2)));
    assert!(!a.is_working(1, EmployeeId(1)));
}

#[test]
fn test_requested_off_still_worked_when_needed() {
    let cal = june_2025();
    let roster = Roster::from_employees([EmployeeBuilder::new(1, 0).requested_off(&cal, &[2]).build()]).unwrap();
    let a = run(&roster, &StaffingTargets::new(1));

    assert!(a.is_working(2, EmployeeId(1)));
}

#[test]
fn test_rebalance_gives_back_requested_days_first() {
    let cal = june_2025();
    // Fill alone works 23 days (1-4, then runs of three), leaving three short of 10.
    let roster = Roster::from_employees([EmployeeBuilder::new(1, 10).requested_off(&cal, &[2]).build()]).unwrap();
    let a = run(&roster, &StaffingTargets::new(1));

    assert!(!a.is_working(2, EmployeeId(1)));
    assert_eq!(
        a.working_days(EmployeeId(1)),
        vec![4, 6, 7, 8, 10, 11, 12, 14, 15, 16, 18, 19, 20, 22, 23, 24, 26, 27, 28, 30]
    );
}

#[test]
fn test_rebalance_removes_from_busiest_days() {
    let roster = Roster::from_employees([EmployeeBuilder::new(1, 28).build()]).unwrap();
    let targets = StaffingTargets::new(1);
    let mut scope = PlanScope::new(
        ScheduleProblem::new(june_2025(), &roster, &targets),
        EngineSettings::default(),
    );
    *scope.working_mut() = assignment_of(&[(1, &[1]), (2, &[1, 2]), (3, &[1])]);

    RebalancePhase::new().solve(&mut scope);

    assert_eq!(scope.working().working_days(EmployeeId(1)), vec![1, 3]);
    assert!(scope.working().is_working(2, EmployeeId(2)));
}

#[test]
fn test_all_locked_regeneration_is_identity() {
    let cal = june_2025();
    let roster = default_roster();
    let targets = StaffingTargets::new(3);
    let first = run(&roster, &targets);
    let locks = LockSet::all(&cal);

    let again = generate(
        &ScheduleProblem::new(cal, &roster, &targets).with_prior(&first, &locks),
        &EngineSettings::default(),
    );

    assert_eq!(again, first);
}

#[test]
fn test_locked_day_is_kept_verbatim() {
    let cal = june_2025();
    let roster = default_roster();
    let targets = StaffingTargets::new(2);
    // Employee 99 is not on the roster any more.
    let prior = assignment_of(&[(4, &[99]), (5, &[1, 2])]);
    let locks: LockSet = [4].into_iter().collect();

    let a = generate(
        &ScheduleProblem::new(cal, &roster, &targets).with_prior(&prior, &locks),
        &EngineSettings::default(),
    );

    assert_eq!(a.workers(4).collect::<Vec<_>>(), vec![EmployeeId(99)]);
    assert_eq!(a.headcount(4), 1);
}

#[test]
fn test_prefer_rest_reorders_weekend_candidates() {
    let cal = june_2025();
    let roster = uniform_roster(2, 0);
    let targets = StaffingTargets::new(1);
    let problem = ScheduleProblem::new(cal, &roster, &targets);

    // Days 1-6 alternate, leaving a tie on Saturday the 7th.
    let advisory = EngineSettings {
        min_weekend_rest: 9,
        ..EngineSettings::default()
    };
    let prefer = advisory.with_weekend_policy(WeekendPolicy::PreferRest);

    let a = generate(&problem, &advisory);
    let b = generate(&problem, &prefer);

    assert!(a.is_working(7, EmployeeId(1)));
    assert!(b.is_working(7, EmployeeId(2)));
}

#[test]
fn test_empty_roster_yields_empty_assignment() {
    let a = run(&Roster::new(), &StaffingTargets::new(3));
    assert!(a.is_empty());
}

#[test]
fn test_zero_target_assigns_nobody() {
    let a = run(&default_roster(), &StaffingTargets::new(0));
    assert!(a.is_empty());
}

#[test]
fn test_engine_phases() {
    let engine = AllocationEngine::default();
    assert_eq!(engine.phase_names(), vec!["Fill", "Rebalance"]);

    let mut fill_only = AllocationEngine::empty(EngineSettings::default()).with_phase(FillPhase::new());
    let roster = default_roster();
    let targets = StaffingTargets::new(3);
    let a = fill_only.generate(&ScheduleProblem::new(june_2025(), &roster, &targets));

    // Without rebalance the streak rule alone shapes the month.
    let expected = vec![1, 2, 3, 4, 6, 7, 8, 10, 11, 12, 14, 15, 16, 18, 19, 20, 22, 23, 24, 26, 27, 28, 30];
    assert_eq!(a.working_days(EmployeeId(1)), expected);
    assert_eq!(a.working_days(EmployeeId(2)), expected);
    assert_eq!(a.days_worked(EmployeeId(1)), 23);
}

#[test]
fn test_fill_prefers_smaller_rest_quota_on_ties() {
    let roster = Roster::from_employees([EmployeeBuilder::new(1, 12).build(), EmployeeBuilder::new(2, 4).build()]).unwrap();
    let targets = StaffingTargets::new(1);
    let mut fill_only = AllocationEngine::empty(EngineSettings::default()).with_phase(FillPhase::new());
    let a = fill_only.generate(&ScheduleProblem::new(june_2025(), &roster, &targets));

    assert_eq!(a.workers(1).collect::<Vec<_>>(), vec![EmployeeId(2)]);
}

#[test]
fn test_fill_counts_locked_days_later_in_month() {
    let roster = uniform_roster(2, 0);
    let targets = StaffingTargets::new(1);
    // Employee 1 is locked onto days 20-29, so employee 2 is the lighter candidate on day 1.
    let mut prior = Assignment::new();
    block(&mut prior, 1, 20, 29);
    let locks: LockSet = (20..=29).collect();
    let mut fill_only = AllocationEngine::empty(EngineSettings::default()).with_phase(FillPhase::new());
    let a = fill_only.generate(&ScheduleProblem::new(june_2025(), &roster, &targets).with_prior(&prior, &locks));

    assert_eq!(a.workers(1).collect::<Vec<_>>(), vec![EmployeeId(2)]);
    assert!((20..=29).all(|day| a.is_working(day, EmployeeId(1))));
}

#[test]
fn test_generation_is_deterministic() {
    let roster = uniform_roster(5, 9);
    let targets = StaffingTargets::new(3).with_override(15, 5);
    assert_eq!(run(&roster, &targets), run(&roster, &targets));
}
