use std::sync::{Arc, Mutex};

use super::*;
use shiftforge_core::{EmployeeId, StaffingTargets};
use shiftforge_solver::{diagnose, DiagnosticsSettings};
use shiftforge_test::{assignment_of, block, default_roster, june_2025};

#[test]
fn test_phase_end_mentions_released_shifts() {
    let v = EventVisitor {
        event: Some("phase_end".into()),
        phase: Some("Rebalance".into()),
        steps: Some(2),
        duration_ms: Some(3),
        removed: Some(10),
        ..EventVisitor::default()
    };
    let line = format_event(&v, Level::INFO);
    assert!(line.contains("Rebalance"));
    assert!(line.contains("3ms"));
    assert!(line.contains("shifts released"));
}

#[test]
fn test_candidate_rejected_only_at_trace() {
    let v = EventVisitor {
        event: Some("candidate_rejected".into()),
        day: Some(5),
        employee: Some(1),
        ..EventVisitor::default()
    };
    assert!(format_event(&v, Level::DEBUG).is_empty());
    assert!(!format_event(&v, Level::TRACE).is_empty());
}

#[test]
fn test_unknown_events_are_silent() {
    let v = EventVisitor {
        event: Some("something_else".into()),
        ..EventVisitor::default()
    };
    assert!(format_event(&v, Level::INFO).is_empty());
}

/// Records the `steps` field of every event it sees.
struct StepsCapture(Arc<Mutex<Vec<Option<u64>>>>);

impl<S: Subscriber> Layer<S> for StepsCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        self.0.lock().unwrap().push(visitor.steps);
    }
}

#[test]
fn test_negative_counts_are_dropped() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(StepsCapture(Arc::clone(&seen)));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(event = "phase_end", steps = -3i64);
        tracing::info!(event = "phase_end", steps = 4i64);
    });

    assert_eq!(*seen.lock().unwrap(), vec![None, Some(4)]);
}

#[test]
fn test_duration_format() {
    assert_eq!(format_duration_ms(999), "999ms");
    assert_eq!(format_duration_ms(1500), "1.50s");
}

#[test]
fn test_render_grid_lists_every_employee() {
    let cal = june_2025();
    let roster = default_roster();
    let a = assignment_of(&[(1, &[1]), (2, &[1, 2])]);
    let locks: LockSet = [2].into_iter().collect();

    let grid = render_grid(&cal, &roster, &a, &locks);

    assert_eq!(grid.lines().count(), 4);
    assert!(grid.contains("Sato"));
    assert!(grid.contains("Tanaka"));
    assert!(grid.contains("2025-06"));
    assert!(grid.contains('*'));
}

#[test]
fn test_render_report_with_findings() {
    let cal = june_2025();
    let roster = default_roster();
    let mut a = Assignment::new();
    block(&mut a, 1, 1, 6);

    let report = diagnose(&cal, &roster, &StaffingTargets::new(1), &a, &DiagnosticsSettings::default());
    let text = render_report(&report);

    assert!(text.contains("Sato"));
    assert!(text.contains("consecutive work"));
    assert!(text.contains("[1, 2, 3, 4, 5, 6]"));
    assert!(text.contains("under-staffed"));
    assert!(report.employee(EmployeeId(1)).is_some());
}

#[test]
fn test_render_clean_report() {
    let cal = june_2025();
    let report = diagnose(
        &cal,
        &Roster::new(),
        &StaffingTargets::new(0),
        &Assignment::new(),
        &DiagnosticsSettings::default(),
    );
    assert!(render_report(&report).contains("No findings"));
}
