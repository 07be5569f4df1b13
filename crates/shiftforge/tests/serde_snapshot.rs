//! Snapshot round trips through JSON.

#![cfg(feature = "serde")]

use shiftforge::prelude::*;
use shiftforge_test::{default_roster, june_2025};

#[test]
fn month_plan_survives_json() {
    let mut plan = MonthPlan::new(june_2025(), PlannerConfig::default()).with_roster(default_roster());
    plan.set_date_category(EmployeeId(1), 4, Some(DateCategory::RequestedOff))
        .unwrap();
    plan.generate();
    plan.set_lock(2, true);

    let json = serde_json::to_string(&plan).unwrap();
    let restored: MonthPlan = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, plan);
}

#[test]
fn calendar_serializes_as_year_and_month() {
    let value = serde_json::to_value(june_2025()).unwrap();
    assert_eq!(value, serde_json::json!({ "year": 2025, "month": 6 }));
}

#[test]
fn report_serializes_findings() {
    let mut plan = MonthPlan::new(june_2025(), PlannerConfig::default()).with_roster(default_roster());
    plan.generate();

    let value = serde_json::to_value(plan.diagnose()).unwrap();
    let findings = value["findings"].as_array().unwrap();
    assert!(findings.iter().any(|f| f["kind"] == "under_staffed"));
    assert_eq!(value["employees"].as_array().unwrap().len(), 2);
}
