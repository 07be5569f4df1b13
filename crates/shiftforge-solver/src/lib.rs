//! ShiftForge Solver Engine
//!
//! This crate provides the planning operations over the core types:
//! - The allocation engine: a greedy fill phase followed by a rest-quota
//!   rebalance phase, run over a [`PlanScope`]
//! - The shift editor: single-cell toggles guarded by the streak rule
//! - Diagnostics: advisory findings over a finished assignment
//!
//! Everything here is a synchronous, deterministic function of its inputs;
//! callers own the roster, assignment and lock set between calls.

pub mod diagnostics;
pub mod engine;
pub mod mutator;
pub mod phase;
pub mod problem;
pub mod scope;
pub mod settings;

pub use diagnostics::{
    diagnose, DaySummary, DiagnosticsReport, DiagnosticsSettings, EmployeeSummary, Finding,
    FindingKind, Subject,
};
pub use engine::{generate, AllocationEngine};
pub use mutator::{set_lock, toggle, toggle_lock, ToggleRejected, Toggled};
pub use phase::{FillPhase, Phase, RebalancePhase};
pub use problem::ScheduleProblem;
pub use scope::PlanScope;
pub use settings::EngineSettings;
