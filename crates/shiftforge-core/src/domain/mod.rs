//! Domain records for shift planning.
//!
//! - [`Employee`] with its per-date constraint categories
//! - [`Roster`] - the ordered set of employees being planned
//! - [`StaffingTargets`] - per-day headcount targets

mod employee;
mod roster;
mod targets;


pub use employee::{DateCategory, Employee, EmployeeId, DEFAULT_REQUIRED_REST_DAYS};
pub use roster::Roster;
pub use targets::{StaffingTargets, DEFAULT_DAILY_TARGET};
