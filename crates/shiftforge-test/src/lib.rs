//! Shared test fixtures for ShiftForge crates.
//!
//! This crate provides data builders and small pure helpers for testing.
//! It depends only on `shiftforge-core` so every other crate can use it.
//!
//! - [`roster`] - employee and roster builders
//! - [`assignment`] - assignment builders and per-employee queries
//! - [`calendar`] - fixed months with known shapes
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! shiftforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use shiftforge_test::calendar::june_2025;
//! use shiftforge_test::roster::default_roster;
//! ```

pub mod assignment;
pub mod calendar;
pub mod roster;

// Re-export commonly used fixtures at crate root for convenience
pub use assignment::{assignment_of, block};
pub use calendar::{february_2024, june_2025};
pub use roster::{default_roster, uniform_roster, EmployeeBuilder};
