//! Generation phases.
//!
//! Phases run in sequence over one [`PlanScope`]:
//! - [`FillPhase`]: greedy day-by-day placement up to each day's target
//! - [`RebalancePhase`]: gives rest days back to employees short of quota

mod fill;
mod rebalance;

#[cfg(test)]
mod tests;

use std::fmt::Debug;

use crate::scope::PlanScope;

pub use fill::FillPhase;
pub use rebalance::RebalancePhase;

/// A phase of the generation process.
///
/// Each phase edits the working assignment held by the scope. Phases never
/// fail; anything they cannot satisfy shows up later in diagnostics.
pub trait Phase: Send + Debug {
    /// Executes this phase.
    fn solve(&mut self, scope: &mut PlanScope<'_>);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
