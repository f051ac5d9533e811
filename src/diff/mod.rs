//! Diff engine - Equality oracle and plan generation

mod compare;
mod engine;
mod plan;

pub use compare::files_equal;
pub use engine::{DiffPlan, PlanStats};
pub use plan::generate_sync_plan;
