//! `stepwise-primitives` — foundational types for Stepwise step metering.
//!
//! This crate provides the billable step types, the step cost table, the
//! exhaustion signal, and the network default constants shared by the
//! accountant and the execution context that drives it.

pub mod types;
pub mod error;
pub mod step;

// Re-export commonly used types at the crate root for convenience.
pub use types::StepType;
pub use error::{StepExhausted, StepResult, UnknownStepType};
pub use step::StepCosts;
