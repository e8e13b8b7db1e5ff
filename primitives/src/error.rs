//! Error types for Stepwise metering.
//!
//! `StepExhausted` is the only failure a charge can produce. It is raised
//! exactly once per exhausting charge and tells the execution context why
//! and where the transaction stopped.

use crate::types::StepType;

/// Exhaustion signal raised when a charge would push usage past the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "out of step: {step_type} (limit={limit}, used={used}, requested={requested})"
)]
pub struct StepExhausted {
    /// Step limit in effect for the transaction.
    pub limit: u64,
    /// Steps used before the failing charge.
    pub used: u64,
    /// Steps the failing charge asked for. Saturated at `u64::MAX` if the
    /// multiplication overflowed.
    pub requested: u64,
    /// Operation responsible for the exhaustion.
    pub step_type: StepType,
}

/// A step type name that does not resolve to any `StepType`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown step type: {0:?}")]
pub struct UnknownStepType(pub String);

/// Convenience result type for charging operations.
pub type StepResult<T> = core::result::Result<T, StepExhausted>;
