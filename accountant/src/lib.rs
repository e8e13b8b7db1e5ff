//! `stepwise-accountant` — per-transaction step accounting.
//!
//! This crate holds the piece of the runtime that enforces step limits. It
//! provides:
//!
//! - `StepAccountant` — authoritative per-transaction step counter
//! - `TrustedSteps` — capability marker for unchecked step additions
//! - `StepConfig` — step costs, limits, and price loaded from JSON
//! - `StepReceipt` — final step consumption and fee of a transaction
//! - `ConfigError` — configuration load failures
//!
//! Step types, cost tables, and the `StepExhausted` signal live in
//! `stepwise-primitives` and are re-exported here.

pub mod error;
pub mod accountant;
pub mod config;
pub mod receipt;

// Re-export commonly used types at the crate root.
pub use error::ConfigError;
pub use accountant::{StepAccountant, TrustedSteps};
pub use config::{StepConfig, StepLimitKind};
pub use receipt::StepReceipt;
pub use stepwise_primitives::{StepCosts, StepExhausted, StepResult, StepType};
