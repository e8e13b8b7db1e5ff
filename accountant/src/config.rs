//! Step configuration.
//!
//! `StepConfig` is the document the surrounding runtime loads from
//! configuration or governance state: raw step costs, per-context step
//! limits, and the step price. Keys stay as raw strings here so that a
//! document written against a different schema still loads; they are
//! resolved when the cost table is built.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use stepwise_primitives::step::{STEP_LIMIT_INVOKE, STEP_LIMIT_QUERY, STEP_PRICE};
use stepwise_primitives::StepCosts;

use crate::accountant::StepAccountant;
use crate::error::ConfigError;

/// Execution context a step limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepLimitKind {
    /// State-changing transaction.
    Invoke,
    /// Read-only query.
    Query,
}

impl StepLimitKind {
    pub const ALL: [StepLimitKind; 2] = [StepLimitKind::Invoke, StepLimitKind::Query];

    /// Return the wire name of this limit kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invoke => "invoke",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for StepLimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step costs, limits, and price for a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepConfig {
    /// Raw cost per step type, keyed by wire name.
    #[serde(default)]
    pub step_costs: BTreeMap<String, u64>,
    /// Step limit per execution context, keyed by wire name.
    #[serde(default)]
    pub step_limits: BTreeMap<String, u64>,
    /// Price of one step.
    #[serde(default)]
    pub step_price: u64,
}

impl Default for StepConfig {
    fn default() -> Self {
        let step_costs = StepCosts::network_default()
            .iter()
            .map(|(kind, cost)| (kind.as_str().to_owned(), cost))
            .collect();
        let step_limits = BTreeMap::from([
            (StepLimitKind::Invoke.as_str().to_owned(), STEP_LIMIT_INVOKE),
            (StepLimitKind::Query.as_str().to_owned(), STEP_LIMIT_QUERY),
        ]);
        Self {
            step_costs,
            step_limits,
            step_price: STEP_PRICE,
        }
    }
}

impl StepConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize to a JSON document. Keys are emitted in sorted order.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build the cost table. Unknown keys are dropped.
    pub fn costs(&self) -> StepCosts {
        StepCosts::from_raw(self.step_costs.iter().map(|(k, v)| (k, *v)))
    }

    /// Returns the configured limit for `kind`, or 0 if it is not set.
    pub fn limit_for(&self, kind: StepLimitKind) -> u64 {
        self.step_limits.get(kind.as_str()).copied().unwrap_or(0)
    }

    /// Create the accountant for one transaction.
    ///
    /// The limit is the transaction's own limit capped by the context limit,
    /// or the context limit alone when the transaction names none.
    pub fn accountant(&self, kind: StepLimitKind, tx_limit: Option<u64>) -> StepAccountant {
        let context_limit = self.limit_for(kind);
        let limit = tx_limit.map_or(context_limit, |l| l.min(context_limit));
        tracing::trace!(context = %kind, limit, "creating step accountant");
        StepAccountant::new(self.costs(), limit)
    }
}
