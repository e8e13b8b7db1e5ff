//! Step cost table and network default constants.
//!
//! Steps are charged for contract calls, state reads and writes, input
//! sizing, event emission, and external API calls. The per-type costs come
//! from configuration or governance state and are fixed for the lifetime of
//! a transaction.

use std::collections::HashMap;

use crate::types::StepType;

// ── Network default step costs ──

/// Default cost of `contractCall`.
pub const STEP_CONTRACT_CALL: u64 = 25_000;

/// Default cost of `get`.
pub const STEP_GET: u64 = 0;

/// Default cost of `set`.
pub const STEP_SET: u64 = 320;

/// Default cost of `replace`.
pub const STEP_REPLACE: u64 = 80;

/// Default cost of `delete`. Deletion is priced as a refund on some
/// networks; costs here are non-negative so the default is free.
pub const STEP_DELETE: u64 = 0;

/// Default cost of `input`.
pub const STEP_INPUT: u64 = 200;

/// Default cost of `eventLog`.
pub const STEP_EVENT_LOG: u64 = 100;

/// Default cost of `apiCall`.
pub const STEP_API_CALL: u64 = 10_000;

// ── Network default limits ──

/// Default step limit for invoke (state-changing) transactions.
pub const STEP_LIMIT_INVOKE: u64 = 2_500_000_000;

/// Default step limit for read-only queries.
pub const STEP_LIMIT_QUERY: u64 = 50_000_000;

/// Default price of one step, in the smallest native denomination.
pub const STEP_PRICE: u64 = 12_500_000_000;

/// Immutable mapping from step type to its unit cost.
///
/// Step types without an entry cost nothing. Callers that need every type
/// priced must validate the raw table before handing it over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepCosts {
    costs: HashMap<StepType, u64>,
}

impl StepCosts {
    /// Build a cost table from a raw mapping keyed by wire name.
    ///
    /// Keys that do not name a known step type are dropped, never reported
    /// as errors, so that tables written for older or newer schemas still
    /// load. If a key appears more than once the last value wins.
    pub fn from_raw<I, K>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
        K: AsRef<str>,
    {
        let mut costs = HashMap::new();
        for (key, cost) in raw {
            let key = key.as_ref();
            match key.parse::<StepType>() {
                Ok(step_type) => {
                    costs.insert(step_type, cost);
                }
                Err(_) => {
                    tracing::debug!(key, cost, "dropping unknown step type from cost table");
                }
            }
        }
        Self { costs }
    }

    /// The cost table a freshly bootstrapped network installs.
    pub fn network_default() -> Self {
        Self {
            costs: HashMap::from([
                (StepType::ContractCall, STEP_CONTRACT_CALL),
                (StepType::Get, STEP_GET),
                (StepType::Set, STEP_SET),
                (StepType::Replace, STEP_REPLACE),
                (StepType::Delete, STEP_DELETE),
                (StepType::Input, STEP_INPUT),
                (StepType::EventLog, STEP_EVENT_LOG),
                (StepType::ApiCall, STEP_API_CALL),
            ]),
        }
    }

    /// Returns the cost of `step_type`, or 0 if it is not priced.
    pub fn get(&self, step_type: StepType) -> u64 {
        self.costs.get(&step_type).copied().unwrap_or(0)
    }

    /// Returns true if `step_type` has an explicit entry.
    pub fn contains(&self, step_type: StepType) -> bool {
        self.costs.contains_key(&step_type)
    }

    /// Number of priced step types.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns true if no step type is priced.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Iterate over priced step types in `StepType::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (StepType, u64)> + '_ {
        StepType::ALL
            .into_iter()
            .filter_map(move |kind| self.costs.get(&kind).map(|cost| (kind, *cost)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_drops_unknown_keys() {
        let costs = StepCosts::from_raw([("unknown_op", 5), ("get", 2)]);
        assert_eq!(costs.len(), 1);
        assert_eq!(costs.get(StepType::Get), 2);
        assert!(!costs.contains(StepType::Set));
    }

    #[test]
    fn test_missing_entry_costs_zero() {
        let costs = StepCosts::from_raw([("set", 10)]);
        for kind in StepType::ALL {
            let expected = if kind == StepType::Set { 10 } else { 0 };
            assert_eq!(costs.get(kind), expected, "{kind}");
        }
    }

    #[test]
    fn test_from_raw_accepts_owned_keys() {
        let raw = vec![("eventLog".to_string(), 100u64), ("EVENT_LOG".to_string(), 7)];
        let costs = StepCosts::from_raw(raw);
        assert_eq!(costs.len(), 1);
        assert_eq!(costs.get(StepType::EventLog), 100);
    }

    #[test]
    fn test_from_raw_last_duplicate_wins() {
        let costs = StepCosts::from_raw([("input", 1), ("input", 200)]);
        assert_eq!(costs.get(StepType::Input), 200);
    }

    #[test]
    fn test_empty_table() {
        let costs = StepCosts::from_raw(Vec::<(&str, u64)>::new());
        assert!(costs.is_empty());
        assert_eq!(costs.get(StepType::ContractCall), 0);
        assert_eq!(costs, StepCosts::default());
    }

    #[test]
    fn test_network_default_prices_every_type() {
        let costs = StepCosts::network_default();
        assert_eq!(costs.len(), StepType::ALL.len());
        assert_eq!(costs.get(StepType::ContractCall), 25_000);
        assert_eq!(costs.get(StepType::Set), 320);
        assert_eq!(costs.get(StepType::Replace), 80);
        assert_eq!(costs.get(StepType::Input), 200);
        assert_eq!(costs.get(StepType::EventLog), 100);
        assert_eq!(costs.get(StepType::ApiCall), 10_000);
        for kind in StepType::ALL {
            assert!(costs.contains(kind), "{kind}");
        }
    }

    #[test]
    fn test_iter_is_deterministic() {
        let costs = StepCosts::from_raw([("apiCall", 3), ("get", 1), ("set", 2)]);
        let entries: Vec<_> = costs.iter().collect();
        assert_eq!(
            entries,
            vec![(StepType::Get, 1), (StepType::Set, 2), (StepType::ApiCall, 3)]
        );
    }
}
