//! Per-transaction step accountant.
//!
//! The `StepAccountant` is the single enforcement point for step limits.
//! The execution context owns exactly one per transaction, charges it before
//! every billable operation, and reads `used()` out as the step receipt when
//! execution finishes or aborts.

use stepwise_primitives::{StepCosts, StepExhausted, StepResult, StepType};

use crate::receipt::StepReceipt;

/// An amount of steps the caller has already validated against some bound.
///
/// This is the only way to call [`StepAccountant::add_raw`]. Constructing one
/// is a statement that the amount did not come straight from untrusted
/// contract behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustedSteps(u64);

impl TrustedSteps {
    /// Wrap an amount the caller has already bounds-checked.
    pub fn assume_validated(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the wrapped amount.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Step accountant for a single transaction.
///
/// Invariant: `used <= limit` after every `charge`, successful or not. A
/// failing charge clamps `used` to `limit`. Only `add_raw` can break the
/// invariant.
///
/// Owned by exactly one execution; there is no internal synchronization.
#[derive(Debug, Clone)]
pub struct StepAccountant {
    costs: StepCosts,
    limit: u64,
    used: u64,
}

impl StepAccountant {
    /// Create an accountant with the given cost table and limit.
    pub fn new(costs: StepCosts, limit: u64) -> Self {
        Self {
            costs,
            limit,
            used: 0,
        }
    }

    /// Create an accountant from a raw cost mapping keyed by wire name.
    ///
    /// Unknown keys are dropped. See [`StepCosts::from_raw`].
    pub fn from_raw<I, K>(raw: I, limit: u64) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
        K: AsRef<str>,
    {
        Self::new(StepCosts::from_raw(raw), limit)
    }

    /// Returns the configured cost of `step_type`, or 0 if it is unpriced.
    pub fn cost_of(&self, step_type: StepType) -> u64 {
        self.costs.get(step_type)
    }

    /// Returns the steps left before the limit is reached.
    ///
    /// Saturates at 0 if `add_raw` pushed usage past the limit.
    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.used)
    }

    /// Returns true if charging one unit of `step_type` would fail.
    ///
    /// Once `add_raw` has pushed usage past the limit every type would
    /// exceed, including unpriced ones. Pure query: nothing is charged. The transaction aborts at the next
    /// `charge`, not here. Use [`ensure_remaining`](Self::ensure_remaining)
    /// to abort at the check instead.
    pub fn would_exceed(&self, step_type: StepType) -> bool {
        self.cost_of(step_type)
            .checked_add(self.used)
            .map_or(true, |total| total > self.limit)
    }

    /// Check that one unit of `step_type` fits, aborting if it does not.
    ///
    /// On success returns `remaining()` and charges nothing. When the cost
    /// does not fit, a single unit of `step_type` is charged, which fails,
    /// clamps `used` to `limit`, and returns the exhaustion signal.
    pub fn ensure_remaining(&mut self, step_type: StepType) -> StepResult<u64> {
        let remaining = self.remaining();
        if self.would_exceed(step_type) {
            self.charge(step_type, 1)?;
        }
        Ok(remaining)
    }

    /// Charge `count` units of `step_type`. Returns the new total used.
    ///
    /// If the charge does not fit, `used` is set to `limit` and
    /// `StepExhausted` is returned carrying the usage from before the call.
    /// Arithmetic overflow counts as not fitting.
    pub fn charge(&mut self, step_type: StepType, count: u64) -> StepResult<u64> {
        let cost = self.cost_of(step_type);
        let total = cost
            .checked_mul(count)
            .and_then(|amount| amount.checked_add(self.used));
        match total {
            Some(total) if total <= self.limit => {
                self.used = total;
                Ok(total)
            }
            _ => {
                let err = StepExhausted {
                    limit: self.limit,
                    used: self.used,
                    requested: cost.saturating_mul(count),
                    step_type,
                };
                tracing::debug!(
                    step_type = %step_type,
                    limit = err.limit,
                    used = err.used,
                    requested = err.requested,
                    "step limit exhausted"
                );
                self.used = self.limit;
                Err(err)
            }
        }
    }

    /// Add steps with no limit check. Returns the new total used.
    ///
    /// This bypasses enforcement entirely and can leave `used > limit`.
    /// It exists for accounting that was authorized elsewhere and must never
    /// be reachable from contract-driven paths without an external bound.
    /// The total saturates at `u64::MAX`.
    pub fn add_raw(&mut self, amount: TrustedSteps) -> u64 {
        self.used = self.used.saturating_add(amount.get());
        if self.used > self.limit {
            tracing::debug!(
                limit = self.limit,
                used = self.used,
                added = amount.get(),
                "raw step addition exceeded limit"
            );
        }
        self.used
    }

    /// Returns the total steps used so far.
    pub fn used(&self) -> u64 {
        self.used
    }

    /// Returns the step limit.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns the cost table in effect.
    pub fn costs(&self) -> &StepCosts {
        &self.costs
    }

    /// Returns true if the limit has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }

    /// Finish the transaction and read out its step receipt.
    pub fn receipt(self, step_price: u64) -> StepReceipt {
        StepReceipt::new(self.limit, self.used, step_price)
    }
}
