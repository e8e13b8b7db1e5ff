//! Shared test helpers for integration tests.

#![allow(dead_code)]

use stepwise_accountant::{StepAccountant, StepType};

/// Raw cost table used by the end-to-end scenarios: get=1, set=10.
pub const GET_SET_COSTS: [(&str, u64); 2] = [("get", 1), ("set", 10)];

/// Accountant priced with `GET_SET_COSTS`.
pub fn get_set_accountant(limit: u64) -> StepAccountant {
    StepAccountant::from_raw(GET_SET_COSTS, limit)
}

/// A charge issued by a simulated execution.
#[derive(Debug, Clone, Copy)]
pub struct Op {
    pub step_type: StepType,
    pub count: u64,
}

pub fn op(step_type: StepType, count: u64) -> Op {
    Op { step_type, count }
}

/// Outcome of replaying a sequence of charges the way an execution context
/// does: stop at the first exhaustion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub totals: Vec<u64>,
    pub exhausted: Option<stepwise_accountant::StepExhausted>,
    pub used: u64,
}

pub fn replay(acct: &mut StepAccountant, ops: &[Op]) -> Replay {
    let mut totals = Vec::new();
    let mut exhausted = None;
    for op in ops {
        match acct.charge(op.step_type, op.count) {
            Ok(total) => totals.push(total),
            Err(err) => {
                exhausted = Some(err);
                break;
            }
        }
    }
    Replay {
        totals,
        exhausted,
        used: acct.used(),
    }
}
