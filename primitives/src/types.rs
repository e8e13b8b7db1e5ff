//! Billable step types.
//!
//! `StepType` is the closed set of operation categories a transaction is
//! charged for. The external name of each variant is fixed by the table in
//! [`StepType::as_str`]; it is never derived from the Rust identifier.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UnknownStepType;

/// A billable operation category.
///
/// Compared by equality only. There is intentionally no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepType {
    /// Invoking a contract method.
    ContractCall,
    /// Reading a value from contract state.
    Get,
    /// Writing a new value to contract state.
    Set,
    /// Overwriting an existing value in contract state.
    Replace,
    /// Removing a value from contract state.
    Delete,
    /// Sizing of the transaction input.
    Input,
    /// Emitting an event log.
    EventLog,
    /// Calling an external API from within a contract.
    ApiCall,
}

impl StepType {
    /// Every step type.
    pub const ALL: [StepType; 8] = [
        StepType::ContractCall,
        StepType::Get,
        StepType::Set,
        StepType::Replace,
        StepType::Delete,
        StepType::Input,
        StepType::EventLog,
        StepType::ApiCall,
    ];

    /// Return the wire name of this step type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContractCall => "contractCall",
            Self::Get => "get",
            Self::Set => "set",
            Self::Replace => "replace",
            Self::Delete => "delete",
            Self::Input => "input",
            Self::EventLog => "eventLog",
            Self::ApiCall => "apiCall",
        }
    }

    /// Resolve a wire name. Matching is exact and case-sensitive.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }
}

impl FromStr for StepType {
    type Err = UnknownStepType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire_name(s).ok_or_else(|| UnknownStepType(s.to_owned()))
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StepType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StepType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
