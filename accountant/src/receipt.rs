//! Step receipt read out when a transaction finishes.

use serde::{Deserialize, Serialize};

/// Final step consumption of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReceipt {
    /// Step limit the transaction ran under.
    pub limit: u64,
    /// Steps consumed. Equals `limit` for a transaction aborted by exhaustion.
    pub used: u64,
    /// Price of one step.
    pub step_price: u64,
    /// `used * step_price`, computed without overflow. Serialized as a
    /// decimal string since it can exceed the range of a JSON number.
    #[serde(with = "fee_string")]
    pub fee: u128,
}

impl StepReceipt {
    /// Build a receipt, computing the fee.
    pub fn new(limit: u64, used: u64, step_price: u64) -> Self {
        Self {
            limit,
            used,
            step_price,
            fee: u128::from(used) * u128::from(step_price),
        }
    }
}

mod fee_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(fee: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(fee)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee() {
        let receipt = StepReceipt::new(1000, 250, 4);
        assert_eq!(receipt.fee, 1000);
    }

    #[test]
    fn test_fee_does_not_overflow() {
        let receipt = StepReceipt::new(u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(receipt.fee, u128::from(u64::MAX) * u128::from(u64::MAX));
    }

    #[test]
    fn test_json_field_names() {
        let receipt = StepReceipt::new(100, 100, 2);
        let json = serde_json::to_value(receipt).unwrap();
        assert_eq!(json["limit"], 100);
        assert_eq!(json["used"], 100);
        assert_eq!(json["stepPrice"], 2);
        assert_eq!(json["fee"], "200");
    }

    #[test]
    fn test_json_fee_above_u64() {
        // Default price with usage inside the default invoke limit.
        let receipt = StepReceipt::new(2_500_000_000, 2_000_000_000, 12_500_000_000);
        assert!(receipt.fee > u128::from(u64::MAX));

        let json = serde_json::to_value(receipt).unwrap();
        assert_eq!(json["fee"], "25000000000000000000");

        let text = serde_json::to_string(&receipt).unwrap();
        let back: StepReceipt = serde_json::from_str(&text).unwrap();
        assert_eq!(back, receipt);
    }

    #[test]
    fn test_json_fee_rejects_garbage() {
        let text = r#"{"limit":1,"used":1,"stepPrice":1,"fee":"-1"}"#;
        assert!(serde_json::from_str::<StepReceipt>(text).is_err());
    }
}
