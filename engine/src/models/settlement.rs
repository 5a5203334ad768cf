//! Settlement record model
//!
//! A settlement is a real-world payment between two members, recorded when a
//! user acts on a suggestion or independently reports a transfer. Unlike
//! suggestions, settlements are persisted by the host application and fed
//! back into balance aggregation.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

/// A recorded payment from one member to another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    /// Unique settlement identifier (UUID)
    id: String,

    /// Member who sent the money
    from_member: String,

    /// Member who received the money
    to_member: String,

    /// Transferred amount (i64 cents)
    amount: i64,
}

impl Settlement {
    /// Create a new settlement with a generated UUID
    ///
    /// # Panics
    /// Panics if amount <= 0
    pub fn new(from_member: String, to_member: String, amount: i64) -> Self {
        assert!(amount > 0, "amount must be positive");

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            from_member,
            to_member,
            amount,
        }
    }

    /// Reconstruct a settlement from a stored record, preserving its ID
    pub fn from_record(id: String, from_member: String, to_member: String, amount: i64) -> Self {
        Self {
            id,
            from_member,
            to_member,
            amount,
        }
    }

    /// Get settlement ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get sending member's ID
    pub fn from_member(&self) -> &str {
        &self.from_member
    }

    /// Get receiving member's ID
    pub fn to_member(&self) -> &str {
        &self.to_member
    }

    /// Get transferred amount (i64 cents)
    pub fn amount(&self) -> i64 {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settlement_new() {
        let settlement = Settlement::new("bob".to_string(), "alice".to_string(), 3_000);
        assert_eq!(settlement.from_member(), "bob");
        assert_eq!(settlement.to_member(), "alice");
        assert_eq!(settlement.amount(), 3_000);
        assert!(!settlement.id().is_empty());
    }

    #[test]
    #[should_panic(expected = "amount must be positive")]
    fn test_negative_amount_rejected() {
        Settlement::new("bob".to_string(), "alice".to_string(), -1);
    }
}
