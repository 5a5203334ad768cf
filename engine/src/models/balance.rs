//! Balance output records
//!
//! These are the engine's output shapes. Host request handlers serialize
//! them to JSON unchanged, so the serde field names here ARE the response
//! contract of the balance-listing, balance-detail, and settlement-suggestion
//! endpoints (camelCase on the wire).
//!
//! Balances are recomputed from scratch on every read and never persisted.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

/// Computed balance of one group member
///
/// # Field semantics
///
/// - `balance = total_paid - total_owed`
/// - `net_balance = balance + settlements_paid - settlements_received`
///
/// Positive `net_balance` means the member is a creditor (the group owes
/// them); negative means a debtor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberBalance {
    /// Member identifier
    pub member_id: String,

    /// Display name, passed through untouched
    pub member_name: String,

    /// Whether this record belongs to the requesting user
    pub is_current_user: bool,

    /// Sum of expense amounts this member paid for (i64 cents)
    pub total_paid: i64,

    /// Sum of this member's calculated shares across all expenses (i64 cents)
    pub total_owed: i64,

    /// Raw balance: total_paid - total_owed (i64 cents)
    pub balance: i64,

    /// Sum of settlements this member initiated (i64 cents)
    pub settlements_paid: i64,

    /// Sum of settlements directed to this member (i64 cents)
    pub settlements_received: i64,

    /// Final position: balance + settlements_paid - settlements_received
    pub net_balance: i64,
}

/// A suggested real-world transfer that moves both parties toward zero
///
/// Generated fresh on each request; never persisted. Acting on a suggestion
/// produces a [`Settlement`](crate::Settlement) record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSuggestion {
    /// Debtor: member who should send the money
    pub from_member_id: String,

    /// Debtor display name
    pub from_member_name: String,

    /// Creditor: member who should receive the money
    pub to_member_id: String,

    /// Creditor display name
    pub to_member_name: String,

    /// Suggested transfer amount (i64 cents)
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_balance_serializes_camel_case() {
        let balance = MemberBalance {
            member_id: "alice".to_string(),
            member_name: "Alice".to_string(),
            is_current_user: true,
            total_paid: 12_000,
            total_owed: 6_000,
            balance: 6_000,
            settlements_paid: 0,
            settlements_received: 1_000,
            net_balance: 5_000,
        };

        let json = serde_json::to_value(&balance).unwrap();
        assert_eq!(json["memberId"], "alice");
        assert_eq!(json["isCurrentUser"], true);
        assert_eq!(json["totalPaid"], 12_000);
        assert_eq!(json["netBalance"], 5_000);
    }

    #[test]
    fn test_suggestion_serializes_camel_case() {
        let suggestion = SettlementSuggestion {
            from_member_id: "bob".to_string(),
            from_member_name: "Bob".to_string(),
            to_member_id: "alice".to_string(),
            to_member_name: "Alice".to_string(),
            amount: 7_000,
        };

        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["fromMemberId"], "bob");
        assert_eq!(json["toMemberId"], "alice");
        assert_eq!(json["amount"], 7_000);
    }
}
