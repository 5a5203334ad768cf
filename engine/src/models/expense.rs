//! Expense model
//!
//! Represents one shared cost paid by a single member on behalf of a set of
//! participants. Each participant either carries a custom fixed amount or is
//! unset, meaning "allocate proportionally by coefficient".
//!
//! The engine never validates here that custom amounts stay within the
//! expense total; that check belongs to the validation layer run before an
//! expense is accepted (see `crate::validation`).
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

/// One participant of an expense
///
/// `custom_amount` set means the participant owes exactly that amount;
/// `None` means their share is allocated proportionally from whatever the
/// fixed participants leave over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseParticipant {
    /// Member owing this share
    pub member_id: String,

    /// Fixed share in cents, or None for proportional allocation
    pub custom_amount: Option<i64>,
}

impl ExpenseParticipant {
    /// Participant whose share is allocated proportionally by coefficient
    pub fn proportional(member_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            custom_amount: None,
        }
    }

    /// Participant with a fixed share in cents
    pub fn fixed(member_id: impl Into<String>, amount: i64) -> Self {
        Self {
            member_id: member_id.into(),
            custom_amount: Some(amount),
        }
    }
}

/// Represents one shared expense within a group
///
/// # Example
/// ```
/// use fairsplit_core_rs::{Expense, ExpenseParticipant};
///
/// let expense = Expense::new(
///     "alice".to_string(),
///     12_000, // $120.00 in cents
///     vec![
///         ExpenseParticipant::proportional("alice"),
///         ExpenseParticipant::fixed("bob", 2_000),
///     ],
/// );
///
/// assert_eq!(expense.paid_by(), "alice");
/// assert_eq!(expense.amount(), 12_000);
/// assert_eq!(expense.participants().len(), 2);
/// assert!(!expense.id().is_empty()); // Should have a UUID
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique expense identifier (UUID)
    id: String,

    /// Member who paid the full amount up front
    paid_by: String,

    /// Total expense amount (i64 cents)
    amount: i64,

    /// Members sharing the cost, fixed or proportional
    participants: Vec<ExpenseParticipant>,
}

impl Expense {
    /// Create a new expense with a generated UUID
    ///
    /// # Panics
    /// Panics if amount <= 0
    pub fn new(paid_by: String, amount: i64, participants: Vec<ExpenseParticipant>) -> Self {
        assert!(amount > 0, "amount must be positive");

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            paid_by,
            amount,
            participants,
        }
    }

    /// Reconstruct an expense from a stored record, preserving its ID
    ///
    /// Used when replaying rows loaded by the host application.
    pub fn from_record(
        id: String,
        paid_by: String,
        amount: i64,
        participants: Vec<ExpenseParticipant>,
    ) -> Self {
        Self {
            id,
            paid_by,
            amount,
            participants,
        }
    }

    /// Get expense ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the paying member's ID
    pub fn paid_by(&self) -> &str {
        &self.paid_by
    }

    /// Get total expense amount (i64 cents)
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Get the participant list
    pub fn participants(&self) -> &[ExpenseParticipant] {
        &self.participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_new() {
        let expense = Expense::new(
            "alice".to_string(),
            5_000,
            vec![ExpenseParticipant::proportional("bob")],
        );

        assert_eq!(expense.paid_by(), "alice");
        assert_eq!(expense.amount(), 5_000);
        assert!(!expense.id().is_empty());
    }

    #[test]
    #[should_panic(expected = "amount must be positive")]
    fn test_zero_amount_rejected() {
        Expense::new("alice".to_string(), 0, vec![]);
    }

    #[test]
    fn test_from_record_preserves_id() {
        let expense = Expense::from_record(
            "exp_42".to_string(),
            "bob".to_string(),
            1_000,
            vec![ExpenseParticipant::fixed("carol", 1_000)],
        );
        assert_eq!(expense.id(), "exp_42");
    }

    #[test]
    fn test_participant_constructors() {
        assert_eq!(ExpenseParticipant::proportional("x").custom_amount, None);
        assert_eq!(
            ExpenseParticipant::fixed("x", 250).custom_amount,
            Some(250)
        );
    }
}
