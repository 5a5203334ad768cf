//! Expense input validation
//!
//! The checks the surrounding request layer runs before an expense reaches
//! the engine. Outcomes are a closed enum rather than string error codes so
//! handlers can match exhaustively.
//!
//! [`calculate_shares`](crate::calculate_shares) itself never performs these
//! checks: if an over-allocated expense slips through anyway, it degrades
//! gracefully instead of crashing.

use crate::models::expense::ExpenseParticipant;
use std::collections::HashSet;
use thiserror::Error;

/// Ways an expense submission can be rejected before it is stored
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expense amount must be positive, got {amount}")]
    NonPositiveAmount { amount: i64 },

    #[error("Expense must have at least one participant")]
    NoParticipants,

    #[error("Participant '{member_id}' listed more than once")]
    DuplicateParticipant { member_id: String },

    #[error("Custom amount for '{member_id}' must not be negative, got {amount}")]
    NegativeCustomAmount { member_id: String, amount: i64 },

    #[error("Custom amounts total {total_custom} exceeds expense amount {amount}")]
    CustomAmountsExceedTotal { total_custom: i64, amount: i64 },
}

/// Validate an expense submission
///
/// Rejects non-positive amounts, empty or duplicated participant lists,
/// negative custom amounts, and custom amounts that sum over the total.
/// Custom amounts summing exactly to the total are fine (the proportional
/// participants, if any, then owe nothing).
///
/// # Example
/// ```
/// use fairsplit_core_rs::{validate_expense, ExpenseParticipant, ValidationError};
///
/// let participants = vec![
///     ExpenseParticipant::fixed("alice", 8_000),
///     ExpenseParticipant::proportional("bob"),
/// ];
/// assert!(validate_expense(10_000, &participants).is_ok());
///
/// let err = validate_expense(5_000, &participants).unwrap_err();
/// assert_eq!(
///     err,
///     ValidationError::CustomAmountsExceedTotal { total_custom: 8_000, amount: 5_000 }
/// );
/// ```
pub fn validate_expense(
    amount: i64,
    participants: &[ExpenseParticipant],
) -> Result<(), ValidationError> {
    if amount <= 0 {
        return Err(ValidationError::NonPositiveAmount { amount });
    }

    if participants.is_empty() {
        return Err(ValidationError::NoParticipants);
    }

    let mut seen = HashSet::with_capacity(participants.len());
    let mut total_custom = 0_i64;

    for participant in participants {
        if !seen.insert(participant.member_id.as_str()) {
            return Err(ValidationError::DuplicateParticipant {
                member_id: participant.member_id.clone(),
            });
        }

        if let Some(custom) = participant.custom_amount {
            if custom < 0 {
                return Err(ValidationError::NegativeCustomAmount {
                    member_id: participant.member_id.clone(),
                    amount: custom,
                });
            }
            total_custom += custom;
        }
    }

    if total_custom > amount {
        return Err(ValidationError::CustomAmountsExceedTotal {
            total_custom,
            amount,
        });
    }

    Ok(())
}
