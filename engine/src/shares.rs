//! Share calculation
//!
//! Allocates one expense's amount across its participants.
//!
//! # Allocation Flow
//!
//! ```text
//! amount ── fixed participants take their custom amounts ──┐
//!                                                          ▼
//!                          remaining = amount - Σ(custom amounts)
//!                                                          │
//!           proportional participants split `remaining`    ▼
//!           by coefficient, last one absorbs the rounding remainder
//! ```
//!
//! # Critical Invariants
//!
//! - **Conservation**: output shares sum exactly to the expense amount
//!   (assuming custom amounts do not exceed it) - the last proportional
//!   participant in input order receives `remaining` minus everything
//!   already allocated, so rounding never leaks a cent.
//! - **Coverage**: every input participant appears exactly once in the
//!   output map.
//! - **No failure mode**: the function never errors and never panics on
//!   structurally valid input. Over-allocated custom amounts (a violation
//!   the validation layer screens out beforehand) degrade gracefully:
//!   proportional participants receive 0.

use crate::models::expense::ExpenseParticipant;
use std::collections::HashMap;

/// Round-half-up of `value * numerator / denominator` without overflow.
///
/// Widens to i128 internally; coefficient math on i64 cents would otherwise
/// overflow for large amounts.
fn mul_div_round(value: i64, numerator: i64, denominator: i64) -> i64 {
    debug_assert!(denominator > 0, "denominator must be positive");
    let scaled = value as i128 * numerator as i128;
    let denominator = denominator as i128;
    ((scaled * 2 + denominator) / (denominator * 2)) as i64
}

/// Allocate an expense amount across its participants
///
/// Fixed participants (custom amount set) receive exactly their custom
/// amount. The rest of the amount is split across proportional participants
/// pro rata by coefficient, with the last proportional participant in input
/// order absorbing the rounding remainder. If the proportional group's total
/// coefficient is zero, the remainder is split equally instead, with the same
/// last-slot rule.
///
/// Missing coefficient entries count as zero. If fixed amounts consume or
/// exceed the total, every proportional participant receives 0.
///
/// # Arguments
/// * `amount` - Expense total in cents (positive)
/// * `participants` - Fixed and proportional participants
/// * `coefficients` - Member ID to coefficient lookup (basis points)
///
/// # Example
/// ```
/// use fairsplit_core_rs::{calculate_shares, ExpenseParticipant};
/// use std::collections::HashMap;
///
/// let coefficients = HashMap::from([
///     ("alice".to_string(), 5_000),
///     ("bob".to_string(), 3_000),
///     ("carol".to_string(), 2_000),
/// ]);
/// let participants = vec![
///     ExpenseParticipant::proportional("alice"),
///     ExpenseParticipant::proportional("bob"),
///     ExpenseParticipant::proportional("carol"),
/// ];
///
/// let shares = calculate_shares(120, &participants, &coefficients);
/// assert_eq!(shares["alice"], 60);
/// assert_eq!(shares["bob"], 36);
/// assert_eq!(shares["carol"], 24);
/// ```
pub fn calculate_shares(
    amount: i64,
    participants: &[ExpenseParticipant],
    coefficients: &HashMap<String, i64>,
) -> HashMap<String, i64> {
    let mut shares = HashMap::with_capacity(participants.len());
    let mut remaining = amount;
    let mut proportional: Vec<&ExpenseParticipant> = Vec::new();

    // Fixed participants take their custom amounts off the top
    for participant in participants {
        match participant.custom_amount {
            Some(fixed) => {
                shares.insert(participant.member_id.clone(), fixed);
                remaining -= fixed;
            }
            None => proportional.push(participant),
        }
    }

    if proportional.is_empty() {
        return shares;
    }

    // Fixed amounts consumed (or exceeded) the total: nothing left to split
    if remaining <= 0 {
        for participant in &proportional {
            shares.insert(participant.member_id.clone(), 0);
        }
        return shares;
    }

    let total_coefficient: i64 = proportional
        .iter()
        .map(|p| coefficients.get(&p.member_id).copied().unwrap_or(0))
        .sum();

    let last = proportional.len() - 1;
    let mut allocated = 0_i64;

    for (idx, participant) in proportional.iter().enumerate() {
        let share = if idx == last {
            // Last slot absorbs the rounding remainder so the shares close
            // exactly to `remaining`
            remaining - allocated
        } else if total_coefficient > 0 {
            let coefficient = coefficients
                .get(&participant.member_id)
                .copied()
                .unwrap_or(0);
            mul_div_round(remaining, coefficient, total_coefficient)
        } else {
            // All-zero coefficients: fall back to an equal split
            mul_div_round(remaining, 1, proportional.len() as i64)
        };

        allocated += share;
        shares.insert(participant.member_id.clone(), share);
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_round_rounds_half_up() {
        assert_eq!(mul_div_round(100, 1, 3), 33); // 33.33 -> 33
        assert_eq!(mul_div_round(100, 1, 8), 13); // 12.5  -> 13
        assert_eq!(mul_div_round(90, 3_000, 5_000), 54); // exact
    }

    #[test]
    fn test_mul_div_round_no_i64_overflow() {
        // ~90 trillion cents at full coefficient scale
        let share = mul_div_round(9_000_000_000_000_000, 10_000, 10_000);
        assert_eq!(share, 9_000_000_000_000_000);
    }

    #[test]
    fn test_single_proportional_gets_full_amount() {
        let shares = calculate_shares(
            777,
            &[ExpenseParticipant::proportional("solo")],
            &HashMap::new(),
        );
        assert_eq!(shares.len(), 1);
        assert_eq!(shares["solo"], 777);
    }
}
