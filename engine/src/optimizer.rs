//! Settlement optimization
//!
//! Reduces a set of net balances into a short list of suggested transfers.
//! Greedy largest-creditor-to-largest-debtor matching: not proven globally
//! optimal in transaction count for every input, but optimal for the common
//! case, simple, and auditable.
//!
//! # Critical Invariants
//!
//! 1. **Termination**: at most `creditors + debtors - 1` suggestions; each
//!    step retires at least one party.
//! 2. **Zero-driving**: when the input closes to zero, applying every
//!    suggestion drives every remaining balance to exactly zero.
//! 3. **Determinism**: single-pass reduction over two sorted lists; ties
//!    among equal magnitudes follow input order (not a stable contract).
//!
//! Non-closure of the input (sum off by more than 1 cent) is advisory only -
//! callers check [`verify_integrity`](crate::verify_integrity) and surface a
//! warning, but suggestion generation runs on whatever values it receives.

use crate::models::balance::{MemberBalance, SettlementSuggestion};

/// One side of the matching loop: a member with an outstanding magnitude
#[derive(Debug, Clone)]
struct OpenPosition {
    member_id: String,
    member_name: String,
    remaining: i64,
}

/// Suggest transfers that settle the group's net balances
///
/// Partitions balances into creditors (positive) and debtors (negative,
/// taken as magnitude), sorts both descending, then repeatedly matches the
/// largest pair with `min(creditor, debtor)` until one side runs out.
/// Zero balances never appear in a suggestion. Fewer than two input
/// balances yield an empty list.
///
/// # Example
/// ```
/// use fairsplit_core_rs::{calculate_optimal_settlements, MemberBalance};
///
/// let balance = |id: &str, net: i64| MemberBalance {
///     member_id: id.to_string(),
///     member_name: id.to_uppercase(),
///     is_current_user: false,
///     total_paid: 0,
///     total_owed: 0,
///     balance: net,
///     settlements_paid: 0,
///     settlements_received: 0,
///     net_balance: net,
/// };
///
/// let suggestions = calculate_optimal_settlements(&[
///     balance("a", 70),
///     balance("b", 30),
///     balance("c", -100),
/// ]);
///
/// assert_eq!(suggestions.len(), 2);
/// assert_eq!(suggestions[0].from_member_id, "c");
/// assert_eq!(suggestions[0].to_member_id, "a");
/// assert_eq!(suggestions[0].amount, 70);
/// assert_eq!(suggestions[1].to_member_id, "b");
/// assert_eq!(suggestions[1].amount, 30);
/// ```
pub fn calculate_optimal_settlements(balances: &[MemberBalance]) -> Vec<SettlementSuggestion> {
    if balances.len() < 2 {
        return Vec::new();
    }

    let mut creditors: Vec<OpenPosition> = balances
        .iter()
        .filter(|b| b.net_balance > 0)
        .map(|b| OpenPosition {
            member_id: b.member_id.clone(),
            member_name: b.member_name.clone(),
            remaining: b.net_balance,
        })
        .collect();

    let mut debtors: Vec<OpenPosition> = balances
        .iter()
        .filter(|b| b.net_balance < 0)
        .map(|b| OpenPosition {
            member_id: b.member_id.clone(),
            member_name: b.member_name.clone(),
            remaining: -b.net_balance,
        })
        .collect();

    // Largest magnitudes first; stable sort keeps input order among ties
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut suggestions = Vec::new();
    let mut ci = 0;
    let mut di = 0;

    while ci < creditors.len() && di < debtors.len() {
        let creditor = &creditors[ci];
        let debtor = &debtors[di];
        let amount = creditor.remaining.min(debtor.remaining);

        suggestions.push(SettlementSuggestion {
            from_member_id: debtor.member_id.clone(),
            from_member_name: debtor.member_name.clone(),
            to_member_id: creditor.member_id.clone(),
            to_member_name: creditor.member_name.clone(),
            amount,
        });

        creditors[ci].remaining -= amount;
        debtors[di].remaining -= amount;

        if creditors[ci].remaining == 0 {
            ci += 1;
        }
        if debtors[di].remaining == 0 {
            di += 1;
        }
    }

    suggestions
}
