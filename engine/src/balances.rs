//! Balance aggregation
//!
//! Folds all of a group's expenses and settlements into one balance record
//! per active member. Recomputed from scratch on every read - best effort as
//! of fetch time, never persisted, no cross-request consistency guarantee.
//!
//! # Critical Invariants
//!
//! 1. **Order independence**: expenses and settlements may arrive in any
//!    order; the resulting balances are identical.
//! 2. **Closure**: for a fully-allocated expense set with no settlements,
//!    net balances sum to within 1 cent of zero (share conservation makes
//!    each expense contribute zero net).
//! 3. **Purity**: no I/O, no shared accumulator across calls.
//!
//! Expenses or settlements referencing members absent from the roster
//! (normally departed members, excluded upstream) contribute nothing for the
//! missing party.

use crate::models::balance::MemberBalance;
use crate::models::expense::Expense;
use crate::models::member::{coefficient_map, Member};
use crate::models::settlement::Settlement;
use crate::shares::calculate_shares;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tolerated deviation of the net-balance sum from zero, in cents.
///
/// Cumulative rounding across many expenses can drift; anything strictly
/// below this threshold still counts as closed.
pub const INTEGRITY_TOLERANCE_CENTS: i64 = 1;

/// Per-member running totals while folding expenses and settlements
#[derive(Debug, Default, Clone)]
struct BalanceAccumulator {
    total_paid: i64,
    total_owed: i64,
    settlements_paid: i64,
    settlements_received: i64,
}

/// Compute one balance record per roster member
///
/// For each expense the full amount is credited to the payer's `total_paid`
/// and the calculated shares are debited to each participant's `total_owed`.
/// Settlements credit the sender's `settlements_paid` and the receiver's
/// `settlements_received`. Then per member:
///
/// - `balance = total_paid - total_owed`
/// - `net_balance = balance + settlements_paid - settlements_received`
///
/// Output is sorted descending by net balance (creditors first). Ties keep
/// roster order; that ordering is incidental, not a documented contract.
///
/// # Arguments
/// * `current_member_id` - Requesting user, for the `is_current_user` flag
/// * `members` - Active roster; one output record per entry
/// * `expenses` - All of the group's expenses
/// * `settlements` - All recorded settlements
///
/// # Example
/// ```
/// use fairsplit_core_rs::{calculate_group_balances, Expense, ExpenseParticipant, Member};
///
/// let members = vec![
///     Member::new("alice".to_string(), "Alice".to_string(), 5_000),
///     Member::new("bob".to_string(), "Bob".to_string(), 5_000),
/// ];
/// let expenses = vec![Expense::new(
///     "alice".to_string(),
///     100,
///     vec![
///         ExpenseParticipant::proportional("alice"),
///         ExpenseParticipant::proportional("bob"),
///     ],
/// )];
///
/// let balances = calculate_group_balances(Some("alice"), &members, &expenses, &[]);
/// assert_eq!(balances[0].member_id, "alice"); // creditor sorts first
/// assert_eq!(balances[0].net_balance, 50);
/// assert_eq!(balances[1].net_balance, -50);
/// ```
pub fn calculate_group_balances(
    current_member_id: Option<&str>,
    members: &[Member],
    expenses: &[Expense],
    settlements: &[Settlement],
) -> Vec<MemberBalance> {
    let coefficients = coefficient_map(members);

    let index: HashMap<&str, usize> = members
        .iter()
        .enumerate()
        .map(|(i, m)| (m.id(), i))
        .collect();
    let mut accumulators = vec![BalanceAccumulator::default(); members.len()];

    for expense in expenses {
        if let Some(&i) = index.get(expense.paid_by()) {
            accumulators[i].total_paid += expense.amount();
        }

        let shares = calculate_shares(expense.amount(), expense.participants(), &coefficients);
        for (member_id, share) in &shares {
            if let Some(&i) = index.get(member_id.as_str()) {
                accumulators[i].total_owed += share;
            }
        }
    }

    for settlement in settlements {
        if let Some(&i) = index.get(settlement.from_member()) {
            accumulators[i].settlements_paid += settlement.amount();
        }
        if let Some(&i) = index.get(settlement.to_member()) {
            accumulators[i].settlements_received += settlement.amount();
        }
    }

    let mut balances: Vec<MemberBalance> = members
        .iter()
        .zip(accumulators)
        .map(|(member, acc)| {
            let balance = acc.total_paid - acc.total_owed;
            let net_balance = balance + acc.settlements_paid - acc.settlements_received;
            MemberBalance {
                member_id: member.id().to_string(),
                member_name: member.name().to_string(),
                is_current_user: current_member_id == Some(member.id()),
                total_paid: acc.total_paid,
                total_owed: acc.total_owed,
                balance,
                settlements_paid: acc.settlements_paid,
                settlements_received: acc.settlements_received,
                net_balance,
            }
        })
        .collect();

    // Creditors first; stable sort keeps roster order among ties
    balances.sort_by(|a, b| b.net_balance.cmp(&a.net_balance));

    balances
}

/// Check that net balances close to zero within the 1-cent tolerance
///
/// A monitoring signal, not a hard failure: callers surface `false` as a
/// non-blocking warning alongside the balance list.
///
/// # Example
/// ```
/// use fairsplit_core_rs::verify_integrity;
///
/// assert!(verify_integrity(&[]));
/// ```
pub fn verify_integrity(balances: &[MemberBalance]) -> bool {
    let sum: i64 = balances.iter().map(|b| b.net_balance).sum();
    sum.abs() < INTEGRITY_TOLERANCE_CENTS
}

/// Balance list plus its integrity flag
///
/// The composed shape the balance-listing endpoint returns: the integrity
/// signal travels alongside the data instead of failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBalanceReport {
    /// Per-member balances, creditors first
    pub balances: Vec<MemberBalance>,

    /// False when net balances drift from zero by 1 cent or more
    pub is_valid: bool,
}

/// Compute balances and their integrity flag in one step
pub fn balance_report(
    current_member_id: Option<&str>,
    members: &[Member],
    expenses: &[Expense],
    settlements: &[Settlement],
) -> GroupBalanceReport {
    let balances = calculate_group_balances(current_member_id, members, expenses, settlements);
    let is_valid = verify_integrity(&balances);
    GroupBalanceReport { balances, is_valid }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(member_id: &str, net_balance: i64) -> MemberBalance {
        MemberBalance {
            member_id: member_id.to_string(),
            member_name: member_id.to_string(),
            is_current_user: false,
            total_paid: 0,
            total_owed: 0,
            balance: net_balance,
            settlements_paid: 0,
            settlements_received: 0,
            net_balance,
        }
    }

    #[test]
    fn test_verify_integrity_accepts_exact_closure() {
        let balances = vec![balance("a", 70), balance("b", 30), balance("c", -100)];
        assert!(verify_integrity(&balances));
    }

    #[test]
    fn test_verify_integrity_rejects_one_cent_drift() {
        let balances = vec![balance("a", 70), balance("c", -69)];
        assert!(!verify_integrity(&balances));
    }

    #[test]
    fn test_empty_group_produces_no_balances() {
        let report = balance_report(None, &[], &[], &[]);
        assert!(report.balances.is_empty());
        assert!(report.is_valid);
    }
}
