//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust domain types and PyO3-compatible types (PyDict,
//! PyList). Dict keys are the camelCase names the host application already
//! uses on its wire, so records pass through the boundary unrenamed.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::balances::GroupBalanceReport;
use crate::models::balance::{MemberBalance, SettlementSuggestion};
use crate::models::expense::{Expense, ExpenseParticipant};
use crate::models::member::{Member, COEFFICIENT_SCALE};
use crate::models::settlement::Settlement;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with a clear error message.
fn extract_required<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<T> {
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Extract an optional field from a Python dict.
///
/// A present-but-None value counts as missing, matching how the host
/// serializes unset custom amounts.
fn extract_optional<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<Option<T>> {
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

/// Extract a field with a default value if missing.
fn extract_with_default<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
    default: T,
) -> PyResult<T> {
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => value.extract(),
        _ => Ok(default),
    }
}

fn as_dict<'py>(item: &Bound<'py, PyAny>, what: &str) -> PyResult<Bound<'py, PyDict>> {
    item.downcast::<PyDict>()
        .map(|d| d.clone())
        .map_err(|_| PyValueError::new_err(format!("Expected {} to be a dict", what)))
}

// ========================================================================
// Input Parsers
// ========================================================================

/// Convert a Python list of member dicts to domain members
///
/// # Errors
///
/// Returns PyValueError if required fields are missing or a coefficient is
/// outside [0, 10000].
pub fn parse_members(list: &Bound<'_, PyList>) -> PyResult<Vec<Member>> {
    let mut members = Vec::with_capacity(list.len());
    for item in list.iter() {
        let dict = as_dict(&item, "member")?;
        let id: String = extract_required(&dict, "id")?;
        let name: String = extract_with_default(&dict, "name", id.clone())?;
        let coefficient: i64 = extract_required(&dict, "coefficient")?;

        if !(0..=COEFFICIENT_SCALE).contains(&coefficient) {
            return Err(PyValueError::new_err(format!(
                "Member '{}' coefficient {} out of range 0..=10000",
                id, coefficient
            )));
        }

        members.push(Member::new(id, name, coefficient));
    }
    Ok(members)
}

/// Convert a Python list of expense dicts to domain expenses
pub fn parse_expenses(list: &Bound<'_, PyList>) -> PyResult<Vec<Expense>> {
    let mut expenses = Vec::with_capacity(list.len());
    for item in list.iter() {
        let dict = as_dict(&item, "expense")?;
        let id: String = extract_required(&dict, "id")?;
        let paid_by: String = extract_required(&dict, "paidBy")?;
        let amount: i64 = extract_required(&dict, "amount")?;

        if amount <= 0 {
            return Err(PyValueError::new_err(format!(
                "Expense '{}' amount must be positive, got {}",
                id, amount
            )));
        }

        let raw_participants: Bound<'_, PyList> = extract_required(&dict, "participants")?;
        let mut participants = Vec::with_capacity(raw_participants.len());
        for raw in raw_participants.iter() {
            let participant = as_dict(&raw, "participant")?;
            participants.push(ExpenseParticipant {
                member_id: extract_required(&participant, "memberId")?,
                custom_amount: extract_optional(&participant, "customAmount")?,
            });
        }

        expenses.push(Expense::from_record(id, paid_by, amount, participants));
    }
    Ok(expenses)
}

/// Convert a Python list of settlement dicts to domain settlements
pub fn parse_settlements(list: &Bound<'_, PyList>) -> PyResult<Vec<Settlement>> {
    let mut settlements = Vec::with_capacity(list.len());
    for item in list.iter() {
        let dict = as_dict(&item, "settlement")?;
        let id: String = extract_required(&dict, "id")?;
        let from_member: String = extract_required(&dict, "fromMember")?;
        let to_member: String = extract_required(&dict, "toMember")?;
        let amount: i64 = extract_required(&dict, "amount")?;

        if amount <= 0 {
            return Err(PyValueError::new_err(format!(
                "Settlement '{}' amount must be positive, got {}",
                id, amount
            )));
        }

        settlements.push(Settlement::from_record(id, from_member, to_member, amount));
    }
    Ok(settlements)
}

/// Convert a Python list of balance dicts to balance records
///
/// Only `memberId` and `netBalance` are required; the optimizer ignores the
/// accumulator fields, so they default to zero when the host passes a
/// trimmed shape.
pub fn parse_balances(list: &Bound<'_, PyList>) -> PyResult<Vec<MemberBalance>> {
    let mut balances = Vec::with_capacity(list.len());
    for item in list.iter() {
        let dict = as_dict(&item, "balance")?;
        let member_id: String = extract_required(&dict, "memberId")?;
        balances.push(MemberBalance {
            member_name: extract_with_default(&dict, "memberName", member_id.clone())?,
            is_current_user: extract_with_default(&dict, "isCurrentUser", false)?,
            total_paid: extract_with_default(&dict, "totalPaid", 0)?,
            total_owed: extract_with_default(&dict, "totalOwed", 0)?,
            balance: extract_with_default(&dict, "balance", 0)?,
            settlements_paid: extract_with_default(&dict, "settlementsPaid", 0)?,
            settlements_received: extract_with_default(&dict, "settlementsReceived", 0)?,
            net_balance: extract_required(&dict, "netBalance")?,
            member_id,
        });
    }
    Ok(balances)
}

// ========================================================================
// Output Converters
// ========================================================================

/// Convert a balance record to a Python dict
pub fn balance_to_py(py: Python<'_>, balance: &MemberBalance) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("memberId", &balance.member_id)?;
    dict.set_item("memberName", &balance.member_name)?;
    dict.set_item("isCurrentUser", balance.is_current_user)?;
    dict.set_item("totalPaid", balance.total_paid)?;
    dict.set_item("totalOwed", balance.total_owed)?;
    dict.set_item("balance", balance.balance)?;
    dict.set_item("settlementsPaid", balance.settlements_paid)?;
    dict.set_item("settlementsReceived", balance.settlements_received)?;
    dict.set_item("netBalance", balance.net_balance)?;
    Ok(dict.unbind())
}

/// Convert a balance report to a Python dict (`balances` + `isValid`)
pub fn report_to_py(py: Python<'_>, report: &GroupBalanceReport) -> PyResult<Py<PyDict>> {
    let balances = PyList::empty_bound(py);
    for balance in &report.balances {
        balances.append(balance_to_py(py, balance)?)?;
    }

    let dict = PyDict::new_bound(py);
    dict.set_item("balances", balances)?;
    dict.set_item("isValid", report.is_valid)?;
    Ok(dict.unbind())
}

/// Convert a settlement suggestion to a Python dict
pub fn suggestion_to_py(py: Python<'_>, suggestion: &SettlementSuggestion) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("fromMemberId", &suggestion.from_member_id)?;
    dict.set_item("fromMemberName", &suggestion.from_member_name)?;
    dict.set_item("toMemberId", &suggestion.to_member_id)?;
    dict.set_item("toMemberName", &suggestion.to_member_name)?;
    dict.set_item("amount", suggestion.amount)?;
    Ok(dict.unbind())
}
