//! PyO3 bindings for the ledger engine
//!
//! Exposes the three engine operations to a Python host application. The
//! boundary is minimal: plain dicts and lists in, plain dicts and lists out,
//! with the camelCase keys the host serializes to its HTTP responses.
//!
//! # Example (from Python)
//!
//! ```python
//! from fairsplit._core import group_balances, optimal_settlements
//!
//! report = group_balances(members, expenses, settlements, current_member_id="alice")
//! if not report["isValid"]:
//!     log.warning("group balances do not close")
//! suggestions = optimal_settlements(report["balances"])
//! ```

pub mod types;

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use self::types::{
    parse_balances, parse_expenses, parse_members, parse_settlements, report_to_py,
    suggestion_to_py,
};
use crate::balances::{balance_report, verify_integrity};
use crate::optimizer::calculate_optimal_settlements;

/// Compute per-member balances plus the integrity flag
///
/// # Arguments
///
/// * `members` - List of member dicts (`id`, `name`, `coefficient`)
/// * `expenses` - List of expense dicts (`id`, `paidBy`, `amount`, `participants`)
/// * `settlements` - List of settlement dicts (`id`, `fromMember`, `toMember`, `amount`)
/// * `current_member_id` - Requesting user, for the `isCurrentUser` flag
///
/// # Returns
///
/// Dict with `balances` (creditors first) and `isValid`.
#[pyfunction]
#[pyo3(signature = (members, expenses, settlements, current_member_id=None))]
pub fn group_balances(
    py: Python<'_>,
    members: &Bound<'_, PyList>,
    expenses: &Bound<'_, PyList>,
    settlements: &Bound<'_, PyList>,
    current_member_id: Option<String>,
) -> PyResult<Py<PyDict>> {
    let members = parse_members(members)?;
    let expenses = parse_expenses(expenses)?;
    let settlements = parse_settlements(settlements)?;

    let report = balance_report(
        current_member_id.as_deref(),
        &members,
        &expenses,
        &settlements,
    );
    report_to_py(py, &report)
}

/// Check that a list of balance dicts closes to zero within 1 cent
#[pyfunction]
pub fn integrity_ok(balances: &Bound<'_, PyList>) -> PyResult<bool> {
    let balances = parse_balances(balances)?;
    Ok(verify_integrity(&balances))
}

/// Suggest settlement transfers for a list of balance dicts
///
/// Runs regardless of integrity; non-closure is the caller's warning to
/// surface, not a reason to block suggestions.
#[pyfunction]
pub fn optimal_settlements(
    py: Python<'_>,
    balances: &Bound<'_, PyList>,
) -> PyResult<Py<PyList>> {
    let balances = parse_balances(balances)?;
    let suggestions = calculate_optimal_settlements(&balances);

    let out = PyList::empty_bound(py);
    for suggestion in &suggestions {
        out.append(suggestion_to_py(py, suggestion)?)?;
    }
    Ok(out.unbind())
}
