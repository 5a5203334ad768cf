//! Fairsplit Core - Ledger Computation Engine
//!
//! Income-weighted expense splitting with exact integer arithmetic.
//!
//! # Architecture
//!
//! - **models**: Domain types (Member, Expense, Settlement, MemberBalance)
//! - **shares**: Per-expense share allocation (income-weighted coefficients)
//! - **balances**: Group-wide balance aggregation and integrity check
//! - **optimizer**: Greedy settlement suggestion matching
//! - **validation**: Caller-side input validation (closed error enum)
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents) - no floating point anywhere
//! 2. Shares of one expense always sum exactly to the expense amount
//! 3. All functions are pure: no I/O, no shared state, deterministic
//!
//! The engine owns no wire format and no persistence. Host request handlers
//! load group data, call into the engine, and serialize whatever it returns.

// Module declarations
pub mod balances;
pub mod models;
pub mod optimizer;
pub mod shares;
pub mod validation;

// Re-exports for convenience
pub use balances::{
    balance_report, calculate_group_balances, verify_integrity, GroupBalanceReport,
    INTEGRITY_TOLERANCE_CENTS,
};
pub use models::{
    balance::{MemberBalance, SettlementSuggestion},
    expense::{Expense, ExpenseParticipant},
    member::{coefficient_map, Member, COEFFICIENT_SCALE},
    settlement::Settlement,
};
pub use optimizer::calculate_optimal_settlements;
pub use shares::calculate_shares;
pub use validation::{validate_expense, ValidationError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn fairsplit_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::group_balances, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::integrity_ok, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::optimal_settlements, m)?)?;
    Ok(())
}
