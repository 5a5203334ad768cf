//! Domain models for the expense ledger

pub mod balance;
pub mod expense;
pub mod member;
pub mod settlement;

// Re-exports
pub use balance::{MemberBalance, SettlementSuggestion};
pub use expense::{Expense, ExpenseParticipant};
pub use member::{coefficient_map, Member, COEFFICIENT_SCALE};
pub use settlement::Settlement;
