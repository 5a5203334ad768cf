//! Group member model
//!
//! Represents an active member of an expense-sharing group.
//! Each member carries an income-weighted coefficient: an integer in
//! [0, 10000] scaled by 10,000 for fixed-point precision (2500 = 25.00%).
//!
//! Coefficients are recomputed from scratch by the host application whenever
//! any member joins, leaves, or changes income; the engine consumes them
//! read-only. Within an active group the coefficients of all active members
//! should sum to approximately 10,000 - drift is tolerated, never corrected
//! here.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed-point scale for member coefficients (basis points).
///
/// A coefficient of 10,000 means 100.00% of proportional expenses.
pub const COEFFICIENT_SCALE: i64 = 10_000;

/// Represents an active member of an expense group
///
/// # Example
/// ```
/// use fairsplit_core_rs::{Member, COEFFICIENT_SCALE};
///
/// let member = Member::new("alice".to_string(), "Alice".to_string(), 2_500);
/// assert_eq!(member.coefficient(), 2_500); // 25.00%
/// assert!(member.coefficient() <= COEFFICIENT_SCALE);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier
    id: String,

    /// Display name, passed through to output records untouched
    name: String,

    /// Income-weighted share coefficient in [0, 10000]
    coefficient: i64,
}

impl Member {
    /// Create a new member
    ///
    /// # Panics
    /// Panics if coefficient is outside [0, 10000]
    pub fn new(id: String, name: String, coefficient: i64) -> Self {
        assert!(
            (0..=COEFFICIENT_SCALE).contains(&coefficient),
            "coefficient must be within 0..=10000"
        );

        Self {
            id,
            name,
            coefficient,
        }
    }

    /// Get member ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get income-weighted coefficient (basis points of the group total)
    pub fn coefficient(&self) -> i64 {
        self.coefficient
    }
}

/// Build the member-ID-to-coefficient lookup used by share calculation
///
/// # Example
/// ```
/// use fairsplit_core_rs::{coefficient_map, Member};
///
/// let members = vec![
///     Member::new("a".to_string(), "A".to_string(), 6_000),
///     Member::new("b".to_string(), "B".to_string(), 4_000),
/// ];
///
/// let coefficients = coefficient_map(&members);
/// assert_eq!(coefficients["a"], 6_000);
/// assert_eq!(coefficients["b"], 4_000);
/// ```
pub fn coefficient_map(members: &[Member]) -> HashMap<String, i64> {
    members
        .iter()
        .map(|m| (m.id().to_string(), m.coefficient()))
        .collect()
}
