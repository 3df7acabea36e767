//! Analytic account model.
//!
//! Analytic accounts are owned by the accounting side; shifts, departments
//! and staff are booked against them.

use serde::{Deserialize, Serialize};

use crate::error::{ShiftError, ShiftResult};

use super::AccountId;

/// Input for registering an analytic account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    /// Display name.
    pub name: String,
}

/// An accounting entity that shifts and staff are booked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticAccount {
    /// Unique identifier for the account.
    pub id: AccountId,
    /// Display name.
    pub name: String,
}

impl AnalyticAccount {
    /// Builds an account record.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::MissingField`] when the name is empty.
    pub fn create(id: AccountId, input: NewAccount) -> ShiftResult<Self> {
        if input.name.is_empty() {
            return Err(ShiftError::MissingField {
                field: "name".to_string(),
            });
        }
        Ok(Self {
            id,
            name: input.name,
        })
    }
}

/// An account together with its linked record counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    /// The account record.
    #[serde(flatten)]
    pub account: AnalyticAccount,
    /// Number of staff booked against the account.
    pub employee_count: usize,
    /// Number of shifts booked against the account.
    pub shift_count: usize,
}
