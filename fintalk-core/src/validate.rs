//! Bound checks for extracted quantities and amounts.
//!
//! Result-object pattern instead of an error channel: callers inspect
//! `valid` and reprompt the user with `error` when it is set.

use serde::{Deserialize, Serialize};

/// Upper bound for share quantities.
pub const MAX_QUANTITY: f64 = 1_000_000.0;
/// Upper bound for ledger amounts. Kept distinct from the quantity ceiling.
pub const MAX_AMOUNT: f64 = 10_000_000.0;

/// Outcome of a bound check. `error` is user-displayable and present only
/// when `valid` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        ValidationResult {
            valid: true,
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            error: Some(error.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Validate a share quantity. Fractional quantities are allowed (fractional
/// instruments). Exactly at the ceiling passes; NaN fails the positivity
/// check.
pub fn validate_quantity(q: f64) -> ValidationResult {
    if !(q > 0.0) {
        return ValidationResult::fail("數量必須大於 0");
    }
    if q > MAX_QUANTITY {
        return ValidationResult::fail("數量過大（上限 1,000,000）");
    }
    ValidationResult::ok()
}

/// Validate a ledger amount. Fractional (cents) values are allowed.
pub fn validate_amount(a: f64) -> ValidationResult {
    if !(a > 0.0) {
        return ValidationResult::fail("金額必須大於 0");
    }
    if a > MAX_AMOUNT {
        return ValidationResult::fail("金額過大（上限 10,000,000）");
    }
    ValidationResult::ok()
}
