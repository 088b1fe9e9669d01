//! fintalk-core: pure intent classification for the fintalk chat bot.
//!
//! Everything in this crate is synchronous, stateless, and side-effect
//! free: one line of chat text in, one `Intent` value out. All money
//! movement happens downstream, after the caller matches on the intent.

pub mod categories;
pub mod classify;
pub mod intent;
pub mod symbols;
pub mod validate;

pub use categories::{ExpenseCategory, IncomeCategory};
pub use classify::Classifier;
pub use intent::Intent;
pub use symbols::SymbolResolver;
pub use validate::{
    MAX_AMOUNT, MAX_QUANTITY, ValidationResult, validate_amount, validate_quantity,
};
