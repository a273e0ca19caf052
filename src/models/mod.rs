//! Core data models for SplitLedger
//!
//! Groups, the expenses recorded in them, and the helpers used to keep
//! amounts consistent.

pub mod expense;
pub mod group;
pub mod money;

pub use expense::{
    coerce_amount, migrate_legacy_payer, normalize_expense, normalize_value, Expense, RawExpense,
};
pub use group::{Group, GroupValidationError};
pub use money::{format_amount, is_settled, parse_amount, round_cents, AmountParseError};
