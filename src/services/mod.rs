//! Service layer for SplitLedger
//!
//! The service layer sits between the CLI and storage, handling validation,
//! persistence and audit logging around the balance engine.

pub mod expense;
pub mod group;

pub use expense::{CreateExpenseInput, ExpenseService};
pub use group::{GroupService, GroupSnapshot};
