//! SplitLedger - shared-expense balances from the command line
//!
//! This library keeps named groups of people, the expenses each of them paid
//! on behalf of the group, and the net balance that results. Stored records
//! are normalized on load, so files written by older versions (a `name` key
//! instead of `payer`, amounts stored as strings) keep working.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Groups, expenses and amount helpers
//! - `engine`: Balance computation and settlement summaries
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal output formatting
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers for the `splitledger` binary
//!
//! # Example
//!
//! ```rust
//! use splitledger::{compute_balances, models::Expense};
//!
//! let participants = ["Agnes", "Brian"];
//! let expenses = vec![Expense::new("Agnes", 20.0)];
//! let settlement = compute_balances(&participants, &expenses);
//!
//! assert_eq!(settlement.balances.get("Brian"), Some(-20.0));
//! let phrase = settlement.summary.phrase_for("Brian").map(|p| p.to_string());
//! assert_eq!(phrase.as_deref(), Some("owes Agnes 20.00"));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use engine::{compute_balances, Settlement};
pub use error::{SplitError, SplitResult};
pub use models::{coerce_amount, migrate_legacy_payer, normalize_expense};
