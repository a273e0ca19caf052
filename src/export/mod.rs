//! Export functionality for SplitLedger
//!
//! - CSV: a group's expenses, one row each
//! - JSON: the full group with balances, summary and export metadata

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_group_json, GroupExport, EXPORT_SCHEMA_VERSION};
