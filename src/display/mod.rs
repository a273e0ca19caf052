//! Display formatting for terminal output

pub mod balance;
pub mod expense;
pub mod group;

pub use balance::{format_balance, format_summary};
pub use expense::format_expense_list;
pub use group::{format_group_details, format_group_list};
