//! Expense display formatting

use crate::models::money::format_amount;
use crate::models::Expense;

/// Format expenses as a numbered list in recorded order
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    for (i, expense) in expenses.iter().enumerate() {
        let payer = if expense.payer.is_empty() {
            "?"
        } else {
            expense.payer.as_str()
        };
        let description = if expense.description.is_empty() {
            "N/A"
        } else {
            expense.description.as_str()
        };

        output.push_str(&format!(
            "{}. {} paid {} for {}",
            i + 1,
            payer,
            format_amount(expense.amount, symbol),
            description
        ));
        if !expense.timestamp.is_empty() {
            output.push_str(&format!(" on {}", expense.timestamp));
        }
        output.push('\n');
    }

    output
}
