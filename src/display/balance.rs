//! Balance and summary display formatting

use crate::engine::{Balances, Summary};
use crate::models::money::{format_amount, is_settled};

/// Format the current balance the way a group member reads it
///
/// Two-person groups get a single directional line; larger groups list
/// every participant in recorded order.
pub fn format_balance(participants: &[String], balances: &Balances, symbol: &str) -> String {
    let mut output = String::new();

    if let [first, second] = participants {
        output.push_str("Balance\n-------\n");
        let diff = balances.get(first).unwrap_or(0.0);
        if is_settled(diff) {
            output.push_str("Both are settled up.\n");
        } else if diff > 0.0 {
            output.push_str(&format!(
                "{} owes {} {}\n",
                second,
                first,
                format_amount(diff.abs(), symbol)
            ));
        } else {
            output.push_str(&format!(
                "{} owes {} {}\n",
                first,
                second,
                format_amount(diff.abs(), symbol)
            ));
        }
        return output;
    }

    output.push_str("Balances\n--------\n");
    if participants.is_empty() {
        output.push_str("No participants.\n");
        return output;
    }

    let name_width = participants.iter().map(|p| p.len()).max().unwrap_or(4);
    for participant in participants {
        let balance = balances.get(participant).unwrap_or(0.0);
        let status = if is_settled(balance) {
            "is settled.".to_string()
        } else if balance > 0.0 {
            format!("is owed {}", format_amount(balance, symbol))
        } else {
            format!("owes {}", format_amount(balance.abs(), symbol))
        };
        output.push_str(&format!(
            "{:<name_width$}  {}\n",
            participant,
            status,
            name_width = name_width
        ));
    }

    output
}

/// Format a settlement summary, one line per participant
pub fn format_summary(summary: &Summary) -> String {
    match summary {
        Summary::Informational(info) => format!("{}\n", info),
        Summary::Lines(lines) => lines
            .iter()
            .map(|line| format!("  {}\n", line))
            .collect(),
    }
}
