//! Group display formatting

use crate::models::money::format_amount;
use crate::services::GroupSnapshot;

use super::balance::{format_balance, format_summary};

/// Format the list of stored groups
pub fn format_group_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No groups found.\n".to_string();
    }

    let mut output = String::from("Available groups:\n");
    for (i, name) in names.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, name));
    }
    output
}

/// Format a group's details with balances and summary
pub fn format_group_details(snapshot: &GroupSnapshot, symbol: &str) -> String {
    let group = &snapshot.group;
    let total: f64 = group.expenses.iter().map(|e| e.amount).sum();

    let mut output = String::new();
    output.push_str(&format!("Group: {}\n", group.name));
    output.push_str(&format!(
        "  Participants: {}\n",
        group.participants.join(", ")
    ));
    output.push_str(&format!("  Expenses:     {}\n", group.expenses.len()));
    output.push_str(&format!(
        "  Total spent:  {}\n",
        format_amount(total, symbol)
    ));
    output.push('\n');
    output.push_str(&format_balance(
        &group.participants,
        &snapshot.settlement.balances,
        symbol,
    ));
    output.push('\n');
    output.push_str("Summary\n-------\n");
    output.push_str(&format_summary(&snapshot.settlement.summary));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Group};

    #[test]
    fn test_format_group_list() {
        assert_eq!(format_group_list(&[]), "No groups found.\n");

        let output = format_group_list(&["flat".to_string(), "trip".to_string()]);
        assert!(output.contains("  1. flat"));
        assert!(output.contains("  2. trip"));
    }

    #[test]
    fn test_format_group_details() {
        let mut group = Group::new("trip", vec!["A".into(), "B".into(), "C".into()]);
        group.record_expense(Expense::new("A", 90.0));
        group.record_expense(Expense::new("B", 10.0));
        let settlement = group.settle();
        let snapshot = GroupSnapshot { group, settlement };

        let output = format_group_details(&snapshot, "");
        assert!(output.contains("Group: trip"));
        assert!(output.contains("Participants: A, B, C"));
        assert!(output.contains("Total spent:  100.00"));
        assert!(output.contains("Summary"));
        assert!(output.contains("A is owed 85.00"));
    }
}
