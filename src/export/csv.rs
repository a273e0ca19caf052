//! CSV export of a group's expenses

use std::io::Write;

use crate::error::SplitResult;
use crate::models::Expense;

/// Write expenses as CSV with a header row
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> SplitResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Payer", "Amount", "Description", "Time"])?;
    for expense in expenses {
        let amount = format!("{:.2}", expense.amount);
        csv_writer.write_record([
            expense.payer.as_str(),
            amount.as_str(),
            expense.description.as_str(),
            expense.timestamp.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_expenses_csv() {
        let expenses = vec![
            Expense::new("Agnes", 12.5)
                .with_description("dinner, drinks")
                .with_timestamp("2025-03-01 20:00:00"),
            Expense::new("Brian", 3.0),
        ];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Payer,Amount,Description,Time");
        assert_eq!(lines[1], "Agnes,12.50,\"dinner, drinks\",2025-03-01 20:00:00");
        assert_eq!(lines[2], "Brian,3.00,,");
    }

    #[test]
    fn test_export_empty() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Payer,Amount,Description,Time\n");
    }
}
