//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_balance, format_expense_list};
use crate::error::SplitResult;
use crate::models::money::format_amount;
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense paid by one participant
    Add {
        /// Group name
        group: String,
        /// Payer name, or 1-based position in the participant list
        payer: String,
        /// Amount paid (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the expense was for
        #[arg(short, long)]
        description: Option<String>,
        /// Timestamp to record instead of the current time
        #[arg(short, long)]
        time: Option<String>,
    },
    /// List a group's expenses
    List {
        /// Group name
        group: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SplitResult<()> {
    let service = ExpenseService::new(storage, settings);

    match cmd {
        ExpenseCommands::Add {
            group,
            payer,
            amount,
            description,
            time,
        } => {
            let input = CreateExpenseInput {
                payer,
                amount,
                description,
                timestamp: time,
            };
            let (expense, snapshot) = service.add(&group, input)?;

            println!(
                "Recorded: {} paid {} in '{}'",
                expense.payer,
                format_amount(expense.amount, &settings.currency_symbol),
                snapshot.group.name
            );
            println!();
            print!(
                "{}",
                format_balance(
                    &snapshot.group.participants,
                    &snapshot.settlement.balances,
                    &settings.currency_symbol
                )
            );
        }

        ExpenseCommands::List { group } => {
            let expenses = service.list(&group)?;
            print!(
                "{}",
                format_expense_list(&expenses, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
