//! Balance CLI command

use crate::config::Settings;
use crate::display::{format_balance, format_summary};
use crate::error::SplitResult;
use crate::services::GroupService;
use crate::storage::Storage;

/// Recompute, persist and print a group's balance
pub fn handle_balance_command(
    storage: &Storage,
    settings: &Settings,
    group: &str,
) -> SplitResult<()> {
    let snapshot = GroupService::new(storage).recompute(group)?;

    print!(
        "{}",
        format_balance(
            &snapshot.group.participants,
            &snapshot.settlement.balances,
            &settings.currency_symbol
        )
    );
    println!();
    println!("Summary");
    println!("-------");
    print!("{}", format_summary(&snapshot.settlement.summary));

    Ok(())
}
