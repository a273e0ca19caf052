//! Group CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_group_details, format_group_list};
use crate::error::SplitResult;
use crate::services::GroupService;
use crate::storage::Storage;

/// Group subcommands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// List all groups
    List,
    /// Create a new group
    Create {
        /// Group name
        name: String,
        /// Participant names (at least two)
        #[arg(required = true, num_args = 1..)]
        participants: Vec<String>,
    },
    /// Show group details, balances and summary
    Show {
        /// Group name
        name: String,
    },
}

/// Handle a group command
pub fn handle_group_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GroupCommands,
) -> SplitResult<()> {
    let service = GroupService::new(storage);

    match cmd {
        GroupCommands::List => {
            let names = service.list()?;
            print!("{}", format_group_list(&names));
        }

        GroupCommands::Create { name, participants } => {
            let snapshot = service.create(&name, &participants)?;
            println!(
                "Created group '{}' with participants: {}",
                snapshot.group.name,
                snapshot.group.participants.join(", ")
            );
        }

        GroupCommands::Show { name } => {
            let snapshot = service.get(&name)?;
            print!(
                "{}",
                format_group_details(&snapshot, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
