use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use splitledger::cli::{
    handle_balance_command, handle_expense_command, handle_export_command, handle_group_command,
    ExpenseCommands, ExportFormat, GroupCommands,
};
use splitledger::config::{paths::DATA_DIR_ENV, Settings, SplitPaths};
use splitledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "splitledger",
    version,
    about = "Track shared expenses and who owes whom",
    long_about = "SplitLedger keeps named groups of people and the expenses each of \
                  them paid for the group, and works out the resulting balances. \
                  Every group is stored as a plain JSON file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Group management commands
    #[command(subcommand)]
    Group(GroupCommands),

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Recompute and show a group's balance
    Balance {
        /// Group name
        group: String,
    },

    /// Export a group to a file
    Export {
        /// Group name
        group: String,

        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output (JSON only)
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Only show entries for this group
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Group(cmd)) => {
            handle_group_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Balance { group }) => {
            handle_balance_command(&storage, &settings, &group)?;
        }
        Some(Commands::Export {
            group,
            output,
            format,
            pretty,
        }) => {
            handle_export_command(&storage, &group, output, format, pretty)?;
        }
        Some(Commands::Log { count, group }) => {
            let entries = match group {
                Some(group) => storage.audit().read_for_group(&group, count)?,
                None => storage.audit().read_recent(count)?,
            };
            if entries.is_empty() {
                println!("No audit log entries.");
            }
            for entry in &entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }
            println!("SplitLedger Configuration");
            println!("=========================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Groups directory: {}", paths.groups_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {:?}", settings.currency_symbol);
            println!("  Timestamp format: {}", settings.timestamp_format);
            println!("  Audit enabled:    {}", settings.audit_enabled);
            println!();
            println!("Set {} to use a different data directory.", DATA_DIR_ENV);
        }
        None => {
            println!("SplitLedger - shared expenses from the command line");
            println!();
            println!("Run 'splitledger --help' for usage information.");
            println!("Run 'splitledger group create <name> <participant>...' to start.");
        }
    }

    Ok(())
}
