//! CLI command for group export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{SplitError, SplitResult};
use crate::export::{export_expenses_csv, export_group_json};
use crate::services::GroupService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (full group with balances and summary)
    Json,
}

/// Export a group to a file
pub fn handle_export_command(
    storage: &Storage,
    group: &str,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> SplitResult<()> {
    if pretty && matches!(format, ExportFormat::Csv) {
        return Err(SplitError::Validation(
            "--pretty only applies to JSON export".into(),
        ));
    }

    let snapshot = GroupService::new(storage).get(group)?;

    let file = File::create(&output).map_err(|e| {
        SplitError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            export_expenses_csv(&snapshot.group.expenses, &mut writer)?;
            println!(
                "Exported {} expenses to: {}",
                snapshot.group.expenses.len(),
                output.display()
            );
        }
        ExportFormat::Json => {
            export_group_json(&snapshot, &mut writer, pretty)?;
            println!(
                "Group '{}' exported to: {}",
                snapshot.group.name,
                output.display()
            );
        }
    }

    writer
        .flush()
        .map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}
