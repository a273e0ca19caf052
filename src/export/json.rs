//! JSON export of a full group
//!
//! Unlike the stored group document, the export carries the group name,
//! export metadata and both the rounded balances and the summary.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::{Balances, Summary};
use crate::error::{SplitError, SplitResult};
use crate::models::Expense;
use crate::services::GroupSnapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full group export structure
#[derive(Debug, Serialize)]
pub struct GroupExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub group: &'a str,
    pub participants: &'a [String],
    pub expenses: &'a [Expense],
    pub balances: &'a Balances,
    pub summary: &'a Summary,
}

impl<'a> GroupExport<'a> {
    pub fn from_snapshot(snapshot: &'a GroupSnapshot) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            group: &snapshot.group.name,
            participants: &snapshot.group.participants,
            expenses: &snapshot.group.expenses,
            balances: &snapshot.settlement.balances,
            summary: &snapshot.settlement.summary,
        }
    }
}

/// Write a group export as JSON
pub fn export_group_json<W: Write>(
    snapshot: &GroupSnapshot,
    writer: &mut W,
    pretty: bool,
) -> SplitResult<()> {
    let export = GroupExport::from_snapshot(snapshot);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| SplitError::Export(format!("Failed to write JSON: {}", e)))?;

    writeln!(writer).map_err(|e| SplitError::Export(e.to_string()))?;
    Ok(())
}
