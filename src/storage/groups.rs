//! Group repository for JSON storage
//!
//! Each group lives in `groups/<name>.json`. The stored `summary` and
//! `balances` are written for readers of the file but never trusted on load:
//! every load normalizes the expenses and every save recomputes both from
//! participants and expenses, so stored state never lags recorded expenses.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::{Balances, Settlement, Summary};
use crate::error::SplitError;
use crate::models::{normalize_value, Expense, Group};

use super::file_io::{read_json_required, write_json_atomic};

/// Shape read from disk; derived fields are ignored
#[derive(Debug, Default, Deserialize)]
struct StoredGroup {
    #[serde(default)]
    participants: Vec<String>,
    #[serde(default)]
    expenses: Vec<Value>,
}

/// Shape written to disk, keys in display order
#[derive(Debug, Serialize)]
pub struct GroupDocument<'a> {
    pub summary: &'a Summary,
    pub participants: &'a [String],
    pub expenses: &'a [Expense],
    pub balances: &'a Balances,
}

impl<'a> GroupDocument<'a> {
    pub fn new(group: &'a Group, settlement: &'a Settlement) -> Self {
        Self {
            summary: &settlement.summary,
            participants: &group.participants,
            expenses: &group.expenses,
            balances: &settlement.balances,
        }
    }
}

/// Repository for group persistence
pub struct GroupRepository {
    dir: PathBuf,
}

impl GroupRepository {
    /// Create a repository rooted at a groups directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the group files
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// File for a group; names that could escape the groups directory are rejected
    fn path_for(&self, name: &str) -> Result<PathBuf, SplitError> {
        Group::validate_name(name).map_err(|e| SplitError::Validation(e.to_string()))?;
        Ok(self.dir.join(format!("{}.json", name)))
    }

    /// Check whether a group file exists
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|path| path.exists()).unwrap_or(false)
    }

    /// Names of all stored groups, sorted
    pub fn list_names(&self) -> Result<Vec<String>, SplitError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| {
            SplitError::Storage(format!("Failed to read {}: {}", self.dir.display(), e))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| SplitError::Storage(format!("Failed to read directory entry: {}", e)))?
                .path();

            if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Load a group, normalizing every stored expense
    pub fn load(&self, name: &str) -> Result<Group, SplitError> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(SplitError::group_not_found(name));
        }

        let stored: StoredGroup = read_json_required(&path)?;

        Ok(Group {
            name: name.to_string(),
            participants: stored.participants,
            expenses: stored.expenses.iter().map(normalize_value).collect(),
        })
    }

    /// Recompute the settlement and write the group atomically
    pub fn save(&self, group: &Group) -> Result<Settlement, SplitError> {
        let path = self.path_for(&group.name)?;
        let settlement = group.settle();
        write_json_atomic(path, &GroupDocument::new(group, &settlement))?;
        Ok(settlement)
    }
}
