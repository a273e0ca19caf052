//! Storage layer for SplitLedger
//!
//! Provides JSON file storage with atomic writes, automatic directory
//! creation, and the audit log hooks used by the service layer.

pub mod file_io;
pub mod groups;

pub use file_io::{read_json_required, write_json_atomic};
pub use groups::{GroupDocument, GroupRepository};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::SplitPaths;
use crate::config::settings::Settings;
use crate::error::SplitError;

/// Main storage coordinator
pub struct Storage {
    pub groups: GroupRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: SplitPaths, settings: &Settings) -> Result<Self, SplitError> {
        paths.ensure_directories()?;

        Ok(Self {
            groups: GroupRepository::new(paths.groups_dir()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: settings.audit_enabled,
        })
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    fn write_audit(&self, entry: AuditEntry) -> Result<(), SplitError> {
        if self.audit_enabled {
            self.audit.log(&entry)?;
        }
        Ok(())
    }

    /// Log entity creation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        group: impl Into<String>,
        detail: Option<String>,
        entity: &T,
    ) -> Result<(), SplitError> {
        self.write_audit(AuditEntry::create(entity_type, group, detail, entity))
    }

    /// Log an entity appended to a group
    pub fn log_append<T: Serialize>(
        &self,
        entity_type: EntityType,
        group: impl Into<String>,
        detail: Option<String>,
        entity: &T,
    ) -> Result<(), SplitError> {
        self.write_audit(AuditEntry::append(entity_type, group, detail, entity))
    }

    /// Log a recomputation of a group's balances
    pub fn log_recompute<T: Serialize>(
        &self,
        group: impl Into<String>,
        balances: &T,
    ) -> Result<(), SplitError> {
        self.write_audit(AuditEntry::recompute(group, balances))
    }
}
