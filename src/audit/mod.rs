//! Audit logging system for SplitLedger
//!
//! Records group creation, expense appends and balance recomputations in an
//! append-only, line-delimited JSON log.
//!
//! - `AuditEntry`: one entry with timestamp, operation, entity information and
//!   an optional snapshot of the entity after the operation.
//! - `AuditLogger`: writes and reads entries from the log file.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
