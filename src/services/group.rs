//! Group service
//!
//! Creation, listing and loading of groups. Every group handed out by this
//! service comes with a settlement computed from its current expenses.

use crate::audit::EntityType;
use crate::engine::Settlement;
use crate::error::{SplitError, SplitResult};
use crate::models::Group;
use crate::storage::Storage;

/// A group together with its freshly computed settlement
#[derive(Debug, Clone)]
pub struct GroupSnapshot {
    pub group: Group,
    pub settlement: Settlement,
}

/// Service for group management
pub struct GroupService<'a> {
    storage: &'a Storage,
}

impl<'a> GroupService<'a> {
    /// Create a new group service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a new group
    pub fn create(&self, name: &str, participants: &[String]) -> SplitResult<GroupSnapshot> {
        Group::validate_name(name).map_err(|e| SplitError::Validation(e.to_string()))?;
        let name = name.trim();

        if self.storage.groups.exists(name) {
            return Err(SplitError::Duplicate {
                entity_type: "Group",
                identifier: name.to_string(),
            });
        }

        let participants = Group::validate_participants(participants)
            .map_err(|e| SplitError::Validation(e.to_string()))?;

        let group = Group::new(name, participants);
        let settlement = self.storage.groups.save(&group)?;

        self.storage.log_create(
            EntityType::Group,
            group.name.clone(),
            Some(format!("{} participants", group.participants.len())),
            &group.participants,
        )?;

        Ok(GroupSnapshot { group, settlement })
    }

    /// Names of all groups, sorted
    pub fn list(&self) -> SplitResult<Vec<String>> {
        self.storage.groups.list_names()
    }

    /// Load a group and compute its settlement without writing
    pub fn get(&self, name: &str) -> SplitResult<GroupSnapshot> {
        let group = self.storage.groups.load(name)?;
        let settlement = group.settle();
        Ok(GroupSnapshot { group, settlement })
    }

    /// Load a group, recompute its balances and persist them
    pub fn recompute(&self, name: &str) -> SplitResult<GroupSnapshot> {
        let group = self.storage.groups.load(name)?;
        let settlement = self.storage.groups.save(&group)?;

        self.storage
            .log_recompute(group.name.clone(), &settlement.balances)?;

        Ok(GroupSnapshot { group, settlement })
    }
}
