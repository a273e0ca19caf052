//! Group model
//!
//! A group is a named set of participants plus the expenses they recorded.
//! Participants are fixed once the group exists; expenses only grow.

use std::collections::HashSet;
use std::fmt;

use super::expense::Expense;
use crate::engine::{compute_balances, Settlement};

/// A named expense-sharing group
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Group name (also the stem of its file name)
    pub name: String,

    /// Participant names in their recorded order
    pub participants: Vec<String>,

    /// Expenses in the order they were recorded
    pub expenses: Vec<Expense>,
}

impl Group {
    /// Create a group with no expenses
    pub fn new(name: impl Into<String>, participants: Vec<String>) -> Self {
        Self {
            name: name.into(),
            participants,
            expenses: Vec::new(),
        }
    }

    /// Check whether a participant with this exact name exists
    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    /// Append an expense
    pub fn record_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Derive balances and summary from the current participants and expenses
    pub fn settle(&self) -> Settlement {
        compute_balances(&self.participants, &self.expenses)
    }

    /// Validate a group name
    ///
    /// The name doubles as a file stem, so path separators are refused.
    pub fn validate_name(name: &str) -> Result<(), GroupValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(GroupValidationError::EmptyName);
        }
        if trimmed.contains(|c| c == '/' || c == '\\') || trimmed.starts_with('.') {
            return Err(GroupValidationError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    /// Validate and trim participant names for a new group
    pub fn validate_participants(names: &[String]) -> Result<Vec<String>, GroupValidationError> {
        let mut seen = HashSet::new();
        let mut participants = Vec::with_capacity(names.len());

        for name in names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(GroupValidationError::EmptyParticipant);
            }
            if !seen.insert(trimmed.to_string()) {
                return Err(GroupValidationError::DuplicateParticipant(trimmed.to_string()));
            }
            participants.push(trimmed.to_string());
        }

        if participants.len() < 2 {
            return Err(GroupValidationError::TooFewParticipants(participants.len()));
        }

        Ok(participants)
    }
}

/// Validation errors for group creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupValidationError {
    EmptyName,
    InvalidName(String),
    EmptyParticipant,
    DuplicateParticipant(String),
    TooFewParticipants(usize),
}

impl fmt::Display for GroupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Group name cannot be empty"),
            Self::InvalidName(name) => write!(f, "Invalid group name: {}", name),
            Self::EmptyParticipant => write!(f, "Participant name cannot be empty"),
            Self::DuplicateParticipant(name) => {
                write!(f, "Duplicate participant name: {}", name)
            }
            Self::TooFewParticipants(count) => {
                write!(f, "At least 2 participants required (got {})", count)
            }
        }
    }
}

impl std::error::Error for GroupValidationError {}
