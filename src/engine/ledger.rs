//! Net positions and rounded balances
//!
//! [`NetPositions`] holds full-precision nets while expenses are applied;
//! [`Balances`] is the rounded view handed to storage and display. Both keep
//! one entry per participant in participant order.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::money::round_cents;

/// Full-precision net amount per participant
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetPositions {
    entries: Vec<(String, f64)>,
}

impl NetPositions {
    /// Start every participant at zero
    pub fn zeroed(participants: &[String]) -> Self {
        Self {
            entries: participants.iter().map(|p| (p.clone(), 0.0)).collect(),
        }
    }

    /// Check whether a participant is tracked
    pub fn contains(&self, participant: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == participant)
    }

    /// Add to a participant's net (no-op for unknown names)
    pub fn credit(&mut self, participant: &str, amount: f64) {
        if let Some((_, net)) = self.entries.iter_mut().find(|(name, _)| name == participant) {
            *net += amount;
        }
    }

    /// Subtract from a participant's net (no-op for unknown names)
    pub fn debit(&mut self, participant: &str, amount: f64) {
        self.credit(participant, -amount);
    }

    /// Net for a participant
    pub fn get(&self, participant: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == participant)
            .map(|(_, net)| *net)
    }

    /// Iterate over (participant, net) in participant order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, net)| (name.as_str(), *net))
    }

    /// Sum of all nets; zero up to floating point error
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, net)| net).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Net balance per participant rounded to cents
///
/// Positive means the participant is owed money, negative means they owe.
/// Serializes as a JSON object keyed by participant name, in participant order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Balances {
    entries: Vec<(String, f64)>,
}

impl Balances {
    /// Round every net position to cents
    pub fn from_net(net: &NetPositions) -> Self {
        Self {
            entries: net
                .iter()
                .map(|(name, amount)| (name.to_string(), round_cents(amount)))
                .collect(),
        }
    }

    /// Balance for a participant
    pub fn get(&self, participant: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == participant)
            .map(|(_, amount)| *amount)
    }

    /// Iterate over (participant, balance) in participant order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Balances {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, amount) in &self.entries {
            map.serialize_entry(name, amount)?;
        }
        map.end()
    }
}
