//! Settlement summary
//!
//! A summary is either a single informational message (nothing to settle) or
//! an ordered list of per-participant phrases. Keeping the two apart means a
//! participant who happens to be called `info` is never mistaken for the
//! informational message.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key used for informational summaries in persisted group documents
pub const INFO_KEY: &str = "info";

/// Informational outcomes where no participant owes anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementInfo {
    NoParticipants,
    SingleParticipant,
    BothSettled,
    AllSettled,
}

impl fmt::Display for SettlementInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParticipants => write!(f, "No participants"),
            Self::SingleParticipant => write!(f, "Only one participant; nothing to settle"),
            Self::BothSettled => write!(f, "Both are settled up"),
            Self::AllSettled => write!(f, "All settled"),
        }
    }
}

/// What a single summary line says about its participant
///
/// Amounts are unrounded; they are rendered with two decimals.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryPhrase {
    /// Two-person groups name the counterparty
    OwesTo { creditor: String, amount: f64 },
    /// Net creditor in a larger group
    IsOwed { amount: f64 },
    /// Net debtor in a larger group
    Owes { amount: f64 },
}

impl fmt::Display for SummaryPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OwesTo { creditor, amount } => write!(f, "owes {} {:.2}", creditor, amount),
            Self::IsOwed { amount } => write!(f, "is owed {:.2}", amount),
            Self::Owes { amount } => write!(f, "owes {:.2}", amount),
        }
    }
}

/// One participant's line in a summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub participant: String,
    pub phrase: SummaryPhrase,
}

impl SummaryLine {
    pub fn new(participant: impl Into<String>, phrase: SummaryPhrase) -> Self {
        Self {
            participant: participant.into(),
            phrase,
        }
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.participant, self.phrase)
    }
}

/// Human-readable derivation of balances
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    Informational(SettlementInfo),
    Lines(Vec<SummaryLine>),
}

impl Summary {
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::Informational(_))
    }

    /// Per-participant lines (empty for informational summaries)
    pub fn lines(&self) -> &[SummaryLine] {
        match self {
            Self::Informational(_) => &[],
            Self::Lines(lines) => lines,
        }
    }

    /// Phrase for a participant, if the summary mentions them
    pub fn phrase_for(&self, participant: &str) -> Option<&SummaryPhrase> {
        self.lines()
            .iter()
            .find(|line| line.participant == participant)
            .map(|line| &line.phrase)
    }

    /// Flatten to (key, text) pairs as written to disk
    pub fn entries(&self) -> Vec<(String, String)> {
        match self {
            Self::Informational(info) => vec![(INFO_KEY.to_string(), info.to_string())],
            Self::Lines(lines) => lines
                .iter()
                .map(|line| (line.participant.clone(), line.phrase.to_string()))
                .collect(),
        }
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, text) in &entries {
            map.serialize_entry(key, text)?;
        }
        map.end()
    }
}
