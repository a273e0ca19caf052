//! Balance engine
//!
//! Converts a group's participants and expenses into net balances and a
//! settlement summary. The computation is pure: no I/O, no hidden state, and
//! it never fails. Malformed input degrades instead of erroring:
//!
//! - an expense whose payer is not a participant is ignored
//! - amounts are expected to be normalized already (see
//!   [`crate::models::normalize_expense`]), so a bad amount arrives as `0.0`
//! - zero or one participant yields an informational summary
//!
//! Balances and summary are always recomputed in full from the inputs and
//! never patched incrementally.

mod ledger;
mod strategy;
mod summary;

pub use ledger::{Balances, NetPositions};
pub use strategy::SplitStrategy;
pub use summary::{SettlementInfo, Summary, SummaryLine, SummaryPhrase, INFO_KEY};

use crate::models::Expense;

/// Result of a balance computation
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// Rule that produced this settlement
    pub strategy: SplitStrategy,

    /// Full-precision nets
    pub net: NetPositions,

    /// Nets rounded to cents
    pub balances: Balances,

    pub summary: Summary,
}

/// Compute balances and summary for a group
///
/// `participants` must be in the group's recorded order; with two people the
/// order decides which name appears as debtor and which as creditor.
pub fn compute_balances<S: AsRef<str>>(participants: &[S], expenses: &[Expense]) -> Settlement {
    let names: Vec<String> = participants.iter().map(|p| p.as_ref().to_string()).collect();

    let strategy = SplitStrategy::for_participant_count(names.len());
    let net = strategy.accumulate(&names, expenses);
    let summary = strategy.summarize(&names, &net);
    let balances = Balances::from_net(&net);

    Settlement {
        strategy,
        net,
        balances,
        summary,
    }
}
