//! Splitting rules
//!
//! The rule is picked once per computation from the participant count:
//!
//! - 0 or 1 participants: [`SplitStrategy::Degenerate`], nothing to settle
//! - 2 participants: [`SplitStrategy::DirectionalPair`], whoever did not pay
//!   owes the full amount
//! - 3 or more: [`SplitStrategy::EqualSplitAmongOthers`], each non-payer owes
//!   `amount / (n - 1)`
//!
//! Expenses whose payer is not a participant contribute nothing.

use std::cmp::Ordering;

use super::ledger::NetPositions;
use super::summary::{SettlementInfo, Summary, SummaryLine, SummaryPhrase};
use crate::models::money::{is_settled, SETTLED_EPSILON};
use crate::models::Expense;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStrategy {
    Degenerate,
    DirectionalPair,
    EqualSplitAmongOthers,
}

impl SplitStrategy {
    /// Select the rule for a group of `count` participants
    pub fn for_participant_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::Degenerate,
            2 => Self::DirectionalPair,
            _ => Self::EqualSplitAmongOthers,
        }
    }

    /// Apply every expense to a zeroed set of nets
    pub fn accumulate(&self, participants: &[String], expenses: &[Expense]) -> NetPositions {
        let mut net = NetPositions::zeroed(participants);

        match self {
            Self::Degenerate => {}
            Self::DirectionalPair => {
                let [first, second] = participants else {
                    return net;
                };
                for expense in expenses {
                    if expense.payer == *first {
                        net.credit(first, expense.amount);
                        net.debit(second, expense.amount);
                    } else if expense.payer == *second {
                        net.credit(second, expense.amount);
                        net.debit(first, expense.amount);
                    }
                }
            }
            Self::EqualSplitAmongOthers => {
                let others = participants.len().saturating_sub(1);
                if others == 0 {
                    return net;
                }
                for expense in expenses {
                    if !net.contains(&expense.payer) {
                        continue;
                    }
                    let share = expense.amount / others as f64;
                    for participant in participants {
                        if *participant == expense.payer {
                            net.credit(participant, expense.amount);
                        } else {
                            net.debit(participant, share);
                        }
                    }
                }
            }
        }

        net
    }

    /// Turn nets into a summary
    pub fn summarize(&self, participants: &[String], net: &NetPositions) -> Summary {
        match self {
            Self::Degenerate => {
                if participants.is_empty() {
                    Summary::Informational(SettlementInfo::NoParticipants)
                } else {
                    Summary::Informational(SettlementInfo::SingleParticipant)
                }
            }
            Self::DirectionalPair => {
                let [first, second] = participants else {
                    return Summary::Informational(SettlementInfo::BothSettled);
                };
                let diff = net.get(first).unwrap_or(0.0);

                if is_settled(diff) {
                    Summary::Informational(SettlementInfo::BothSettled)
                } else if diff > 0.0 {
                    Summary::Lines(vec![SummaryLine::new(
                        second.clone(),
                        SummaryPhrase::OwesTo {
                            creditor: first.clone(),
                            amount: diff.abs(),
                        },
                    )])
                } else {
                    Summary::Lines(vec![SummaryLine::new(
                        first.clone(),
                        SummaryPhrase::OwesTo {
                            creditor: second.clone(),
                            amount: diff.abs(),
                        },
                    )])
                }
            }
            Self::EqualSplitAmongOthers => summarize_many(net),
        }
    }
}

fn summarize_many(net: &NetPositions) -> Summary {
    let mut creditors: Vec<(&str, f64)> = net
        .iter()
        .filter(|(_, amount)| *amount > SETTLED_EPSILON)
        .collect();
    let mut debtors: Vec<(&str, f64)> = net
        .iter()
        .filter(|(_, amount)| *amount < -SETTLED_EPSILON)
        .map(|(name, amount)| (name, -amount))
        .collect();

    if creditors.is_empty() && debtors.is_empty() {
        return Summary::Informational(SettlementInfo::AllSettled);
    }

    // Stable sorts: equal amounts keep participant order
    creditors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    debtors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let lines = creditors
        .into_iter()
        .map(|(name, amount)| SummaryLine::new(name, SummaryPhrase::IsOwed { amount }))
        .chain(
            debtors
                .into_iter()
                .map(|(name, amount)| SummaryLine::new(name, SummaryPhrase::Owes { amount })),
        )
        .collect();

    Summary::Lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participants(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selection_by_count() {
        assert_eq!(SplitStrategy::for_participant_count(0), SplitStrategy::Degenerate);
        assert_eq!(SplitStrategy::for_participant_count(1), SplitStrategy::Degenerate);
        assert_eq!(
            SplitStrategy::for_participant_count(2),
            SplitStrategy::DirectionalPair
        );
        assert_eq!(
            SplitStrategy::for_participant_count(3),
            SplitStrategy::EqualSplitAmongOthers
        );
        assert_eq!(
            SplitStrategy::for_participant_count(12),
            SplitStrategy::EqualSplitAmongOthers
        );
    }

    #[test]
    fn test_degenerate_ignores_expenses() {
        let people = participants(&["Solo"]);
        let net = SplitStrategy::Degenerate.accumulate(&people, &[Expense::new("Solo", 50.0)]);
        assert_eq!(net.get("Solo"), Some(0.0));
    }

    #[test]
    fn test_pair_second_payer() {
        let people = participants(&["Garuda", "Agusta"]);
        let net = SplitStrategy::DirectionalPair
            .accumulate(&people, &[Expense::new("Agusta", 250.0)]);

        assert_eq!(net.get("Agusta"), Some(250.0));
        assert_eq!(net.get("Garuda"), Some(-250.0));

        let summary = SplitStrategy::DirectionalPair.summarize(&people, &net);
        assert_eq!(
            summary.phrase_for("Garuda").map(|p| p.to_string()),
            Some("owes Agusta 250.00".to_string())
        );
        assert_eq!(summary.lines().len(), 1);
    }

    #[test]
    fn test_equal_split_tie_keeps_participant_order() {
        let people = participants(&["A", "B", "C", "D"]);
        let expenses = vec![Expense::new("D", 30.0)];
        let strategy = SplitStrategy::EqualSplitAmongOthers;
        let summary = strategy.summarize(&people, &strategy.accumulate(&people, &expenses));

        let order: Vec<_> = summary
            .lines()
            .iter()
            .map(|line| line.participant.as_str())
            .collect();
        assert_eq!(order, vec!["D", "A", "B", "C"]);
    }

    #[test]
    fn test_equal_split_sorts_by_magnitude() {
        let people = participants(&["A", "B", "C"]);
        let expenses = vec![Expense::new("A", 30.0), Expense::new("B", 90.0)];
        let strategy = SplitStrategy::EqualSplitAmongOthers;
        let net = strategy.accumulate(&people, &expenses);

        // A: +30 - 45 = -15, B: +90 - 15 = 75, C: -15 - 45 = -60
        assert_eq!(net.get("A"), Some(-15.0));
        assert_eq!(net.get("B"), Some(75.0));
        assert_eq!(net.get("C"), Some(-60.0));

        let summary = strategy.summarize(&people, &net);
        let rendered: Vec<_> = summary.lines().iter().map(|l| l.to_string()).collect();
        assert_eq!(rendered, vec!["B is owed 75.00", "C owes 60.00", "A owes 15.00"]);
    }
}
