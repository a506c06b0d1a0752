//! Verifier findings and the aggregated verdict.
//!
//! ## Report Lines
//!
//! Violations are plain data; [`Violation::describe`] renders them in
//! hospital/student terms for humans. Blocking pairs are always written
//! hospital first, whichever side proposed:
//!
//! ```text
//! INVALID: Hospital 3 is not matched
//! INVALID: Student 2 is matched to Hospital 1 and Hospital 4
//! INVALID: Unknown Student 9
//! UNSTABLE: Blocking pair (Hospital 1, Student 2)
//! ```

use std::fmt::Write as _;

use crate::types::{Proposer, Receiver, Side};

/// A reason the pairs do not form a perfect matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchingDefect {
    /// The proposer appears in no pair
    UnmatchedProposer(Proposer),

    /// The receiver appears in no pair
    UnmatchedReceiver(Receiver),

    /// The proposer appears in several pairs
    DuplicateProposer {
        proposer: Proposer,
        receivers: Vec<Receiver>,
    },

    /// The receiver appears in several pairs
    DuplicateReceiver {
        receiver: Receiver,
        proposers: Vec<Proposer>,
    },
}

/// An identifier that does not exist in the preference model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnknownAgent {
    Proposer(Proposer),
    Receiver(Receiver),
}

/// One problem found by the verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Some agent is unmatched or matched more than once
    NotAPerfectMatching(MatchingDefect),

    /// A pair references an agent outside the model
    UnknownAgent(UnknownAgent),

    /// Both agents prefer each other over their assigned partners
    BlockingPair { proposer: Proposer, receiver: Receiver },
}

impl Violation {
    /// Is this a stability (rather than structural) finding?
    pub fn is_blocking_pair(&self) -> bool {
        matches!(self, Violation::BlockingPair { .. })
    }

    /// Render as a report line, naming sides from the proposer's point of view.
    pub fn describe(&self, proposing: Side) -> String {
        let receiving = proposing.opposite();
        match self {
            Violation::NotAPerfectMatching(defect) => match defect {
                MatchingDefect::UnmatchedProposer(p) => {
                    format!("INVALID: {proposing} {p} is not matched")
                }
                MatchingDefect::UnmatchedReceiver(r) => {
                    format!("INVALID: {receiving} {r} is not matched")
                }
                MatchingDefect::DuplicateProposer {
                    proposer,
                    receivers,
                } => format!(
                    "INVALID: {proposing} {proposer} is matched to {}",
                    join_agents(receiving, receivers)
                ),
                MatchingDefect::DuplicateReceiver {
                    receiver,
                    proposers,
                } => format!(
                    "INVALID: {receiving} {receiver} is matched to {}",
                    join_agents(proposing, proposers)
                ),
            },
            Violation::UnknownAgent(UnknownAgent::Proposer(p)) => {
                format!("INVALID: Unknown {proposing} {p}")
            }
            Violation::UnknownAgent(UnknownAgent::Receiver(r)) => {
                format!("INVALID: Unknown {receiving} {r}")
            }
            Violation::BlockingPair { proposer, receiver } => match proposing {
                Side::Hospital => {
                    format!("UNSTABLE: Blocking pair (Hospital {proposer}, Student {receiver})")
                }
                Side::Student => {
                    format!("UNSTABLE: Blocking pair (Hospital {receiver}, Student {proposer})")
                }
            },
        }
    }
}

/// "Hospital 1 and Hospital 4", "Student 1, Student 2 and Student 5"
fn join_agents<T: std::fmt::Display>(side: Side, agents: &[T]) -> String {
    let mut out = String::new();
    for (i, agent) in agents.iter().enumerate() {
        if i > 0 {
            out.push_str(if i + 1 == agents.len() { " and " } else { ", " });
        }
        let _ = write!(out, "{side} {agent}");
    }
    out
}

/// Verdict of one verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    /// A perfect matching with no blocking pair
    Valid,

    /// Every violation found, in a deterministic order
    Invalid(Vec<Violation>),
}

impl VerificationResult {
    /// `Valid` for an empty list, `Invalid` otherwise
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            VerificationResult::Valid
        } else {
            VerificationResult::Invalid(violations)
        }
    }

    /// Check if the matching passed every check
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationResult::Valid)
    }

    /// All violations (empty when valid)
    pub fn violations(&self) -> &[Violation] {
        match self {
            VerificationResult::Valid => &[],
            VerificationResult::Invalid(violations) => violations,
        }
    }

    /// Blocking pairs only, in discovery order
    pub fn blocking_pairs(&self) -> impl Iterator<Item = (Proposer, Receiver)> + '_ {
        self.violations().iter().filter_map(|v| match v {
            Violation::BlockingPair { proposer, receiver } => Some((*proposer, *receiver)),
            _ => None,
        })
    }

    /// Human-readable report, one line per violation.
    ///
    /// A valid result is the single line `VALID STABLE`.
    pub fn report_lines(&self, proposing: Side) -> Vec<String> {
        match self {
            VerificationResult::Valid => vec!["VALID STABLE".to_string()],
            VerificationResult::Invalid(violations) => {
                violations.iter().map(|v| v.describe(proposing)).collect()
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
