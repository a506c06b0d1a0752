//! Deferred-acceptance (Gale–Shapley) matching engine.
//!
//! ## Algorithm
//!
//! Every proposer starts free with its pointer at rank 0. While a free
//! proposer exists, the lowest-index one proposes to the next receiver on
//! its list. The receiver keeps whichever of its current partner and the
//! new proposer it ranks higher; the loser becomes (or stays) free.
//!
//! ## Determinism
//!
//! Free proposers are kept in a min-heap, so the proposer that moves next is
//! always the lowest free index. The final matching does not depend on this
//! order, but the proposal sequence (and therefore the trace log and the
//! statistics) does.
//!
//! ## Complexity
//!
//! Each proposer proposes to each receiver at most once: O(n²) proposals,
//! each costing O(log n) heap work and O(1) rank comparisons.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::error::MatchError;
use crate::model::PreferenceModel;
use crate::types::{Matching, Proposer, Receiver};

/// Result of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The proposer-optimal stable matching
    pub matching: Matching,

    /// Total proposals made
    pub proposals: u64,

    /// Proposals turned down because the receiver kept its partner
    pub rejections: u64,

    /// Proposals that broke an existing engagement
    pub displacements: u64,
}

/// Deferred-acceptance engine.
///
/// The engine itself holds only lifetime counters; all per-run working
/// state is local to [`MatchingEngine::run`], so one engine can process any
/// number of independent models.
///
/// ## Example
///
/// ```
/// use stable_match::engine::MatchingEngine;
/// use stable_match::model::Instance;
/// use stable_match::types::{Proposer, Receiver, Side};
///
/// let instance = Instance::new(
///     vec![vec![0, 1], vec![0, 1]],
///     vec![vec![0, 1], vec![0, 1]],
/// );
/// let model = instance.model(Side::Hospital).unwrap();
///
/// let mut engine = MatchingEngine::new();
/// let outcome = engine.run(&model).unwrap();
///
/// assert_eq!(outcome.matching.receiver_of(Proposer(0)), Receiver(0));
/// assert_eq!(outcome.matching.receiver_of(Proposer(1)), Receiver(1));
/// assert_eq!(outcome.proposals, 3);
/// ```
#[derive(Debug, Default)]
pub struct MatchingEngine {
    /// Completed runs
    runs: u64,

    /// Proposals across all completed runs
    total_proposals: u64,
}

impl MatchingEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful runs so far
    #[inline]
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Proposals made across all successful runs
    #[inline]
    pub fn total_proposals(&self) -> u64 {
        self.total_proposals
    }

    /// Run deferred acceptance on `model`.
    ///
    /// # Errors
    ///
    /// [`MatchError::ExhaustedProposer`] if a proposer runs out of receivers
    /// while free. A validated model never triggers it.
    pub fn run(&mut self, model: &PreferenceModel) -> Result<MatchOutcome, MatchError> {
        let n = model.size();

        let mut next_rank = vec![0usize; n];
        let mut receiver_of: Vec<Option<Receiver>> = vec![None; n];
        let mut proposer_of: Vec<Option<Proposer>> = vec![None; n];
        let mut free: BinaryHeap<Reverse<Proposer>> = model.proposers().map(Reverse).collect();

        let mut proposals = 0u64;
        let mut rejections = 0u64;
        let mut displacements = 0u64;

        while let Some(Reverse(proposer)) = free.pop() {
            let rank = next_rank[proposer.index()];
            let Some(receiver) = model.proposer_prefs(proposer).at(rank) else {
                return Err(MatchError::ExhaustedProposer { proposer });
            };
            next_rank[proposer.index()] = rank + 1;
            proposals += 1;

            match proposer_of[receiver.index()] {
                None => {
                    trace!(%proposer, %receiver, rank, "accepted by free receiver");
                }
                Some(current) if model.receiver_prefers(receiver, proposer, current) => {
                    trace!(%proposer, %receiver, displaced = %current, "accepted, partner displaced");
                    receiver_of[current.index()] = None;
                    free.push(Reverse(current));
                    displacements += 1;
                }
                Some(current) => {
                    trace!(%proposer, %receiver, kept = %current, "rejected");
                    free.push(Reverse(proposer));
                    rejections += 1;
                    continue;
                }
            }

            receiver_of[proposer.index()] = Some(receiver);
            proposer_of[receiver.index()] = Some(proposer);
        }

        // The heap only empties once every proposer holds a receiver
        let receivers = receiver_of
            .into_iter()
            .enumerate()
            .map(|(p, r)| {
                r.ok_or(MatchError::ExhaustedProposer {
                    proposer: Proposer(p as u32),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.runs += 1;
        self.total_proposals += proposals;

        debug!(
            size = n,
            proposing = %model.proposing_side(),
            proposals,
            rejections,
            displacements,
            "deferred acceptance complete"
        );

        Ok(MatchOutcome {
            matching: Matching::from_assignment(model.proposing_side(), receivers),
            proposals,
            rejections,
            displacements,
        })
    }
}

/// Compute the proposer-optimal stable matching of `model`.
///
/// Shorthand for a one-off [`MatchingEngine::run`] that keeps only the
/// matching.
pub fn compute_stable_matching(model: &PreferenceModel) -> Result<Matching, MatchError> {
    MatchingEngine::new().run(model).map(|outcome| outcome.matching)
}

// ============================================================================
// Unit Tests
// ============================================================================
