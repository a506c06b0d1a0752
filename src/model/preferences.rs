//! The validated, read-only preference model consumed by the engine and
//! the verifier.
//!
//! ## Invariants
//!
//! - Both universes have the same size n
//! - Every list is a permutation of the opposite universe
//!
//! Construction checks both and fails with [`MalformedInstance`] otherwise;
//! after that the model is never mutated.

use crate::error::MalformedInstance;
use crate::types::{PreferenceList, Proposer, Receiver, Side};

/// Complete strict preferences of both sides.
///
/// ## Example
///
/// ```
/// use stable_match::model::PreferenceModel;
/// use stable_match::types::{Proposer, Receiver, Side};
///
/// let model = PreferenceModel::new(
///     Side::Hospital,
///     &[vec![0, 1], vec![0, 1]],
///     &[vec![1, 0], vec![0, 1]],
/// )
/// .unwrap();
///
/// assert_eq!(model.size(), 2);
/// assert!(model.receiver_prefers(Receiver(0), Proposer(1), Proposer(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceModel {
    /// Side whose agents are proposers
    proposing: Side,

    /// Proposer index -> ranking of receivers
    proposers: Vec<PreferenceList<Receiver>>,

    /// Receiver index -> ranking of proposers
    receivers: Vec<PreferenceList<Proposer>>,
}

impl PreferenceModel {
    /// Validate and build a model from zero-based preference lists.
    ///
    /// `proposer_lists[p]` ranks receivers for proposer `p`;
    /// `receiver_lists[r]` ranks proposers for receiver `r`.
    pub fn new(
        proposing: Side,
        proposer_lists: &[Vec<u32>],
        receiver_lists: &[Vec<u32>],
    ) -> Result<Self, MalformedInstance> {
        let size = proposer_lists.len();
        if receiver_lists.len() != size {
            return Err(MalformedInstance::SizeMismatch {
                proposers: size,
                receivers: receiver_lists.len(),
            });
        }
        if u32::try_from(size).is_err() {
            return Err(MalformedInstance::TooLarge { size });
        }

        let proposers = proposer_lists
            .iter()
            .enumerate()
            .map(|(i, entries)| PreferenceList::new(entries, size, proposing, i))
            .collect::<Result<Vec<_>, _>>()?;

        let receivers = receiver_lists
            .iter()
            .enumerate()
            .map(|(i, entries)| PreferenceList::new(entries, size, proposing.opposite(), i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            proposing,
            proposers,
            receivers,
        })
    }

    // ========================================================================
    // Shape
    // ========================================================================

    /// Universe size n (same for both sides)
    #[inline]
    pub fn size(&self) -> usize {
        self.proposers.len()
    }

    /// True for the empty instance
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.proposers.is_empty()
    }

    /// Side whose agents propose
    #[inline]
    pub fn proposing_side(&self) -> Side {
        self.proposing
    }

    /// Side whose agents receive proposals
    #[inline]
    pub fn receiving_side(&self) -> Side {
        self.proposing.opposite()
    }

    /// All proposers in index order
    pub fn proposers(&self) -> impl Iterator<Item = Proposer> {
        (0..self.size() as u32).map(Proposer)
    }

    /// All receivers in index order
    pub fn receivers(&self) -> impl Iterator<Item = Receiver> {
        (0..self.size() as u32).map(Receiver)
    }

    /// Is `proposer` part of this instance?
    #[inline]
    pub fn contains_proposer(&self, proposer: Proposer) -> bool {
        proposer.index() < self.size()
    }

    /// Is `receiver` part of this instance?
    #[inline]
    pub fn contains_receiver(&self, receiver: Receiver) -> bool {
        receiver.index() < self.size()
    }

    // ========================================================================
    // Preference queries
    // ========================================================================

    /// Preference list of a proposer
    #[inline]
    pub fn proposer_prefs(&self, proposer: Proposer) -> &PreferenceList<Receiver> {
        &self.proposers[proposer.index()]
    }

    /// Preference list of a receiver
    #[inline]
    pub fn receiver_prefs(&self, receiver: Receiver) -> &PreferenceList<Proposer> {
        &self.receivers[receiver.index()]
    }

    /// Does `proposer` strictly prefer receiver `a` over receiver `b`?
    #[inline]
    pub fn proposer_prefers(&self, proposer: Proposer, a: Receiver, b: Receiver) -> bool {
        self.proposer_prefs(proposer).prefers(a, b)
    }

    /// Does `receiver` strictly prefer proposer `a` over proposer `b`?
    #[inline]
    pub fn receiver_prefers(&self, receiver: Receiver, a: Proposer, b: Proposer) -> bool {
        self.receiver_prefs(receiver).prefers(a, b)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
