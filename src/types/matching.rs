//! Perfect matchings between proposers and receivers.

use crate::types::{MatchedPair, Proposer, Receiver, Side};

/// A bijection between proposers and receivers.
///
/// Both directions are stored so partner lookup is O(1) from either side.
/// A `Matching` is only ever built from a verified bijection: either by the
/// engine or through [`Matching::try_from_pairs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    /// Which real-world side plays the proposer role
    proposing: Side,

    /// `receivers[p]` is the partner of proposer `p`
    receivers: Vec<Receiver>,

    /// `proposers[r]` is the partner of receiver `r`
    proposers: Vec<Proposer>,
}

impl Matching {
    /// Build from the engine's final assignment.
    ///
    /// `receivers` must already be a permutation of `0..receivers.len()`.
    pub(crate) fn from_assignment(proposing: Side, receivers: Vec<Receiver>) -> Self {
        let mut proposers = vec![Proposer::default(); receivers.len()];
        for (p, r) in receivers.iter().enumerate() {
            proposers[r.index()] = Proposer(p as u32);
        }
        Self {
            proposing,
            receivers,
            proposers,
        }
    }

    /// Build from unchecked pairs.
    ///
    /// Returns None unless the pairs cover every proposer and every receiver
    /// in `0..size` exactly once. Use the verifier to learn why.
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::types::{Matching, MatchedPair, Proposer, Receiver, Side};
    ///
    /// let pairs = [
    ///     MatchedPair::new(Proposer(1), Receiver(0)),
    ///     MatchedPair::new(Proposer(0), Receiver(1)),
    /// ];
    /// let matching = Matching::try_from_pairs(Side::Hospital, 2, &pairs).unwrap();
    /// assert_eq!(matching.receiver_of(Proposer(0)), Receiver(1));
    ///
    /// assert!(Matching::try_from_pairs(Side::Hospital, 3, &pairs).is_none());
    /// ```
    pub fn try_from_pairs(proposing: Side, size: usize, pairs: &[MatchedPair]) -> Option<Self> {
        if pairs.len() != size {
            return None;
        }

        let mut receivers: Vec<Option<Receiver>> = vec![None; size];
        let mut proposers: Vec<Option<Proposer>> = vec![None; size];
        for pair in pairs {
            let slot_r = receivers.get_mut(pair.proposer().index())?;
            let slot_p = proposers.get_mut(pair.receiver().index())?;
            if slot_r.is_some() || slot_p.is_some() {
                return None;
            }
            *slot_r = Some(pair.receiver());
            *slot_p = Some(pair.proposer());
        }

        // size distinct proposers each took a distinct receiver: all slots are filled
        Some(Self {
            proposing,
            receivers: receivers.into_iter().collect::<Option<Vec<_>>>()?,
            proposers: proposers.into_iter().collect::<Option<Vec<_>>>()?,
        })
    }

    /// Number of pairs (equals the universe size)
    #[inline]
    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    /// True for the matching of the empty instance
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }

    /// Which side proposed
    #[inline]
    pub fn proposing_side(&self) -> Side {
        self.proposing
    }

    /// Partner of a proposer
    #[inline]
    pub fn receiver_of(&self, proposer: Proposer) -> Receiver {
        self.receivers[proposer.index()]
    }

    /// Partner of a receiver
    #[inline]
    pub fn proposer_of(&self, receiver: Receiver) -> Proposer {
        self.proposers[receiver.index()]
    }

    /// All pairs, ordered by proposer
    pub fn pairs(&self) -> impl Iterator<Item = MatchedPair> + '_ {
        self.receivers
            .iter()
            .enumerate()
            .map(|(p, &r)| MatchedPair::new(Proposer(p as u32), r))
    }

    /// All pairs as zero-based `(hospital, student)` indices, ordered by hospital.
    ///
    /// This is the orientation of matching files regardless of which side
    /// proposed.
    pub fn hospital_student_pairs(&self) -> Vec<(u32, u32)> {
        match self.proposing {
            Side::Hospital => self.pairs().map(|m| (m.proposer_raw, m.receiver_raw)).collect(),
            Side::Student => self
                .proposers
                .iter()
                .enumerate()
                .map(|(r, p)| (r as u32, p.0))
                .collect(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
