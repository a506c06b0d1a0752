//! Strictly ordered preference lists with O(1) rank lookup.
//!
//! ## Layout
//!
//! A `PreferenceList` stores two views of the same total order:
//!
//! ```text
//! order: [r2, r0, r1]     rank -> counterpart
//! ranks: [1, 2, 0]        counterpart -> rank
//! ```
//!
//! Rank 0 is the most preferred counterpart. The rank table is built once
//! at construction so "does A prefer X over Y" is two array reads.

use crate::error::MalformedInstance;
use crate::types::{Agent, Side};

/// Sentinel marking a rank slot not yet filled during construction
const UNRANKED: u32 = u32::MAX;

/// One agent's total strict ranking of the opposite universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceList<T> {
    /// Counterparts from most to least preferred
    order: Vec<T>,

    /// `ranks[c]` is the rank of counterpart `c`
    ranks: Vec<u32>,
}

impl<T: Agent> PreferenceList<T> {
    /// Build a list from zero-based counterpart indices.
    ///
    /// `owner_side` and `owner_index` only locate the list in error reports.
    ///
    /// # Errors
    ///
    /// `WrongLength`, `OutOfRange` or `DuplicateEntry` unless `entries` is a
    /// permutation of `0..size`.
    pub fn new(
        entries: &[u32],
        size: usize,
        owner_side: Side,
        owner_index: usize,
    ) -> Result<Self, MalformedInstance> {
        if entries.len() != size {
            return Err(MalformedInstance::WrongLength {
                side: owner_side,
                index: owner_index,
                expected: size,
                actual: entries.len(),
            });
        }

        let mut ranks = vec![UNRANKED; size];
        for (rank, &entry) in entries.iter().enumerate() {
            let slot = ranks
                .get_mut(entry as usize)
                .ok_or(MalformedInstance::OutOfRange {
                    side: owner_side,
                    index: owner_index,
                    entry: u64::from(entry),
                    size,
                })?;
            if *slot != UNRANKED {
                return Err(MalformedInstance::DuplicateEntry {
                    side: owner_side,
                    index: owner_index,
                    entry: u64::from(entry),
                });
            }
            // size <= u32::MAX is enforced by the model, so rank fits
            *slot = rank as u32;
        }

        Ok(Self {
            order: entries.iter().copied().map(T::from).collect(),
            ranks,
        })
    }

    /// Number of ranked counterparts
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True for the empty instance only
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Counterpart at `rank`, or None past the end of the list
    #[inline]
    pub fn at(&self, rank: usize) -> Option<T> {
        self.order.get(rank).copied()
    }

    /// Rank of `agent` (0 = most preferred).
    ///
    /// `agent` must belong to the opposite universe; use
    /// [`rank_of`](Self::rank_of) for unchecked identifiers.
    #[inline]
    pub fn rank(&self, agent: T) -> u32 {
        self.ranks[agent.raw() as usize]
    }

    /// Rank of `agent`, or None if it is outside the universe
    #[inline]
    pub fn rank_of(&self, agent: T) -> Option<u32> {
        self.ranks.get(agent.raw() as usize).copied()
    }

    /// Does this agent strictly prefer `a` over `b`?
    #[inline]
    pub fn prefers(&self, a: T, b: T) -> bool {
        self.rank(a) < self.rank(b)
    }

    /// Counterparts strictly preferred over `current`, best first
    pub fn preferred_over(&self, current: T) -> &[T] {
        &self.order[..self.rank(current) as usize]
    }

    /// Counterparts from most to least preferred
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.order
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
