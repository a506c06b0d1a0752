//! A single (proposer, receiver) assignment.
//!
//! ## SSZ Serialization
//!
//! `MatchedPair` derives `SimpleSerialize` so every pair has one canonical
//! byte encoding (two little-endian u32 values, 8 bytes). Matching
//! fingerprints hash these bytes.

use ssz_rs::prelude::*;

use crate::types::{Proposer, Receiver};

/// One entry of a matching, possibly unchecked.
///
/// Pairs read back from a file are not validated against any model; the
/// verifier decides whether they form a stable perfect matching.
///
/// ## Example
///
/// ```
/// use stable_match::types::{MatchedPair, Proposer, Receiver};
///
/// let pair = MatchedPair::new(Proposer(0), Receiver(2));
/// assert_eq!(pair.receiver(), Receiver(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, SimpleSerialize)]
pub struct MatchedPair {
    /// Proposer index (zero-based)
    pub proposer_raw: u32,

    /// Receiver index (zero-based)
    pub receiver_raw: u32,
}

impl MatchedPair {
    /// Create a pair
    pub fn new(proposer: Proposer, receiver: Receiver) -> Self {
        Self {
            proposer_raw: proposer.0,
            receiver_raw: receiver.0,
        }
    }

    /// Get the proposer
    #[inline]
    pub fn proposer(&self) -> Proposer {
        Proposer(self.proposer_raw)
    }

    /// Get the receiver
    #[inline]
    pub fn receiver(&self) -> Receiver {
        Receiver(self.receiver_raw)
    }
}

impl From<(Proposer, Receiver)> for MatchedPair {
    fn from((proposer, receiver): (Proposer, Receiver)) -> Self {
        Self::new(proposer, receiver)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_accessors() {
        let pair = MatchedPair::new(Proposer(3), Receiver(5));
        assert_eq!(pair.proposer(), Proposer(3));
        assert_eq!(pair.receiver(), Receiver(5));
        assert_eq!(MatchedPair::from((Proposer(3), Receiver(5))), pair);
    }

    #[test]
    fn test_pair_ssz_size() {
        let pair = MatchedPair::new(Proposer(1), Receiver(2));
        let bytes = ssz_rs::serialize(&pair).expect("Failed to serialize");

        // Expected size: 4 + 4 = 8 bytes
        assert_eq!(bytes.len(), 8, "MatchedPair should serialize to 8 bytes");
        assert_eq!(bytes, vec![1, 0, 0, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn test_pair_ssz_roundtrip() {
        let pair = MatchedPair::new(Proposer(7), Receiver(9));
        let bytes = ssz_rs::serialize(&pair).expect("Failed to serialize");
        let decoded: MatchedPair = ssz_rs::deserialize(&bytes).expect("Failed to deserialize");
        assert_eq!(pair, decoded);
    }
}
