//! Summary statistics and fingerprint of a matching.
//!
//! ## Mean Ranks
//!
//! Mean ranks are one-based (1.0 = everyone got their first choice) and use
//! `rust_decimal` so reports are identical on every platform.
//!
//! ## Fingerprint
//!
//! The fingerprint is a SHA-256 hash over the proposing side byte followed
//! by the SSZ encoding of every pair in proposer order. Two runs over the
//! same model produce the same fingerprint.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

use crate::error::MatchError;
use crate::model::PreferenceModel;
use crate::types::Matching;

/// Post-run report for one matching.
///
/// ## Example
///
/// ```
/// use stable_match::engine::MatchingEngine;
/// use stable_match::model::Instance;
/// use stable_match::types::{MatchSummary, Side};
///
/// let instance = Instance::new(vec![vec![0, 1], vec![0, 1]], vec![vec![0, 1], vec![0, 1]]);
/// let model = instance.model(Side::Hospital).unwrap();
/// let outcome = MatchingEngine::new().run(&model).unwrap();
///
/// let summary = MatchSummary::new(&model, &outcome.matching, outcome.proposals).unwrap();
/// assert_eq!(summary.mean_proposer_rank().unwrap().to_string(), "1.5");
/// assert_eq!(summary.fingerprint_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    /// Universe size n
    pub size: u64,

    /// Proposals the engine made (0 for matchings read from a file)
    pub proposals: u64,

    /// Sum of zero-based ranks proposers assign to their partners
    pub proposer_rank_total: u64,

    /// Sum of zero-based ranks receivers assign to their partners
    pub receiver_rank_total: u64,

    /// SHA-256 fingerprint of the matching (32 bytes)
    pub fingerprint: [u8; 32],
}

impl MatchSummary {
    /// Summarize `matching` under `model`.
    ///
    /// # Errors
    ///
    /// [`MatchError::ModelMismatch`] if `matching` was not built for `model`
    /// (different size or proposing side).
    pub fn new(
        model: &PreferenceModel,
        matching: &Matching,
        proposals: u64,
    ) -> Result<Self, MatchError> {
        if matching.len() != model.size() || matching.proposing_side() != model.proposing_side() {
            return Err(MatchError::ModelMismatch {
                model_size: model.size(),
                model_side: model.proposing_side(),
                matching_size: matching.len(),
                matching_side: matching.proposing_side(),
            });
        }

        let mut proposer_rank_total = 0u64;
        let mut receiver_rank_total = 0u64;
        for pair in matching.pairs() {
            let (p, r) = (pair.proposer(), pair.receiver());
            proposer_rank_total += u64::from(model.proposer_prefs(p).rank(r));
            receiver_rank_total += u64::from(model.receiver_prefs(r).rank(p));
        }

        Ok(Self {
            size: matching.len() as u64,
            proposals,
            proposer_rank_total,
            receiver_rank_total,
            fingerprint: Self::compute_fingerprint(matching)?,
        })
    }

    /// Compute the SHA-256 fingerprint of a matching
    pub fn compute_fingerprint(matching: &Matching) -> Result<[u8; 32], MatchError> {
        let mut hasher = Sha256::new();
        hasher.update([matching.proposing_side().to_u8()]);
        for pair in matching.pairs() {
            let bytes =
                ssz_rs::serialize(&pair).map_err(|e| MatchError::Encoding(format!("{e:?}")))?;
            hasher.update(&bytes);
        }
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        Ok(hash)
    }

    /// Get the fingerprint as a hex string
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }

    /// Mean one-based rank proposers give their partners.
    ///
    /// Returns None for the empty matching.
    pub fn mean_proposer_rank(&self) -> Option<Decimal> {
        self.mean_rank(self.proposer_rank_total)
    }

    /// Mean one-based rank receivers give their partners.
    ///
    /// Returns None for the empty matching.
    pub fn mean_receiver_rank(&self) -> Option<Decimal> {
        self.mean_rank(self.receiver_rank_total)
    }

    fn mean_rank(&self, zero_based_total: u64) -> Option<Decimal> {
        if self.size == 0 {
            return None;
        }
        let total = Decimal::from(zero_based_total) + Decimal::from(self.size);
        Some((total / Decimal::from(self.size)).round_dp(4).normalize())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_stable_matching;
    use crate::types::{Receiver, Side};

    fn model() -> PreferenceModel {
        // Proposers get first choices; receivers get their last choices
        PreferenceModel::new(
            Side::Hospital,
            &[vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]],
            &[vec![2, 1, 0], vec![0, 2, 1], vec![1, 0, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_mean_ranks() {
        let model = model();
        let matching = compute_stable_matching(&model).unwrap();
        let summary = MatchSummary::new(&model, &matching, 3).unwrap();

        assert_eq!(summary.size, 3);
        assert_eq!(summary.proposer_rank_total, 0);
        assert_eq!(summary.receiver_rank_total, 6);
        assert_eq!(summary.mean_proposer_rank(), Some(Decimal::from(1)));
        assert_eq!(summary.mean_receiver_rank(), Some(Decimal::from(3)));
    }

    #[test]
    fn test_fingerprint_determinism() {
        let model = model();
        let first = compute_stable_matching(&model).unwrap();
        let second = compute_stable_matching(&model).unwrap();

        let hash1 = MatchSummary::compute_fingerprint(&first).unwrap();
        let hash2 = MatchSummary::compute_fingerprint(&second).unwrap();
        assert_eq!(hash1, hash2);
        assert_ne!(hash1, [0u8; 32]);
    }

    #[test]
    fn test_fingerprint_distinguishes_matchings() {
        let a = Matching::from_assignment(Side::Hospital, vec![Receiver(0), Receiver(1)]);
        let b = Matching::from_assignment(Side::Hospital, vec![Receiver(1), Receiver(0)]);
        let c = Matching::from_assignment(Side::Student, vec![Receiver(0), Receiver(1)]);

        let ha = MatchSummary::compute_fingerprint(&a).unwrap();
        assert_ne!(ha, MatchSummary::compute_fingerprint(&b).unwrap());
        assert_ne!(ha, MatchSummary::compute_fingerprint(&c).unwrap());
    }

    #[test]
    fn test_fingerprint_hex() {
        let model = model();
        let matching = compute_stable_matching(&model).unwrap();
        let summary = MatchSummary::new(&model, &matching, 0).unwrap();

        let hex = summary.fingerprint_hex();
        assert_eq!(hex.len(), 64); // 32 bytes * 2 hex chars
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_empty_matching_has_no_mean() {
        let model = PreferenceModel::new(Side::Hospital, &[], &[]).unwrap();
        let matching = compute_stable_matching(&model).unwrap();
        let summary = MatchSummary::new(&model, &matching, 0).unwrap();

        assert_eq!(summary.mean_proposer_rank(), None);
        assert_eq!(summary.mean_receiver_rank(), None);
    }

    #[test]
    fn test_mismatched_model_is_an_error() {
        let small = PreferenceModel::new(Side::Hospital, &[vec![0]], &[vec![0]]).unwrap();
        let matching = Matching::from_assignment(Side::Hospital, vec![Receiver(1), Receiver(0)]);
        assert!(matches!(
            MatchSummary::new(&small, &matching, 0),
            Err(MatchError::ModelMismatch {
                model_size: 1,
                matching_size: 2,
                ..
            })
        ));

        let model = model();
        let by_students =
            Matching::from_assignment(Side::Student, vec![Receiver(0), Receiver(1), Receiver(2)]);
        assert!(matches!(
            MatchSummary::new(&model, &by_students, 0),
            Err(MatchError::ModelMismatch {
                model_side: Side::Hospital,
                matching_side: Side::Student,
                ..
            })
        ));
    }
}
