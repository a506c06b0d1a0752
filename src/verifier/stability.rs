//! Independent check that a set of pairs is a stable perfect matching.
//!
//! ## Checks
//!
//! 1. **Bijection**: every proposer and every receiver appears exactly once
//! 2. **Domain**: every referenced agent exists in the model
//! 3. **Stability**: no proposer/receiver pair prefers each other over their
//!    assigned partners
//!
//! All three always run. Structural defects do not hide blocking pairs among
//! the well-formed part of the matching: the stability scan covers every
//! agent that has exactly one known partner.
//!
//! ## Complexity
//!
//! For each proposer p matched to r, only receivers p ranks above r are
//! inspected, each in O(1): O(n²) in the worst case.

use std::collections::BTreeSet;

use tracing::debug;

use crate::model::PreferenceModel;
use crate::types::{MatchedPair, Matching, Proposer, Receiver};
use crate::verifier::{MatchingDefect, UnknownAgent, VerificationResult, Violation};

/// Verify arbitrary pairs against `model`.
///
/// Never fails: every defect is reported as a [`Violation`]. The result is a
/// pure function of the inputs, so calling it twice gives identical output.
///
/// Only agents with exactly one known partner take part in the blocking-pair
/// scan. An unmatched or multiply-matched agent is reported as a
/// [`MatchingDefect`] but never as half of a blocking pair, even though an
/// unmatched agent would accept any partner.
///
/// ## Example
///
/// ```
/// use stable_match::model::PreferenceModel;
/// use stable_match::types::{MatchedPair, Proposer, Receiver, Side};
/// use stable_match::verifier::{verify, Violation};
///
/// let model = PreferenceModel::new(
///     Side::Hospital,
///     &[vec![0, 1], vec![0, 1]],
///     &[vec![0, 1], vec![0, 1]],
/// )
/// .unwrap();
///
/// // Proposer 0 and receiver 0 prefer each other
/// let pairs = [
///     MatchedPair::new(Proposer(0), Receiver(1)),
///     MatchedPair::new(Proposer(1), Receiver(0)),
/// ];
///
/// let result = verify(&model, &pairs);
/// assert_eq!(
///     result.violations(),
///     &[Violation::BlockingPair { proposer: Proposer(0), receiver: Receiver(0) }]
/// );
/// ```
pub fn verify(model: &PreferenceModel, pairs: &[MatchedPair]) -> VerificationResult {
    let n = model.size();

    // Every partner listed for each known agent, in input order
    let mut receivers_of: Vec<Vec<Receiver>> = vec![Vec::new(); n];
    let mut proposers_of: Vec<Vec<Proposer>> = vec![Vec::new(); n];
    let mut unknown = BTreeSet::new();

    for pair in pairs {
        let (proposer, receiver) = (pair.proposer(), pair.receiver());

        if model.contains_proposer(proposer) {
            receivers_of[proposer.index()].push(receiver);
        } else {
            unknown.insert(UnknownAgent::Proposer(proposer));
        }

        if model.contains_receiver(receiver) {
            proposers_of[receiver.index()].push(proposer);
        } else {
            unknown.insert(UnknownAgent::Receiver(receiver));
        }
    }

    let mut violations = Vec::new();

    // ------------------------------------------------------------------------
    // Bijection
    // ------------------------------------------------------------------------
    for (p, receivers) in receivers_of.iter().enumerate() {
        let proposer = Proposer(p as u32);
        match receivers.len() {
            0 => violations.push(Violation::NotAPerfectMatching(
                MatchingDefect::UnmatchedProposer(proposer),
            )),
            1 => {}
            _ => violations.push(Violation::NotAPerfectMatching(
                MatchingDefect::DuplicateProposer {
                    proposer,
                    receivers: receivers.clone(),
                },
            )),
        }
    }

    for (r, proposers) in proposers_of.iter().enumerate() {
        let receiver = Receiver(r as u32);
        match proposers.len() {
            0 => violations.push(Violation::NotAPerfectMatching(
                MatchingDefect::UnmatchedReceiver(receiver),
            )),
            1 => {}
            _ => violations.push(Violation::NotAPerfectMatching(
                MatchingDefect::DuplicateReceiver {
                    receiver,
                    proposers: proposers.clone(),
                },
            )),
        }
    }

    // ------------------------------------------------------------------------
    // Domain
    // ------------------------------------------------------------------------
    violations.extend(unknown.into_iter().map(Violation::UnknownAgent));

    // ------------------------------------------------------------------------
    // Stability
    // ------------------------------------------------------------------------
    let partner_of_receiver: Vec<Option<Proposer>> = proposers_of
        .iter()
        .map(|ps| match ps.as_slice() {
            [p] if model.contains_proposer(*p) => Some(*p),
            _ => None,
        })
        .collect();

    for (p, receivers) in receivers_of.iter().enumerate() {
        let proposer = Proposer(p as u32);
        let current = match receivers.as_slice() {
            [r] if model.contains_receiver(*r) => *r,
            _ => continue,
        };

        for &candidate in model.proposer_prefs(proposer).preferred_over(current) {
            let Some(rival) = partner_of_receiver[candidate.index()] else {
                continue;
            };
            if model.receiver_prefers(candidate, proposer, rival) {
                violations.push(Violation::BlockingPair {
                    proposer,
                    receiver: candidate,
                });
            }
        }
    }

    debug!(
        size = n,
        pairs = pairs.len(),
        violations = violations.len(),
        blocking_pairs = violations.iter().filter(|v| v.is_blocking_pair()).count(),
        "verification complete"
    );

    VerificationResult::from_violations(violations)
}

/// Verify a [`Matching`] produced by the engine or rebuilt from pairs.
///
/// A matching built with the other side proposing is reoriented first, so
/// stability is judged on the same hospital/student pairs either way.
pub fn verify_matching(model: &PreferenceModel, matching: &Matching) -> VerificationResult {
    let pairs: Vec<MatchedPair> = if matching.proposing_side() == model.proposing_side() {
        matching.pairs().collect()
    } else {
        matching
            .pairs()
            .map(|pair| MatchedPair::new(Proposer(pair.receiver_raw), Receiver(pair.proposer_raw)))
            .collect()
    };
    verify(model, &pairs)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_stable_matching;
    use crate::model::Instance;
    use crate::types::Side;

    fn pairs(raw: &[(u32, u32)]) -> Vec<MatchedPair> {
        raw.iter()
            .map(|&(p, r)| MatchedPair::new(Proposer(p), Receiver(r)))
            .collect()
    }

    /// A, B prefer [X, Y]; X, Y prefer [A, B]
    fn two_by_two() -> PreferenceModel {
        PreferenceModel::new(
            Side::Hospital,
            &[vec![0, 1], vec![0, 1]],
            &[vec![0, 1], vec![0, 1]],
        )
        .unwrap()
    }

    /// Mixed preferences for structural tests
    fn three_by_three() -> PreferenceModel {
        PreferenceModel::new(
            Side::Hospital,
            &[vec![0, 1, 2], vec![1, 0, 2], vec![2, 1, 0]],
            &[vec![0, 1, 2], vec![1, 0, 2], vec![2, 1, 0]],
        )
        .unwrap()
    }

    #[test]
    fn test_engine_output_is_valid() {
        let model = two_by_two();
        let matching = compute_stable_matching(&model).unwrap();

        assert_eq!(verify_matching(&model, &matching), VerificationResult::Valid);
    }

    #[test]
    fn test_exactly_one_blocking_pair() {
        let model = two_by_two();
        let result = verify(&model, &pairs(&[(0, 1), (1, 0)]));

        assert_eq!(
            result,
            VerificationResult::Invalid(vec![Violation::BlockingPair {
                proposer: Proposer(0),
                receiver: Receiver(0),
            }])
        );
    }

    #[test]
    fn test_missing_and_duplicate_proposer() {
        let model = three_by_three();
        // Proposer 1 missing, proposer 0 listed twice
        let result = verify(&model, &pairs(&[(0, 0), (0, 1), (2, 2)]));

        let violations = result.violations();
        assert!(violations.contains(&Violation::NotAPerfectMatching(
            MatchingDefect::UnmatchedProposer(Proposer(1))
        )));
        assert!(violations.contains(&Violation::NotAPerfectMatching(
            MatchingDefect::DuplicateProposer {
                proposer: Proposer(0),
                receivers: vec![Receiver(0), Receiver(1)],
            }
        )));
        assert_eq!(result.blocking_pairs().count(), 0);
    }

    #[test]
    fn test_structural_defect_does_not_mask_blocking_pair() {
        // Proposers 0..4 rank receivers by index; receivers rank proposers by index
        let lists: Vec<Vec<u32>> = (0..4).map(|_| vec![0, 1, 2, 3]).collect();
        let model = PreferenceModel::new(Side::Hospital, &lists, &lists).unwrap();

        // 0-1 and 1-0 form a blocking pair (0, 0); proposer 2 is duplicated, 3 is missing
        let result = verify(&model, &pairs(&[(0, 1), (1, 0), (2, 2), (2, 3)]));

        assert!(!result.is_valid());
        assert!(result.violations().contains(&Violation::NotAPerfectMatching(
            MatchingDefect::UnmatchedProposer(Proposer(3))
        )));
        assert_eq!(
            result.blocking_pairs().collect::<Vec<_>>(),
            vec![(Proposer(0), Receiver(0))]
        );
    }

    #[test]
    fn test_duplicate_receiver() {
        let model = two_by_two();
        let result = verify(&model, &pairs(&[(0, 0), (1, 0)]));

        assert_eq!(
            result.violations(),
            &[
                Violation::NotAPerfectMatching(MatchingDefect::DuplicateReceiver {
                    receiver: Receiver(0),
                    proposers: vec![Proposer(0), Proposer(1)],
                }),
                Violation::NotAPerfectMatching(MatchingDefect::UnmatchedReceiver(Receiver(1))),
            ]
        );
    }

    #[test]
    fn test_unknown_agents() {
        let model = two_by_two();
        let result = verify(&model, &pairs(&[(0, 0), (1, 7), (5, 1)]));

        let violations = result.violations();
        assert!(violations.contains(&Violation::UnknownAgent(UnknownAgent::Receiver(Receiver(7)))));
        assert!(violations.contains(&Violation::UnknownAgent(UnknownAgent::Proposer(Proposer(5)))));
        // Proposer 1 is listed once, receiver 1 is listed once: no bijection defect for them
        assert!(!violations.contains(&Violation::NotAPerfectMatching(
            MatchingDefect::UnmatchedProposer(Proposer(1))
        )));
        assert_eq!(result.blocking_pairs().count(), 0);
    }

    #[test]
    fn test_empty_pairs() {
        let model = two_by_two();
        let result = verify(&model, &[]);

        assert_eq!(result.violations().len(), 4);
        assert!(result.violations().iter().all(|v| !v.is_blocking_pair()));
    }

    #[test]
    fn test_unmatched_agents_never_block() {
        let model = two_by_two();
        // Proposer 0 and receiver 0 rank each other first, but proposer 0 is unmatched
        let result = verify(&model, &pairs(&[(1, 0)]));

        assert_eq!(
            result.violations(),
            &[
                Violation::NotAPerfectMatching(MatchingDefect::UnmatchedProposer(Proposer(0))),
                Violation::NotAPerfectMatching(MatchingDefect::UnmatchedReceiver(Receiver(1))),
            ]
        );
    }

    #[test]
    fn test_empty_instance_is_valid() {
        let model = PreferenceModel::new(Side::Hospital, &[], &[]).unwrap();
        assert!(verify(&model, &[]).is_valid());
    }

    #[test]
    fn test_verification_is_idempotent() {
        let model = three_by_three();
        let input = pairs(&[(0, 2), (1, 1), (2, 0)]);

        let first = verify(&model, &input);
        let second = verify(&model, &input);

        assert_eq!(first, second);
        assert!(!first.is_valid());
    }

    #[test]
    fn test_reports_every_blocking_pair() {
        // Everyone ranks by index; the reversed matching is blocked many times
        let lists: Vec<Vec<u32>> = (0..3).map(|_| vec![0, 1, 2]).collect();
        let model = PreferenceModel::new(Side::Hospital, &lists, &lists).unwrap();

        let result = verify(&model, &pairs(&[(0, 2), (1, 1), (2, 0)]));

        // (0,0): R0 holds 2, prefers 0. (0,1): R1 holds 1, prefers 0. (1,0): R0 holds 2, prefers 1.
        assert_eq!(
            result.blocking_pairs().collect::<Vec<_>>(),
            vec![
                (Proposer(0), Receiver(0)),
                (Proposer(0), Receiver(1)),
                (Proposer(1), Receiver(0)),
            ]
        );
    }

    #[test]
    fn test_matching_from_other_side_is_reoriented() {
        // Cyclic preferences: hospital-optimal and student-optimal differ
        let instance = Instance::new(
            vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]],
            vec![vec![1, 2, 0], vec![2, 0, 1], vec![0, 1, 2]],
        );
        let by_hospital = instance.model(Side::Hospital).unwrap();
        let by_student = instance.model(Side::Student).unwrap();

        let student_optimal = compute_stable_matching(&by_student).unwrap();
        assert_eq!(student_optimal.hospital_student_pairs(), vec![(0, 2), (1, 0), (2, 1)]);

        assert!(verify_matching(&by_student, &student_optimal).is_valid());
        assert!(verify_matching(&by_hospital, &student_optimal).is_valid());

        let hospital_optimal = compute_stable_matching(&by_hospital).unwrap();
        assert!(verify_matching(&by_student, &hospital_optimal).is_valid());
    }

    #[test]
    fn test_reoriented_matching_keeps_blocking_pairs() {
        let instance = Instance::new(
            vec![vec![0, 1], vec![0, 1]],
            vec![vec![0, 1], vec![0, 1]],
        );
        let by_hospital = instance.model(Side::Hospital).unwrap();

        // Student 1 with hospital 2, student 2 with hospital 1
        let swapped = Matching::try_from_pairs(
            Side::Student,
            2,
            &[
                MatchedPair::new(Proposer(0), Receiver(1)),
                MatchedPair::new(Proposer(1), Receiver(0)),
            ],
        )
        .unwrap();

        let result = verify_matching(&by_hospital, &swapped);
        assert_eq!(
            result.blocking_pairs().collect::<Vec<_>>(),
            vec![(Proposer(0), Receiver(0))]
        );
    }
}
