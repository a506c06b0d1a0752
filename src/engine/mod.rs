//! Matching engine module.
//!
//! ## Design Principles
//!
//! The matching engine is designed for:
//!
//! 1. **Determinism**: Same model always produces the same matching and the
//!    same proposal sequence
//! 2. **No shared state**: Working state lives in one call; the model is
//!    borrowed immutably
//! 3. **Synchronous Execution**: No async, no I/O in the algorithm
//!
//! ## Matching Rules
//!
//! - The lowest-index free proposer proposes next
//! - Proposals follow the proposer's list from most to least preferred
//! - A receiver keeps the better of its partner and the new proposer
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::compute_stable_matching;
//! use stable_match::model::PreferenceModel;
//! use stable_match::types::{Proposer, Receiver, Side};
//!
//! let model = PreferenceModel::new(
//!     Side::Hospital,
//!     &[vec![0, 1], vec![0, 1]],
//!     &[vec![1, 0], vec![1, 0]],
//! )
//! .unwrap();
//!
//! let matching = compute_stable_matching(&model).unwrap();
//! assert_eq!(matching.receiver_of(Proposer(1)), Receiver(0));
//! ```

pub mod matcher;

pub use matcher::{compute_stable_matching, MatchOutcome, MatchingEngine};
