//! # Stable Match
//!
//! Deferred-acceptance (Gale–Shapley) stable matching between two equal-size
//! sides, hospitals and students, with an independent stability verifier.
//!
//! ## Architecture
//!
//! - **Types**: Agents, preference lists, pairs, matchings, summaries
//! - **Model**: Validated read-only preference model
//! - **Engine**: Deterministic deferred-acceptance matcher
//! - **Verifier**: Bijection, domain and blocking-pair checks
//! - **IO**: Instance and matching file formats
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical inputs give identical matchings, logs and
//!    fingerprints
//! 2. **Validated Input**: Malformed preference data is an error, never a
//!    silent default
//! 3. **Complete Reports**: The verifier lists every violation, not just the
//!    first
//! 4. **Synchronous Execution**: No async, no shared state between runs
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::compute_stable_matching;
//! use stable_match::io::{format_matching, parse_instance};
//! use stable_match::types::Side;
//! use stable_match::verifier::verify_matching;
//!
//! let instance = parse_instance("2\n1 2\n1 2\n1 2\n1 2\n").unwrap();
//! let model = instance.model(Side::Hospital).unwrap();
//!
//! let matching = compute_stable_matching(&model).unwrap();
//! assert_eq!(format_matching(&matching).unwrap(), "1 1\n2 2\n");
//! assert!(verify_matching(&model, &matching).is_valid());
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Core data types: Side, Proposer, Receiver, Matching
pub mod types;

/// Preference model: validated instance representation
pub mod model;

/// Matching engine: deferred acceptance
pub mod engine;

/// Stability verifier
pub mod verifier;

/// File formats for instances and matchings
pub mod io;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{compute_stable_matching, MatchOutcome, MatchingEngine};
pub use error::{MalformedInstance, MatchError};
pub use model::{Instance, PreferenceModel};
pub use types::{MatchSummary, MatchedPair, Matching, Proposer, Receiver, Side};
pub use verifier::{verify, verify_matching, VerificationResult, Violation};
