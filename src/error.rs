//! Error types for model construction, matching and file handling.
//!
//! Verifier findings (unmatched agents, unknown agents, blocking pairs) are
//! not errors: they are returned as data in a
//! [`VerificationResult`](crate::verifier::VerificationResult).

use thiserror::Error;

use crate::types::{Proposer, Side};

/// Result alias used throughout the crate
pub type Result<T, E = MatchError> = std::result::Result<T, E>;

/// A structural violation of the preference model invariants.
///
/// Agent indices are stored zero-based and rendered one-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInstance {
    /// The two universes differ in cardinality
    #[error("{proposers} proposers but {receivers} receivers")]
    SizeMismatch { proposers: usize, receivers: usize },

    /// A preference list does not have exactly one entry per counterpart
    #[error("{side} {} ranks {actual} agents, expected {expected}", .index + 1)]
    WrongLength {
        side: Side,
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A preference list names an agent outside the opposite universe
    #[error("{side} {} ranks unknown agent {} (universe size {size})", .index + 1, .entry + 1)]
    OutOfRange {
        side: Side,
        index: usize,
        entry: u64,
        size: usize,
    },

    /// A preference list ranks the same counterpart twice
    #[error("{side} {} ranks agent {} more than once", .index + 1, .entry + 1)]
    DuplicateEntry { side: Side, index: usize, entry: u64 },

    /// The universe size does not fit the agent index type
    #[error("instance size {size} exceeds the supported maximum")]
    TooLarge { size: usize },

    /// The input has no size line
    #[error("missing instance size")]
    MissingSize,

    /// A token could not be parsed as a one-based agent index or size
    #[error("line {line}: invalid token '{token}'")]
    InvalidToken { line: usize, token: String },

    /// The input ended before all preference lists were read
    #[error("expected {expected} non-empty lines, got {actual}")]
    TooFewLines { expected: usize, actual: usize },
}

/// The error type for every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The preference model could not be built
    #[error(transparent)]
    MalformedInstance(#[from] MalformedInstance),

    /// A matching file line is not a pair of positive integers
    #[error("malformed matching at line {line}: {reason}")]
    MalformedMatching { line: usize, reason: String },

    /// A proposer ran out of receivers while still free.
    ///
    /// Unreachable for complete preference lists over equal-size sets.
    #[error("proposer {proposer} exhausted its preference list while unmatched")]
    ExhaustedProposer { proposer: Proposer },

    /// Underlying reader or writer failure
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A matching was paired with a model of another size or proposing side
    #[error(
        "matching ({matching_size} pairs, {matching_side} proposing) does not fit \
         model ({model_size} agents per side, {model_side} proposing)"
    )]
    ModelMismatch {
        model_size: usize,
        model_side: Side,
        matching_size: usize,
        matching_side: Side,
    },

    /// Deterministic encoding of a matching failed
    #[error("encoding error: {0}")]
    Encoding(String),
}

// ============================================================================
// Unit Tests
// ============================================================================
