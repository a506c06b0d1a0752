//! Core data types for stable matching.
//!
//! ## Types
//!
//! - [`Side`]: Hospital or Student
//! - [`Proposer`] / [`Receiver`]: zero-based agent identifiers
//! - [`PreferenceList`]: one agent's strict ranking with O(1) rank lookup
//! - [`MatchedPair`]: one (proposer, receiver) entry, SSZ-encodable
//! - [`Matching`]: a validated perfect matching
//! - [`MatchSummary`]: mean ranks and fingerprint of a matching
//!
//! ## Indexing
//!
//! Everything is zero-based in memory and one-based in files and reports.

mod agent;
mod matching;
mod pair;
mod preference;
mod summary;

// Re-export all types at module level
pub use agent::{Agent, Proposer, Receiver, Side};
pub use matching::Matching;
pub use pair::MatchedPair;
pub use preference::PreferenceList;
pub use summary::MatchSummary;
