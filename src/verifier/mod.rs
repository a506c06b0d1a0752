//! Stability verifier.
//!
//! Checks, independently of how a matching was produced, that a list of
//! pairs is a perfect matching of the model with no blocking pair. The
//! verifier never stops at the first problem: one run reports every defect.
//!
//! ## Components
//!
//! - [`verify`] / [`verify_matching`]: run all checks
//! - [`VerificationResult`]: `Valid` or `Invalid` with every [`Violation`]
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::compute_stable_matching;
//! use stable_match::model::Instance;
//! use stable_match::types::Side;
//! use stable_match::verifier::verify_matching;
//!
//! let instance = Instance::new(
//!     vec![vec![1, 0], vec![0, 1]],
//!     vec![vec![0, 1], vec![1, 0]],
//! );
//! let model = instance.model(Side::Hospital).unwrap();
//! let matching = compute_stable_matching(&model).unwrap();
//!
//! assert!(verify_matching(&model, &matching).is_valid());
//! ```

mod stability;
mod violation;

pub use stability::{verify, verify_matching};
pub use violation::{MatchingDefect, UnknownAgent, VerificationResult, Violation};
