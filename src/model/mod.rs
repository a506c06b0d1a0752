//! Matching instances and the validated preference model.
//!
//! ## Components
//!
//! - [`Instance`]: raw hospital and student lists as loaded from input
//! - [`PreferenceModel`]: validated, oriented (proposer/receiver) model with
//!   O(1) rank lookup, read-only after construction
//!
//! ## Example
//!
//! ```
//! use stable_match::model::Instance;
//! use stable_match::types::Side;
//!
//! let instance = Instance::new(
//!     vec![vec![0, 1], vec![0, 1]],
//!     vec![vec![0, 1], vec![0, 1]],
//! );
//! let model = instance.model(Side::Hospital).unwrap();
//! assert_eq!(model.size(), 2);
//! ```

mod instance;
mod preferences;

pub use instance::Instance;
pub use preferences::PreferenceModel;
