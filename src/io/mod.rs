//! Instance and matching files.
//!
//! ## Files
//!
//! - Instance: `n`, then n hospital lists, then n student lists
//! - Matching: n lines of `hospital student`
//!
//! Both use one-based indices. Writing a matching and reading it back yields
//! the same pairs, so `verify` can check matcher output from disk.

mod instance;
mod matching;

pub use instance::{load_instance, load_model, parse_instance, read_instance};
pub use matching::{
    format_matching, load_matching, parse_matching, read_matching, save_matching, write_matching,
};
