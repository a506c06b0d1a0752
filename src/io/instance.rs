//! Instance file loader.
//!
//! ## Format
//!
//! ```text
//! 3          <- n
//! 1 2 3      <- hospital 1 ranks students (one-based), best first
//! 2 3 1
//! 3 1 2
//! 2 1 3      <- student 1 ranks hospitals
//! 1 2 3
//! 3 2 1
//! ```
//!
//! Blank lines and surrounding whitespace are ignored. Lines after the
//! 2n preference lists are ignored with a warning. List lengths, duplicates
//! and ranges are validated when the [`PreferenceModel`] is built.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{MalformedInstance, MatchError};
use crate::model::{Instance, PreferenceModel};
use crate::types::Side;

/// A non-empty input line with its one-based physical line number
struct Line {
    number: usize,
    text: String,
}

/// Read an instance from any buffered reader.
pub fn read_instance<R: BufRead>(reader: R) -> Result<Instance, MatchError> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(Line {
                number: i + 1,
                text: trimmed.to_string(),
            });
        }
    }

    let header = lines.first().ok_or(MalformedInstance::MissingSize)?;
    let size: usize = header
        .text
        .parse()
        .map_err(|_| MalformedInstance::InvalidToken {
            line: header.number,
            token: header.text.clone(),
        })?;
    if u32::try_from(size).is_err() {
        return Err(MalformedInstance::TooLarge { size }.into());
    }

    let expected = size.saturating_mul(2).saturating_add(1);
    if lines.len() < expected {
        return Err(MalformedInstance::TooFewLines {
            expected,
            actual: lines.len(),
        }
        .into());
    }
    if lines.len() > expected {
        warn!(
            ignored = lines.len() - expected,
            first_ignored_line = lines[expected].number,
            "ignoring lines after the preference lists"
        );
    }

    let hospitals = lines[1..1 + size]
        .iter()
        .map(parse_list)
        .collect::<Result<Vec<_>, _>>()?;
    let students = lines[size + 1..expected]
        .iter()
        .map(parse_list)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(size, "instance loaded");
    Ok(Instance::new(hospitals, students))
}

/// Parse one preference line into zero-based indices
fn parse_list(line: &Line) -> Result<Vec<u32>, MalformedInstance> {
    line.text
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .ok()
                .and_then(|value| value.checked_sub(1))
                .ok_or_else(|| MalformedInstance::InvalidToken {
                    line: line.number,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Parse an instance from a string
pub fn parse_instance(text: &str) -> Result<Instance, MatchError> {
    read_instance(text.as_bytes())
}

/// Load an instance from a file
pub fn load_instance<P: AsRef<Path>>(path: P) -> Result<Instance, MatchError> {
    let file = File::open(path)?;
    read_instance(BufReader::new(file))
}

/// Load an instance file and build the model for `proposing` in one step
pub fn load_model<P: AsRef<Path>>(path: P, proposing: Side) -> Result<PreferenceModel, MatchError> {
    Ok(load_instance(path)?.model(proposing)?)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3\n1 2 3\n2 3 1\n3 1 2\n2 1 3\n1 2 3\n3 2 1\n";

    fn malformed(text: &str) -> MalformedInstance {
        match parse_instance(text) {
            Err(MatchError::MalformedInstance(err)) => err,
            other => panic!("expected malformed instance, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_sample() {
        let instance = parse_instance(SAMPLE).unwrap();

        assert_eq!(instance.size(), 3);
        assert_eq!(instance.hospitals[0], vec![0, 1, 2]);
        assert_eq!(instance.hospitals[2], vec![2, 0, 1]);
        assert_eq!(instance.students[0], vec![1, 0, 2]);
        assert_eq!(instance.students[2], vec![2, 1, 0]);
    }

    #[test]
    fn test_blank_lines_and_whitespace_ignored() {
        let text = "\n  2 \n\n1 2\n 2   1\n\n1 2\n2 1\n\n";
        let instance = parse_instance(text).unwrap();
        assert_eq!(instance.hospitals, vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(instance.students, vec![vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn test_trailing_lines_ignored() {
        let instance = parse_instance("1\n1\n1\n1 1 1\n").unwrap();
        assert_eq!(instance.size(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(malformed(""), MalformedInstance::MissingSize);
        assert_eq!(malformed("\n \n"), MalformedInstance::MissingSize);
    }

    #[test]
    fn test_bad_size() {
        assert_eq!(
            malformed("three\n"),
            MalformedInstance::InvalidToken {
                line: 1,
                token: "three".to_string()
            }
        );
    }

    #[test]
    fn test_too_few_lines() {
        assert_eq!(
            malformed("2\n1 2\n2 1\n1 2\n"),
            MalformedInstance::TooFewLines {
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn test_zero_index_rejected() {
        assert_eq!(
            malformed("2\n1 2\n0 1\n1 2\n2 1\n"),
            MalformedInstance::InvalidToken {
                line: 3,
                token: "0".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_token_rejected() {
        assert!(matches!(
            malformed("2\n1 2\n2 x\n1 2\n2 1\n"),
            MalformedInstance::InvalidToken { line: 3, .. }
        ));
    }

    #[test]
    fn test_wrong_length_detected_by_model() {
        let instance = parse_instance("2\n1 2\n2\n1 2\n2 1\n").unwrap();
        let err = instance.model(Side::Hospital).unwrap_err();
        assert_eq!(
            err,
            MalformedInstance::WrongLength {
                side: Side::Hospital,
                index: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_zero_size_instance() {
        let instance = parse_instance("0\n").unwrap();
        assert_eq!(instance.size(), 0);
        assert!(instance.model(Side::Hospital).unwrap().is_empty());
    }
}
