//! Matching file writer and loader.
//!
//! ## Format
//!
//! One `hospital student` pair per line, one-based, ordered by hospital:
//!
//! ```text
//! 1 2
//! 2 3
//! 3 1
//! ```
//!
//! The orientation is the same whichever side proposed. The loader turns
//! lines back into proposer/receiver pairs for a given proposing side and
//! only rejects lines that are not two positive integers; counts, ranges and
//! duplicates are left to the verifier so they can be reported as
//! violations.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::MatchError;
use crate::types::{MatchedPair, Matching, Proposer, Receiver, Side};

/// Write a matching, one pair per line
pub fn write_matching<W: Write>(mut writer: W, matching: &Matching) -> Result<(), MatchError> {
    for (hospital, student) in matching.hospital_student_pairs() {
        writeln!(writer, "{} {}", u64::from(hospital) + 1, u64::from(student) + 1)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render a matching as a string in file format
pub fn format_matching(matching: &Matching) -> Result<String, MatchError> {
    let mut buf = Vec::new();
    write_matching(&mut buf, matching)?;
    String::from_utf8(buf).map_err(|e| MatchError::Encoding(e.to_string()))
}

/// Write a matching to a file, replacing it
pub fn save_matching<P: AsRef<Path>>(path: P, matching: &Matching) -> Result<(), MatchError> {
    let file = File::create(path)?;
    write_matching(BufWriter::new(file), matching)
}

/// Read pairs oriented for `proposing` from any buffered reader.
pub fn read_matching<R: BufRead>(reader: R, proposing: Side) -> Result<Vec<MatchedPair>, MatchError> {
    let mut pairs = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let number = i + 1;
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let [hospital, student] = tokens.as_slice() else {
            return Err(MatchError::MalformedMatching {
                line: number,
                reason: format!("expected 2 values, found {}", tokens.len()),
            });
        };
        let hospital = parse_index(hospital, number)?;
        let student = parse_index(student, number)?;

        pairs.push(match proposing {
            Side::Hospital => MatchedPair::new(Proposer(hospital), Receiver(student)),
            Side::Student => MatchedPair::new(Proposer(student), Receiver(hospital)),
        });
    }
    Ok(pairs)
}

/// One-based token -> zero-based index
fn parse_index(token: &str, line: usize) -> Result<u32, MatchError> {
    token
        .parse::<u32>()
        .ok()
        .and_then(|value| value.checked_sub(1))
        .ok_or_else(|| MatchError::MalformedMatching {
            line,
            reason: format!("'{token}' is not a positive agent index"),
        })
}

/// Parse pairs from a string
pub fn parse_matching(text: &str, proposing: Side) -> Result<Vec<MatchedPair>, MatchError> {
    read_matching(text.as_bytes(), proposing)
}

/// Load pairs from a file
pub fn load_matching<P: AsRef<Path>>(path: P, proposing: Side) -> Result<Vec<MatchedPair>, MatchError> {
    let file = File::open(path)?;
    read_matching(BufReader::new(file), proposing)
}

// ============================================================================
// Unit Tests
// ============================================================================
