//! Agent identifiers for the two sides of a matching instance.
//!
//! ## Indexing
//!
//! Agents are identified by zero-based index internally. Input and output
//! files use one-based indices, so `Display` renders `index + 1`.
//!
//! Proposers and receivers are distinct newtypes: a receiver index can never
//! be passed where a proposer is expected.

use std::fmt;

// ============================================================================
// Side enum
// ============================================================================

/// Which real-world side of the instance an agent belongs to.
///
/// Tagged as a u8 in fingerprints:
/// - Hospital = 0
/// - Student = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Hospitals. The proposing side by default.
    #[default]
    Hospital,
    /// Students
    Student,
}

impl Side {
    /// Tag byte used in matching fingerprints
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Hospital => 0,
            Side::Student => 1,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Hospital => Side::Student,
            Side::Student => Side::Hospital,
        }
    }

    /// Human-readable name, capitalized for report lines
    pub fn label(self) -> &'static str {
        match self {
            Side::Hospital => "Hospital",
            Side::Student => "Student",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Agent identifiers
// ============================================================================

/// A member of the proposing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Proposer(pub u32);

/// A member of the receiving side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Receiver(pub u32);

impl Proposer {
    /// Zero-based index, usable for table lookups
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Receiver {
    /// Zero-based index, usable for table lookups
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Common behaviour of [`Proposer`] and [`Receiver`] for code generic over
/// either side.
pub trait Agent: Copy + Eq + Ord + fmt::Display + fmt::Debug + From<u32> {
    /// Raw zero-based identifier
    fn raw(self) -> u32;
}

impl Agent for Proposer {
    #[inline]
    fn raw(self) -> u32 {
        self.0
    }
}

impl Agent for Receiver {
    #[inline]
    fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for Proposer {
    fn from(value: u32) -> Self {
        Proposer(value)
    }
}

impl From<u32> for Receiver {
    fn from(value: u32) -> Self {
        Receiver(value)
    }
}

impl fmt::Display for Proposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u64::from(self.0) + 1)
    }
}

impl fmt::Display for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u64::from(self.0) + 1)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_conversion() {
        assert_eq!(Side::Hospital.to_u8(), 0);
        assert_eq!(Side::Student.to_u8(), 1);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Hospital.opposite(), Side::Student);
        assert_eq!(Side::Student.opposite(), Side::Hospital);
        assert_eq!(Side::default(), Side::Hospital);
    }

    #[test]
    fn test_agent_display_is_one_based() {
        assert_eq!(Proposer(0).to_string(), "1");
        assert_eq!(Receiver(41).to_string(), "42");
        assert_eq!(Receiver(u32::MAX).to_string(), "4294967296");
    }

    #[test]
    fn test_agent_ordering() {
        assert!(Proposer(1) < Proposer(2));
        assert_eq!(Receiver::from(3).index(), 3);
    }
}
