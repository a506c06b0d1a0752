//! Raw hospital/student preference data, as read from an input file.

use crate::error::MalformedInstance;
use crate::model::PreferenceModel;
use crate::types::Side;

/// Hospital and student preference lists before a proposing side is chosen.
///
/// Entries are zero-based. `hospitals[h]` ranks students, `students[s]`
/// ranks hospitals. Nothing is validated until [`Instance::model`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    /// Hospital index -> ranked student indices
    pub hospitals: Vec<Vec<u32>>,

    /// Student index -> ranked hospital indices
    pub students: Vec<Vec<u32>>,
}

impl Instance {
    /// Create an instance from raw lists
    pub fn new(hospitals: Vec<Vec<u32>>, students: Vec<Vec<u32>>) -> Self {
        Self { hospitals, students }
    }

    /// Number of hospitals
    #[inline]
    pub fn size(&self) -> usize {
        self.hospitals.len()
    }

    /// Build the validated model with `proposing` as the proposer side.
    ///
    /// Hospitals proposing reproduces the classical hospital-optimal result;
    /// students proposing yields the student-optimal stable matching.
    pub fn model(&self, proposing: Side) -> Result<PreferenceModel, MalformedInstance> {
        match proposing {
            Side::Hospital => PreferenceModel::new(proposing, &self.hospitals, &self.students),
            Side::Student => PreferenceModel::new(proposing, &self.students, &self.hospitals),
        }
    }
}
