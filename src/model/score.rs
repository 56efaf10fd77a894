use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::angles::{AbsoluteAngleId, RelativeAngleId};

/// Per-angle scores. Scoring only inserts or overwrites entries, so a record
/// reused across calls keeps keys from earlier calls until `clear` is called.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinalAlignmentScore {
    #[serde(default)]
    pub normalized_relative_angles: BTreeMap<RelativeAngleId, f32>,
    #[serde(default)]
    pub relative_angle_scores: BTreeMap<RelativeAngleId, f32>,
    #[serde(default)]
    pub absolute_angle_scores: BTreeMap<AbsoluteAngleId, f32>,
}

impl SpinalAlignmentScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.normalized_relative_angles.clear();
        self.relative_angle_scores.clear();
        self.absolute_angle_scores.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_relative_angles.is_empty()
            && self.relative_angle_scores.is_empty()
            && self.absolute_angle_scores.is_empty()
    }
}
