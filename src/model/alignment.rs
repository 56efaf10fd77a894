use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::angles::{AbsoluteAngleId, RelativeAngleId};

/// Measured spine angles in degrees, as produced by the tracking side.
///
/// Relative angles may be partial. Absolute angles are expected to be
/// complete; the scorer reports a missing one as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinalAlignment {
    #[serde(default)]
    pub relative_angles: BTreeMap<RelativeAngleId, f32>,
    #[serde(default)]
    pub absolute_angles: BTreeMap<AbsoluteAngleId, f32>,
}

impl SpinalAlignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_relative(mut self, id: RelativeAngleId, degrees: f32) -> Self {
        self.relative_angles.insert(id, degrees);
        self
    }

    pub fn with_absolute(mut self, id: AbsoluteAngleId, degrees: f32) -> Self {
        self.absolute_angles.insert(id, degrees);
        self
    }
}
