//! Spinal alignment scoring.
//!
//! Relative angles are optional: an angle missing from the input is skipped
//! and leaves the score record untouched for that id. Absolute angles are
//! required: a missing one stops scoring with [`ScoreError::MissingAbsoluteAngle`].
//!
//! The score record is only ever added to. Sharing one record between
//! threads needs external synchronization.

pub mod curves;

use thiserror::Error;
use tracing::{debug, trace};

use crate::model::angles::AbsoluteAngleId;
use crate::model::calibration::{absolute_normals, relative_normals};
use crate::model::{SpinalAlignment, SpinalAlignmentScore};

pub use curves::{
    MAX_CURVE_SAMPLES, curve_sample_count, fall_off, neck_falloff_score, normalized_angle,
    sample_curve, shape_score, waist_falloff_score,
};

/// Degrees between the horizontal measurement reference and the vertical.
pub const VERTICAL_DEG: f32 = 90.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("missing absolute angle {0}")]
    MissingAbsoluteAngle(AbsoluteAngleId),
}

/// Scores `alignment` into `score`.
///
/// Relative angles are processed before absolute ones. On error the entries
/// written so far remain in `score`.
pub fn calculate_score(
    alignment: &SpinalAlignment,
    score: &mut SpinalAlignmentScore,
) -> Result<(), ScoreError> {
    calculate_normalized_angles(alignment, score);
    calculate_relative_angle_scores(score);
    calculate_absolute_angle_scores(alignment, score)
}

/// Same as [`calculate_score`] on a fresh record.
pub fn score_alignment(alignment: &SpinalAlignment) -> Result<SpinalAlignmentScore, ScoreError> {
    let mut score = SpinalAlignmentScore::new();
    calculate_score(alignment, &mut score)?;
    Ok(score)
}

fn calculate_normalized_angles(alignment: &SpinalAlignment, score: &mut SpinalAlignmentScore) {
    for normal in relative_normals() {
        let Some(&angle) = alignment.relative_angles.get(&normal.id) else {
            trace!(id = %normal.id, "relative angle not measured, skipping");
            continue;
        };
        let normalized = normalized_angle(angle, normal.center, normal.half_width);
        score.normalized_relative_angles.insert(normal.id, normalized);
    }
}

// Rescores every normalized entry, including ones left by earlier calls.
fn calculate_relative_angle_scores(score: &mut SpinalAlignmentScore) {
    for (&id, &normalized) in &score.normalized_relative_angles {
        let value = 1.0 - normalized.abs();
        debug!(id = %id, normalized, score = value, "relative angle scored");
        score.relative_angle_scores.insert(id, value);
    }
}

fn calculate_absolute_angle_scores(
    alignment: &SpinalAlignment,
    score: &mut SpinalAlignmentScore,
) -> Result<(), ScoreError> {
    for normal in absolute_normals() {
        let measured = *alignment
            .absolute_angles
            .get(&normal.id)
            .ok_or(ScoreError::MissingAbsoluteAngle(normal.id))?;
        let from_vertical = VERTICAL_DEG - measured;
        let value = shape_score(normal.shape, from_vertical, normal.center, normal.half_width);
        debug!(
            id = %normal.id,
            shape = ?normal.shape,
            from_vertical,
            score = value,
            "absolute angle scored"
        );
        score.absolute_angle_scores.insert(normal.id, value);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/tests.rs"]
mod tests;
