//! Spinal alignment scoring from measured spine angles.
//!
//! [`scoring::calculate_score`] turns a [`model::SpinalAlignment`] into a
//! [`model::SpinalAlignmentScore`]. The curve functions are exported
//! separately so they can be plotted or tested on their own.

pub mod input;
pub mod logging;
pub mod model;
pub mod report;
pub mod scoring;

pub use model::{AbsoluteAngleId, RelativeAngleId, SpinalAlignment, SpinalAlignmentScore};
pub use scoring::{ScoreError, calculate_score, score_alignment};
