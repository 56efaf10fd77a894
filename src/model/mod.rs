pub mod alignment;
pub mod angles;
pub mod calibration;
pub mod score;

pub use alignment::SpinalAlignment;
pub use angles::{AbsoluteAngleId, RelativeAngleId};
pub use calibration::{AbsoluteNormal, CurveShape, RelativeNormal};
pub use score::SpinalAlignmentScore;
