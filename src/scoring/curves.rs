use crate::model::calibration::CurveShape;

/// Signed deviation from `center` in units of `half_width`.
pub fn normalized_angle(angle: f32, center: f32, half_width: f32) -> f32 {
    (angle - center) / half_width
}

/// Downward parabola: 1.0 at `center`, 0.0 at `center ± half_width`.
pub fn fall_off(angle: f32, center: f32, half_width: f32) -> f32 {
    let a = normalized_angle(angle, center, half_width);
    1.0 - a * a
}

/// ```text
/// 1 ******
///         **
///           *
///            *
/// 0 ---------*****
///        |   |
///        |   center + half_width
///      center
/// ```
/// `angle` is measured from the vertical in degrees.
pub fn neck_falloff_score(angle: f32, center: f32, half_width: f32) -> f32 {
    if angle <= center {
        1.0
    } else if angle >= center + half_width {
        0.0
    } else {
        fall_off(angle, center, half_width)
    }
}

/// ```text
/// 1         ***
///         **   **
///        *       *
///       *         *
/// 0 *****---------*****
///           |    |
///           |    center + half_width
///         center
/// ```
/// `angle` is measured from the vertical in degrees.
pub fn waist_falloff_score(angle: f32, center: f32, half_width: f32) -> f32 {
    if angle <= center - half_width {
        0.0
    } else if angle >= center + half_width {
        0.0
    } else {
        fall_off(angle, center, half_width)
    }
}

pub fn shape_score(shape: CurveShape, angle: f32, center: f32, half_width: f32) -> f32 {
    match shape {
        CurveShape::Neck => neck_falloff_score(angle, center, half_width),
        CurveShape::Waist => waist_falloff_score(angle, center, half_width),
    }
}

/// Upper bound on the rows [`sample_curve`] will produce.
pub const MAX_CURVE_SAMPLES: usize = 100_000;

/// Number of points [`sample_curve`] takes on `[from, to]` at `step`.
///
/// `None` for a non-positive or non-finite step, non-finite bounds,
/// `from > to`, or more than [`MAX_CURVE_SAMPLES`] points.
pub fn curve_sample_count(from: f32, to: f32, step: f32) -> Option<usize> {
    if !(step.is_finite() && step > 0.0) || !from.is_finite() || !to.is_finite() || from > to {
        return None;
    }
    // Small slack so that `to` is included despite rounding.
    let intervals = ((f64::from(to) - f64::from(from)) / f64::from(step) + 1e-4).floor();
    if !intervals.is_finite() || intervals >= MAX_CURVE_SAMPLES as f64 {
        return None;
    }
    Some(intervals as usize + 1)
}

/// Samples a shape curve on `[from, to]` at `step` increments.
///
/// Returns an empty vector whenever [`curve_sample_count`] rejects the range.
pub fn sample_curve(
    shape: CurveShape,
    center: f32,
    half_width: f32,
    from: f32,
    to: f32,
    step: f32,
) -> Vec<(f32, f32)> {
    let Some(count) = curve_sample_count(from, to, step) else {
        return Vec::new();
    };
    (0..count)
        .map(|i| {
            let angle = from + i as f32 * step;
            (angle, shape_score(shape, angle, center, half_width))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/curves.rs"]
mod tests;
