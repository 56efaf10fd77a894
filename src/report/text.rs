use crate::model::SpinalAlignmentScore;
use crate::model::angles::{absolute_angle_order, relative_angle_order};
use crate::report::format_f32_6;

const MISSING: &str = "-";

pub fn render_score_text(score: &SpinalAlignmentScore) -> String {
    let mut out = String::new();

    out.push_str("Spinal Alignment Score\n");
    out.push_str("======================\n\n");

    out.push_str("1. Relative angles\n");
    out.push_str(&format!(
        "{:<16} {:>12} {:>12}\n",
        "angle", "normalized", "score"
    ));
    for &id in relative_angle_order() {
        let normalized = score.normalized_relative_angles.get(&id).copied();
        let value = score.relative_angle_scores.get(&id).copied();
        out.push_str(&format!(
            "{:<16} {:>12} {:>12}\n",
            id.as_str(),
            fmt_opt(normalized),
            fmt_opt(value)
        ));
    }
    out.push('\n');

    out.push_str("2. Absolute angles\n");
    out.push_str(&format!("{:<16} {:>12}\n", "segment", "score"));
    for &id in absolute_angle_order() {
        let value = score.absolute_angle_scores.get(&id).copied();
        out.push_str(&format!("{:<16} {:>12}\n", id.as_str(), fmt_opt(value)));
    }

    out
}

fn fmt_opt(v: Option<f32>) -> String {
    v.map(format_f32_6).unwrap_or_else(|| MISSING.to_string())
}
