use crate::model::SpinalAlignmentScore;
use crate::report::ReportError;

pub fn render_score_json(score: &SpinalAlignmentScore) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(score)?;
    out.push('\n');
    Ok(out)
}
