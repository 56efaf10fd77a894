pub mod json;
pub mod text;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::SpinalAlignmentScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Text,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize scores: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn render_report(
    score: &SpinalAlignmentScore,
    format: ReportFormat,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => json::render_score_json(score),
        ReportFormat::Text => Ok(text::render_score_text(score)),
    }
}

/// Writes the rendered report to `out`, or stdout when `out` is `None`.
pub fn write_report(
    score: &SpinalAlignmentScore,
    format: ReportFormat,
    out: Option<&Path>,
) -> Result<(), ReportError> {
    let rendered = render_report(score, format)?;
    match out {
        Some(path) => fs::write(path, rendered).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .map_err(|source| ReportError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}

pub fn format_f32_6(v: f32) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
