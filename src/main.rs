use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use spinometer_score::input::load_alignment;
use spinometer_score::logging::init_logging;
use spinometer_score::model::{CurveShape, SpinalAlignmentScore};
use spinometer_score::report::{ReportFormat, format_f32_6, write_report};
use spinometer_score::scoring::{
    MAX_CURVE_SAMPLES, calculate_score, curve_sample_count, sample_curve,
};

#[derive(Debug, Parser)]
#[command(name = "spinometer-score", version, about = "Score spinal alignment from measured angles")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a measurements JSON document.
    Score {
        /// Measurements file; reads stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Report destination; writes stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
    },
    /// Print sampled (angle, score) rows of a score curve.
    Curve {
        #[arg(long, value_enum)]
        shape: ShapeArg,
        #[arg(long, allow_negative_numbers = true)]
        center: f32,
        #[arg(long)]
        half_width: f32,
        #[arg(long, allow_negative_numbers = true, default_value_t = -30.0)]
        from: f32,
        #[arg(long, allow_negative_numbers = true, default_value_t = 90.0)]
        to: f32,
        #[arg(long, default_value_t = 1.0)]
        step: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShapeArg {
    Neck,
    Waist,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Text => ReportFormat::Text,
        }
    }
}

impl From<ShapeArg> for CurveShape {
    fn from(value: ShapeArg) -> Self {
        match value {
            ShapeArg::Neck => CurveShape::Neck,
            ShapeArg::Waist => CurveShape::Waist,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Score { input, out, format } => {
            let alignment = load_alignment(input.as_deref()).map_err(|e| e.to_string())?;
            let mut score = SpinalAlignmentScore::new();
            if let Err(err) = calculate_score(&alignment, &mut score) {
                warn!("scoring aborted: {err}");
                return Err(err.to_string());
            }
            info!(
                relative = score.relative_angle_scores.len(),
                absolute = score.absolute_angle_scores.len(),
                "scored alignment"
            );
            write_report(&score, format.into(), out.as_deref()).map_err(|e| e.to_string())
        }
        Command::Curve {
            shape,
            center,
            half_width,
            from,
            to,
            step,
        } => {
            validate_curve_args(half_width, from, to, step)?;
            print!(
                "{}",
                render_curve(sample_curve(shape.into(), center, half_width, from, to, step))
            );
            Ok(())
        }
    }
}

fn validate_curve_args(half_width: f32, from: f32, to: f32, step: f32) -> Result<(), String> {
    if !(half_width.is_finite() && half_width > 0.0) {
        return Err("--half-width must be a positive number".to_string());
    }
    if !(step.is_finite() && step > 0.0) {
        return Err("--step must be a positive number".to_string());
    }
    if !(from.is_finite() && to.is_finite()) {
        return Err("--from and --to must be finite numbers".to_string());
    }
    if from > to {
        return Err("--from must not exceed --to".to_string());
    }
    if curve_sample_count(from, to, step).is_none() {
        return Err(format!(
            "curve range needs more than {MAX_CURVE_SAMPLES} samples; increase --step"
        ));
    }
    Ok(())
}

fn render_curve(rows: Vec<(f32, f32)>) -> String {
    let mut out = String::from("angle\tscore\n");
    for (angle, score) in rows {
        out.push_str(&format_f32_6(angle));
        out.push('\t');
        out.push_str(&format_f32_6(score));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
