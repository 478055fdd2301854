//! Reporting: formatted terminal output and the JSON report.

pub mod format;

pub use format::*;

use std::path::Path;

use serde::Serialize;

use crate::domain::{MassStep, MassTrace};
use crate::error::AppError;
use crate::io::ingest::{IngestedSamples, LightCurveStats, RowError, compute_stats};

/// Machine-readable summary of one run.
#[derive(Debug, Clone, Serialize)]
pub struct MassReport<'a> {
    pub tool: &'static str,
    pub input: String,
    pub rows_read: usize,
    pub rows_used: usize,
    pub lines_skipped: usize,
    pub stats: Option<LightCurveStats>,
    pub time_step: f64,
    /// Photometric mass in grams.
    pub photometric_mass: f64,
    pub steps: &'a [MassStep],
    pub row_errors: &'a [RowError],
}

pub fn build_report<'a>(input: &Path, ingest: &'a IngestedSamples, trace: &'a MassTrace) -> MassReport<'a> {
    MassReport {
        tool: "photmass",
        input: input.display().to_string(),
        rows_read: ingest.rows_read,
        rows_used: ingest.rows_used(),
        lines_skipped: ingest.lines_skipped,
        stats: compute_stats(&ingest.samples),
        time_step: trace.time_step,
        photometric_mass: trace.mass,
        steps: &trace.steps,
        row_errors: &ingest.row_errors,
    }
}

/// Pretty-printed JSON for `report`.
pub fn report_to_json(report: &MassReport<'_>) -> Result<String, AppError> {
    serde_json::to_string_pretty(report).map_err(|e| AppError::new(4, format!("Failed to serialize report: {e}")))
}
