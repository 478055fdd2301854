//! CSV ingest for light curves.
//!
//! Turns a `time,magnitude,velocity` CSV into an ordered `Vec<Sample>` that is
//! safe to hand to the physical model.
//!
//! Rules:
//! - **Non-data lines** (any ASCII letter, e.g. a header) are skipped silently
//! - **Row-level validation**: rows with the wrong field count, oversize lines,
//!   or unparseable numbers are dropped and reported as `RowError`s
//! - **File order** is preserved; nothing is sorted or deduplicated
//! - **No quoting**: commas always separate fields
//! - **Raw line length** is capped; whitespace padding counts toward it

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::Serialize;

use crate::domain::Sample;
use crate::error::AppError;

/// Fields expected on every data line.
pub const FIELDS_PER_ROW: usize = 3;

/// Longest accepted data line, in characters, excluding the line terminator.
pub const MAX_LINE_LEN: usize = 249;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowError {
    /// 1-based line number in the input file.
    pub line: u64,
    pub message: String,
}

/// Summary stats about the samples that were read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightCurveStats {
    pub n_samples: usize,
    pub time_min: f64,
    pub time_max: f64,
    /// Brightest (lowest) magnitude.
    pub peak_magnitude: f64,
    pub faintest_magnitude: f64,
    pub velocity_min: f64,
    pub velocity_max: f64,
}

/// Ingest output: samples in file order + what was dropped along the way.
#[derive(Debug, Clone, Default)]
pub struct IngestedSamples {
    pub samples: Vec<Sample>,
    pub row_errors: Vec<RowError>,
    /// Non-blank lines seen, including skipped and rejected ones.
    pub rows_read: usize,
    /// Lines skipped as non-data (header, comments, alphabetic content).
    pub lines_skipped: usize,
}

impl IngestedSamples {
    pub fn rows_used(&self) -> usize {
        self.samples.len()
    }
}

/// Open `path` and read its light curve.
pub fn load_samples(path: &Path) -> Result<IngestedSamples, AppError> {
    log::info!("Opening file {}", path.display());

    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;

    let ingest = read_samples(file);

    log::info!(
        "Read {} sample(s) from {} row(s): {} skipped, {} rejected",
        ingest.rows_used(),
        ingest.rows_read,
        ingest.lines_skipped,
        ingest.row_errors.len()
    );
    if ingest.samples.is_empty() {
        log::warn!("No valid samples in '{}'; the photometric mass will be 0", path.display());
    }

    Ok(ingest)
}

/// Read a light curve from any reader. Never fails as a whole: problems are
/// recorded per row.
pub fn read_samples<R: Read>(reader: R) -> IngestedSamples {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut out = IngestedSamples::default();

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                let fatal = e.is_io_error();
                out.rows_read += 1;
                out.row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                if fatal {
                    break;
                }
                continue;
            }
        };

        if is_blank_line(&record) {
            continue;
        }

        out.rows_read += 1;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if !is_data_line(&record) {
            log::debug!("line {line}: skipped non-data line");
            out.lines_skipped += 1;
            continue;
        }

        match parse_row(&record) {
            Ok(sample) => out.samples.push(sample),
            Err(message) => {
                log::debug!("line {line}: {message}");
                out.row_errors.push(RowError { line, message });
            }
        }
    }

    out
}

/// Compute the ranges of a light curve. `None` when there are no samples.
pub fn compute_stats(samples: &[Sample]) -> Option<LightCurveStats> {
    if samples.is_empty() {
        return None;
    }

    let mut stats = LightCurveStats {
        n_samples: samples.len(),
        time_min: f64::INFINITY,
        time_max: f64::NEG_INFINITY,
        peak_magnitude: f64::INFINITY,
        faintest_magnitude: f64::NEG_INFINITY,
        velocity_min: f64::INFINITY,
        velocity_max: f64::NEG_INFINITY,
    };

    for s in samples {
        stats.time_min = stats.time_min.min(s.time);
        stats.time_max = stats.time_max.max(s.time);
        stats.peak_magnitude = stats.peak_magnitude.min(s.magnitude);
        stats.faintest_magnitude = stats.faintest_magnitude.max(s.magnitude);
        stats.velocity_min = stats.velocity_min.min(s.velocity);
        stats.velocity_max = stats.velocity_max.max(s.velocity);
    }

    Some(stats)
}

/// Whitespace-only line. Lines made only of separators are not blank.
fn is_blank_line(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

fn is_data_line(record: &StringRecord) -> bool {
    !record
        .iter()
        .any(|field| field.bytes().any(|b| b.is_ascii_alphabetic()))
}

fn parse_row(record: &StringRecord) -> Result<Sample, String> {
    // Fields are untrimmed and quoting is off, so this is the raw line length.
    let len = record.as_slice().len() + record.len().saturating_sub(1);
    if len > MAX_LINE_LEN {
        return Err(format!("Line too long ({len} > {MAX_LINE_LEN} characters)."));
    }

    if record.len() != FIELDS_PER_ROW {
        return Err(format!(
            "Expected {FIELDS_PER_ROW} fields (time,magnitude,velocity), found {}.",
            record.len()
        ));
    }

    let time = parse_field(record, 0, "time")?;
    let magnitude = parse_field(record, 1, "magnitude")?;
    let velocity = parse_field(record, 2, "velocity")?;

    Ok(Sample::new(time, magnitude, velocity))
}

fn parse_field(record: &StringRecord, idx: usize, name: &str) -> Result<f64, String> {
    let raw = record.get(idx).map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Err(format!("Missing `{name}` value."));
    }
    let value = raw
        .parse::<f64>()
        .map_err(|_| format!("Invalid `{name}` value '{raw}'."))?;
    if !value.is_finite() {
        return Err(format!("Non-finite `{name}` value '{raw}'."));
    }
    Ok(value)
}
