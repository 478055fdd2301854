//! Shared domain types.
//!
//! These types are intentionally kept small, `Copy` where possible, and
//! serializable so they can be:
//!
//! - borrowed by the physical model without ownership transfer
//! - printed as diagnostics or emitted in the JSON report

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

/// One light-curve observation.
///
/// Units follow the input file: time in seconds, visual magnitude, velocity
/// in km/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub time: f64,
    pub magnitude: f64,
    pub velocity: f64,
}

impl Sample {
    pub fn new(time: f64, magnitude: f64, velocity: f64) -> Self {
        Self {
            time,
            magnitude,
            velocity,
        }
    }
}

/// Velocity bin selecting the tau power law.
///
/// Bins are closed on the upper bound: a velocity equal to a bound belongs to
/// the lower bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VelocityRegime {
    /// v <= 9.3 km/s
    #[serde(rename = "le_9_3")]
    UpTo9_3,
    /// 9.3 < v <= 12.5 km/s
    #[serde(rename = "le_12_5")]
    UpTo12_5,
    /// 12.5 < v <= 17.0 km/s
    #[serde(rename = "le_17_0")]
    UpTo17_0,
    /// 17.0 < v <= 27.0 km/s
    #[serde(rename = "le_27_0")]
    UpTo27_0,
    /// 27.0 < v <= 72.0 km/s
    #[serde(rename = "le_72_0")]
    UpTo72_0,
    /// Anything not matched above (v > 72 km/s, NaN).
    #[serde(rename = "out_of_range")]
    OutOfRange,
}

impl VelocityRegime {
    pub fn display_name(self) -> &'static str {
        match self {
            VelocityRegime::UpTo9_3 => "v<=9.3",
            VelocityRegime::UpTo12_5 => "9.3<v<=12.5",
            VelocityRegime::UpTo17_0 => "12.5<v<=17",
            VelocityRegime::UpTo27_0 => "17<v<=27",
            VelocityRegime::UpTo72_0 => "27<v<=72",
            VelocityRegime::OutOfRange => "out-of-range",
        }
    }
}

/// Diagnostic record emitted by the mass accumulator for each sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassStep {
    /// Position of the sample in the input sequence (0-based).
    pub index: usize,
    pub sample: Sample,
    pub regime: VelocityRegime,
    pub tau: f64,
    pub intensity: f64,
    /// Velocity after applying the model's conversion factor.
    pub scaled_velocity: f64,
    pub contribution: f64,
    /// Running photometric mass including this sample.
    pub cumulative_mass: f64,
}

/// Result of one accumulator run with every per-sample step retained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassTrace {
    pub time_step: f64,
    pub steps: Vec<MassStep>,
    pub mass: f64,
}

/// How the final result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report (per-sample diagnostics + summary).
    Text,
    /// A single JSON document on stdout.
    Json,
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    /// Print one diagnostic line per sample (text mode only).
    pub diagnostics: bool,
    /// List the samples read from the input file (text mode only).
    pub show_samples: bool,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
}
