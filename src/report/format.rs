//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the physical model stays free of I/O
//! - output changes are localized (golden tests below)

use std::path::Path;

use crate::domain::{MassStep, MassTrace, Sample};
use crate::io::ingest::{IngestedSamples, RowError, compute_stats};

/// Format the run summary (input accounting + light-curve ranges + result).
pub fn format_run_summary(input: &Path, ingest: &IngestedSamples, trace: &MassTrace) -> String {
    let mut out = String::new();

    out.push_str("=== photmass - Photometric Mass (Ceplecha 1966) ===\n");
    out.push_str(&format!("Input: {}\n", input.display()));
    out.push_str(&format!(
        "Rows: read={} | used={} | skipped={} | rejected={}\n",
        ingest.rows_read,
        ingest.rows_used(),
        ingest.lines_skipped,
        ingest.row_errors.len()
    ));

    match compute_stats(&ingest.samples) {
        Some(stats) => {
            out.push_str(&format!(
                "Samples: n={} | time=[{:.3}, {:.3}]s | magnitude=[{:.2}, {:.2}] | velocity=[{:.2}, {:.2}]km/s\n",
                stats.n_samples,
                stats.time_min,
                stats.time_max,
                stats.peak_magnitude,
                stats.faintest_magnitude,
                stats.velocity_min,
                stats.velocity_max
            ));
        }
        None => out.push_str("Samples: n=0\n"),
    }

    out.push_str(&format!("Time step: dt={}s\n", fmt_sci(trace.time_step)));
    out.push_str(&format!(
        "The photometric mass calculated is: {} grams\n",
        fmt_sci(trace.mass)
    ));

    out
}

/// One diagnostic line per accumulator step.
pub fn format_diagnostic_line(step: &MassStep) -> String {
    format!(
        "tau = {}, I = {}, v = {}, phot_mass = {}",
        fmt_sci(step.tau),
        fmt_sci(step.intensity),
        fmt_sci(step.scaled_velocity),
        fmt_sci(step.cumulative_mass)
    )
}

/// List the samples as read from the input.
pub fn format_samples(samples: &[Sample]) -> String {
    let mut out = String::new();
    for s in samples {
        out.push_str(&format!(
            "Measure-> Time: {:.6} Magnitude: {:.6} Speed: {:.6}\n",
            s.time, s.magnitude, s.velocity
        ));
    }
    out
}

/// List the rejected rows. Empty string when there are none.
pub fn format_row_errors(errors: &[RowError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = format!("Rejected rows ({}):\n", errors.len());
    for e in errors {
        out.push_str(&format!("  line {}: {}\n", e.line, e.message));
    }
    out
}

/// `%e`-style scientific notation: six decimals and a signed, two-digit exponent.
pub fn fmt_sci(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let s = format!("{v:.6e}");
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::trace_photometric_mass;

    fn golden_ingest() -> IngestedSamples {
        IngestedSamples {
            samples: vec![
                Sample::new(0.0, 0.0, 30.0),
                Sample::new(0.1, 0.5, 29.0),
                Sample::new(0.2, 1.0, 28.0),
            ],
            row_errors: Vec::new(),
            rows_read: 4,
            lines_skipped: 1,
        }
    }

    #[test]
    fn fmt_sci_matches_printf() {
        assert_eq!(fmt_sci(6.125214e-13), "6.125214e-13");
        assert_eq!(fmt_sci(300000.0), "3.000000e+05");
        assert_eq!(fmt_sci(1.0), "1.000000e+00");
        assert_eq!(fmt_sci(0.0), "0.000000e+00");
        assert_eq!(fmt_sci(-2.5e-100), "-2.500000e-100");
        assert_eq!(fmt_sci(f64::INFINITY), "inf");
    }

    #[test]
    fn diagnostic_lines_golden() {
        let ingest = golden_ingest();
        let trace = trace_photometric_mass(&ingest.samples);
        let lines: Vec<String> = trace.steps.iter().map(format_diagnostic_line).collect();
        assert_eq!(
            lines,
            vec![
                "tau = 6.125214e-13, I = 1.000000e+00, v = 3.000000e+05, phot_mass = 8.062203e-06",
                "tau = 5.921040e-13, I = 6.309573e-01, v = 2.900000e+05, phot_mass = 1.388788e-05",
                "tau = 5.716866e-13, I = 3.981072e-01, v = 2.800000e+05, phot_mass = 1.811756e-05",
            ]
        );
    }

    #[test]
    fn run_summary_golden() {
        let ingest = golden_ingest();
        let trace = trace_photometric_mass(&ingest.samples);
        let txt = format_run_summary(Path::new("curve.csv"), &ingest, &trace);
        let expected = concat!(
            "=== photmass - Photometric Mass (Ceplecha 1966) ===\n",
            "Input: curve.csv\n",
            "Rows: read=4 | used=3 | skipped=1 | rejected=0\n",
            "Samples: n=3 | time=[0.000, 0.200]s | magnitude=[0.00, 1.00] | velocity=[28.00, 30.00]km/s\n",
            "Time step: dt=6.666667e-02s\n",
            "The photometric mass calculated is: 1.811756e-05 grams\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn run_summary_without_samples() {
        let ingest = IngestedSamples::default();
        let trace = trace_photometric_mass(&ingest.samples);
        let txt = format_run_summary(Path::new("empty.csv"), &ingest, &trace);
        assert!(txt.contains("Samples: n=0\n"));
        assert!(txt.contains("Time step: dt=1.000000e+00s\n"));
        assert!(txt.ends_with("The photometric mass calculated is: 0.000000e+00 grams\n"));
    }

    #[test]
    fn samples_and_row_errors_listing() {
        let txt = format_samples(&[Sample::new(0.1, -1.25, 29.0)]);
        assert_eq!(txt, "Measure-> Time: 0.100000 Magnitude: -1.250000 Speed: 29.000000\n");

        assert_eq!(format_row_errors(&[]), "");
        let txt = format_row_errors(&[RowError {
            line: 7,
            message: "Missing `velocity` value.".to_string(),
        }]);
        assert_eq!(txt, "Rejected rows (1):\n  line 7: Missing `velocity` value.\n");
    }
}
