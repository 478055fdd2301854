//! Per-sample physical quantities.
//!
//! - `tau(v)`: luminous efficiency, a piecewise power law in velocity fitted
//!   per band (Ceplecha & McCrosky, JGR, p. 6529):
//!
//! ```text
//! log tau = a + b * log v   =>   tau = 10^a * v^b
//! ```
//!
//! - `luminous_intensity(M)`: inverse of `M = -2.5 * log10(I)`.
//! - `mean_time_step(samples)`: integration step of the mass integral.

use crate::domain::{Sample, VelocityRegime};

/// Tau returned when the velocity falls outside every bin.
///
/// Not a physical value; it keeps `2 / tau` finite.
pub const OUT_OF_RANGE_TAU: f64 = 1.0;

/// Time step returned for an empty light curve.
pub const DEFAULT_TIME_STEP: f64 = 1.0;

/// Velocity bins in evaluation order, keyed by their inclusive upper bound (km/s).
const VELOCITY_BINS: [(f64, VelocityRegime); 5] = [
    (9.3, VelocityRegime::UpTo9_3),
    (12.5, VelocityRegime::UpTo12_5),
    (17.0, VelocityRegime::UpTo17_0),
    (27.0, VelocityRegime::UpTo27_0),
    (72.0, VelocityRegime::UpTo72_0),
];

/// Classify a velocity (km/s) into its tau bin.
///
/// The first bin whose upper bound is `>= velocity` wins, so bounds belong to
/// the lower bin. NaN matches no bin.
pub fn classify_velocity(velocity: f64) -> VelocityRegime {
    VELOCITY_BINS
        .iter()
        .find(|(upper, _)| velocity <= *upper)
        .map(|&(_, regime)| regime)
        .unwrap_or(VelocityRegime::OutOfRange)
}

/// Evaluate the tau power law of `regime` at `velocity` (km/s).
pub fn regime_tau(regime: VelocityRegime, velocity: f64) -> f64 {
    match regime {
        VelocityRegime::UpTo9_3 => 10f64.powf(-12.75),
        VelocityRegime::UpTo12_5 => 10f64.powf(-15.60) * velocity.powf(2.92),
        VelocityRegime::UpTo17_0 => 10f64.powf(-13.24) * velocity.powf(0.77),
        VelocityRegime::UpTo27_0 => 10f64.powf(-12.50) * velocity.powf(0.17),
        VelocityRegime::UpTo72_0 => 10f64.powf(-13.69) * velocity,
        VelocityRegime::OutOfRange => OUT_OF_RANGE_TAU,
    }
}

/// Luminous efficiency for a velocity in km/s.
pub fn tau(velocity: f64) -> f64 {
    regime_tau(classify_velocity(velocity), velocity)
}

/// Luminous intensity (zero-magnitude units) for a visual magnitude.
pub fn luminous_intensity(magnitude: f64) -> f64 {
    10f64.powf(magnitude / -2.5)
}

/// Mean time step: `(last.time - first.time) / n`.
///
/// First and last are taken by position, not by time value. Returns
/// `DEFAULT_TIME_STEP` for an empty slice and `0.0` for a single sample.
pub fn mean_time_step(samples: &[Sample]) -> f64 {
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (last.time - first.time) / samples.len() as f64,
        _ => DEFAULT_TIME_STEP,
    }
}
