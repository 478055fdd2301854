//! Photometric mass accumulator.
//!
//! Discrete form of integral (2) in Ceplecha (1966), "Dynamic and photometric
//! mass of meteors", BAC 17, p. 347:
//!
//! ```text
//! m = Σ (2 / tau_i) * (I_i / v_i^3) * dt
//! ```
//!
//! Terms are summed in sequence order with ordinary floating-point addition,
//! so the result depends on sample order.

use crate::domain::{MassStep, MassTrace, Sample};
use crate::physics::model::{classify_velocity, luminous_intensity, mean_time_step, regime_tau};

/// Factor applied to the input velocity before it enters `v^3`.
pub const VELOCITY_CONVERSION_FACTOR: f64 = 10_000.0;

/// Photometric mass of the light curve, without diagnostics.
pub fn photometric_mass(samples: &[Sample]) -> f64 {
    photometric_mass_with(samples, |_| {})
}

/// Photometric mass of the light curve, reporting every step to `on_step`.
///
/// `on_step` is called once per sample, in order, after the sample's
/// contribution has been added. Returns `0.0` for an empty slice.
pub fn photometric_mass_with<F>(samples: &[Sample], mut on_step: F) -> f64
where
    F: FnMut(&MassStep),
{
    let dt = mean_time_step(samples);
    let mut mass = 0.0;

    for (index, sample) in samples.iter().enumerate() {
        let regime = classify_velocity(sample.velocity);
        let tau = regime_tau(regime, sample.velocity);
        let intensity = luminous_intensity(sample.magnitude);
        let scaled_velocity = sample.velocity * VELOCITY_CONVERSION_FACTOR;

        let contribution = (2.0 / tau) * ((intensity / scaled_velocity.powi(3)) * dt);
        mass += contribution;

        on_step(&MassStep {
            index,
            sample: *sample,
            regime,
            tau,
            intensity,
            scaled_velocity,
            contribution,
            cumulative_mass: mass,
        });
    }

    mass
}

/// Run the accumulator and keep every step.
pub fn trace_photometric_mass(samples: &[Sample]) -> MassTrace {
    let mut steps = Vec::with_capacity(samples.len());
    let mass = photometric_mass_with(samples, |step| steps.push(*step));
    MassTrace {
        time_step: mean_time_step(samples),
        steps,
        mass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VelocityRegime;

    fn golden_samples() -> Vec<Sample> {
        vec![
            Sample::new(0.0, 0.0, 30.0),
            Sample::new(0.1, 0.5, 29.0),
            Sample::new(0.2, 1.0, 28.0),
        ]
    }

    #[test]
    fn empty_light_curve_has_zero_mass() {
        assert_eq!(photometric_mass(&[]), 0.0);

        let mut calls = 0;
        let mass = photometric_mass_with(&[], |_| calls += 1);
        assert_eq!(mass, 0.0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn golden_light_curve() {
        let samples = golden_samples();

        // Hand-expanded: dt = 0.2 / 3, every sample in the 27-72 km/s band.
        let dt = 0.2 / 3.0;
        let expected: f64 = samples
            .iter()
            .map(|s| {
                let tau = 10f64.powf(-13.69) * s.velocity;
                let i = 10f64.powf(-s.magnitude / 2.5);
                let v = s.velocity * 1.0e4;
                2.0 / tau * i / (v * v * v) * dt
            })
            .sum();

        let mass = photometric_mass(&samples);
        assert!(((mass - expected) / expected).abs() < 1e-9, "mass={mass} expected={expected}");
        assert!(((mass - 1.8117555621405936e-5) / mass).abs() < 1e-9, "mass={mass}");
    }

    #[test]
    fn sink_sees_every_step_in_order() {
        let samples = golden_samples();
        let mut seen = Vec::new();
        let mass = photometric_mass_with(&samples, |step| seen.push(*step));

        assert_eq!(seen.len(), 3);
        for (i, step) in seen.iter().enumerate() {
            assert_eq!(step.index, i);
            assert_eq!(step.sample, samples[i]);
            assert_eq!(step.regime, VelocityRegime::UpTo72_0);
            assert_eq!(step.scaled_velocity, samples[i].velocity * 10_000.0);
        }
        assert!((seen[0].intensity - 1.0).abs() < 1e-15);
        assert_eq!(seen[2].cumulative_mass, mass);

        let running: f64 = seen.iter().map(|s| s.contribution).sum();
        assert!(((running - mass) / mass).abs() < 1e-12);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let samples = golden_samples();
        let a = photometric_mass(&samples);
        let b = photometric_mass(&samples);
        assert_eq!(a.to_bits(), b.to_bits());

        let trace = trace_photometric_mass(&samples);
        assert_eq!(trace.mass.to_bits(), a.to_bits());
        assert_eq!(trace.steps.len(), 3);
        assert!((trace.time_step - 0.2 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn single_sample_contributes_nothing() {
        // dt is 0 for a single sample.
        let mass = photometric_mass(&[Sample::new(1.0, -3.0, 20.0)]);
        assert_eq!(mass, 0.0);
    }

    #[test]
    fn out_of_range_velocity_uses_sentinel_tau() {
        let samples = [Sample::new(0.0, 0.0, 80.0), Sample::new(1.0, 0.0, 80.0)];
        let trace = trace_photometric_mass(&samples);
        assert!(trace.steps.iter().all(|s| s.tau == 1.0));
        assert!(trace.mass.is_finite() && trace.mass > 0.0);
    }
}
