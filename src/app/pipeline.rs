//! Shared "mass pipeline" logic.
//!
//! CSV ingest -> accumulator -> sanity check. The text and JSON front-ends in
//! `app` only differ in how they present the result.

use crate::domain::{MassStep, MassTrace, RunConfig};
use crate::error::AppError;
use crate::io::ingest::{IngestedSamples, load_samples};
use crate::physics::photometric_mass_with;
use crate::physics::model::mean_time_step;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedSamples,
    pub trace: MassTrace,
}

/// Read the light curve named by `config`.
pub fn ingest(config: &RunConfig) -> Result<IngestedSamples, AppError> {
    load_samples(&config.input)
}

/// Fold the accumulator over the ingested samples.
///
/// Every step is logged at debug level, forwarded to `on_step`, and kept in
/// the returned trace. A non-finite mass (zero velocity in the input) is
/// returned as is, with a warning.
pub fn compute<F>(ingest: &IngestedSamples, mut on_step: F) -> MassTrace
where
    F: FnMut(&MassStep),
{
    let samples = &ingest.samples;
    let mut steps = Vec::with_capacity(samples.len());

    let mass = photometric_mass_with(samples, |step| {
        log::debug!(
            "sample {}: regime={} tau={:e} I={:e} v={:e} mass={:e}",
            step.index,
            step.regime.display_name(),
            step.tau,
            step.intensity,
            step.scaled_velocity,
            step.cumulative_mass
        );
        on_step(step);
        steps.push(*step);
    });

    if !mass.is_finite() {
        log::warn!("Non-finite photometric mass ({mass}); check the input for zero velocities");
    }

    MassTrace {
        time_step: mean_time_step(samples),
        steps,
        mass,
    }
}

/// Execute the full pipeline without a step sink.
pub fn run_mass(config: &RunConfig) -> Result<RunOutput, AppError> {
    let ingest = ingest(config)?;
    let trace = compute(&ingest, |_| {});
    Ok(RunOutput { ingest, trace })
}
