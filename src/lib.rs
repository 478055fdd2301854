//! `photmass` library crate.
//!
//! Computes the photometric mass of a meteoroid from its light curve
//! (time, magnitude, velocity) following Ceplecha (1966).
//!
//! The binary (`photmass`) is a thin wrapper around this library so that:
//!
//! - the physical model is testable without spawning processes
//! - the accumulator can be driven with any diagnostic sink

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod physics;
pub mod plot;
pub mod report;
