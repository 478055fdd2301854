//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - light-curve observations (`Sample`)
//! - the velocity bins of the tau model (`VelocityRegime`)
//! - per-sample accumulator diagnostics (`MassStep`, `MassTrace`)
//! - run configuration (`RunConfig`, `OutputFormat`)

pub mod types;

pub use types::*;
