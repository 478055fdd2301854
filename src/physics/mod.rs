//! Ceplecha photometric-mass model.
//!
//! The model is implemented as small, pure functions over borrowed samples so
//! the accumulator and the CLI can stay thin.

pub mod mass;
pub mod model;

pub use mass::*;
pub use model::*;
