//! Input helpers.
//!
//! - light-curve CSV ingest + validation (`ingest`)

pub mod ingest;

pub use ingest::*;
