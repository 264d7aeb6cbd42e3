//! High-level operations.
//!
//! The driver here is what the external orchestrator (and the CLI) calls to
//! run a descriptor end to end.

pub mod emit;

pub use emit::{run_descriptor, write_emission, Emission};
