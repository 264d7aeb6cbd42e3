//! Chandler - Declarative build-dependency descriptors for native applications
//!
//! This crate provides the descriptor model consumed by an external build
//! orchestrator: variable build axes, dependency requirements, per-dependency
//! options, and toolchain-configuration generation.

pub mod core;
pub mod errors;
pub mod generators;
pub mod ops;
pub mod util;

pub use self::core::{
    descriptor::Descriptor, descriptor::Folders, descriptor::GeneratorKind,
    descriptor::PackageType, options::OptionTable, options::OptionValue,
    recipe::ApplicationDescriptor, requirement::Requirement, settings::Axis, settings::Settings,
};

pub use errors::{Error, Result};
pub use ops::emit::{run_descriptor, write_emission, Emission};
