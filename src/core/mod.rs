//! Core data structures for Chandler.
//!
//! This module contains the declarative model the orchestrator consumes:
//! - Variable axes and resolved settings
//! - The descriptor trait and the application recipe
//! - Requirements and per-dependency options

pub mod descriptor;
pub mod options;
pub mod recipe;
pub mod requirement;
pub mod settings;

pub use descriptor::{Descriptor, Folders, GeneratorKind, PackageType};
pub use options::{OptionSet, OptionTable, OptionValue};
pub use recipe::ApplicationDescriptor;
pub use requirement::Requirement;
pub use settings::{Arch, Axis, BuildType, Compiler, CompilerFamily, Os, Settings};
