//! Error types for the descriptor layer.
//!
//! Every failure here is a hard stop: the descriptor defines no retry or
//! recovery logic of its own. Anything beyond the declarative layer
//! (unresolvable pins, per-platform option validity) is surfaced by the
//! external orchestrator, not by this crate.

use miette::Diagnostic;
use thiserror::Error;

use crate::core::settings::Axis;

/// Result alias for descriptor-layer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by the descriptor layer.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The environment did not supply a value for a declared variable axis.
    #[error("missing value for settings axis `{axis}`")]
    #[diagnostic(
        code(chandler::settings::missing),
        help("supply it with `--set {axis}=<value>` or add it to the settings profile")
    )]
    MissingSetting { axis: Axis },

    /// A raw value did not parse for its axis.
    #[error("invalid value `{value}` for settings axis `{axis}`")]
    #[diagnostic(
        code(chandler::settings::invalid_value),
        help("valid values: {valid}")
    )]
    InvalidSetting {
        axis: Axis,
        value: String,
        valid: &'static str,
    },

    /// An axis name did not match any declared axis.
    #[error("unknown settings axis `{name}`")]
    #[diagnostic(
        code(chandler::settings::unknown_axis),
        help("valid axes: os, compiler, build_type, arch")
    )]
    UnknownAxis { name: String },

    /// Options were configured for a dependency never declared as a requirement.
    #[error("cannot configure options for `{name}`: not declared as a requirement")]
    #[diagnostic(
        code(chandler::options::undeclared),
        help("declare `{name}` in requirements() before configuring it")
    )]
    UndeclaredDependency { name: String },

    /// The same dependency was declared twice.
    #[error("requirement `{name}` declared more than once")]
    #[diagnostic(code(chandler::requirements::duplicate))]
    DuplicateRequirement { name: String },

    /// A textual requirement reference was malformed.
    #[error("invalid requirement reference `{reference}`")]
    #[diagnostic(
        code(chandler::requirements::invalid_ref),
        help("expected `name/version` with an exact version, e.g. `fmt/10.2.1`")
    )]
    InvalidReference {
        reference: String,
        #[source]
        source: Option<semver::Error>,
    },

    /// A generated file failed to render.
    #[error("failed to render `{file}`")]
    #[diagnostic(code(chandler::generate::render))]
    Render {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}
