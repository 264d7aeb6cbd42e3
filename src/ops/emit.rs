//! The descriptor driver.
//!
//! Invokes the hooks of a descriptor in the fixed order `layout`,
//! `generate`, `requirements`, `configure` and collects everything they
//! declare into an [`Emission`]. Axis presence is validated up front so a
//! missing value fails before any hook runs, and option namespaces are
//! seeded from the requirement list so configure can only touch declared
//! dependencies.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::descriptor::{Descriptor, Folders, GeneratorKind, PackageType};
use crate::core::options::OptionTable;
use crate::core::requirement::Requirement;
use crate::core::settings::Settings;
use crate::errors::{Error, Result};
use crate::generators::{GenerateContext, OutputSet};

/// Everything one descriptor run declares, ready for the orchestrator.
#[derive(Debug, Clone)]
pub struct Emission {
    pub package_type: PackageType,
    pub generators: Vec<GeneratorKind>,
    pub folders: Folders,
    pub output: OutputSet,
    pub requirements: Vec<Requirement>,
    pub options: OptionTable,
}

/// Run one descriptor against resolved settings.
///
/// One descriptor instance per run; hooks execute sequentially on the
/// calling thread and never touch the filesystem.
pub fn run_descriptor(descriptor: &dyn Descriptor, settings: &Settings) -> Result<Emission> {
    for axis in descriptor.settings() {
        if !settings.is_set(*axis) {
            return Err(Error::MissingSetting { axis: *axis });
        }
    }

    let mut folders = Folders::default();
    descriptor.layout(settings, &mut folders);
    tracing::debug!(
        "layout: build={} generators={}",
        folders.build.display(),
        folders.generators.display()
    );

    let mut output = OutputSet::new();
    let ctx = GenerateContext {
        settings,
        folders: &folders,
    };
    descriptor.generate(&ctx, &mut output)?;

    let requirements = descriptor.requirements();
    let mut options = OptionTable::new();
    for req in &requirements {
        if options.is_declared(&req.name) {
            return Err(Error::DuplicateRequirement {
                name: req.name.clone(),
            });
        }
        options.seed(req.name.clone());
    }

    descriptor.configure(settings, &mut options)?;

    Ok(Emission {
        package_type: descriptor.package_type(),
        generators: descriptor.generators(),
        folders,
        output,
        requirements,
        options,
    })
}

/// Write the emitted files under a project root.
///
/// Returns the paths written, in emission order.
pub fn write_emission(emission: &Emission, root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(emission.output.len());

    for file in emission.output.files() {
        let target = root.join(&file.path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory: {}", parent.display())
            })?;
        }

        std::fs::write(&target, &file.contents)
            .with_context(|| format!("failed to write generated file: {}", target.display()))?;

        tracing::info!("generated {}", file.path.display());
        written.push(file.path.clone());
    }

    Ok(written)
}
