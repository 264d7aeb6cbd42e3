//! The build descriptor contract.
//!
//! A descriptor is the declarative recipe the external orchestrator reads:
//! it declares the variable axes that affect binary compatibility, the
//! output formats to emit, the dependency requirements, and per-dependency
//! option adjustments. The orchestrator drives everything; hooks are invoked
//! in the fixed order `layout`, `generate`, `requirements`, `configure` and
//! perform no I/O of their own.

use std::path::PathBuf;

use crate::core::settings::{Axis, Settings};
use crate::core::options::OptionTable;
use crate::core::requirement::Requirement;
use crate::errors::Result;
use crate::generators::{GenerateContext, OutputSet};

/// Whether the descriptor declares an application or a library.
///
/// An application never contributes a library artifact downstream; it only
/// declares consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    Application,
    Library,
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::Application => "application",
            PackageType::Library => "library",
        }
    }
}

/// A downstream file-generation format the orchestrator must emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Dependency manifest consumable by the build-file generator.
    CmakeDeps,
    /// Compiler/platform toolchain description.
    CmakeToolchain,
    /// pkg-config dependency files.
    PkgConfigDeps,
}

impl GeneratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::CmakeDeps => "CMakeDeps",
            GeneratorKind::CmakeToolchain => "CMakeToolchain",
            GeneratorKind::PkgConfigDeps => "PkgConfigDeps",
        }
    }
}

/// Conventional directory layout for generated artifacts.
///
/// Paths are relative to the project root; the descriptor only advises,
/// filesystem operations happen in the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folders {
    /// Source tree root.
    pub source: PathBuf,
    /// Build tree root.
    pub build: PathBuf,
    /// Directory receiving generated toolchain files.
    pub generators: PathBuf,
}

impl Default for Folders {
    fn default() -> Self {
        Folders {
            source: PathBuf::from("."),
            build: PathBuf::from("build"),
            generators: PathBuf::from("build").join("generators"),
        }
    }
}

/// The declarative hooks the orchestrator invokes.
///
/// Default implementations give the conventional behavior; a concrete
/// recipe overrides only what it declares. There is exactly one production
/// implementation ([`crate::ApplicationDescriptor`]); the trait exists so
/// the driver and tests can inject alternatives.
pub trait Descriptor {
    /// The package type tag.
    fn package_type(&self) -> PackageType;

    /// The variable axes the orchestrator must capture before resolving.
    fn settings(&self) -> &[Axis] {
        &Axis::ALL
    }

    /// The output formats the orchestrator must emit.
    fn generators(&self) -> Vec<GeneratorKind> {
        Vec::new()
    }

    /// Position generated files into a conventional directory layout.
    ///
    /// Multi-config toolchains (MSVC) keep a single `build` dir because the
    /// configuration is chosen at build time; single-config toolchains get
    /// one build dir per configuration. The generators dir hangs off the
    /// build dir either way.
    fn layout(&self, settings: &Settings, folders: &mut Folders) {
        let multi_config = settings
            .compiler
            .as_ref()
            .is_some_and(|c| c.is_multi_config());

        folders.source = PathBuf::from(".");
        folders.build = match (multi_config, settings.build_type) {
            (false, Some(bt)) => PathBuf::from("build").join(bt.as_str()),
            _ => PathBuf::from("build"),
        };
        folders.generators = folders.build.join("generators");
    }

    /// Emit toolchain-configuration output into the in-memory output set.
    fn generate(&self, _ctx: &GenerateContext<'_>, _out: &mut OutputSet) -> Result<()> {
        Ok(())
    }

    /// The ordered list of dependency requirements.
    fn requirements(&self) -> Vec<Requirement> {
        Vec::new()
    }

    /// Adjust build options of already-declared dependencies.
    fn configure(&self, _settings: &Settings, _options: &mut OptionTable) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::{BuildType, Compiler, CompilerFamily};

    struct Bare;

    impl Descriptor for Bare {
        fn package_type(&self) -> PackageType {
            PackageType::Library
        }
    }

    fn settings_with(compiler: Compiler, build_type: BuildType) -> Settings {
        Settings {
            compiler: Some(compiler),
            build_type: Some(build_type),
            ..Settings::default()
        }
    }

    #[test]
    fn test_layout_single_config_splits_by_build_type() {
        let settings = settings_with(
            Compiler::new(CompilerFamily::Gcc, "13"),
            BuildType::Release,
        );
        let mut folders = Folders::default();
        Bare.layout(&settings, &mut folders);

        assert_eq!(folders.source, PathBuf::from("."));
        assert_eq!(folders.build, PathBuf::from("build").join("Release"));
        assert_eq!(
            folders.generators,
            PathBuf::from("build").join("Release").join("generators")
        );
    }

    #[test]
    fn test_layout_multi_config_keeps_single_build_dir() {
        let settings = settings_with(
            Compiler::new(CompilerFamily::Msvc, "193"),
            BuildType::Debug,
        );
        let mut folders = Folders::default();
        Bare.layout(&settings, &mut folders);

        assert_eq!(folders.build, PathBuf::from("build"));
        assert_eq!(folders.generators, PathBuf::from("build").join("generators"));
    }

    #[test]
    fn test_default_hooks_declare_nothing() {
        assert!(Bare.requirements().is_empty());
        assert!(Bare.generators().is_empty());
        assert_eq!(Bare.settings(), &Axis::ALL[..]);
    }
}
