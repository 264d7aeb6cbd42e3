//! The application descriptor.

use semver::Version;

use crate::core::descriptor::{Descriptor, GeneratorKind, PackageType};
use crate::core::options::OptionTable;
use crate::core::requirement::Requirement;
use crate::core::settings::{Os, Settings};
use crate::errors::Result;
use crate::generators::{GenerateContext, OutputSet, Toolchain};

/// The descriptor for the application this repository describes.
///
/// A stateless unit struct: every hook computes its answer from scratch, so
/// two fresh instances always declare the same thing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationDescriptor;

impl Descriptor for ApplicationDescriptor {
    fn package_type(&self) -> PackageType {
        PackageType::Application
    }

    fn generators(&self) -> Vec<GeneratorKind> {
        vec![GeneratorKind::CmakeDeps]
    }

    fn generate(&self, ctx: &GenerateContext<'_>, out: &mut OutputSet) -> Result<()> {
        let mut toolchain = Toolchain::new(ctx);
        // Suppress the source-tree user-preset stub before anything renders.
        toolchain.user_presets = false;
        toolchain.generate(out)
    }

    fn requirements(&self) -> Vec<Requirement> {
        vec![
            Requirement::new("fmt", Version::new(10, 2, 1)),
            Requirement::new("gtest", Version::new(1, 15, 0)),
            Requirement::new("spdlog", Version::new(1, 14, 1)),
            Requirement::new("dbg-macro", Version::new(0, 5, 1)),
            Requirement::new("qt", Version::new(6, 6, 3)),
        ]
    }

    fn configure(&self, settings: &Settings, options: &mut OptionTable) -> Result<()> {
        let qt = options.dependency_mut("qt")?;
        qt.set("shared", true);

        // The branch reads only the os axis; arch and compiler never
        // participate in the decision.
        if settings.require_os()? == Os::Linux {
            qt.set("qtwayland", true);
        }

        Ok(())
    }
}
