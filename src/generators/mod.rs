//! Toolchain-configuration generation primitives.
//!
//! Generation renders into an in-memory [`OutputSet`]; the driver decides
//! whether and where the files reach the filesystem.

pub mod output;
pub mod toolchain;

pub use output::{GeneratedFile, OutputSet};
pub use toolchain::Toolchain;

use crate::core::descriptor::Folders;
use crate::core::settings::Settings;

/// Read-only context handed to the generate hook by the driver.
#[derive(Debug, Clone, Copy)]
pub struct GenerateContext<'a> {
    pub settings: &'a Settings,
    pub folders: &'a Folders,
}
