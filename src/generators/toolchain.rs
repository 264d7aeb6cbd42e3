//! The toolchain-description generator.
//!
//! Renders the toolchain file consumed by the downstream build-file
//! generator, plus the preset manifest pointing at it. Two files always land
//! in the generators dir; a third, the user-preset include stub at the
//! source root, is emitted only while `user_presets` is left enabled.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::json;

use crate::core::settings::{Arch, Settings};
use crate::core::descriptor::Folders;
use crate::errors::{Error, Result};
use crate::generators::{GenerateContext, OutputSet};

pub const TOOLCHAIN_FILE: &str = "toolchain.cmake";
pub const PRESETS_FILE: &str = "CMakePresets.json";
pub const USER_PRESETS_FILE: &str = "CMakeUserPresets.json";

/// Builder for the toolchain description.
#[derive(Debug, Clone)]
pub struct Toolchain<'a> {
    settings: &'a Settings,
    folders: &'a Folders,
    /// Whether to emit the user-preset include stub at the source root.
    pub user_presets: bool,
    cache_variables: BTreeMap<String, String>,
}

impl<'a> Toolchain<'a> {
    pub fn new(ctx: &GenerateContext<'a>) -> Self {
        Toolchain {
            settings: ctx.settings,
            folders: ctx.folders,
            user_presets: true,
            cache_variables: BTreeMap::new(),
        }
    }

    /// Add a cache variable to the rendered toolchain file.
    pub fn cache_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cache_variables.insert(name.into(), value.into());
    }

    /// Render the toolchain description into the output set.
    pub fn generate(&self, out: &mut OutputSet) -> Result<()> {
        out.add(
            self.folders.generators.join(TOOLCHAIN_FILE),
            self.render_toolchain(),
        );
        out.add(
            self.folders.generators.join(PRESETS_FILE),
            self.render_presets()?,
        );

        if self.user_presets {
            out.add(
                self.folders.source.join(USER_PRESETS_FILE),
                self.render_user_presets()?,
            );
        }

        Ok(())
    }

    fn render_toolchain(&self) -> String {
        let mut text = String::from("# Toolchain file generated by chandler. Do not edit.\n");

        let multi_config = self
            .settings
            .compiler
            .as_ref()
            .is_some_and(|c| c.is_multi_config());

        // Multi-config generators pick the configuration at build time, so
        // pinning CMAKE_BUILD_TYPE there would be ignored or misleading.
        if !multi_config {
            if let Some(bt) = self.settings.build_type {
                text.push_str(&format!(
                    "set(CMAKE_BUILD_TYPE \"{}\" CACHE STRING \"Build configuration\")\n",
                    bt
                ));
            }
        }

        if multi_config {
            if let Some(arch) = self.settings.arch {
                text.push_str(&format!(
                    "set(CMAKE_GENERATOR_PLATFORM \"{}\" CACHE STRING \"Target platform\")\n",
                    msvc_platform(arch)
                ));
            }
        }

        for (name, value) in &self.cache_variables {
            text.push_str(&format!(
                "set({} \"{}\" CACHE STRING \"Cache variable\")\n",
                name, value
            ));
        }

        text
    }

    fn render_presets(&self) -> Result<String> {
        let mut preset = json!({
            "name": "default",
            "toolchainFile": unix_path(&self.folders.generators.join(TOOLCHAIN_FILE)),
            "binaryDir": unix_path(&self.folders.build),
        });

        if let Some(bt) = self.settings.build_type {
            preset["cacheVariables"] = json!({ "CMAKE_BUILD_TYPE": bt.as_str() });
        }

        let doc = json!({
            "version": 3,
            "configurePresets": [preset],
        });

        serde_json::to_string_pretty(&doc).map_err(|e| Error::Render {
            file: PRESETS_FILE.to_string(),
            source: e,
        })
    }

    fn render_user_presets(&self) -> Result<String> {
        let doc = json!({
            "version": 4,
            "include": [unix_path(&self.folders.generators.join(PRESETS_FILE))],
        });

        serde_json::to_string_pretty(&doc).map_err(|e| Error::Render {
            file: USER_PRESETS_FILE.to_string(),
            source: e,
        })
    }
}

/// MSVC platform name for an architecture.
fn msvc_platform(arch: Arch) -> &'static str {
    match arch {
        Arch::X86_64 => "x64",
        Arch::X86 => "Win32",
        Arch::Aarch64 => "ARM64",
        Arch::Arm => "ARM",
    }
}

/// Render a relative path with forward slashes for preset manifests.
fn unix_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
