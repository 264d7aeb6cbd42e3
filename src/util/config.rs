//! Settings profile files.
//!
//! A profile is a TOML file carrying values for the variable axes:
//!
//! ```toml
//! [settings]
//! os = "Linux"
//! arch = "x86_64"
//! build_type = "Release"
//!
//! [settings.compiler]
//! family = "gcc"
//! version = "13"
//! ```
//!
//! A profile supplies exactly the axes it names; unnamed axes stay unset so
//! missing-axis errors surface when a hook needs them. The default location
//! is the per-user config dir (`profile.toml` under the chandler project
//! dir); `--set` overrides on the CLI beat profile values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::settings::{Arch, BuildType, Compiler, Os, Settings};

/// A settings profile document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsProfile {
    /// Axis values
    pub settings: ProfileSettings,
}

/// The `[settings]` table of a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub os: Option<Os>,
    pub arch: Option<Arch>,
    pub build_type: Option<BuildType>,
    pub compiler: Option<Compiler>,
}

impl SettingsProfile {
    /// Load a profile from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings profile: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse settings profile: {}", path.display()))
    }

    /// Load a profile with fallback to defaults if the file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to load settings profile from {}: {}",
                    path.display(),
                    e
                );
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save the profile to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create profile directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self)
            .with_context(|| "failed to serialize settings profile")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write settings profile: {}", path.display()))?;

        Ok(())
    }

    /// The default per-user profile location.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "chandler", "chandler")
            .map(|dirs| dirs.config_dir().join("profile.toml"))
    }

    /// Convert into resolved settings.
    pub fn into_settings(self) -> Settings {
        Settings {
            os: self.settings.os,
            arch: self.settings.arch,
            build_type: self.settings.build_type,
            compiler: self.settings.compiler,
        }
    }

    /// Capture resolved settings as a profile.
    pub fn from_settings(settings: &Settings) -> Self {
        SettingsProfile {
            settings: ProfileSettings {
                os: settings.os,
                arch: settings.arch,
                build_type: settings.build_type,
                compiler: settings.compiler.clone(),
            },
        }
    }
}
