//! Variable build axes and their values.
//!
//! A settings axis is a build-environment dimension (OS, compiler, build
//! configuration, architecture) whose value can change which binaries and
//! options are valid. Axis values are resolved from the ambient environment
//! by the orchestrator side (settings profile, `--set` overrides, or host
//! detection) and injected into the descriptor hooks as a read-only
//! [`Settings`] value — never read from global state inside a hook.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// A declared variable axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Os,
    Compiler,
    BuildType,
    Arch,
}

impl Axis {
    /// All axes, in the declared order.
    pub const ALL: [Axis; 4] = [Axis::Os, Axis::Compiler, Axis::BuildType, Axis::Arch];

    /// Get the axis name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Os => "os",
            Axis::Compiler => "compiler",
            Axis::BuildType => "build_type",
            Axis::Arch => "arch",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "os" => Ok(Axis::Os),
            "compiler" => Ok(Axis::Compiler),
            "build_type" => Ok(Axis::BuildType),
            "arch" => Ok(Axis::Arch),
            _ => Err(Error::UnknownAxis { name: s.to_string() }),
        }
    }
}

/// Target operating system.
///
/// Canonical strings match the ecosystem the descriptor feeds
/// (`Linux`, `Windows`, `Macos`, `FreeBSD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Os {
    Linux,
    Windows,
    Macos,
    #[serde(rename = "FreeBSD")]
    FreeBsd,
}

impl Os {
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Linux => "Linux",
            Os::Windows => "Windows",
            Os::Macos => "Macos",
            Os::FreeBsd => "FreeBSD",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Os {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Linux" => Ok(Os::Linux),
            "Windows" => Ok(Os::Windows),
            "Macos" => Ok(Os::Macos),
            "FreeBSD" => Ok(Os::FreeBsd),
            _ => Err(Error::InvalidSetting {
                axis: Axis::Os,
                value: s.to_string(),
                valid: "Linux, Windows, Macos, FreeBSD",
            }),
        }
    }
}

/// Build configuration (the four CMake configurations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildType {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Debug" => Ok(BuildType::Debug),
            "Release" => Ok(BuildType::Release),
            "RelWithDebInfo" => Ok(BuildType::RelWithDebInfo),
            "MinSizeRel" => Ok(BuildType::MinSizeRel),
            _ => Err(Error::InvalidSetting {
                axis: Axis::BuildType,
                value: s.to_string(),
                valid: "Debug, Release, RelWithDebInfo, MinSizeRel",
            }),
        }
    }
}

/// Target CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arch {
    #[serde(rename = "x86_64")]
    X86_64,
    #[serde(rename = "aarch64")]
    Aarch64,
    #[serde(rename = "x86")]
    X86,
    #[serde(rename = "arm")]
    Arm,
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::Aarch64 => "aarch64",
            Arch::X86 => "x86",
            Arch::Arm => "arm",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x86_64" => Ok(Arch::X86_64),
            "aarch64" => Ok(Arch::Aarch64),
            "x86" => Ok(Arch::X86),
            "arm" => Ok(Arch::Arm),
            _ => Err(Error::InvalidSetting {
                axis: Axis::Arch,
                value: s.to_string(),
                valid: "x86_64, aarch64, x86, arm",
            }),
        }
    }
}

/// The family of a compiler toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompilerFamily {
    Gcc,
    Clang,
    AppleClang,
    Msvc,
}

impl CompilerFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompilerFamily::Gcc => "gcc",
            CompilerFamily::Clang => "clang",
            CompilerFamily::AppleClang => "apple-clang",
            CompilerFamily::Msvc => "msvc",
        }
    }
}

impl fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompilerFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gcc" => Ok(CompilerFamily::Gcc),
            "clang" => Ok(CompilerFamily::Clang),
            "apple-clang" => Ok(CompilerFamily::AppleClang),
            "msvc" => Ok(CompilerFamily::Msvc),
            _ => Err(Error::InvalidSetting {
                axis: Axis::Compiler,
                value: s.to_string(),
                valid: "gcc, clang, apple-clang, msvc",
            }),
        }
    }
}

/// Compiler identity: family plus major version.
///
/// Textual form is `family-version`, e.g. `gcc-13` or `msvc-193`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compiler {
    pub family: CompilerFamily,
    pub version: String,
}

impl Compiler {
    pub fn new(family: CompilerFamily, version: impl Into<String>) -> Self {
        Compiler {
            family,
            version: version.into(),
        }
    }

    /// Whether this compiler drives a multi-config build-file generator.
    pub fn is_multi_config(&self) -> bool {
        self.family == CompilerFamily::Msvc
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.family, self.version)
    }
}

impl FromStr for Compiler {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // `apple-clang` itself contains a dash, so split on the last one.
        let (family, version) = s.rsplit_once('-').ok_or(Error::InvalidSetting {
            axis: Axis::Compiler,
            value: s.to_string(),
            valid: "<family>-<version>, e.g. gcc-13",
        })?;

        if version.is_empty() || !version.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(Error::InvalidSetting {
                axis: Axis::Compiler,
                value: s.to_string(),
                valid: "<family>-<version>, e.g. gcc-13",
            });
        }

        Ok(Compiler {
            family: family.parse()?,
            version: version.to_string(),
        })
    }
}

/// Resolved values for the variable axes.
///
/// Each axis is independently optional; hooks that depend on an axis ask for
/// it with the `require_*` accessors and get [`Error::MissingSetting`] when
/// the environment never supplied it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub os: Option<Os>,
    pub compiler: Option<Compiler>,
    pub build_type: Option<BuildType>,
    pub arch: Option<Arch>,
}

impl Settings {
    /// Check whether an axis has a value.
    pub fn is_set(&self, axis: Axis) -> bool {
        match axis {
            Axis::Os => self.os.is_some(),
            Axis::Compiler => self.compiler.is_some(),
            Axis::BuildType => self.build_type.is_some(),
            Axis::Arch => self.arch.is_some(),
        }
    }

    /// Get the `os` axis, failing if unset.
    pub fn require_os(&self) -> Result<Os> {
        self.os.ok_or(Error::MissingSetting { axis: Axis::Os })
    }

    /// Get the `compiler` axis, failing if unset.
    pub fn require_compiler(&self) -> Result<&Compiler> {
        self.compiler
            .as_ref()
            .ok_or(Error::MissingSetting { axis: Axis::Compiler })
    }

    /// Get the `build_type` axis, failing if unset.
    pub fn require_build_type(&self) -> Result<BuildType> {
        self.build_type
            .ok_or(Error::MissingSetting { axis: Axis::BuildType })
    }

    /// Get the `arch` axis, failing if unset.
    pub fn require_arch(&self) -> Result<Arch> {
        self.arch.ok_or(Error::MissingSetting { axis: Axis::Arch })
    }

    /// Assign a raw textual value to an axis (the CLI `--set` path).
    pub fn assign(&mut self, axis: Axis, raw: &str) -> Result<()> {
        match axis {
            Axis::Os => self.os = Some(raw.parse()?),
            Axis::Compiler => self.compiler = Some(raw.parse()?),
            Axis::BuildType => self.build_type = Some(raw.parse()?),
            Axis::Arch => self.arch = Some(raw.parse()?),
        }
        Ok(())
    }

    /// Format an axis value for display, or `<unset>`.
    pub fn display(&self, axis: Axis) -> String {
        match axis {
            Axis::Os => self.os.map(|v| v.to_string()),
            Axis::Compiler => self.compiler.as_ref().map(|v| v.to_string()),
            Axis::BuildType => self.build_type.map(|v| v.to_string()),
            Axis::Arch => self.arch.map(|v| v.to_string()),
        }
        .unwrap_or_else(|| "<unset>".to_string())
    }

    /// Detect settings for the host machine.
    ///
    /// The os and arch axes come from the compile-time target of this binary,
    /// build_type defaults to `Release`, and the compiler axis is probed from
    /// the `CXX` environment variable or PATH. A failed compiler probe leaves
    /// that axis unset rather than guessing.
    pub fn host() -> Settings {
        let os = match std::env::consts::OS {
            "linux" => Some(Os::Linux),
            "windows" => Some(Os::Windows),
            "macos" => Some(Os::Macos),
            "freebsd" => Some(Os::FreeBsd),
            _ => None,
        };

        let arch = match std::env::consts::ARCH {
            "x86_64" => Some(Arch::X86_64),
            "aarch64" => Some(Arch::Aarch64),
            "x86" => Some(Arch::X86),
            "arm" => Some(Arch::Arm),
            _ => None,
        };

        let compiler = probe_compiler(os);
        if compiler.is_none() {
            tracing::warn!("no C++ compiler found on PATH; compiler axis left unset");
        }

        Settings {
            os,
            compiler,
            build_type: Some(BuildType::Release),
            arch,
        }
    }
}

/// Locate a C++ compiler and identify its family and major version.
///
/// Checks the `CXX` environment variable first, then searches PATH for the
/// common driver names. Family is identified from the `--version` banner
/// rather than the binary name, since `c++` is usually a symlink.
fn probe_compiler(os: Option<Os>) -> Option<Compiler> {
    let path = std::env::var("CXX")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.exists() || which::which(p).is_ok())
        .or_else(|| {
            ["c++", "g++", "clang++", "cl"]
                .iter()
                .find_map(|name| which::which(name).ok())
        })?;

    let output = std::process::Command::new(&path).arg("--version").output().ok()?;
    let banner = String::from_utf8_lossy(&output.stdout);
    let first_line = banner.lines().next().unwrap_or_default();

    let family = identify_family(first_line, os)?;
    let version = major_version(first_line)?;

    tracing::debug!(
        "detected host compiler {}-{} at {}",
        family,
        version,
        path.display()
    );

    Some(Compiler { family, version })
}

/// Identify the compiler family from a `--version` banner line.
fn identify_family(line: &str, os: Option<Os>) -> Option<CompilerFamily> {
    let lower = line.to_ascii_lowercase();
    if lower.contains("apple clang") {
        Some(CompilerFamily::AppleClang)
    } else if lower.contains("clang") {
        // Stock clang on macOS still targets the Apple toolchain.
        if os == Some(Os::Macos) {
            Some(CompilerFamily::AppleClang)
        } else {
            Some(CompilerFamily::Clang)
        }
    } else if lower.contains("microsoft") {
        Some(CompilerFamily::Msvc)
    } else if lower.contains("g++") || lower.contains("gcc") || lower.contains("free software") {
        Some(CompilerFamily::Gcc)
    } else {
        None
    }
}

/// Extract the major version from a `--version` banner line.
fn major_version(line: &str) -> Option<String> {
    line.split_whitespace()
        .find(|tok| tok.starts_with(|c: char| c.is_ascii_digit()))
        .map(|tok| {
            tok.chars()
                .take_while(|c| c.is_ascii_digit())
                .collect::<String>()
        })
        .filter(|major| !major.is_empty())
}
