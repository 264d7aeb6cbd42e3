//! CLI integration tests for Chandler.
//!
//! These tests drive the binary end to end: settings resolution, descriptor
//! inspection, and toolchain-file generation.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the chandler binary command.
fn chandler() -> Command {
    Command::cargo_bin("chandler").unwrap()
}

/// Create a temporary directory for test output.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Axis overrides for a complete Linux/gcc environment.
const LINUX_SET: [&str; 8] = [
    "--set",
    "os=Linux",
    "--set",
    "arch=x86_64",
    "--set",
    "build_type=Release",
    "--set",
    "compiler=gcc-13",
];

/// A profile file naming every axis.
const FULL_PROFILE: &str = r#"
[settings]
os = "Linux"
arch = "x86_64"
build_type = "Release"

[settings.compiler]
family = "gcc"
version = "13"
"#;

// ============================================================================
// chandler inspect
// ============================================================================

#[test]
fn test_inspect_prints_declaration() {
    chandler()
        .arg("inspect")
        .args(LINUX_SET)
        .assert()
        .success()
        .stdout(predicate::str::contains("Package type: application"))
        .stdout(predicate::str::contains("os = Linux"))
        .stdout(predicate::str::contains("CMakeDeps"))
        .stdout(predicate::str::contains("fmt/10.2.1"))
        .stdout(predicate::str::contains("gtest/1.15.0"))
        .stdout(predicate::str::contains("spdlog/1.14.1"))
        .stdout(predicate::str::contains("dbg-macro/0.5.1"))
        .stdout(predicate::str::contains("qt/6.6.3"));
}

#[test]
fn test_inspect_shows_wayland_option_on_linux() {
    chandler()
        .arg("inspect")
        .args(LINUX_SET)
        .assert()
        .success()
        .stdout(predicate::str::contains("shared = true"))
        .stdout(predicate::str::contains("qtwayland = true"));
}

#[test]
fn test_inspect_omits_wayland_option_on_windows() {
    chandler()
        .arg("inspect")
        .args([
            "--set",
            "os=Windows",
            "--set",
            "arch=x86_64",
            "--set",
            "build_type=Release",
            "--set",
            "compiler=msvc-193",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("shared = true"))
        .stdout(predicate::str::contains("qtwayland").not());
}

#[test]
fn test_inspect_reads_profile_file() {
    let tmp = temp_dir();
    let profile = tmp.path().join("profile.toml");
    fs::write(&profile, FULL_PROFILE).unwrap();

    chandler()
        .arg("inspect")
        .arg("--profile")
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("compiler = gcc-13"))
        .stdout(predicate::str::contains("qtwayland = true"));
}

#[test]
fn test_inspect_set_overrides_profile() {
    let tmp = temp_dir();
    let profile = tmp.path().join("profile.toml");
    fs::write(&profile, FULL_PROFILE).unwrap();

    chandler()
        .arg("inspect")
        .arg("--profile")
        .arg(&profile)
        .args(["--set", "os=Windows"])
        .assert()
        .success()
        .stdout(predicate::str::contains("os = Windows"))
        .stdout(predicate::str::contains("qtwayland").not());
}

#[test]
fn test_inspect_fails_on_missing_axis() {
    let tmp = temp_dir();
    let profile = tmp.path().join("profile.toml");
    fs::write(&profile, "[settings]\nos = \"Linux\"\n").unwrap();

    chandler()
        .arg("inspect")
        .arg("--profile")
        .arg(&profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing value for settings axis"));
}

#[test]
fn test_inspect_rejects_invalid_set_value() {
    chandler()
        .arg("inspect")
        .args(["--set", "os=BeOS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_inspect_rejects_unknown_axis() {
    chandler()
        .arg("inspect")
        .args(["--set", "cpu=fast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cpu"));
}

// ============================================================================
// chandler generate
// ============================================================================

#[test]
fn test_generate_writes_toolchain_files() {
    let tmp = temp_dir();

    chandler()
        .arg("generate")
        .args(LINUX_SET)
        .arg("--out")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("toolchain.cmake"))
        .stdout(predicate::str::contains("CMakePresets.json"));

    let generators = tmp.path().join("build").join("Release").join("generators");
    let toolchain = fs::read_to_string(generators.join("toolchain.cmake")).unwrap();
    assert!(toolchain.contains("CMAKE_BUILD_TYPE \"Release\""));

    let presets = fs::read_to_string(generators.join("CMakePresets.json")).unwrap();
    assert!(presets.contains("\"toolchainFile\""));
}

#[test]
fn test_generate_never_writes_user_presets() {
    let tmp = temp_dir();

    chandler()
        .arg("generate")
        .args(LINUX_SET)
        .arg("--out")
        .arg(tmp.path())
        .assert()
        .success();

    assert!(!tmp.path().join("CMakeUserPresets.json").exists());
}

#[test]
fn test_generate_multi_config_layout() {
    let tmp = temp_dir();

    chandler()
        .arg("generate")
        .args([
            "--set",
            "os=Windows",
            "--set",
            "arch=x86_64",
            "--set",
            "build_type=Debug",
            "--set",
            "compiler=msvc-193",
        ])
        .arg("--out")
        .arg(tmp.path())
        .assert()
        .success();

    // No per-configuration build dir for MSVC.
    let generators = tmp.path().join("build").join("generators");
    let toolchain = fs::read_to_string(generators.join("toolchain.cmake")).unwrap();
    assert!(toolchain.contains("CMAKE_GENERATOR_PLATFORM \"x64\""));
    assert!(!tmp.path().join("build").join("Debug").exists());
}

#[test]
fn test_generate_fails_on_missing_axis() {
    let tmp = temp_dir();
    let profile = tmp.path().join("profile.toml");
    fs::write(&profile, "[settings]\nos = \"Linux\"\narch = \"x86_64\"\n").unwrap();

    chandler()
        .arg("generate")
        .arg("--profile")
        .arg(&profile)
        .arg("--out")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing value for settings axis"));

    assert!(!tmp.path().join("build").exists());
}

// ============================================================================
// chandler profile
// ============================================================================

#[test]
fn test_profile_show_with_overrides() {
    chandler()
        .args(["profile", "show"])
        .args(LINUX_SET)
        .assert()
        .success()
        .stdout(predicate::str::contains("os = Linux"))
        .stdout(predicate::str::contains("build_type = Release"));
}

#[test]
fn test_profile_init_writes_file() {
    let tmp = temp_dir();
    let path = tmp.path().join("profile.toml");

    chandler()
        .args(["profile", "init", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[settings]"));
    assert!(contents.contains("build_type = \"Release\""));
}

// ============================================================================
// chandler completions
// ============================================================================

#[test]
fn test_completions_bash() {
    chandler()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chandler"));
}
