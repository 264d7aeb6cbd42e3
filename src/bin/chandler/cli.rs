//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Chandler - declarative build-dependency descriptors for native applications
#[derive(Parser)]
#[command(name = "chandler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show everything the descriptor declares for the resolved settings
    Inspect(InspectArgs),

    /// Run the descriptor and write the generated toolchain files
    Generate(GenerateArgs),

    /// Settings profile management
    Profile(ProfileArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// How the variable axes get their values.
#[derive(Args)]
pub struct SettingsArgs {
    /// Settings profile file (defaults to the per-user profile, then host detection)
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Override one axis value, e.g. --set os=Linux
    #[arg(long = "set", value_name = "AXIS=VALUE")]
    pub set: Vec<String>,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Project root to write generated files under
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommands,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the resolved settings
    Show(ProfileShowArgs),

    /// Detect host settings and write them as a profile
    Init(ProfileInitArgs),
}

#[derive(Args)]
pub struct ProfileShowArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Args)]
pub struct ProfileInitArgs {
    /// Where to write the profile (defaults to the per-user location)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
