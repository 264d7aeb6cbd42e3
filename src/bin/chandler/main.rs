//! Chandler CLI - descriptor inspection and toolchain-file generation

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("chandler=debug")
    } else {
        EnvFilter::new("chandler=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Inspect(args) => commands::inspect::execute(args),
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Profile(args) => commands::profile::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
