//! `chandler profile` command

use anyhow::{bail, Result};

use chandler::core::settings::{Axis, Settings};
use chandler::util::config::SettingsProfile;

use crate::cli::{ProfileArgs, ProfileCommands, ProfileInitArgs, ProfileShowArgs};
use crate::commands::resolve_settings;

pub fn execute(args: ProfileArgs) -> Result<()> {
    match args.command {
        ProfileCommands::Show(show_args) => show(show_args),
        ProfileCommands::Init(init_args) => init(init_args),
    }
}

fn show(args: ProfileShowArgs) -> Result<()> {
    let settings = resolve_settings(&args.settings)?;

    println!("Settings:");
    for axis in Axis::ALL {
        println!("  {} = {}", axis, settings.display(axis));
    }

    Ok(())
}

fn init(args: ProfileInitArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => match SettingsProfile::default_path() {
            Some(path) => path,
            None => bail!("no per-user profile location available; pass --path"),
        },
    };

    let settings = Settings::host();
    SettingsProfile::from_settings(&settings).save(&path)?;

    println!("Wrote {}", path.display());
    for axis in Axis::ALL {
        println!("  {} = {}", axis, settings.display(axis));
    }

    Ok(())
}
