//! Command implementations.

pub mod completions;
pub mod generate;
pub mod inspect;
pub mod profile;

use anyhow::{bail, Context, Result};

use chandler::core::settings::{Axis, Settings};
use chandler::util::config::SettingsProfile;

use crate::cli::SettingsArgs;

/// Resolve the variable axes for a command.
///
/// Precedence: an explicit `--profile` file, else the default per-user
/// profile when present, else host detection. `--set` overrides then beat
/// whatever the base supplied, axis by axis.
pub fn resolve_settings(args: &SettingsArgs) -> Result<Settings> {
    let mut settings = match &args.profile {
        Some(path) => SettingsProfile::load(path)?.into_settings(),
        None => match SettingsProfile::default_path() {
            Some(path) if path.exists() => SettingsProfile::load_or_default(&path).into_settings(),
            _ => Settings::host(),
        },
    };

    for pair in &args.set {
        let Some((axis, value)) = pair.split_once('=') else {
            bail!("invalid --set value `{}`: expected AXIS=VALUE", pair);
        };
        let axis: Axis = axis
            .parse()
            .with_context(|| format!("invalid --set value `{}`", pair))?;
        settings
            .assign(axis, value)
            .with_context(|| format!("invalid --set value `{}`", pair))?;
    }

    Ok(settings)
}
