//! `chandler generate` command

use anyhow::Result;

use chandler::ops::emit::{run_descriptor, write_emission};
use chandler::ApplicationDescriptor;

use crate::cli::GenerateArgs;
use crate::commands::resolve_settings;

pub fn execute(args: GenerateArgs) -> Result<()> {
    let settings = resolve_settings(&args.settings)?;
    let emission = run_descriptor(&ApplicationDescriptor, &settings)?;

    let written = write_emission(&emission, &args.out)?;
    for path in &written {
        println!("Generated {}", path.display());
    }

    Ok(())
}
