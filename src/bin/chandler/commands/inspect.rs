//! `chandler inspect` command

use anyhow::Result;

use chandler::core::settings::Axis;
use chandler::ops::emit::run_descriptor;
use chandler::ApplicationDescriptor;

use crate::cli::InspectArgs;
use crate::commands::resolve_settings;

pub fn execute(args: InspectArgs) -> Result<()> {
    let settings = resolve_settings(&args.settings)?;
    let emission = run_descriptor(&ApplicationDescriptor, &settings)?;

    println!("Package type: {}", emission.package_type.as_str());
    println!();

    println!("Settings:");
    for axis in Axis::ALL {
        println!("  {} = {}", axis, settings.display(axis));
    }
    println!();

    println!("Generators:");
    for generator in &emission.generators {
        println!("  {}", generator.as_str());
    }
    println!();

    println!("Requirements:");
    for req in &emission.requirements {
        println!("  {}", req);
    }
    println!();

    println!("Options:");
    for (name, options) in emission.options.iter() {
        if options.is_empty() {
            continue;
        }
        println!("  {}:", name);
        for (flag, value) in options.iter() {
            println!("    {} = {}", flag, value);
        }
    }

    Ok(())
}
