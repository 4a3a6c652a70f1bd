//! CLI handler for the `init` subcommand

use crate::cli::InitArgs;
use crate::config::Config;
use std::fs;

pub fn execute(args: InitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (pass --force to overwrite)",
            args.output.display()
        );
    }

    let yaml = serde_yaml::to_string(&Config::default())?;
    fs::write(&args.output, yaml)?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
