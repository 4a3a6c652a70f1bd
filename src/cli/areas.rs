//! CLI handler for the `areas` subcommand

use crate::cli::AreasArgs;
use crate::config::Config;
use crate::planner::FALLBACK_AREA;
use tracing::info;

pub fn execute(args: AreasArgs) -> anyhow::Result<()> {
    let config = if args.config.exists() {
        info!("Loading config from {:?}", args.config);
        Config::load(&args.config)?
    } else {
        info!("No config found, using defaults");
        Config::default()
    };
    config.validate()?;

    println!("Classification areas (checked in order):\n");
    for rule in &config.areas {
        println!("  {}: {}", rule.name, rule.keywords.join(", "));
    }
    println!(
        "\nIssues matching no keywords fall back to '{}'.",
        FALLBACK_AREA
    );

    Ok(())
}
