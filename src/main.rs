use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod github;
mod output;
mod planner;
mod workspace;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("parplan=debug")
    } else {
        EnvFilter::new("parplan=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Plan(args) => cli::plan::execute(args),
        Commands::Areas(args) => cli::areas::execute(args),
        Commands::Init(args) => cli::init::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
