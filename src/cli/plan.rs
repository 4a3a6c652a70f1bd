//! CLI handler for the `plan` subcommand
//!
//! Fetches open issues, scores and classifies them, and prints the
//! parallel execution plan.

use crate::cli::PlanArgs;
use crate::config::Config;
use crate::github;
use crate::output;
use crate::planner;
use std::cmp::Reverse;
use tracing::info;

pub fn execute(args: PlanArgs) -> anyhow::Result<()> {
    // Load config if it exists, otherwise use defaults
    let config = if args.config.exists() {
        info!("Loading config from {:?}", args.config);
        Config::load(&args.config)?
    } else {
        info!("No config found, using defaults");
        Config::default()
    };
    config.validate()?;

    let max_parallel = args.max_parallel.unwrap_or(config.max_parallel);
    let limit = args.limit.unwrap_or(config.limit);
    let repo = args.repo.clone().or_else(|| config.repo.clone());

    let mut items = match &args.input {
        Some(path) => {
            let items = github::load_issues_from_file(path)?;
            println!("Loaded {} issues from {}", items.len(), path.display());
            items
        }
        None => {
            println!("Fetching open issues from GitHub...");
            let items = github::fetch_open_issues(repo.as_deref(), limit)?;
            println!("Fetched {} issues", items.len());
            items
        }
    };

    if let Some(phase) = args.phase {
        items.retain(|item| item.phase == Some(phase));
        println!("Filtered to Phase {}: {} issues", phase, items.len());
    }

    if let Some(ref priority) = args.priority {
        items.retain(|item| item.priority.as_ref() == Some(priority));
        println!(
            "Filtered to {} priority: {} issues",
            priority.as_str().to_uppercase(),
            items.len()
        );
    }

    if items.is_empty() {
        println!("No issues match the filters.");
        return Ok(());
    }

    // Rank globally before grouping so ties inside areas stay stable
    items.sort_by_key(|item| (Reverse(item.score()), item.number));

    let tracks = planner::partition(&items, &config.areas, max_parallel);
    info!(
        "Partitioned {} issues into {} tracks",
        items.len(),
        tracks.len()
    );

    print!("{}", output::render_plan(&tracks));
    print!("{}", output::render_setup_commands(&tracks));
    print!("{}", output::render_agent_commands(&tracks));
    print!("{}", output::render_summary(&tracks, &items));

    Ok(())
}
