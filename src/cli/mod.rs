pub mod areas;
pub mod init;
pub mod plan;
pub mod schema;

use crate::planner::Priority;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parplan")]
#[command(
    author,
    version,
    about = "Partition a GitHub issue backlog into parallel work tracks"
)]
// Stray flags must not abort a plan run. clap only swallows a subcommand
// parse error when the PARENT command ignores errors, and only errors
// destined for stderr, so --help/--version still render.
#[command(ignore_errors = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch open issues and print a parallel execution plan
    Plan(PlanArgs),

    /// List the configured classification areas
    Areas(AreasArgs),

    /// Write a starter config file
    Init(InitArgs),

    /// Print JSON Schema for config validation
    Schema,
}

// ignore_errors here only backfills defaulted and env-backed args when a
// parse aborts on a stray flag; the swallowing happens on the parent Cli
#[derive(Parser, Clone)]
#[command(ignore_errors = true)]
pub struct PlanArgs {
    /// Path to config file
    #[arg(short, long, default_value = "parplan.yaml")]
    pub config: PathBuf,

    /// Override max parallel tracks
    #[arg(long)]
    pub max_parallel: Option<usize>,

    /// Only plan issues tagged with this phase
    #[arg(long)]
    pub phase: Option<u32>,

    /// Only plan issues tagged with this priority (e.g., critical, high)
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Repository to fetch from (owner/repo)
    #[arg(long, env = "PARPLAN_REPO")]
    pub repo: Option<String>,

    /// Override fetch cap for `gh issue list`
    #[arg(long)]
    pub limit: Option<usize>,

    /// Read issues from a JSON file instead of calling gh
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct AreasArgs {
    /// Path to config file
    #[arg(short, long, default_value = "parplan.yaml")]
    pub config: PathBuf,
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    /// Where to write the config
    #[arg(short, long, default_value = "parplan.yaml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
