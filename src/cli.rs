use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "impactlens",
    version,
    about = "Contributor impact scoring and team leaderboard CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Sync(SyncCommand),
    Leaderboard(LeaderboardCommand),
    Estimate(EstimateCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct SyncCommand {
    /// Workspace directory holding impactlens.toml
    pub path: PathBuf,

    /// Team id from the config to sync
    #[arg(long)]
    pub team: String,

    /// Use the built-in demo events instead of the configured source
    #[arg(long)]
    pub demo: bool,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct LeaderboardCommand {
    /// Workspace directory holding impactlens.toml
    pub path: PathBuf,

    /// Team id from the config
    #[arg(long)]
    pub team: String,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct EstimateCommand {
    /// Commit messages to score with the deterministic heuristic
    #[arg(required = true)]
    pub messages: Vec<String>,
}
