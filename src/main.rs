mod cli;
mod config;
mod error;
mod ingest;
mod report;
mod score;
mod store;
mod sync;
mod types;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ImpactError;
use crate::ingest::demo::DemoEventSource;
use crate::ingest::estimator::JsonEstimator;
use crate::ingest::events::JsonEventSource;
use crate::ingest::EventSource;
use crate::score::estimate::{heuristic_impact, ImpactEstimator};
use crate::store::json::JsonStore;
use crate::store::TeamStore;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, ImpactError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Sync(cmd) => {
            if !cmd.path.exists() {
                return Err(ImpactError::WorkspaceNotFound(cmd.path.display().to_string()));
            }

            let cfg = config::load_config(&cmd.path)?;
            cfg.validate()?;
            let team = cfg
                .team(&cmd.team)
                .ok_or_else(|| ImpactError::TeamNotFound(cmd.team.clone()))?;
            info!(
                team = %team.id,
                name = team.name.as_deref().unwrap_or(&team.id),
                "starting sync"
            );

            let source: Box<dyn EventSource> = if cmd.demo {
                Box::new(DemoEventSource)
            } else {
                let events = team.events.as_ref().ok_or_else(|| {
                    ImpactError::IngestFailed(format!(
                        "team '{}' has no events file configured (use --demo or set teams.events)",
                        team.id
                    ))
                })?;
                Box::new(JsonEventSource::new(cmd.path.join(events)))
            };
            let estimator: Option<Box<dyn ImpactEstimator>> = team
                .estimates
                .as_ref()
                .map(|path| Box::new(JsonEstimator::new(cmd.path.join(path))) as Box<dyn ImpactEstimator>);

            let store = JsonStore::new(cfg.store_dir(&cmd.path));
            let repo = ingest::parse_repo_path(&team.repo);
            let outcome = sync::run_sync(
                source.as_ref(),
                estimator.as_deref(),
                &store,
                &team.id,
                &repo,
                &cfg.weights(),
            )?;

            let rendered = report::render(&outcome.leaderboard, output_format(&cmd.format))?;
            println!("{rendered}");

            if outcome.skipped > 0 {
                eprintln!("warning: {} malformed event(s) skipped", outcome.skipped);
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Leaderboard(cmd) => {
            if !cmd.path.exists() {
                return Err(ImpactError::WorkspaceNotFound(cmd.path.display().to_string()));
            }

            let cfg = config::load_config(&cmd.path)?;
            let team = cfg
                .team(&cmd.team)
                .ok_or_else(|| ImpactError::TeamNotFound(cmd.team.clone()))?;

            let store = JsonStore::new(cfg.store_dir(&cmd.path));
            match store.leaderboard(&team.id)? {
                Some(leaderboard) => {
                    let rendered = report::render(&leaderboard, output_format(&cmd.format))?;
                    println!("{rendered}");
                    Ok(exit_code::SUCCESS)
                }
                None => {
                    println!("leaderboard: no sync recorded for team '{}'", team.id);
                    Ok(exit_code::WARNINGS)
                }
            }
        }
        cli::Commands::Estimate(cmd) => {
            for message in &cmd.messages {
                let (score, explanation) = heuristic_impact(message);
                println!("{score:.1}  {message}  ({explanation})");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
