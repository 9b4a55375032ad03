use tracing::{info, warn};

use crate::error::Result;
use crate::ingest::EventSource;
use crate::score::badge;
use crate::score::estimate::{self, CommitDescriptor, ImpactEstimator};
use crate::score::normalize::{self, Weights};
use crate::score::{aggregate, rank};
use crate::store::TeamStore;
use crate::types::metrics::{ContributorAggregate, ScoreMetrics};
use crate::types::signal::NormalizedSignal;

/// Result of one complete team sync.
#[derive(Debug)]
pub struct SyncOutcome {
    pub leaderboard: Vec<ScoreMetrics>,
    pub skipped: usize,
}

/// Run one full pipeline pass for a team: fetch, normalize, estimate,
/// aggregate, classify, rank, persist. The leaderboard is replaced wholesale
/// only after every stage succeeded; an ingestion failure propagates and
/// leaves the previous leaderboard untouched. Identical input yields
/// identical output, so re-running a sync is idempotent.
pub fn run_sync(
    source: &dyn EventSource,
    estimator: Option<&dyn ImpactEstimator>,
    store: &dyn TeamStore,
    team: &str,
    repo: &str,
    weights: &Weights,
) -> Result<SyncOutcome> {
    let events = source.fetch_events(repo)?;

    let mut skipped = 0usize;
    let mut kept = Vec::with_capacity(events.len());
    for event in &events {
        if normalize::is_malformed(event) {
            warn!(team, event = %event.id, "skipping event without author identity");
            skipped += 1;
        } else {
            kept.push(event);
        }
    }

    let descriptors: Vec<CommitDescriptor> = kept
        .iter()
        .map(|event| CommitDescriptor::from_event(event))
        .collect();
    let impacts = estimate::resolve_impacts(estimator, &descriptors);

    let signals: Vec<NormalizedSignal> = kept
        .iter()
        .zip(impacts.iter())
        .map(|(event, impact)| normalize::normalize(event, impact, weights))
        .collect();

    let feedback = store.feedback_for(team)?;
    let aggregates = aggregate::aggregate(&signals, &feedback);

    let rows = match badge::baselines(&aggregates) {
        Some(baselines) => aggregates
            .iter()
            .map(|aggregate| to_row(aggregate, badge::classify(aggregate, &baselines)))
            .collect(),
        None => Vec::new(),
    };
    let leaderboard = rank::rank(rows);

    store.put_leaderboard(team, &leaderboard)?;
    info!(
        team,
        contributors = leaderboard.len(),
        signals = aggregates.iter().map(|a| a.signals).sum::<usize>(),
        skipped,
        "sync complete"
    );

    Ok(SyncOutcome {
        leaderboard,
        skipped,
    })
}

fn to_row(
    aggregate: &ContributorAggregate,
    badge: crate::types::metrics::Badge,
) -> ScoreMetrics {
    ScoreMetrics {
        contributor: aggregate.contributor.clone(),
        avg_activity: aggregate.avg_activity,
        avg_impact: aggregate.avg_impact,
        avg_collaboration: aggregate.avg_collaboration,
        avg_visibility: aggregate.avg_visibility,
        final_contribution_score: aggregate.avg_final,
        rank: 0,
        badge,
    }
}
