use crate::types::metrics::{Badge, ContributorAggregate};

/// Team-wide comparison points, recomputed from the current sync's
/// aggregates only. The visibility baseline exists only when at least one
/// contributor has known visibility.
#[derive(Debug, Clone, Copy)]
pub struct TeamBaselines {
    pub avg_impact: f64,
    pub avg_visibility: Option<f64>,
}

/// Returns `None` for a team with zero contributors; downstream then emits an
/// empty leaderboard rather than classifying against undefined baselines.
pub fn baselines(aggregates: &[ContributorAggregate]) -> Option<TeamBaselines> {
    if aggregates.is_empty() {
        return None;
    }

    let avg_impact =
        aggregates.iter().map(|a| a.avg_impact).sum::<f64>() / aggregates.len() as f64;

    let known: Vec<f64> = aggregates
        .iter()
        .filter_map(|a| a.avg_visibility.map(|v| a.avg_activity + v))
        .collect();
    let avg_visibility = (!known.is_empty())
        .then(|| known.iter().sum::<f64>() / known.len() as f64);

    Some(TeamBaselines {
        avg_impact,
        avg_visibility,
    })
}

/// Assign the relative-performance label for one contributor. A contributor
/// with unknown visibility cannot sit in either off-balance quadrant and
/// takes the default branch. A single-contributor team equals its own
/// baseline, so the default branch always applies there.
pub fn classify(aggregate: &ContributorAggregate, baselines: &TeamBaselines) -> Badge {
    let (Some(visibility), Some(team_visibility)) =
        (aggregate.avg_visibility, baselines.avg_visibility)
    else {
        return Badge::BalancedContributor;
    };

    let combined = aggregate.avg_activity + visibility;
    if aggregate.avg_impact > baselines.avg_impact && combined < team_visibility {
        Badge::SilentArchitect
    } else if aggregate.avg_impact < baselines.avg_impact && combined > team_visibility {
        Badge::HighVisibilityLowImpact
    } else {
        Badge::BalancedContributor
    }
}
