use std::collections::HashMap;

use crate::types::event::FeedbackEvent;
use crate::types::metrics::ContributorAggregate;
use crate::types::signal::NormalizedSignal;

pub const FEEDBACK_BONUS_PER_EVENT: f64 = 1.5;

#[derive(Default)]
struct Accumulator {
    count: usize,
    activity: f64,
    impact: f64,
    final_score: f64,
    collaboration: f64,
    collaboration_n: usize,
    visibility: f64,
    visibility_n: usize,
}

/// Reduce one sync's signals to one aggregate per contributor, in first-seen
/// author order. Sums are commutative, so reordering the input signals cannot
/// change any mean. Contributors without signals are absent, never zero rows.
pub fn aggregate(
    signals: &[NormalizedSignal],
    feedback: &[FeedbackEvent],
) -> Vec<ContributorAggregate> {
    let mut order: Vec<String> = Vec::new();
    let mut stats: HashMap<String, Accumulator> = HashMap::new();

    for signal in signals {
        let acc = stats.entry(signal.author.clone()).or_insert_with(|| {
            order.push(signal.author.clone());
            Accumulator::default()
        });
        acc.count += 1;
        acc.activity += signal.activity;
        acc.impact += signal.impact;
        acc.final_score += signal.final_score;
        if let Some(collaboration) = signal.collaboration {
            acc.collaboration += collaboration;
            acc.collaboration_n += 1;
        }
        if let Some(visibility) = signal.visibility {
            acc.visibility += visibility;
            acc.visibility_n += 1;
        }
    }

    let mut feedback_counts: HashMap<&str, usize> = HashMap::new();
    for event in feedback {
        *feedback_counts.entry(event.contributor.as_str()).or_default() += 1;
    }

    order
        .into_iter()
        .map(|contributor| {
            let acc = &stats[&contributor];
            let n = acc.count as f64;
            let bonus = FEEDBACK_BONUS_PER_EVENT
                * feedback_counts.get(contributor.as_str()).copied().unwrap_or(0) as f64;

            ContributorAggregate {
                signals: acc.count,
                avg_activity: acc.activity / n,
                avg_impact: acc.impact / n + bonus,
                avg_collaboration: (acc.collaboration_n > 0)
                    .then(|| acc.collaboration / acc.collaboration_n as f64),
                avg_visibility: (acc.visibility_n > 0)
                    .then(|| acc.visibility / acc.visibility_n as f64),
                avg_final: acc.final_score / n + 0.5 * bonus,
                contributor,
            }
        })
        .collect()
}
