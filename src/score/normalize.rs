use super::estimate::{ResolvedImpact, IMPACT_MAX};
use crate::types::event::RawEvent;
use crate::types::signal::NormalizedSignal;

/// Blend weights for the per-event final score. The defaults are the
/// canonical scoring policy; config may override them after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub activity: f64,
    pub impact: f64,
    pub collaboration: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            activity: 0.2,
            impact: 0.6,
            collaboration: 0.2,
        }
    }
}

/// An event without a usable author identity cannot be attributed and is
/// skipped at the pipeline boundary.
pub fn is_malformed(event: &RawEvent) -> bool {
    event.author.trim().is_empty()
}

/// Turn one raw event plus its resolved impact into the canonical metric
/// tuple. Missing collaboration/visibility counters stay unknown; an unknown
/// collaboration term contributes nothing to the final blend.
pub fn normalize(event: &RawEvent, impact: &ResolvedImpact, weights: &Weights) -> NormalizedSignal {
    let activity = 1.0 + if event.is_merge { 2.0 } else { 0.0 };

    let collaboration = event.collaboration.as_ref().map(|c| {
        4.0 * f64::from(c.reviews_given)
            + 2.0 * f64::from(c.review_comments)
            + 1.5 * f64::from(c.issue_comments)
    });

    let visibility = event.visibility.as_ref().map(|v| {
        f64::from(v.chat_messages)
            + 2.0 * f64::from(v.chat_threads)
            + 1.5 * f64::from(v.chat_mentions)
    });

    let impact_score = impact.score.clamp(0.0, IMPACT_MAX);
    let final_score = weights.activity * activity
        + weights.impact * impact_score
        + weights.collaboration * collaboration.unwrap_or(0.0);

    NormalizedSignal {
        event_id: event.id.clone(),
        author: event.author.clone(),
        activity,
        impact: impact_score,
        collaboration,
        visibility,
        final_score,
        provenance: impact.provenance,
        explanation: impact.explanation.clone(),
    }
}
