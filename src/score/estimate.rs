use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::event::RawEvent;
use crate::types::signal::Provenance;

/// Upper bound for impact scores from any path.
pub const IMPACT_MAX: f64 = 10.0;

/// What an external estimator sees for one commit.
#[derive(Debug, Clone, Serialize)]
pub struct CommitDescriptor {
    pub message: String,
    pub additions: u64,
    pub deletions: u64,
    pub files: Vec<String>,
}

impl CommitDescriptor {
    pub fn from_event(event: &RawEvent) -> Self {
        Self {
            message: event.message.clone(),
            additions: event.additions,
            deletions: event.deletions,
            files: event.files.clone(),
        }
    }
}

/// One item of an estimator response, keyed back to the batch by index.
#[derive(Debug, Clone, Deserialize)]
pub struct ImpactEstimate {
    pub index: usize,
    pub impact_score: f64,
    pub explanation: String,
}

/// Estimator failures never surface to the sync caller; the error carries
/// context for the debug log only.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct EstimatorError(pub String);

/// External probabilistic impact estimator. Implementations may block on I/O;
/// callers wrap their own timeout policy around the boundary.
pub trait ImpactEstimator {
    fn estimate(
        &self,
        batch: &[CommitDescriptor],
    ) -> std::result::Result<Vec<ImpactEstimate>, EstimatorError>;
}

/// Impact for one event after estimator/heuristic resolution, clamped and
/// tagged with provenance.
#[derive(Debug, Clone)]
pub struct ResolvedImpact {
    pub score: f64,
    pub explanation: Option<String>,
    pub provenance: Provenance,
}

/// Resolve impact for a whole batch. A missing estimator, an estimator error,
/// or any malformed response item sends the ENTIRE batch through the
/// deterministic heuristic; a malformed response is never partially used.
pub fn resolve_impacts(
    estimator: Option<&dyn ImpactEstimator>,
    batch: &[CommitDescriptor],
) -> Vec<ResolvedImpact> {
    if let Some(estimator) = estimator {
        match estimator.estimate(batch) {
            Ok(estimates) => match accept_response(&estimates, batch.len()) {
                Some(resolved) => return resolved,
                None => {
                    debug!(
                        items = batch.len(),
                        "estimator response malformed, falling back to heuristic for batch"
                    );
                }
            },
            Err(err) => {
                debug!(error = %err, items = batch.len(), "estimator failed, falling back to heuristic for batch");
            }
        }
    }

    batch
        .iter()
        .map(|descriptor| {
            let (score, explanation) = heuristic_impact(&descriptor.message);
            ResolvedImpact {
                score,
                explanation: Some(explanation),
                provenance: Provenance::Heuristic,
            }
        })
        .collect()
}

fn accept_response(estimates: &[ImpactEstimate], expected: usize) -> Option<Vec<ResolvedImpact>> {
    if estimates.len() != expected {
        return None;
    }

    let mut slots: Vec<Option<ResolvedImpact>> = vec![None; expected];
    for estimate in estimates {
        if estimate.index >= expected
            || slots[estimate.index].is_some()
            || !estimate.impact_score.is_finite()
        {
            return None;
        }
        slots[estimate.index] = Some(ResolvedImpact {
            score: estimate.impact_score.clamp(0.0, IMPACT_MAX),
            explanation: Some(estimate.explanation.clone()),
            provenance: Provenance::Estimator,
        });
    }
    slots.into_iter().collect()
}

/// Deterministic keyword heuristic. Pure and total: any input string maps to
/// a score in [1, 10].
pub fn heuristic_impact(message: &str) -> (f64, String) {
    let msg = message.to_lowercase();
    let mut score: f64 = 5.0;
    let mut reasons = Vec::new();

    if msg.contains("fix") || msg.contains("bug") {
        score += 2.5;
        reasons.push("bug fix");
    }
    if msg.contains("refactor") || msg.contains("perf") {
        score += 3.0;
        reasons.push("refactor/performance");
    }
    if msg.contains("doc") || msg.contains("typo") {
        score -= 3.0;
        reasons.push("documentation/typo");
    }

    let explanation = if reasons.is_empty() {
        "keyword heuristic: baseline commit".to_string()
    } else {
        format!("keyword heuristic: {}", reasons.join(", "))
    };
    (score.clamp(1.0, 10.0), explanation)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEstimator(Vec<ImpactEstimate>);

    impl ImpactEstimator for FixedEstimator {
        fn estimate(
            &self,
            _batch: &[CommitDescriptor],
        ) -> std::result::Result<Vec<ImpactEstimate>, EstimatorError> {
            Ok(self.0.clone())
        }
    }

    struct FailingEstimator;

    impl ImpactEstimator for FailingEstimator {
        fn estimate(
            &self,
            _batch: &[CommitDescriptor],
        ) -> std::result::Result<Vec<ImpactEstimate>, EstimatorError> {
            Err(EstimatorError("connection refused".to_string()))
        }
    }

    fn descriptor(message: &str) -> CommitDescriptor {
        CommitDescriptor {
            message: message.to_string(),
            additions: 10,
            deletions: 2,
            files: vec!["src/lib.rs".to_string()],
        }
    }

    #[test]
    fn heuristic_matches_reference_scores() {
        assert_eq!(heuristic_impact("fix: null pointer").0, 7.5);
        assert_eq!(heuristic_impact("docs: typo").0, 2.0);
        assert_eq!(heuristic_impact("refactor: perf tuning").0, 8.0);
    }

    #[test]
    fn heuristic_is_case_insensitive() {
        assert_eq!(heuristic_impact("FIX: Null Pointer").0, 7.5);
    }

    #[test]
    fn heuristic_clamps_combined_bonuses_to_ten() {
        // fix + refactor would be 10.5 before the clamp
        assert_eq!(heuristic_impact("fix and refactor the worker").0, 10.0);
    }

    #[test]
    fn heuristic_never_drops_below_one() {
        // baseline 5.0 only carries one -3.0 penalty, so exercise the clamp
        // bound directly through the floor
        let (score, _) = heuristic_impact("doc typo doc typo");
        assert!((1.0..=10.0).contains(&score));
    }

    #[test]
    fn heuristic_is_total_over_arbitrary_input() {
        for message in [
            "",
            " ",
            "日本語のコミットメッセージ",
            "🚀🚀🚀",
            "\0\u{7f}\n\t",
            &"x".repeat(10_000),
        ] {
            let (score, explanation) = heuristic_impact(message);
            assert!((1.0..=10.0).contains(&score), "score for {message:?}");
            assert!(!explanation.is_empty());
        }
    }

    #[test]
    fn resolve_uses_heuristic_when_no_estimator_configured() {
        let resolved = resolve_impacts(None, &[descriptor("fix: leak")]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].score, 7.5);
        assert_eq!(resolved[0].provenance, Provenance::Heuristic);
    }

    #[test]
    fn resolve_accepts_well_formed_estimator_response() {
        let estimator = FixedEstimator(vec![
            ImpactEstimate {
                index: 1,
                impact_score: 9.0,
                explanation: "core feature".to_string(),
            },
            ImpactEstimate {
                index: 0,
                impact_score: 3.0,
                explanation: "config tweak".to_string(),
            },
        ]);

        let resolved = resolve_impacts(
            Some(&estimator),
            &[descriptor("chore: bump"), descriptor("feat: websocket core")],
        );
        assert_eq!(resolved[0].score, 3.0);
        assert_eq!(resolved[1].score, 9.0);
        assert!(resolved
            .iter()
            .all(|r| r.provenance == Provenance::Estimator));
    }

    #[test]
    fn resolve_clamps_estimator_scores_to_bound() {
        let estimator = FixedEstimator(vec![ImpactEstimate {
            index: 0,
            impact_score: 42.0,
            explanation: "overshoot".to_string(),
        }]);

        let resolved = resolve_impacts(Some(&estimator), &[descriptor("feat")]);
        assert_eq!(resolved[0].score, IMPACT_MAX);
    }

    #[test]
    fn resolve_falls_back_for_whole_batch_on_estimator_error() {
        let resolved = resolve_impacts(
            Some(&FailingEstimator),
            &[descriptor("fix: leak"), descriptor("feat: core")],
        );
        assert!(resolved
            .iter()
            .all(|r| r.provenance == Provenance::Heuristic));
    }

    #[test]
    fn resolve_rejects_partial_response_entirely() {
        // one item missing: nothing from the response may be used
        let estimator = FixedEstimator(vec![ImpactEstimate {
            index: 0,
            impact_score: 9.0,
            explanation: "kept?".to_string(),
        }]);

        let resolved = resolve_impacts(
            Some(&estimator),
            &[descriptor("fix: leak"), descriptor("feat: core")],
        );
        assert!(resolved
            .iter()
            .all(|r| r.provenance == Provenance::Heuristic));
        assert_eq!(resolved[0].score, 7.5);
    }

    #[test]
    fn resolve_rejects_duplicate_and_out_of_range_indexes() {
        let duplicate = FixedEstimator(vec![
            ImpactEstimate {
                index: 0,
                impact_score: 5.0,
                explanation: String::new(),
            },
            ImpactEstimate {
                index: 0,
                impact_score: 6.0,
                explanation: String::new(),
            },
        ]);
        let out_of_range = FixedEstimator(vec![
            ImpactEstimate {
                index: 0,
                impact_score: 5.0,
                explanation: String::new(),
            },
            ImpactEstimate {
                index: 7,
                impact_score: 6.0,
                explanation: String::new(),
            },
        ]);

        for estimator in [duplicate, out_of_range] {
            let resolved = resolve_impacts(
                Some(&estimator),
                &[descriptor("a"), descriptor("b")],
            );
            assert!(resolved
                .iter()
                .all(|r| r.provenance == Provenance::Heuristic));
        }
    }

    #[test]
    fn resolve_rejects_non_finite_scores() {
        let estimator = FixedEstimator(vec![ImpactEstimate {
            index: 0,
            impact_score: f64::NAN,
            explanation: String::new(),
        }]);

        let resolved = resolve_impacts(Some(&estimator), &[descriptor("fix")]);
        assert_eq!(resolved[0].provenance, Provenance::Heuristic);
    }
}
