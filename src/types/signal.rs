use serde::{Deserialize, Serialize};

/// Which path produced the impact score of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Estimator,
    Heuristic,
}

/// Canonical per-event metric tuple. Derived deterministically from exactly
/// one `RawEvent` and never mutated afterwards. Collaboration and visibility
/// stay `None` when the source event carried no counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedSignal {
    pub event_id: String,
    pub author: String,
    pub activity: f64,
    pub impact: f64,
    pub collaboration: Option<f64>,
    pub visibility: Option<f64>,
    pub final_score: f64,
    pub provenance: Provenance,
    pub explanation: Option<String>,
}
