use serde::{Deserialize, Serialize};

/// Per-contributor means over one sync's signals, feedback bonus already
/// folded into `avg_impact` and `avg_final`.
#[derive(Debug, Clone)]
pub struct ContributorAggregate {
    pub contributor: String,
    pub signals: usize,
    pub avg_activity: f64,
    pub avg_impact: f64,
    pub avg_collaboration: Option<f64>,
    pub avg_visibility: Option<f64>,
    pub avg_final: f64,
}

/// Relative-performance label assigned per sync against team baselines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Silent Architect")]
    SilentArchitect,
    #[serde(rename = "High Visibility / Low Impact")]
    HighVisibilityLowImpact,
    #[serde(rename = "Balanced Contributor")]
    BalancedContributor,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::SilentArchitect => "Silent Architect",
            Badge::HighVisibilityLowImpact => "High Visibility / Low Impact",
            Badge::BalancedContributor => "Balanced Contributor",
            Badge::NotAvailable => "N/A",
        }
    }
}

/// One leaderboard row. A full sync replaces the whole list for a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMetrics {
    pub contributor: String,
    pub avg_activity: f64,
    pub avg_impact: f64,
    pub avg_collaboration: Option<f64>,
    pub avg_visibility: Option<f64>,
    pub final_contribution_score: f64,
    pub rank: u32,
    pub badge: Badge,
}
