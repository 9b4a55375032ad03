use crate::types::metrics::ScoreMetrics;

pub fn to_json(leaderboard: &[ScoreMetrics]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(leaderboard)
}
