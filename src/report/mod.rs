pub mod json;
pub mod md;

use crate::error::ImpactError;
use crate::types::metrics::ScoreMetrics;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(leaderboard: &[ScoreMetrics], format: OutputFormat) -> Result<String, ImpactError> {
    match format {
        OutputFormat::Json => json::to_json(leaderboard).map_err(ImpactError::Json),
        OutputFormat::Md => Ok(md::to_markdown(leaderboard)),
    }
}
