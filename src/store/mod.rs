pub mod json;

use crate::error::Result;
use crate::types::event::FeedbackEvent;
use crate::types::metrics::ScoreMetrics;

/// Team-scoped persistence boundary. Components never touch storage
/// directly; the pipeline receives an implementation of this trait.
/// Leaderboard writes replace the whole list for a team, never a subset.
pub trait TeamStore {
    fn feedback_for(&self, team: &str) -> Result<Vec<FeedbackEvent>>;
    fn put_leaderboard(&self, team: &str, scores: &[ScoreMetrics]) -> Result<()>;
    fn leaderboard(&self, team: &str) -> Result<Option<Vec<ScoreMetrics>>>;
}
