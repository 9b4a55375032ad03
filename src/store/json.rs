use std::path::{Path, PathBuf};

use super::TeamStore;
use crate::error::Result;
use crate::types::event::FeedbackEvent;
use crate::types::metrics::ScoreMetrics;

/// Key-value store as per-team JSON files under one directory:
/// `<team>.feedback.json` (read side) and `<team>.scores.json` (write side).
/// Leaderboard writes go through a staging file and a rename, so a reader
/// sees either the previous leaderboard or the new one, never a partial list.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn feedback_path(&self, team: &str) -> PathBuf {
        self.dir.join(format!("{team}.feedback.json"))
    }

    fn scores_path(&self, team: &str) -> PathBuf {
        self.dir.join(format!("{team}.scores.json"))
    }
}

impl TeamStore for JsonStore {
    fn feedback_for(&self, team: &str) -> Result<Vec<FeedbackEvent>> {
        match read_json(&self.feedback_path(team))? {
            Some(feedback) => Ok(feedback),
            None => Ok(Vec::new()),
        }
    }

    fn put_leaderboard(&self, team: &str, scores: &[ScoreMetrics]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let target = self.scores_path(team);
        let staged = target.with_extension("json.tmp");
        std::fs::write(&staged, serde_json::to_string_pretty(scores)?)?;
        std::fs::rename(&staged, &target)?;
        Ok(())
    }

    fn leaderboard(&self, team: &str) -> Result<Option<Vec<ScoreMetrics>>> {
        read_json(&self.scores_path(team))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}
