use std::path::{Path, PathBuf};

use tracing::info;

use super::EventSource;
use crate::error::{ImpactError, Result};
use crate::types::event::RawEvent;

/// Event source backed by a JSON export from the code host: a single array
/// of raw events. Used where the upstream API client runs out of process.
pub struct JsonEventSource {
    path: PathBuf,
}

impl JsonEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventSource for JsonEventSource {
    fn fetch_events(&self, repo: &str) -> Result<Vec<RawEvent>> {
        let events = read_events(&self.path)?;
        info!(repo, count = events.len(), "fetched raw events");
        Ok(events)
    }
}

fn read_events(path: &Path) -> Result<Vec<RawEvent>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ImpactError::IngestFailed(format!("cannot read event file {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        ImpactError::IngestFailed(format!("malformed event file {}: {e}", path.display()))
    })
}
