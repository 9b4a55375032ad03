use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml::map::Map;
use toml::Value;

use crate::error::{ImpactError, Result};
use crate::score::normalize::Weights;

pub const DEFAULT_CONFIG_FILE: &str = "impactlens.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".impactlens/local.toml";
pub const DEFAULT_STORE_DIR: &str = ".impactlens/store";

#[derive(Debug, Clone, Deserialize)]
pub struct ImpactConfig {
    pub store: Option<StoreConfig>,
    #[serde(default)]
    pub teams: Vec<TeamConfig>,
    pub weights: Option<WeightsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamConfig {
    pub id: String,
    pub name: Option<String>,
    pub repo: String,
    /// JSON export of raw events for this team's repository.
    pub events: Option<String>,
    /// Optional pre-computed estimator output for the same events.
    pub estimates: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    pub activity: Option<f64>,
    pub impact: Option<f64>,
    pub collaboration: Option<f64>,
}

impl ImpactConfig {
    pub fn weights(&self) -> Weights {
        let defaults = Weights::default();
        match &self.weights {
            Some(weights) => Weights {
                activity: weights.activity.unwrap_or(defaults.activity),
                impact: weights.impact.unwrap_or(defaults.impact),
                collaboration: weights.collaboration.unwrap_or(defaults.collaboration),
            },
            None => defaults,
        }
    }

    pub fn team(&self, id: &str) -> Option<&TeamConfig> {
        self.teams.iter().find(|team| team.id == id)
    }

    pub fn store_dir(&self, root: &Path) -> PathBuf {
        let dir = self
            .store
            .as_ref()
            .and_then(|store| store.dir.as_deref())
            .unwrap_or(DEFAULT_STORE_DIR);
        root.join(dir)
    }

    pub fn validate(&self) -> Result<()> {
        let weights = self.weights();
        for (name, value) in [
            ("activity", weights.activity),
            ("impact", weights.impact),
            ("collaboration", weights.collaboration),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ImpactError::ConfigParse(format!(
                    "weights.{name} must be between 0.0 and 1.0"
                )));
            }
        }
        let sum = weights.activity + weights.impact + weights.collaboration;
        if (sum - 1.0).abs() > 0.001 {
            return Err(ImpactError::ConfigParse(format!(
                "weights must sum to 1.0 (found {sum:.3})"
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for team in &self.teams {
            if team.id.trim().is_empty() {
                return Err(ImpactError::ConfigParse(
                    "teams entries must have a non-empty id".to_string(),
                ));
            }
            if !seen.insert(team.id.as_str()) {
                return Err(ImpactError::ConfigParse(format!(
                    "duplicate team id: {}",
                    team.id
                )));
            }
        }

        Ok(())
    }
}

/// Load `impactlens.toml` from the workspace root, layered with an optional
/// `.impactlens/local.toml` override (deep table merge, local wins).
pub fn load_config(root: &Path) -> Result<ImpactConfig> {
    let main_path = root.join(DEFAULT_CONFIG_FILE);
    if !main_path.exists() {
        return Err(ImpactError::ConfigNotFound(main_path.display().to_string()));
    }

    let mut merged = Value::Table(Map::new());
    merge_file_if_exists(&mut merged, &main_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    merged
        .try_into()
        .map_err(|e: toml::de::Error| ImpactError::ConfigParse(e.to_string()))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)?;
    let value = toml::from_str(&content)
        .map_err(|e| ImpactError::ConfigParse(format!("{}: {e}", path.display())))?;
    merge_toml(merged, value);
    Ok(())
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
