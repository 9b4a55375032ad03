use std::path::PathBuf;

use crate::score::estimate::{CommitDescriptor, EstimatorError, ImpactEstimate, ImpactEstimator};

/// Adapter for estimator output produced out of process: a JSON array of
/// `{index, impact_score, explanation}` items. Any read or parse failure is
/// reported as an estimator error, which the resolution layer turns into a
/// whole-batch heuristic fallback.
pub struct JsonEstimator {
    path: PathBuf,
}

impl JsonEstimator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImpactEstimator for JsonEstimator {
    fn estimate(
        &self,
        _batch: &[CommitDescriptor],
    ) -> std::result::Result<Vec<ImpactEstimate>, EstimatorError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| EstimatorError(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| EstimatorError(format!("{}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::estimate::resolve_impacts;
    use crate::types::signal::Provenance;
    use std::fs;
    use tempfile::TempDir;

    fn descriptor(message: &str) -> CommitDescriptor {
        CommitDescriptor {
            message: message.to_string(),
            additions: 0,
            deletions: 0,
            files: Vec::new(),
        }
    }

    #[test]
    fn well_formed_file_supplies_estimator_scores() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("estimates.json");
        fs::write(
            &path,
            r#"[{"index": 0, "impact_score": 8.5, "explanation": "security fix"}]"#,
        )
        .expect("estimate file should write");

        let resolved = resolve_impacts(Some(&JsonEstimator::new(&path)), &[descriptor("fix")]);
        assert_eq!(resolved[0].score, 8.5);
        assert_eq!(resolved[0].provenance, Provenance::Estimator);
        assert_eq!(resolved[0].explanation.as_deref(), Some("security fix"));
    }

    #[test]
    fn unreadable_file_falls_back_to_heuristic() {
        let dir = TempDir::new().expect("temp dir should be created");
        let estimator = JsonEstimator::new(dir.path().join("missing.json"));

        let resolved = resolve_impacts(Some(&estimator), &[descriptor("fix: leak")]);
        assert_eq!(resolved[0].provenance, Provenance::Heuristic);
        assert_eq!(resolved[0].score, 7.5);
    }

    #[test]
    fn unparsable_file_falls_back_to_heuristic() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("estimates.json");
        fs::write(&path, "not json at all").expect("estimate file should write");

        let resolved = resolve_impacts(Some(&JsonEstimator::new(&path)), &[descriptor("fix")]);
        assert_eq!(resolved[0].provenance, Provenance::Heuristic);
    }
}
