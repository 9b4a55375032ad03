use std::cmp::Ordering;

use crate::types::metrics::ScoreMetrics;

/// Order rows by final score descending and assign dense 1-based ranks.
/// The sort is stable, so tied scores keep their prior relative order and
/// still receive distinct consecutive ranks.
pub fn rank(mut rows: Vec<ScoreMetrics>) -> Vec<ScoreMetrics> {
    rows.sort_by(|a, b| {
        b.final_contribution_score
            .partial_cmp(&a.final_contribution_score)
            .unwrap_or(Ordering::Equal)
    });
    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = position as u32 + 1;
    }
    rows
}
