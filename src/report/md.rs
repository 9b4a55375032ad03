use crate::types::metrics::ScoreMetrics;

fn maybe(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

pub fn to_markdown(leaderboard: &[ScoreMetrics]) -> String {
    let mut output = String::new();
    output.push_str("# Team Leaderboard\n\n");

    if leaderboard.is_empty() {
        output.push_str("- no contributors in this sync\n");
        return output;
    }

    for row in leaderboard {
        output.push_str(&format!(
            "- #{} {} — final {:.2} (impact {:.2}, activity {:.2}, collaboration {}, visibility {}) [{}]\n",
            row.rank,
            row.contributor,
            row.final_contribution_score,
            row.avg_impact,
            row.avg_activity,
            maybe(row.avg_collaboration),
            maybe(row.avg_visibility),
            row.badge.label()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::metrics::Badge;

    #[test]
    fn markdown_lists_rows_in_rank_order() {
        let leaderboard = vec![
            ScoreMetrics {
                contributor: "alice".to_string(),
                avg_activity: 1.0,
                avg_impact: 7.5,
                avg_collaboration: Some(4.0),
                avg_visibility: None,
                final_contribution_score: 6.1,
                rank: 1,
                badge: Badge::BalancedContributor,
            },
            ScoreMetrics {
                contributor: "bob".to_string(),
                avg_activity: 1.0,
                avg_impact: 2.0,
                avg_collaboration: None,
                avg_visibility: Some(9.0),
                final_contribution_score: 1.4,
                rank: 2,
                badge: Badge::HighVisibilityLowImpact,
            },
        ];

        let rendered = to_markdown(&leaderboard);
        assert!(rendered.contains("# Team Leaderboard"));
        assert!(rendered.contains("#1 alice"));
        assert!(rendered.contains("#2 bob"));
        assert!(rendered.contains("collaboration n/a"));
        assert!(rendered.contains("[High Visibility / Low Impact]"));
    }

    #[test]
    fn markdown_handles_empty_leaderboard() {
        let rendered = to_markdown(&[]);
        assert!(rendered.contains("no contributors"));
    }
}
