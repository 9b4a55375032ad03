use chrono::{DateTime, TimeZone, Utc};

use super::EventSource;
use crate::error::Result;
use crate::types::event::{CollaborationCounters, RawEvent, VisibilityCounters};

/// Fixed demo fixture: a small team with one prolific committer and one
/// review-heavy manager. Timestamps are constant so repeated demo syncs stay
/// byte-identical.
pub struct DemoEventSource;

fn demo_time(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

impl EventSource for DemoEventSource {
    fn fetch_events(&self, _repo: &str) -> Result<Vec<RawEvent>> {
        Ok(vec![
            RawEvent {
                id: "d1".to_string(),
                author: "charlie_code".to_string(),
                timestamp: demo_time(9),
                message: "fix: resolve memory leak in worker".to_string(),
                additions: 150,
                deletions: 10,
                files_changed: 4,
                files: vec!["worker.rs".to_string()],
                is_bug_fix: true,
                is_merge: false,
                collaboration: Some(CollaborationCounters {
                    reviews_given: 0,
                    review_comments: 0,
                    issue_comments: 1,
                }),
                visibility: Some(VisibilityCounters {
                    chat_messages: 2,
                    chat_threads: 1,
                    chat_mentions: 0,
                }),
            },
            RawEvent {
                id: "d2".to_string(),
                author: "bob_mgr".to_string(),
                timestamp: demo_time(10),
                message: "docs: update architecture diagram".to_string(),
                additions: 5,
                deletions: 0,
                files_changed: 1,
                files: vec!["README.md".to_string()],
                is_bug_fix: false,
                is_merge: false,
                collaboration: Some(CollaborationCounters {
                    reviews_given: 5,
                    review_comments: 12,
                    issue_comments: 5,
                }),
                visibility: Some(VisibilityCounters {
                    chat_messages: 45,
                    chat_threads: 12,
                    chat_mentions: 8,
                }),
            },
            RawEvent {
                id: "d3".to_string(),
                author: "charlie_code".to_string(),
                timestamp: demo_time(11),
                message: "Merge pull request #42 from staging".to_string(),
                additions: 1200,
                deletions: 50,
                files_changed: 22,
                files: vec!["many_files.rs".to_string()],
                is_bug_fix: false,
                is_merge: true,
                collaboration: Some(CollaborationCounters {
                    reviews_given: 1,
                    review_comments: 2,
                    issue_comments: 0,
                }),
                visibility: Some(VisibilityCounters {
                    chat_messages: 5,
                    chat_threads: 0,
                    chat_mentions: 1,
                }),
            },
            RawEvent {
                id: "d4".to_string(),
                author: "charlie_code".to_string(),
                timestamp: demo_time(12),
                message: "feat: implement websocket core".to_string(),
                additions: 450,
                deletions: 20,
                files_changed: 8,
                files: vec!["socket.rs".to_string()],
                is_bug_fix: false,
                is_merge: false,
                collaboration: Some(CollaborationCounters {
                    reviews_given: 0,
                    review_comments: 0,
                    issue_comments: 0,
                }),
                visibility: Some(VisibilityCounters {
                    chat_messages: 1,
                    chat_threads: 0,
                    chat_mentions: 0,
                }),
            },
        ])
    }
}
