use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review-activity counters attached to a raw event when the code-host
/// integration supplies them. Absent counters mean "unknown", not zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborationCounters {
    #[serde(default)]
    pub reviews_given: u32,
    #[serde(default)]
    pub review_comments: u32,
    #[serde(default)]
    pub issue_comments: u32,
}

/// Chat-activity counters from the team messaging integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilityCounters {
    #[serde(default)]
    pub chat_messages: u32,
    #[serde(default)]
    pub chat_threads: u32,
    #[serde(default)]
    pub chat_mentions: u32,
}

/// One author-attributed activity record as delivered by the event source.
/// Immutable once ingested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub files_changed: u32,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub is_bug_fix: bool,
    #[serde(default)]
    pub is_merge: bool,
    #[serde(default)]
    pub collaboration: Option<CollaborationCounters>,
    #[serde(default)]
    pub visibility: Option<VisibilityCounters>,
}

/// Out-of-band client feedback for a contributor. Only the per-contributor
/// count feeds scoring; the content is never analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub contributor: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
