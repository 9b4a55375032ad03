pub mod demo;
pub mod estimator;
pub mod events;

use crate::error::Result;
use crate::types::event::RawEvent;

/// Raw event supplier for one repository. Fetching is all-or-nothing: a
/// connectivity or parse failure is a sync-level ingestion error and no
/// partial event list is ever returned.
pub trait EventSource {
    fn fetch_events(&self, repo: &str) -> Result<Vec<RawEvent>>;
}

/// Normalize a repository URL or path to `owner/name` form: strip the scheme
/// and host, a trailing `.git`, and a trailing slash.
pub fn parse_repo_path(url: &str) -> String {
    let mut path = url.trim();
    for scheme in ["https://", "http://"] {
        if let Some(rest) = path.strip_prefix(scheme) {
            path = rest.split_once('/').map(|(_, tail)| tail).unwrap_or("");
            break;
        }
    }
    let path = path.strip_suffix(".git").unwrap_or(path);
    path.trim_end_matches('/').to_string()
}
