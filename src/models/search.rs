use serde::{Deserialize, Serialize};

// Envelope returned by `GET /search/commits`; only the match count is
// consumed downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSearchResults {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<CommitSearchItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSearchItem {
    pub sha: String,
}
