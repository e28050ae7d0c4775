use serde::{Deserialize, Serialize};

// One language's slice of the repository population. The percentage is kept
// pre-formatted (two decimals plus `%`) because that is the only form the
// card ever shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub percentage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_stars: u64,
    pub merge_commit_count: u64,
    pub dominant_language: Option<LanguageShare>,
}
