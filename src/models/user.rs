use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stats::AggregateStats;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

// Only stars and language feed the aggregate; the rest of the repo payload
// is dropped at the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub stargazers_count: u32,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user: GitHubUser,
    pub stats: AggregateStats,
    pub fetched_at: DateTime<Utc>,
}
