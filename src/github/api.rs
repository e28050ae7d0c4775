use async_trait::async_trait;

use crate::error::Result;
use crate::models::{GitHubUser, Repository};

// The slice of the GitHub API the aggregation pass consumes.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<GitHubUser>;

    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>>;

    async fn count_merge_commits(&self, username: &str) -> Result<u64>;
}
