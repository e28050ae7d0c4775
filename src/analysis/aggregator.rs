use std::sync::Arc;

use chrono::Utc;

use crate::analysis::stats::{dominant_language, language_shares, total_stars};
use crate::error::Result;
use crate::github::GitHubApi;
use crate::models::{AggregateStats, UserProfile};

pub struct ProfileAggregator {
    github: Arc<dyn GitHubApi>,
}

impl ProfileAggregator {
    pub fn new(github: impl GitHubApi + 'static) -> Self {
        Self {
            github: Arc::new(github),
        }
    }

    // One pass per invocation: fetch the profile, the repository page and the
    // merge-commit count, then derive the aggregate. The three fetches are
    // independent and run concurrently; any single failure voids the whole
    // pass, so no partial stats ever escape.
    pub async fn aggregate(&self, username: &str) -> Result<UserProfile> {
        tracing::info!("Aggregating GitHub data for: {}", username);

        let (user, repos, merge_commits) = futures::try_join!(
            self.github.get_user(username),
            self.github.get_user_repos(username),
            self.github.count_merge_commits(username),
        )?;

        tracing::info!(
            "Fetched profile plus {} repositories and {} merge commits",
            repos.len(),
            merge_commits
        );
        tracing::debug!("Language shares: {:?}", language_shares(&repos));

        let stats = AggregateStats {
            total_stars: total_stars(&repos),
            merge_commit_count: merge_commits,
            dominant_language: dominant_language(&repos),
        };

        Ok(UserProfile {
            user,
            stats,
            fetched_at: Utc::now(),
        })
    }
}
