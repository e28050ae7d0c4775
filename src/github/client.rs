use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};

use crate::error::{Error, Result};
use crate::github::api::GitHubApi;
use crate::models::{CommitSearchResults, GitHubUser, Repository};

const BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "steamfolio/0.1";
// The commit-search endpoint still requires its preview media type and the
// legacy `token` authorization scheme.
const COMMIT_SEARCH_ACCEPT: &str = "application/vnd.github.cloak-preview";

pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            token: token.map(str::to_owned),
            base_url: BASE_URL.to_string(),
        })
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }
        if !response.status().is_success() {
            return Err(classify_failure("user", username, response).await);
        }

        Ok(response.json().await?)
    }

    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        // Deliberately unpaginated: the first page the API returns is the
        // whole population the card summarizes.
        let url = format!(
            "{}/users/{}/repos?sort=updated&type=public",
            self.base_url, username
        );
        tracing::info!("Fetching repositories for: {}", username);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }
        if !response.status().is_success() {
            return Err(classify_failure("repositories", username, response).await);
        }

        Ok(response.json().await?)
    }

    async fn count_merge_commits(&self, username: &str) -> Result<u64> {
        let url = format!("{}/search/commits", self.base_url);
        let query = format!("author:{} is:merge", username);
        tracing::info!("Counting merge commits for: {}", username);

        let mut request = self
            .client
            .get(&url)
            .query(&[("q", query.as_str())])
            .header(header::ACCEPT, COMMIT_SEARCH_ACCEPT);
        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(classify_failure("merge-commit count", username, response).await);
        }

        let results: CommitSearchResults = response.json().await?;
        tracing::debug!(
            "Commit search matched {} ({} on this page{})",
            results.total_count,
            results.items.len(),
            if results.incomplete_results {
                ", incomplete"
            } else {
                ""
            }
        );

        Ok(results.total_count)
    }
}

async fn classify_failure(what: &str, username: &str, response: Response) -> Error {
    let status = response.status();
    let remaining = header_u64(&response, "x-ratelimit-remaining");
    let reset = header_u64(&response, "x-ratelimit-reset");
    let body = response.text().await.unwrap_or_default();

    if status == StatusCode::UNAUTHORIZED {
        return Error::Auth(body);
    }

    if (status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS)
        && remaining == Some(0)
    {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        return Error::RateLimited(reset.unwrap_or(now).saturating_sub(now));
    }

    Error::GitHubApi(format!(
        "Failed to fetch {} for {}: {} - {}",
        what, username, status, body
    ))
}

fn header_u64(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}
