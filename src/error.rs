use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Authentication rejected: {0}")]
    Auth(String),

    #[error("Rate limit exceeded, resets in {0} seconds")]
    RateLimited(u64),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited(_))
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited(_) | Error::Network(_))
    }
}
