use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
}

impl Config {
    // A missing token is not an error: requests fall back to the
    // unauthenticated (rate-limited) tier.
    pub fn from_env() -> Self {
        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        Self { github_token }
    }
}
