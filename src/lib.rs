pub mod analysis;
pub mod config;
pub mod content;
pub mod error;
pub mod github;
pub mod models;

pub use analysis::{classify, BadgeDescriptor, ProfileAggregator};
pub use config::Config;
pub use content::{SiteContent, SITE};
pub use error::{Error, Result};
pub use github::{GitHubApi, GitHubClient};
