pub mod aggregator;
pub mod badge;
pub mod stats;

pub use aggregator::ProfileAggregator;
pub use badge::{classify, BadgeDescriptor};
