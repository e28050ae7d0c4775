pub mod search;
pub mod stats;
pub mod user;

pub use search::*;
pub use stats::*;
pub use user::*;
