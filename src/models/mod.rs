pub mod cache;
pub mod error;
pub mod github;
pub mod stats;

pub use cache::*;
pub use error::*;
pub use github::*;
pub use stats::*;
