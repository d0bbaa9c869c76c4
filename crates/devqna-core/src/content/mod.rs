//! Content fetchers: thin, deadline-guarded reads and writes per entity.
//!
//! Every remote call is wrapped in [`crate::deadline::with_deadline`]; there
//! is no retry, no backoff, and no client-side result cache.

mod answers;
mod comments;
mod questions;
mod stats;
mod votes;

pub use answers::Answers;
pub use comments::Comments;
pub use questions::Questions;
pub use stats::{PlatformStats, Stats};
pub use votes::Votes;

/// System attribute every list orders on, newest first.
pub(crate) const CREATED_AT: &str = "$createdAt";
