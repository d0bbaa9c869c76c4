//! Application services: BaaS-backed content access, the session context,
//! and the vote endpoint client.

mod content;
mod session;
mod vote_api;

pub use content::ContentServices;
pub use session::{KeyringSessionStore, SessionContext, SessionInit, SessionService, SessionStatus};
pub use vote_api::VoteApiClient;
