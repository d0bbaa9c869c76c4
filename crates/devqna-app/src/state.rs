//! Application state management
//!
//! Global state accessible via Dioxus context providers. Session state lives
//! separately in [`crate::services::SessionContext`].

use std::sync::Arc;

use dioxus::prelude::*;

use crate::services::{ContentServices, VoteApiClient};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Remote content access, if the BaaS is configured
    pub content: Signal<Option<Arc<ContentServices>>>,
    /// Vote endpoint client, if configured
    pub vote_api: Signal<Option<Arc<VoteApiClient>>>,
}
