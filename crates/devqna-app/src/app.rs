//! Main application component and routes.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::components::{Header, Sidebar};
use crate::services::{
    ContentServices, SessionContext, SessionInit, SessionService, SessionStatus, VoteApiClient,
};
use crate::state::AppState;
use crate::views::{
    Ask, Home, Login, Profile, QuestionDetail, QuestionsIndex, Register, TagsIndex,
};

/// Page routes.
#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/questions?:tag")]
    QuestionsIndex { tag: String },
    #[route("/questions/:id")]
    QuestionDetail { id: String },
    #[route("/ask")]
    Ask {},
    #[route("/tags")]
    TagsIndex {},
    #[route("/users/:id")]
    Profile { id: String },
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component
#[component]
pub fn App() -> Element {
    let mut content = use_signal(|| None::<Arc<ContentServices>>);
    let mut vote_api = use_signal(|| None::<Arc<VoteApiClient>>);
    let mut session_service = use_signal(|| None::<Arc<SessionService>>);
    let session = use_signal(|| None);
    let session_status = use_signal(|| SessionStatus::Initializing);
    let mut initialized = use_signal(|| false);

    let mut session_ctx = SessionContext::new(session_service, session, session_status);

    // Build services and restore the session once, off the render path.
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true);

        spawn(async move {
            match ContentServices::from_env() {
                Ok(Some(services)) => content.set(Some(Arc::new(services))),
                Ok(None) => tracing::warn!("BaaS is not configured; content is unavailable"),
                Err(error) => tracing::error!("Failed to build content services: {error}"),
            }

            match VoteApiClient::from_env() {
                Ok(client) => vote_api.set(Some(Arc::new(client))),
                Err(error) => tracing::error!("Failed to build vote client: {error}"),
            }

            match SessionService::from_env() {
                Ok(Some(service)) => session_service.set(Some(Arc::new(service))),
                Ok(None) => tracing::warn!("Authentication is not configured"),
                Err(error) => tracing::error!("Failed to build session service: {error}"),
            }

            match session_ctx.initialize().await {
                SessionInit::SignedIn(restored) => {
                    tracing::info!("Restored session for {}", restored.user.name);
                }
                SessionInit::SignedOut => tracing::info!("No persisted session"),
                SessionInit::Unavailable(reason) => {
                    tracing::warn!("Session unavailable: {reason}");
                }
            }
        });
    });

    use_context_provider(|| AppState { content, vote_api });
    use_context_provider(|| session_ctx);

    rsx! {
        Router::<Route> {}
    }
}

/// Common chrome around every page: header on top, sidebar on the left.
#[component]
fn Shell() -> Element {
    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                font-family: system-ui, -apple-system, sans-serif;
                background: #f8f9f9;
                color: #232629;
            ",

            Header {}

            div {
                style: "flex: 1; display: flex;",

                Sidebar {}

                main {
                    style: "flex: 1; padding: 24px; max-width: 960px;",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            style: "padding: 48px; text-align: center;",
            h1 { "Page not found" }
            p { "No page at /{path}" }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}
