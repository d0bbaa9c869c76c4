//! Up/down vote controls for a question or answer.

use dioxus::prelude::*;

use devqna_core::{VoteDirection, VoteTarget};

use crate::app::Route;
use crate::hooks::use_votes;
use crate::services::SessionContext;
use crate::state::AppState;

#[component]
pub fn VoteButtons(target: ReadOnlySignal<VoteTarget>) -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<SessionContext>();
    let navigator = use_navigator();

    let mut snapshot = use_votes(target);
    let mut error_message = use_signal(|| None::<String>);
    let mut working = use_signal(|| false);

    let current = snapshot().and_then(|loaded| loaded.ok());
    let count = current.map_or(0, |view| view.count);
    let user_vote = current.and_then(|view| view.user_vote);

    let mut cast = move |direction: VoteDirection| {
        let Some(active) = session.current() else {
            // Soft failure: voting while signed out just prompts to log in.
            navigator.push(Route::Login {});
            return;
        };
        let Some(api) = (state.vote_api)() else {
            error_message.set(Some("Voting is unavailable".to_string()));
            return;
        };

        working.set(true);
        error_message.set(None);
        let target = target();
        spawn(async move {
            match api.cast_vote(&active.user.id, &target, direction).await {
                Ok(_) => snapshot.restart(),
                Err(message) => {
                    tracing::error!("Vote failed: {message}");
                    error_message.set(Some(message));
                }
            }
            working.set(false);
        });
    };

    let arrow_style = |active: bool| {
        if active {
            "background: #f48024; color: #ffffff; border: 1px solid #f48024;"
        } else {
            "background: #ffffff; color: #838c95; border: 1px solid #babfc4;"
        }
    };
    let up_style = arrow_style(user_vote == Some(VoteDirection::Upvoted));
    let down_style = arrow_style(user_vote == Some(VoteDirection::Downvoted));

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 4px;",

            button {
                style: "{up_style} border-radius: 50%; width: 32px; height: 32px; cursor: pointer;",
                disabled: working(),
                onclick: move |_| cast(VoteDirection::Upvoted),
                "▲"
            }

            span { style: "font-size: 16px; font-weight: 600;", "{count}" }

            button {
                style: "{down_style} border-radius: 50%; width: 32px; height: 32px; cursor: pointer;",
                disabled: working(),
                onclick: move |_| cast(VoteDirection::Downvoted),
                "▼"
            }

            if let Some(message) = error_message() {
                span { style: "font-size: 11px; color: #d0393e; max-width: 120px;", "{message}" }
            }
        }
    }
}
