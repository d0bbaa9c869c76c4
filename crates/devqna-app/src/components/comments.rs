//! Comment thread under a question or answer. Comments are append-only.

use dioxus::prelude::*;

use devqna_core::models::{NewComment, VoteTarget};

use crate::format::relative_time;
use crate::hooks::{author_display, use_comments};
use crate::services::SessionContext;
use crate::state::AppState;

#[component]
pub fn CommentSection(target: ReadOnlySignal<VoteTarget>) -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<SessionContext>();

    let mut comments = use_comments(target);
    let mut draft = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);
    let mut composing = use_signal(|| false);

    let submit = move |_| {
        let Some(active) = session.current() else {
            form_error.set(Some("Log in to comment".to_string()));
            return;
        };
        let Some(content) = (state.content)() else {
            form_error.set(Some("Backend is not configured".to_string()));
            return;
        };

        let comment = match NewComment::new(draft(), active.user.id, target()) {
            Ok(comment) => comment,
            Err(error) => {
                form_error.set(Some(error.to_string()));
                return;
            }
        };

        form_error.set(None);
        spawn(async move {
            match content.comments.create(&comment).await {
                Ok(_) => {
                    draft.set(String::new());
                    composing.set(false);
                    comments.restart();
                }
                Err(error) => {
                    tracing::error!("Posting comment failed: {error}");
                    form_error.set(Some("Failed to add your comment".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            style: "margin-top: 8px; padding-left: 8px; border-left: 2px solid #e3e6e8;",

            {match &*comments.read_unchecked() {
                Some(Ok(list)) => rsx! {
                    for comment in list.clone() {
                        div {
                            style: "font-size: 12px; padding: 4px 0; color: #3b4045;",
                            "{comment.content}"
                            span {
                                style: "color: #838c95;",
                                {
                                    let author = author_display(&comment.author_id, session.current().as_ref());
                                    let when = relative_time(comment.created_at);
                                    rsx! { " - {author.name}, {when}" }
                                }
                            }
                        }
                    }
                },
                Some(Err(message)) => rsx! {
                    div { style: "font-size: 12px; color: #d0393e;", "{message}" }
                },
                None => rsx! {
                    div { style: "font-size: 12px; color: #838c95;", "Loading comments..." }
                },
            }}

            if composing() {
                input {
                    style: "
                        width: 100%;
                        box-sizing: border-box;
                        padding: 4px 8px;
                        font-size: 12px;
                        border: 1px solid #babfc4;
                        border-radius: 4px;
                    ",
                    placeholder: "Add a comment...",
                    value: draft(),
                    oninput: move |event: FormEvent| draft.set(event.value()),
                    onkeydown: move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            submit(());
                        }
                    },
                }
            } else {
                button {
                    style: "
                        background: none;
                        border: none;
                        color: #838c95;
                        font-size: 12px;
                        cursor: pointer;
                        padding: 4px 0;
                    ",
                    onclick: move |_| composing.set(true),
                    "Add a comment"
                }
            }

            if let Some(message) = form_error() {
                div { style: "font-size: 12px; color: #d0393e;", "{message}" }
            }
        }
    }
}
