//! Answer list and answer composer for a question.

use dioxus::prelude::*;

use devqna_core::models::{NewAnswer, VoteTarget};

use crate::components::{Button, CommentSection, TextArea, VoteButtons};
use crate::format::relative_time;
use crate::hooks::{author_display, use_answers};
use crate::services::SessionContext;
use crate::state::AppState;

#[component]
pub fn AnswerSection(question_id: ReadOnlySignal<String>) -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<SessionContext>();

    let mut answers = use_answers(question_id);
    let mut draft = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);
    let mut posting = use_signal(|| false);

    let submit = move |_| {
        let Some(active) = session.current() else {
            form_error.set(Some("Log in to post an answer".to_string()));
            return;
        };
        let Some(content) = (state.content)() else {
            form_error.set(Some("Backend is not configured".to_string()));
            return;
        };

        // Validate before any remote call.
        let answer = match NewAnswer::new(draft(), active.user.id, question_id()) {
            Ok(answer) => answer,
            Err(error) => {
                form_error.set(Some(error.to_string()));
                return;
            }
        };

        posting.set(true);
        form_error.set(None);
        spawn(async move {
            match content.answers.create(&answer).await {
                Ok(_) => {
                    draft.set(String::new());
                    answers.restart();
                }
                Err(error) => {
                    tracing::error!("Posting answer failed: {error}");
                    form_error.set(Some("Failed to post your answer".to_string()));
                }
            }
            posting.set(false);
        });
    };

    rsx! {
        section {
            {match &*answers.read_unchecked() {
                Some(Ok(list)) => rsx! {
                    h2 { style: "font-size: 17px;", "{list.len()} Answers" }

                    for answer in list.clone() {
                        div {
                            style: "
                                display: flex;
                                gap: 14px;
                                padding: 14px 0;
                                border-bottom: 1px solid #d6d9dc;
                            ",

                            VoteButtons { target: VoteTarget::Answer(answer.id.clone()) }

                            div {
                                style: "flex: 1;",
                                p { style: "white-space: pre-wrap; font-size: 14px;", "{answer.content}" }
                                div {
                                    style: "font-size: 12px; color: #838c95;",
                                    {
                                        let author = author_display(&answer.author_id, session.current().as_ref());
                                        let answered = relative_time(answer.created_at);
                                        rsx! { "{author.name} - answered {answered}" }
                                    }
                                }
                                CommentSection { target: VoteTarget::Answer(answer.id.clone()) }
                            }
                        }
                    }
                },
                Some(Err(message)) => rsx! {
                    p { style: "color: #d0393e;", "{message}" }
                },
                None => rsx! {
                    p { style: "color: #838c95;", "Loading answers..." }
                },
            }}

            div {
                style: "margin-top: 20px;",
                h3 { style: "font-size: 15px;", "Your Answer" }

                TextArea {
                    placeholder: "Write your answer here...",
                    value: draft(),
                    disabled: posting(),
                    oninput: move |value| draft.set(value),
                }

                if let Some(message) = form_error() {
                    p { style: "color: #d0393e; font-size: 12px;", "{message}" }
                }

                div {
                    style: "margin-top: 8px;",
                    Button {
                        disabled: posting(),
                        onclick: submit,
                        "Post Your Answer"
                    }
                }
            }
        }
    }
}
