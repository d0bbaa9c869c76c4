//! Question detail - the question, its votes and comments, and all answers.

use dioxus::prelude::*;

use devqna_core::models::VoteTarget;
use devqna_core::schema::ATTACHMENT_BUCKET;

use crate::components::{AnswerSection, CommentSection, VoteButtons};
use crate::format::relative_time;
use crate::hooks::{author_display, use_question};
use crate::services::SessionContext;
use crate::state::AppState;

#[component]
pub fn QuestionDetail(id: ReadOnlySignal<String>) -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<SessionContext>();
    let question = use_question(id);

    match &*question.read_unchecked() {
        Some(Ok(Some(question))) => {
            let target = VoteTarget::Question(question.id.clone());
            let author = author_display(&question.author_id, session.current().as_ref());
            let asked = relative_time(question.created_at);
            let attachment_url = question.attachment_id.as_ref().and_then(|file_id| {
                (state.content)()
                    .map(|content| content.storage.file_view_url(ATTACHMENT_BUCKET, file_id))
            });
            let question = question.clone();

            rsx! {
                div {
                    h1 { style: "font-size: 20px;", "{question.title}" }
                    div {
                        style: "font-size: 12px; color: #838c95; margin-bottom: 14px;",
                        "{author.name} - asked {asked}"
                    }

                    div {
                        style: "display: flex; gap: 16px;",

                        VoteButtons { target: target.clone() }

                        div {
                            style: "flex: 1;",
                            p { style: "white-space: pre-wrap; font-size: 14px;", "{question.content}" }

                            if let Some(url) = attachment_url {
                                a {
                                    href: "{url}",
                                    style: "font-size: 13px; color: #0a95ff;",
                                    "View attachment"
                                }
                            }

                            div {
                                style: "display: flex; gap: 6px; margin: 10px 0;",
                                for tag in question.tags.clone() {
                                    span {
                                        style: "
                                            background: #e1ecf4;
                                            color: #39739d;
                                            font-size: 12px;
                                            padding: 2px 8px;
                                            border-radius: 4px;
                                        ",
                                        "{tag}"
                                    }
                                }
                            }

                            CommentSection { target: target.clone() }
                        }
                    }

                    div {
                        style: "margin-top: 24px;",
                        AnswerSection { question_id: question.id.clone() }
                    }
                }
            }
        }
        Some(Ok(None)) => rsx! {
            p { style: "color: #525960;", "This question does not exist." }
        },
        Some(Err(message)) => rsx! {
            p { style: "color: #d0393e;", "{message}" }
        },
        None => rsx! {
            p { style: "color: #838c95;", "Loading question..." }
        },
    }
}
