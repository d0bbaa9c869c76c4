//! Question card shown in listings

use dioxus::prelude::*;

use devqna_core::models::Question;

use crate::app::Route;
use crate::format::{preview, relative_time};
use crate::hooks::author_display;
use crate::services::SessionContext;

#[component]
pub fn QuestionCard(question: Question) -> Element {
    let session = use_context::<SessionContext>();
    let author = author_display(&question.author_id, session.current().as_ref());
    let asked = relative_time(question.created_at);
    let body_preview = preview(&question.content, 160);

    rsx! {
        article {
            style: "
                padding: 14px 16px;
                background: #ffffff;
                border: 1px solid #d6d9dc;
                border-radius: 6px;
                margin-bottom: 10px;
            ",

            Link {
                to: Route::QuestionDetail { id: question.id.clone() },
                style: "font-size: 16px; color: #0a95ff; text-decoration: none;",
                "{question.title}"
            }

            p {
                style: "margin: 6px 0; font-size: 13px; color: #525960;",
                "{body_preview}"
            }

            div {
                style: "display: flex; align-items: center; gap: 6px;",

                for tag in question.tags.clone() {
                    Link {
                        to: Route::QuestionsIndex { tag: tag.clone() },
                        style: "
                            background: #e1ecf4;
                            color: #39739d;
                            font-size: 12px;
                            padding: 2px 8px;
                            border-radius: 4px;
                            text-decoration: none;
                        ",
                        "{tag}"
                    }
                }

                div { style: "flex: 1;" }

                span {
                    style: "font-size: 12px; color: #838c95;",
                    "{author.name} - asked {asked}"
                }
            }
        }
    }
}
