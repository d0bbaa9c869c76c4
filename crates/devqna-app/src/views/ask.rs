//! Ask view - post a new question.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::QuestionForm;
use crate::services::SessionContext;

#[component]
pub fn Ask() -> Element {
    let session = use_context::<SessionContext>();

    rsx! {
        div {
            h1 { style: "font-size: 20px;", "Ask a public question" }

            if session.current().is_some() {
                QuestionForm {}
            } else {
                p {
                    style: "color: #525960; font-size: 14px;",
                    "You need an account to ask a question. "
                    Link { to: Route::Login {}, style: "color: #0a95ff;", "Log in" }
                    " or "
                    Link { to: Route::Register {}, style: "color: #0a95ff;", "sign up" }
                    "."
                }
            }
        }
    }
}
