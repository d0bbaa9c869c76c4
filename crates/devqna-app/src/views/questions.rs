//! Questions index - the paginated listing, optionally filtered by tag.

use dioxus::prelude::*;

use crate::components::{Pagination, QuestionCard};
use crate::hooks::{use_questions, use_questions_by_tag, QuestionPage};

const PAGE_SIZE: u64 = 20;

#[component]
pub fn QuestionsIndex(tag: ReadOnlySignal<String>) -> Element {
    let offset = use_signal(|| 0u64);
    let filtered = !tag().is_empty();

    // Two hooks, one enabled by the tag filter; each owns its own lifecycle.
    let all = use_questions(PAGE_SIZE, offset.into());
    let by_tag = use_questions_by_tag(tag, PAGE_SIZE, offset.into());

    let page_state: Option<Result<QuestionPage, String>> =
        if filtered { by_tag() } else { all() };

    let heading = if filtered {
        format!("Questions tagged [{}]", tag())
    } else {
        "All Questions".to_string()
    };

    rsx! {
        div {
            h1 { style: "font-size: 20px;", "{heading}" }

            {match page_state {
                Some(Ok(page)) => rsx! {
                    p { style: "color: #525960; font-size: 13px;", "{page.total} questions" }

                    for question in page.questions.clone() {
                        QuestionCard { question }
                    }

                    Pagination { page_size: PAGE_SIZE, total: page.total, offset }
                },
                Some(Err(message)) => rsx! {
                    p { style: "color: #d0393e;", "{message}" }
                },
                None => rsx! {
                    p { style: "color: #838c95;", "Loading questions..." }
                },
            }}
        }
    }
}
