//! Tags index - tags aggregated from recent questions with usage counts.

use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::app::Route;
use crate::hooks::use_questions;

/// How many recent questions feed the tag aggregation.
const SCAN_COUNT: u64 = 100;

#[component]
pub fn TagsIndex() -> Element {
    let offset = use_signal(|| 0u64);
    let recent = use_questions(SCAN_COUNT, offset.into());

    let tag_counts: Option<Result<BTreeMap<String, usize>, String>> =
        recent().map(|loaded| {
            loaded.map(|page| {
                let mut counts = BTreeMap::new();
                for question in &page.questions {
                    for tag in &question.tags {
                        *counts.entry(tag.clone()).or_insert(0) += 1;
                    }
                }
                counts
            })
        });

    rsx! {
        div {
            h1 { style: "font-size: 20px;", "Tags" }
            p {
                style: "color: #525960; font-size: 13px;",
                "A tag is a keyword that categorizes your question with other, similar questions."
            }

            {match tag_counts {
                Some(Ok(counts)) => rsx! {
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 10px;",
                        for (tag, count) in counts {
                            Link {
                                to: Route::QuestionsIndex { tag: tag.clone() },
                                style: "
                                    background: #ffffff;
                                    border: 1px solid #d6d9dc;
                                    border-radius: 6px;
                                    padding: 10px 14px;
                                    text-decoration: none;
                                ",
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
                                span {
                                    style: "font-size: 12px; color: #838c95; margin-left: 8px;",
                                    "{count} questions"
                                }
                            }
                        }
                    }
                },
                Some(Err(message)) => rsx! {
                    p { style: "color: #d0393e;", "{message}" }
                },
                None => rsx! {
                    p { style: "color: #838c95;", "Loading tags..." }
                },
            }}
        }
    }
}
