//! Home view - headline stats and the latest questions.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::QuestionCard;
use crate::hooks::{use_questions, use_stats};

const RECENT_COUNT: u64 = 10;

#[component]
pub fn Home() -> Element {
    let stats = use_stats();
    let offset = use_signal(|| 0u64);
    let recent = use_questions(RECENT_COUNT, offset.into());

    rsx! {
        div {
            h1 { style: "font-size: 22px;", "Every developer has a question" }
            p {
                style: "color: #525960; font-size: 14px;",
                "Ask, answer, and vote - reputation follows good answers."
            }

            if let Some(Ok(numbers)) = stats() {
                div {
                    style: "display: flex; gap: 24px; margin: 16px 0;",
                    StatTile { label: "Questions", value: numbers.questions }
                    StatTile { label: "Answers", value: numbers.answers }
                    StatTile { label: "Users", value: numbers.users }
                }
            }

            div {
                style: "display: flex; align-items: baseline; margin-top: 16px;",
                h2 { style: "font-size: 17px; flex: 1;", "Recent questions" }
                Link {
                    to: Route::QuestionsIndex { tag: String::new() },
                    style: "font-size: 13px; color: #0a95ff; text-decoration: none;",
                    "See all"
                }
            }

            {match &*recent.read_unchecked() {
                Some(Ok(page)) => rsx! {
                    for question in page.questions.clone() {
                        QuestionCard { question }
                    }
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

#[component]
fn StatTile(label: &'static str, value: u64) -> Element {
    rsx! {
        div {
            style: "
                background: #ffffff;
                border: 1px solid #d6d9dc;
                border-radius: 6px;
                padding: 12px 20px;
                text-align: center;
            ",
            div { style: "font-size: 20px; font-weight: 700;", "{value}" }
            div { style: "font-size: 12px; color: #838c95;", "{label}" }
        }
    }
}
