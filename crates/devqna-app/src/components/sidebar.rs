//! Left navigation sidebar

use dioxus::prelude::*;

use crate::app::Route;

const LINK_STYLE: &str = "
    display: block;
    padding: 8px 12px;
    color: #525960;
    text-decoration: none;
    font-size: 13px;
    border-radius: 4px;
";

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        nav {
            style: "
                width: 180px;
                padding: 24px 8px;
                border-right: 1px solid #d6d9dc;
            ",

            Link { to: Route::Home {}, style: LINK_STYLE, "Home" }
            Link {
                to: Route::QuestionsIndex { tag: String::new() },
                style: LINK_STYLE,
                "Questions"
            }
            Link { to: Route::TagsIndex {}, style: LINK_STYLE, "Tags" }
            Link { to: Route::Ask {}, style: LINK_STYLE, "Ask a Question" }
        }
    }
}
