//! Limit/offset pager for question listings.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

#[component]
pub fn Pagination(page_size: u64, total: u64, mut offset: Signal<u64>) -> Element {
    let current = offset();
    let page = current / page_size + 1;
    let pages = total.div_ceil(page_size).max(1);
    let has_prev = current > 0;
    let has_next = current + page_size < total;

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 10px; margin-top: 14px;",

            Button {
                variant: ButtonVariant::Secondary,
                disabled: !has_prev,
                onclick: move |_| {
                    offset.set(current.saturating_sub(page_size));
                },
                "Previous"
            }

            span { style: "font-size: 13px; color: #525960;", "Page {page} of {pages}" }

            Button {
                variant: ButtonVariant::Secondary,
                disabled: !has_next,
                onclick: move |_| {
                    offset.set(current + page_size);
                },
                "Next"
            }
        }
    }
}
