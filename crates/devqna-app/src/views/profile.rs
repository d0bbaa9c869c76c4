//! User profile - name, reputation, and avatar when available.

use dioxus::prelude::*;

use crate::hooks::author_display;
use crate::services::SessionContext;

#[component]
pub fn Profile(id: ReadOnlySignal<String>) -> Element {
    let session = use_context::<SessionContext>();
    let profile = author_display(&id(), session.current().as_ref());
    let email = session
        .current()
        .filter(|active| active.user.id == id())
        .and_then(|active| active.user.email);
    let initial = profile.name.chars().next().unwrap_or('?');

    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: center;",

            if let Some(url) = profile.avatar_url.clone() {
                img {
                    src: "{url}",
                    style: "width: 64px; height: 64px; border-radius: 8px;",
                }
            } else {
                div {
                    style: "
                        width: 64px;
                        height: 64px;
                        border-radius: 8px;
                        background: #f48024;
                        color: #ffffff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 28px;
                    ",
                    "{initial}"
                }
            }

            div {
                h1 { style: "font-size: 20px; margin: 0;", "{profile.name}" }
                p {
                    style: "margin: 4px 0; font-size: 13px; color: #525960;",
                    "Reputation: {profile.reputation}"
                }
                if let Some(email) = email {
                    p { style: "margin: 0; font-size: 12px; color: #838c95;", "{email}" }
                }
            }
        }
    }
}
