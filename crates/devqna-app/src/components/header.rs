//! Top navigation bar

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Button, ButtonVariant};
use crate::services::SessionContext;

#[component]
pub fn Header() -> Element {
    let mut session = use_context::<SessionContext>();
    let navigator = use_navigator();

    let signed_in_name = session.current().map(|session| session.user.name);

    rsx! {
        header {
            style: "
                display: flex;
                align-items: center;
                gap: 16px;
                padding: 10px 24px;
                background: #ffffff;
                border-bottom: 1px solid #d6d9dc;
                box-shadow: 0 1px 2px rgba(0,0,0,0.05);
            ",

            Link {
                to: Route::Home {},
                style: "font-size: 18px; font-weight: 700; color: #232629; text-decoration: none;",
                "Dev"
                span { style: "color: #0a95ff;", "QnA" }
            }

            div { style: "flex: 1;" }

            if let Some(name) = signed_in_name {
                Link {
                    to: Route::Profile { id: session.current().map(|s| s.user.id).unwrap_or_default() },
                    style: "color: #525960; text-decoration: none; font-size: 13px;",
                    "{name}"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        spawn(async move {
                            if let Err(error) = session.sign_out().await {
                                tracing::error!("Sign out failed: {error}");
                            }
                        });
                    },
                    "Log out"
                }
            } else {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        navigator.push(Route::Login {});
                    },
                    "Log in"
                }
                Button {
                    onclick: move |_| {
                        navigator.push(Route::Register {});
                    },
                    "Sign up"
                }
            }
        }
    }
}
