//! Registration view.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Button, Input};
use crate::services::SessionContext;

#[component]
pub fn Register() -> Element {
    let mut session = use_context::<SessionContext>();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut auth_error = use_signal(|| None::<String>);
    let mut working = use_signal(|| false);

    let sign_up = move |_| {
        working.set(true);
        auth_error.set(None);
        spawn(async move {
            match session.sign_up(&name(), &email(), &password()).await {
                Ok(_) => {
                    navigator.push(Route::Home {});
                }
                Err(error) => {
                    tracing::warn!("Sign up failed: {error}");
                    auth_error.set(Some(error.to_string()));
                }
            }
            working.set(false);
        });
    };

    rsx! {
        div {
            style: "max-width: 320px; margin: 48px auto; display: flex; flex-direction: column; gap: 10px;",

            h1 { style: "font-size: 20px; text-align: center;", "Create your account" }

            Input {
                placeholder: "Display name",
                value: name(),
                disabled: working(),
                oninput: move |value| name.set(value),
            }
            Input {
                r#type: "email",
                placeholder: "Email",
                value: email(),
                disabled: working(),
                oninput: move |value| email.set(value),
            }
            Input {
                r#type: "password",
                placeholder: "Password",
                value: password(),
                disabled: working(),
                oninput: move |value| password.set(value),
            }

            if let Some(message) = auth_error() {
                p { style: "color: #d0393e; font-size: 13px;", "{message}" }
            }

            Button {
                disabled: working(),
                onclick: sign_up,
                if working() { "Creating account..." } else { "Sign up" }
            }

            p {
                style: "font-size: 13px; color: #525960; text-align: center;",
                "Already have an account? "
                Link { to: Route::Login {}, style: "color: #0a95ff;", "Log in" }
            }
        }
    }
}
