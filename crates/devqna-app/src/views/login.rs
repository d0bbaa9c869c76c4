//! Login view.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Button, Input};
use crate::services::SessionContext;

#[component]
pub fn Login() -> Element {
    let mut session = use_context::<SessionContext>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut auth_error = use_signal(|| None::<String>);
    let mut working = use_signal(|| false);

    let sign_in = move |_| {
        working.set(true);
        auth_error.set(None);
        spawn(async move {
            match session.sign_in(&email(), &password()).await {
                Ok(_) => {
                    navigator.push(Route::Home {});
                }
                Err(error) => {
                    tracing::warn!("Sign in failed: {error}");
                    auth_error.set(Some(error.to_string()));
                }
            }
            working.set(false);
        });
    };

    rsx! {
        div {
            style: "max-width: 320px; margin: 48px auto; display: flex; flex-direction: column; gap: 10px;",

            h1 { style: "font-size: 20px; text-align: center;", "Log in" }

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
                onclick: sign_in,
                if working() { "Signing in..." } else { "Log in" }
            }

            p {
                style: "font-size: 13px; color: #525960; text-align: center;",
                "No account yet? "
                Link { to: Route::Register {}, style: "color: #0a95ff;", "Sign up" }
            }
        }
    }
}
