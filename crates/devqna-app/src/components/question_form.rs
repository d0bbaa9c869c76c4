//! Ask-a-question form with optional attachment upload.

use dioxus::prelude::*;

use devqna_core::models::NewQuestion;
use devqna_core::schema::ATTACHMENT_BUCKET;

use crate::app::Route;
use crate::components::{Button, Input, TextArea};
use crate::services::SessionContext;
use crate::state::AppState;

#[component]
pub fn QuestionForm() -> Element {
    let state = use_context::<AppState>();
    let session = use_context::<SessionContext>();
    let navigator = use_navigator();

    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut tags_input = use_signal(String::new);
    let mut attachment = use_signal(|| None::<(String, Vec<u8>)>);
    let mut form_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let pick_attachment = move |_| {
        spawn(async move {
            let picked = rfd::AsyncFileDialog::new()
                .add_filter("Attachments", &["jpg", "jpeg", "png", "gif", "webp", "pdf"])
                .pick_file()
                .await;
            if let Some(handle) = picked {
                let name = handle.file_name();
                let bytes = handle.read().await;
                attachment.set(Some((name, bytes)));
            }
        });
    };

    let submit = move |_| {
        let Some(active) = session.current() else {
            form_error.set(Some("Log in to ask a question".to_string()));
            return;
        };
        let Some(content) = (state.content)() else {
            form_error.set(Some("Backend is not configured".to_string()));
            return;
        };

        let tags: Vec<String> = tags_input()
            .split(',')
            .map(str::to_string)
            .filter(|tag| !tag.trim().is_empty())
            .collect();

        submitting.set(true);
        form_error.set(None);
        let author_id = active.user.id.clone();
        let secret = active.secret.clone();
        spawn(async move {
            // Upload the attachment first so the question row can reference it.
            let mut attachment_id = None;
            if let Some((name, bytes)) = attachment() {
                let mime = mime_guess::from_path(&name)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string();
                let upload = content
                    .storage
                    .with_session(secret.clone())
                    .upload_file(ATTACHMENT_BUCKET, &name, &mime, bytes)
                    .await;
                match upload {
                    Ok(file) => attachment_id = Some(file.id),
                    Err(error) => {
                        tracing::error!("Attachment upload failed: {error}");
                        form_error.set(Some("Failed to upload the attachment".to_string()));
                        submitting.set(false);
                        return;
                    }
                }
            }

            // Validation happens before the create call; errors surface inline.
            let question =
                match NewQuestion::new(title(), body(), author_id, tags, attachment_id) {
                    Ok(question) => question,
                    Err(error) => {
                        form_error.set(Some(error.to_string()));
                        submitting.set(false);
                        return;
                    }
                };

            match content.questions.create(&question).await {
                Ok(created) => {
                    navigator.push(Route::QuestionDetail { id: created.id });
                }
                Err(error) => {
                    tracing::error!("Creating question failed: {error}");
                    form_error.set(Some("Failed to post your question".to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let attachment_label = attachment()
        .map_or_else(|| "Attach a file".to_string(), |(name, _)| name);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px; max-width: 680px;",

            label { style: "font-size: 13px; font-weight: 600;", "Title" }
            Input {
                placeholder: "Be specific and imagine you're asking another person",
                value: title(),
                disabled: submitting(),
                oninput: move |value| title.set(value),
            }

            label { style: "font-size: 13px; font-weight: 600;", "Body" }
            TextArea {
                placeholder: "Include all the information someone would need to answer",
                value: body(),
                rows: 10,
                disabled: submitting(),
                oninput: move |value| body.set(value),
            }

            label { style: "font-size: 13px; font-weight: 600;", "Tags" }
            Input {
                placeholder: "e.g. rust, async, borrow-checker (comma separated, up to 5)",
                value: tags_input(),
                disabled: submitting(),
                oninput: move |value| tags_input.set(value),
            }

            div {
                style: "display: flex; gap: 10px; align-items: center;",
                Button {
                    variant: crate::components::ButtonVariant::Secondary,
                    disabled: submitting(),
                    onclick: pick_attachment,
                    "{attachment_label}"
                }
                if attachment().is_some() {
                    button {
                        style: "background: none; border: none; color: #838c95; cursor: pointer;",
                        onclick: move |_| attachment.set(None),
                        "Remove"
                    }
                }
            }

            if let Some(message) = form_error() {
                p { style: "color: #d0393e; font-size: 13px;", "{message}" }
            }

            div {
                Button {
                    disabled: submitting(),
                    onclick: submit,
                    if submitting() { "Posting..." } else { "Post Your Question" }
                }
            }
        }
    }
}
