//! Text input primitives

use dioxus::prelude::*;

const FIELD_STYLE: &str = "
    width: 100%;
    box-sizing: border-box;
    padding: 8px 10px;
    border: 1px solid #babfc4;
    border-radius: 4px;
    font-size: 13px;
    background: #ffffff;
    color: #232629;
";

#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            style: FIELD_STYLE,
            r#type,
            placeholder,
            value,
            disabled,
            oninput: move |event: FormEvent| oninput.call(event.value()),
        }
    }
}

#[component]
pub fn TextArea(
    #[props(default)] placeholder: String,
    value: String,
    #[props(default = 6)] rows: i64,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        textarea {
            style: "{FIELD_STYLE} resize: vertical; font-family: inherit;",
            placeholder,
            value,
            rows,
            disabled,
            oninput: move |event: FormEvent| oninput.call(event.value()),
        }
    }
}
