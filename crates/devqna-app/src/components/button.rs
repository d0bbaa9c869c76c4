//! Button primitive

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    const fn style(self) -> &'static str {
        match self {
            Self::Primary => "background: #0a95ff; color: #ffffff; border: 1px solid #0a95ff;",
            Self::Secondary => "background: #ffffff; color: #0a95ff; border: 1px solid #0a95ff;",
            Self::Ghost => "background: transparent; color: #525960; border: 1px solid transparent;",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_style = variant.style();
    let opacity = if disabled { "0.5" } else { "1" };

    rsx! {
        button {
            style: "
                {variant_style}
                padding: 8px 14px;
                border-radius: 4px;
                font-size: 13px;
                cursor: pointer;
                opacity: {opacity};
            ",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
