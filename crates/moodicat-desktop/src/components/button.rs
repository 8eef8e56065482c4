//! Palette-styled button

use dioxus::prelude::*;

use crate::theme::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Destructive,
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    style: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let colors = palette();
    let (bg, fg, border) = match variant {
        ButtonVariant::Primary => (colors.accent, colors.accent_text, colors.accent),
        ButtonVariant::Secondary => (colors.bg_secondary, colors.text_primary, colors.border),
        ButtonVariant::Ghost => ("transparent", colors.text_secondary, "transparent"),
        ButtonVariant::Destructive => ("transparent", colors.error, colors.error),
    };
    let opacity = if disabled { "0.6" } else { "1" };
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    let extra = style.unwrap_or_default();

    rsx! {
        button {
            disabled,
            style: "
                padding: 6px 14px;
                border-radius: 8px;
                border: 1px solid {border};
                background: {bg};
                color: {fg};
                font-size: 13px;
                font-weight: 600;
                cursor: {cursor};
                opacity: {opacity};
                {extra}
            ",
            onclick: move |evt| {
                if !disabled {
                    onclick.call(evt);
                }
            },
            {children}
        }
    }
}
