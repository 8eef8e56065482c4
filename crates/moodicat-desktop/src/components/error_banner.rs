//! Inline error message

use dioxus::prelude::*;

use crate::theme::palette;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    let colors = palette();

    rsx! {
        div {
            class: "error-banner",
            style: "
                margin: 8px 0;
                padding: 8px 12px;
                border-radius: 8px;
                border: 1px solid {colors.error};
                color: {colors.error};
                background: #fef2f2;
                font-size: 13px;
            ",
            "{message}"
        }
    }
}
