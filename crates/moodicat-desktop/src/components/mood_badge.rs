//! Mood emoji with a tone-coloured label

use dioxus::prelude::*;

use moodicat_core::mood::{mood_emoji, mood_tone};

use crate::theme::{palette, tone_color};

#[component]
pub fn MoodBadge(#[props(!optional)] mood: Option<String>) -> Element {
    let colors = palette();
    let emoji = mood_emoji(mood.as_deref());
    let tone = tone_color(mood_tone(mood.as_deref()));
    let label = mood
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(ToString::to_string);

    rsx! {
        span {
            class: "mood-badge",
            style: "
                display: inline-flex;
                align-items: center;
                gap: 4px;
                padding: 2px 8px;
                border-radius: 999px;
                border: 1px solid {tone};
                background: {colors.bg_secondary};
                font-size: 12px;
            ",
            span { style: "font-size: 16px;", "{emoji}" }
            if let Some(label) = label {
                span { style: "color: {colors.text_secondary};", "{label}" }
            }
        }
    }
}
