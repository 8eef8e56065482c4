//! Assistant chat panel with today's mood indicator

use dioxus::prelude::*;

use moodicat_core::chat::{failure_message, ChatRole, ChatTranscript, CONNECTION_FAILURE};
use moodicat_core::mood::{english_label, mood_emoji};

use super::button::Button;
use crate::queries::{invalidate_resources, use_today_mood_query, Loadable};
use crate::state::AppState;
use crate::theme::palette;

#[component]
pub fn ChatPanel() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();
    let mut transcript = use_signal(ChatTranscript::default);
    let mut draft = use_signal(String::new);
    let today_mood = use_today_mood_query(state.api());

    let (mood_emoji_text, mood_label) = match Loadable::of(&today_mood) {
        Loadable::Ready(Some(mood)) => (
            mood_emoji(Some(mood.as_str())),
            english_label(&mood).unwrap_or_else(|| "...".to_string()),
        ),
        _ => (mood_emoji(None), "...".to_string()),
    };

    let mut send = move || {
        let outgoing = match transcript.write().begin_send(&draft.read()) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Chat message not sent: {}", e);
                return;
            }
        };
        draft.set(String::new());

        let service = state.service();
        spawn(async move {
            let Some(service) = service else {
                transcript.write().fail(CONNECTION_FAILURE.to_string());
                return;
            };
            match service.api().send_chat(&outgoing).await {
                Ok(reply) => {
                    transcript.write().complete(&reply);
                    invalidate_resources(&reply.touched_resources()).await;
                }
                Err(e) => {
                    tracing::warn!("Chat request failed: {}", e);
                    transcript.write().fail(failure_message(&e));
                }
            }
        });
    };

    let handle_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter && !evt.modifiers().shift() {
            evt.prevent_default();
            send();
        }
    };

    let current = transcript.read();
    let pending = current.is_pending();
    let messages = current.messages().to_vec();
    drop(current);

    rsx! {
        section {
            class: "chat-panel",
            style: "
                display: flex;
                flex-direction: column;
                height: 100%;
                background: {colors.bg_secondary};
                border: 1px solid {colors.border};
                border-radius: 16px;
                overflow: hidden;
            ",

            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 12px 16px;
                    border-bottom: 1px solid {colors.border_light};
                ",
                div { style: "font-weight: 700;", "Moodicat Assistant" }
                div {
                    class: "today-mood",
                    style: "font-size: 13px; color: {colors.text_secondary};",
                    "Today's mood: {mood_emoji_text} {mood_label}"
                }
            }

            div {
                class: "chat-messages",
                style: "
                    flex: 1;
                    overflow-y: auto;
                    padding: 16px;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                ",

                for message in messages {
                    {
                        let is_user = message.role == ChatRole::User;
                        let align = if is_user { "flex-end" } else { "flex-start" };
                        let bg = if is_user { colors.accent } else { colors.bg_tertiary };
                        let fg = if is_user { colors.accent_text } else { colors.text_primary };
                        let time = message.timestamp.format("%H:%M").to_string();

                        rsx! {
                            div {
                                key: "{message.id}",
                                style: "
                                    align-self: {align};
                                    max-width: 80%;
                                    padding: 8px 12px;
                                    border-radius: 12px;
                                    background: {bg};
                                    color: {fg};
                                    white-space: pre-wrap;
                                ",
                                div { "{message.content}" }
                                div {
                                    style: "font-size: 10px; opacity: 0.7; margin-top: 4px; text-align: right;",
                                    "{time}"
                                }
                            }
                        }
                    }
                }

                if pending {
                    div {
                        style: "align-self: flex-start; color: {colors.text_muted}; font-style: italic;",
                        "Moodicat is typing..."
                    }
                }
            }

            div {
                style: "
                    display: flex;
                    gap: 8px;
                    padding: 12px 16px;
                    border-top: 1px solid {colors.border_light};
                ",
                textarea {
                    style: "
                        flex: 1;
                        resize: none;
                        height: 44px;
                        padding: 8px 12px;
                        border: 1px solid {colors.border};
                        border-radius: 8px;
                        font-family: inherit;
                        outline: none;
                    ",
                    value: "{draft}",
                    placeholder: "Tell Moodicat how you feel... (Enter to send)",
                    disabled: pending,
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: handle_keydown,
                }
                Button {
                    disabled: pending || draft.read().trim().is_empty(),
                    onclick: move |_| send(),
                    "Send"
                }
            }
        }
    }
}
