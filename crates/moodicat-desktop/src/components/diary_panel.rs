//! Diary panel: date range, entry list and quick entry form

use chrono::NaiveDate;
use dioxus::prelude::*;

use moodicat_core::models::{DiaryDraft, DiaryEntry, DiaryRange, EntryId};
use moodicat_core::mood::QUICK_MOODS;
use moodicat_core::util::{parse_date_input, today};

use super::button::{Button, ButtonVariant};
use super::{ErrorBanner, MoodBadge};
use crate::queries::{invalidate_diary_queries, use_diary_query, Loadable};
use crate::state::AppState;
use crate::theme::palette;

#[component]
pub fn DiaryPanel() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();
    let mut range = use_signal(DiaryRange::default);
    let entries = use_diary_query(state.api(), range());

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut mood = use_signal(|| None::<String>);
    let mut editing = use_signal(|| None::<EntryId>);
    let mut editing_date = use_signal(|| None::<NaiveDate>);
    let mut saving = use_signal(|| false);
    let mut save_error = use_signal(|| None::<String>);
    let mut delete_error = use_signal(|| None::<String>);

    let mut reset_form = move || {
        title.set(String::new());
        content.set(String::new());
        mood.set(None);
        editing.set(None);
        editing_date.set(None);
    };

    let save = move |_| {
        if saving() {
            return;
        }
        // Edits keep the entry's own date
        let entry_date = editing_date().unwrap_or_else(today);
        let draft = match DiaryDraft::new(title(), content(), mood(), entry_date) {
            Ok(draft) => draft,
            Err(e) => {
                save_error.set(Some(e.to_string()));
                return;
            }
        };

        let Some(service) = state.service() else {
            return;
        };
        let target = editing();
        saving.set(true);
        save_error.set(None);
        spawn(async move {
            let result = match target {
                Some(id) => service.api().update_entry(id, &draft).await,
                None => service.api().create_entry(&draft).await,
            };
            match result {
                Ok(entry) => {
                    tracing::info!("Saved diary entry {}", entry.id);
                    reset_form();
                    invalidate_diary_queries().await;
                }
                Err(e) => {
                    tracing::error!("Failed to save diary entry: {}", e);
                    save_error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let mut start_edit = move |entry: DiaryEntry| {
        let draft = entry.to_draft();
        title.set(draft.title.unwrap_or_default());
        content.set(draft.content);
        mood.set(draft.mood);
        editing.set(Some(entry.id));
        editing_date.set(entry.entry_date);
        save_error.set(None);
    };

    let mut delete_entry = move |id: EntryId| {
        let Some(service) = state.service() else {
            return;
        };
        delete_error.set(None);
        spawn(async move {
            match service.api().delete_entry(id).await {
                Ok(()) => {
                    tracing::info!("Deleted diary entry {}", id);
                    if editing() == Some(id) {
                        reset_form();
                    }
                    invalidate_diary_queries().await;
                }
                Err(e) => {
                    tracing::error!("Failed to delete diary entry {}: {}", id, e);
                    delete_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let current_range = range();
    let start_value = current_range.start.to_string();
    let end_value = current_range.end.to_string();
    let selected_mood = mood();
    let is_editing = editing().is_some();

    rsx! {
        section {
            class: "diary-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 16px;
                background: {colors.bg_secondary};
                border: 1px solid {colors.border};
                border-radius: 16px;
                min-height: 0;
            ",

            div {
                style: "display: flex; align-items: center; gap: 8px;",
                div { style: "font-weight: 700; flex: 1;", "📔 Diary" }
                input {
                    r#type: "date",
                    value: "{start_value}",
                    oninput: move |evt| {
                        if let Some(start) = parse_date_input(&evt.value()) {
                            let end = range.read().end;
                            range.set(DiaryRange::new(start, end));
                        }
                    },
                }
                span { style: "color: {colors.text_muted};", "to" }
                input {
                    r#type: "date",
                    value: "{end_value}",
                    oninput: move |evt| {
                        if let Some(end) = parse_date_input(&evt.value()) {
                            let start = range.read().start;
                            range.set(DiaryRange::new(start, end));
                        }
                    },
                }
            }

            div {
                class: "diary-entries",
                style: "flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 8px;",

                {match Loadable::of(&entries) {
                    Loadable::Loading => rsx! {
                        div { style: "color: {colors.text_muted};", "Loading entries..." }
                    },
                    Loadable::Failed(error) => rsx! {
                        ErrorBanner { message: format!("Could not load diary: {error}") }
                    },
                    Loadable::Ready(list) if list.is_empty() => rsx! {
                        div {
                            style: "padding: 12px; text-align: center; color: {colors.text_muted};",
                            "No entries for these dates"
                        }
                    },
                    Loadable::Ready(list) => rsx! {
                        for entry in list {
                            {
                                let id = entry.id;
                                let entry_title = entry.display_title().to_string();
                                let entry_content = entry.display_content().to_string();
                                let entry_date = entry
                                    .entry_date
                                    .map(|date| date.to_string())
                                    .unwrap_or_default();
                                let entry_mood = entry.mood.clone();

                                rsx! {
                                    div {
                                        key: "{id}",
                                        class: "diary-entry",
                                        style: "
                                            padding: 10px 12px;
                                            border: 1px solid {colors.border_light};
                                            border-radius: 10px;
                                            background: {colors.bg_primary};
                                        ",
                                        div {
                                            style: "display: flex; align-items: center; gap: 8px;",
                                            MoodBadge { mood: entry_mood }
                                            div { style: "font-weight: 600; flex: 1;", "{entry_title}" }
                                            span { style: "font-size: 12px; color: {colors.text_muted};", "{entry_date}" }
                                        }
                                        div {
                                            style: "margin: 6px 0; white-space: pre-wrap; color: {colors.text_secondary};",
                                            "{entry_content}"
                                        }
                                        div {
                                            style: "display: flex; gap: 6px; justify-content: flex-end;",
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: move |_| start_edit(entry.clone()),
                                                "Edit"
                                            }
                                            Button {
                                                variant: ButtonVariant::Destructive,
                                                onclick: move |_| delete_entry(id),
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}

                if let Some(error) = delete_error() {
                    ErrorBanner { message: format!("Failed to delete entry: {error}") }
                }
            }

            div {
                class: "diary-form",
                style: "display: flex; flex-direction: column; gap: 8px; border-top: 1px solid {colors.border_light}; padding-top: 12px;",

                input {
                    r#type: "text",
                    placeholder: "Title (optional)",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                textarea {
                    style: "min-height: 64px; resize: vertical; font-family: inherit;",
                    placeholder: "How was your day?",
                    value: "{content}",
                    oninput: move |evt| content.set(evt.value()),
                }

                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    for (emoji, label) in QUICK_MOODS {
                        {
                            let is_selected = selected_mood.as_deref() == Some(label);
                            let border = if is_selected { colors.accent } else { colors.border };

                            rsx! {
                                button {
                                    key: "{label}",
                                    title: "{label}",
                                    style: "
                                        font-size: 18px;
                                        padding: 2px 8px;
                                        border-radius: 999px;
                                        border: 2px solid {border};
                                        background: {colors.bg_primary};
                                        cursor: pointer;
                                    ",
                                    onclick: move |_| {
                                        if is_selected {
                                            mood.set(None);
                                        } else {
                                            mood.set(Some(label.to_string()));
                                        }
                                    },
                                    "{emoji}"
                                }
                            }
                        }
                    }

                    div { style: "flex: 1;" }

                    if is_editing {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| reset_form(),
                            "Cancel"
                        }
                    }
                    Button {
                        disabled: saving(),
                        onclick: save,
                        if is_editing { "Update entry" } else { "Save entry" }
                    }
                }

                if let Some(error) = save_error() {
                    ErrorBanner { message: error }
                }
            }
        }
    }
}
