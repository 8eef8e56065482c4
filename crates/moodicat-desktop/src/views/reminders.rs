//! Reminders view - schedule reminders for tasks

use std::collections::HashMap;

use dioxus::prelude::*;

use moodicat_core::models::{ReminderDraft, ReminderId, TaskId};
use moodicat_core::route::Route;

use crate::components::{Button, ButtonVariant, ErrorBanner, Header};
use crate::queries::{
    invalidate_reminders_query, use_reminders_query, use_tasks_query, Loadable,
};
use crate::state::AppState;
use crate::theme::palette;

#[component]
pub fn Reminders() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();
    let tasks = use_tasks_query(state.api(), None);
    let reminders = use_reminders_query(state.api());

    let mut selected_task = use_signal(|| None::<TaskId>);
    let mut time_input = use_signal(String::new);
    let mut creating = use_signal(|| false);
    let mut create_error = use_signal(|| None::<String>);
    let mut delete_error = use_signal(|| None::<String>);

    let create = move |_| {
        if creating() {
            return;
        }
        let draft = match ReminderDraft::parse(selected_task(), &time_input.read()) {
            Ok(draft) => draft,
            Err(e) => {
                create_error.set(Some(e.to_string()));
                return;
            }
        };
        let Some(service) = state.service() else {
            return;
        };
        creating.set(true);
        create_error.set(None);
        spawn(async move {
            match service.api().create_reminder(&draft).await {
                Ok(reminder) => {
                    tracing::info!("Created reminder {}", reminder.id);
                    selected_task.set(None);
                    time_input.set(String::new());
                    invalidate_reminders_query().await;
                }
                Err(e) => {
                    tracing::error!("Failed to create reminder: {}", e);
                    create_error.set(Some(e.to_string()));
                }
            }
            creating.set(false);
        });
    };

    let mut delete_reminder = move |id: ReminderId| {
        let Some(service) = state.service() else {
            return;
        };
        delete_error.set(None);
        spawn(async move {
            match service.api().delete_reminder(id).await {
                Ok(()) => {
                    tracing::info!("Deleted reminder {}", id);
                    invalidate_reminders_query().await;
                }
                Err(e) => {
                    tracing::error!("Failed to delete reminder {}: {}", id, e);
                    delete_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let task_list = Loadable::of(&tasks).ready().cloned().unwrap_or_default();
    let task_titles: HashMap<TaskId, String> = task_list
        .iter()
        .map(|task| (task.id, task.title.clone()))
        .collect();
    let selected_value = selected_task().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "reminders-view",
            style: "display: flex; flex-direction: column; height: 100vh;",

            Header { active: Route::Reminders }

            div {
                style: "flex: 1; overflow-y: auto; padding: 16px 24px; display: flex; flex-direction: column; gap: 16px;",

                h2 { style: "margin: 0;", "⏰ Reminders" }

                div {
                    class: "reminder-form",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        padding: 16px;
                        background: {colors.bg_secondary};
                        border: 1px solid {colors.border};
                        border-radius: 16px;
                    ",

                    select {
                        style: "flex: 1; padding: 8px;",
                        value: "{selected_value}",
                        onchange: move |evt| selected_task.set(evt.value().parse().ok()),
                        option { value: "", "Select a task..." }
                        for task in task_list.iter().cloned() {
                            option {
                                key: "{task.id}",
                                value: "{task.id}",
                                selected: selected_task() == Some(task.id),
                                "{task.title}"
                            }
                        }
                    }
                    input {
                        r#type: "datetime-local",
                        value: "{time_input}",
                        oninput: move |evt| time_input.set(evt.value()),
                    }
                    Button {
                        disabled: creating(),
                        onclick: create,
                        if creating() { "Creating..." } else { "Add reminder" }
                    }
                }

                if let Some(message) = create_error() {
                    ErrorBanner { message }
                }
                if let Some(message) = delete_error() {
                    ErrorBanner { message }
                }

                {match Loadable::of(&reminders) {
                    Loadable::Loading => rsx! {
                        div { style: "color: {colors.text_muted};", "Loading reminders..." }
                    },
                    Loadable::Failed(message) => rsx! {
                        ErrorBanner { message: format!("Could not load reminders: {message}") }
                    },
                    Loadable::Ready(list) if list.is_empty() => rsx! {
                        div {
                            style: "padding: 12px; text-align: center; color: {colors.text_muted};",
                            "No reminders scheduled"
                        }
                    },
                    Loadable::Ready(list) => rsx! {
                        for reminder in list {
                            {
                                let id = reminder.id;
                                let task_title = task_titles
                                    .get(&reminder.task_id)
                                    .cloned()
                                    .unwrap_or_else(|| format!("Task #{}", reminder.task_id));
                                let when = reminder.reminder_time.format("%Y-%m-%d %H:%M").to_string();
                                let (badge, badge_color) = if reminder.is_sent {
                                    ("Sent", colors.success)
                                } else {
                                    ("Pending", colors.warning)
                                };

                                rsx! {
                                    div {
                                        key: "{id}",
                                        class: "reminder-item",
                                        style: "
                                            display: flex;
                                            align-items: center;
                                            gap: 12px;
                                            padding: 10px 14px;
                                            background: {colors.bg_secondary};
                                            border: 1px solid {colors.border_light};
                                            border-radius: 12px;
                                        ",
                                        div {
                                            style: "flex: 1;",
                                            div { style: "font-weight: 600;", "{task_title}" }
                                            div { style: "font-size: 12px; color: {colors.text_muted};", "{when}" }
                                        }
                                        span {
                                            style: "
                                                font-size: 11px;
                                                padding: 2px 10px;
                                                border-radius: 999px;
                                                color: {colors.accent_text};
                                                background: {badge_color};
                                            ",
                                            "{badge}"
                                        }
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: move |_| delete_reminder(id),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}
