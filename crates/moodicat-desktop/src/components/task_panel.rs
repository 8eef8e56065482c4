//! Task panel: quick add, completion toggle and progress

use dioxus::prelude::*;

use moodicat_core::models::{Task, TaskDraft, TaskId, TaskProgress};
use moodicat_core::util::{capitalize_first, today};

use super::button::{Button, ButtonVariant};
use super::ErrorBanner;
use crate::queries::{invalidate_tasks_query, use_tasks_query, Loadable};
use crate::state::AppState;
use crate::theme::{palette, priority_color};

#[component]
pub fn TaskPanel() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();
    let tasks = use_tasks_query(state.api(), None);
    let mut new_title = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let mut add_task = move || {
        let draft = match TaskDraft::quick(&new_title.read(), today()) {
            Ok(draft) => draft,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let Some(service) = state.service() else {
            return;
        };
        new_title.set(String::new());
        error.set(None);
        spawn(async move {
            match service.api().create_task(&draft).await {
                Ok(task) => {
                    tracing::info!("Created task {}", task.id);
                    invalidate_tasks_query().await;
                }
                Err(e) => {
                    tracing::error!("Failed to create task: {}", e);
                    error.set(Some(format!("Failed to add task: {e}")));
                }
            }
        });
    };

    let mut toggle_task = move |task: Task| {
        let Some(service) = state.service() else {
            return;
        };
        let updated = task.toggled();
        spawn(async move {
            match service.api().update_task(&updated).await {
                Ok(_) => invalidate_tasks_query().await,
                Err(e) => {
                    tracing::error!("Failed to update task {}: {}", updated.id, e);
                    error.set(Some(format!("Failed to update task: {e}")));
                }
            }
        });
    };

    let mut delete_task = move |id: TaskId| {
        let Some(service) = state.service() else {
            return;
        };
        spawn(async move {
            match service.api().delete_task(id).await {
                Ok(()) => {
                    tracing::info!("Deleted task {}", id);
                    invalidate_tasks_query().await;
                }
                Err(e) => {
                    tracing::error!("Failed to delete task {}: {}", id, e);
                    error.set(Some(format!("Failed to delete task: {e}")));
                }
            }
        });
    };

    let loaded = Loadable::of(&tasks);
    let progress = loaded
        .ready()
        .map(|list| TaskProgress::of(list))
        .unwrap_or_default();
    let percent = progress.percent();

    rsx! {
        section {
            class: "task-panel",
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
                div { style: "font-weight: 700; flex: 1;", "✅ Tasks" }
                span {
                    style: "font-size: 12px; color: {colors.text_secondary};",
                    "{progress.completed}/{progress.total} completed"
                }
            }

            div {
                class: "task-progress",
                style: "height: 8px; border-radius: 4px; background: {colors.bg_tertiary}; overflow: hidden;",
                div {
                    style: "height: 100%; width: {percent}%; background: {colors.accent}; transition: width 0.3s;",
                }
            }

            div {
                style: "display: flex; gap: 8px;",
                input {
                    r#type: "text",
                    style: "flex: 1;",
                    placeholder: "Add a task for today...",
                    value: "{new_title}",
                    oninput: move |evt| new_title.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            add_task();
                        }
                    },
                }
                Button {
                    disabled: new_title.read().trim().is_empty(),
                    onclick: move |_| add_task(),
                    "Add"
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            div {
                class: "task-list",
                style: "flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 6px;",

                {match loaded {
                    Loadable::Loading => rsx! {
                        div { style: "color: {colors.text_muted};", "Loading tasks..." }
                    },
                    Loadable::Failed(message) => rsx! {
                        ErrorBanner { message: format!("Could not load tasks: {message}") }
                    },
                    Loadable::Ready(list) if list.is_empty() => rsx! {
                        div {
                            style: "padding: 12px; text-align: center; color: {colors.text_muted};",
                            "No tasks yet"
                        }
                    },
                    Loadable::Ready(list) => rsx! {
                        for task in list {
                            {
                                let id = task.id;
                                let done = task.status.is_completed();
                                let priority = task.effective_priority();
                                let badge = priority_color(priority);
                                let priority_label = capitalize_first(priority.as_str());
                                let title_style = if done {
                                    format!("text-decoration: line-through; color: {};", colors.text_muted)
                                } else {
                                    String::new()
                                };
                                let due = task.due_date.map(|date| date.to_string()).unwrap_or_default();
                                let title = task.title.clone();

                                rsx! {
                                    div {
                                        key: "{id}",
                                        class: "task-item",
                                        style: "
                                            display: flex;
                                            align-items: center;
                                            gap: 8px;
                                            padding: 8px 10px;
                                            border: 1px solid {colors.border_light};
                                            border-radius: 10px;
                                            background: {colors.bg_primary};
                                        ",
                                        input {
                                            r#type: "checkbox",
                                            checked: done,
                                            onchange: move |_| toggle_task(task.clone()),
                                        }
                                        div { style: "flex: 1; {title_style}", "{title}" }
                                        if !due.is_empty() {
                                            span { style: "font-size: 11px; color: {colors.text_muted};", "{due}" }
                                        }
                                        span {
                                            style: "
                                                font-size: 11px;
                                                padding: 1px 8px;
                                                border-radius: 999px;
                                                color: {colors.accent_text};
                                                background: {badge};
                                            ",
                                            "{priority_label}"
                                        }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| delete_task(id),
                                            "✕"
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
