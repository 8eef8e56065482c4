//! Reports view - daily summary and mood trend

use dioxus::prelude::*;

use moodicat_core::models::{DailySummary, TrendPeriod};
use moodicat_core::mood::{mood_emoji, mood_tone};
use moodicat_core::reports::MoodTrend;
use moodicat_core::route::Route;
use moodicat_core::util::{capitalize_first, parse_date_input, today};

use crate::components::{Button, ButtonVariant, ErrorBanner, Header, MoodBadge};
use crate::queries::{use_daily_summary_query, use_mood_trend_query, Loadable};
use crate::state::AppState;
use crate::theme::{palette, tone_color};

const TREND_PERIODS: [TrendPeriod; 2] = [TrendPeriod::Last7Days, TrendPeriod::Last30Days];

#[component]
pub fn Reports() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();
    let mut date = use_signal(today);
    let mut period = use_signal(TrendPeriod::default);
    let summary = use_daily_summary_query(state.api(), date());
    let trend = use_mood_trend_query(state.api(), period());

    let date_value = date().to_string();
    let selected_period = period();

    rsx! {
        div {
            class: "reports-view",
            style: "display: flex; flex-direction: column; height: 100vh;",

            Header { active: Route::Reports }

            div {
                style: "flex: 1; overflow-y: auto; padding: 16px 24px; display: flex; flex-direction: column; gap: 16px;",

                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    h2 { style: "margin: 0; flex: 1;", "📊 Daily report" }
                    input {
                        r#type: "date",
                        value: "{date_value}",
                        oninput: move |evt| {
                            if let Some(picked) = parse_date_input(&evt.value()) {
                                date.set(picked);
                            }
                        },
                    }
                }

                {match Loadable::of(&summary) {
                    Loadable::Loading => rsx! {
                        div { style: "color: {colors.text_muted};", "Generating report..." }
                    },
                    Loadable::Failed(message) => rsx! {
                        ErrorBanner { message: format!("Could not load report: {message}") }
                    },
                    Loadable::Ready(summary) => rsx! { SummaryCard { summary } },
                }}

                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    h2 { style: "margin: 0; flex: 1;", "📈 Mood trend" }
                    for option in TREND_PERIODS {
                        {
                            let label = option.label();
                            let variant = if option == selected_period {
                                ButtonVariant::Primary
                            } else {
                                ButtonVariant::Secondary
                            };

                            rsx! {
                                Button {
                                    key: "{label}",
                                    variant,
                                    onclick: move |_| period.set(option),
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                {match Loadable::of(&trend) {
                    Loadable::Loading => rsx! {
                        div { style: "color: {colors.text_muted};", "Loading mood trend..." }
                    },
                    Loadable::Failed(message) => rsx! {
                        ErrorBanner { message: format!("Could not load mood trend: {message}") }
                    },
                    Loadable::Ready(trend) => rsx! { TrendStrip { trend } },
                }}
            }
        }
    }
}

#[component]
fn SummaryCard(summary: DailySummary) -> Element {
    let colors = palette();
    let suggestion = summary.suggestion_text().to_string();
    let analysis = summary.mood_analysis_text().map(ToString::to_string);
    let card_style = format!(
        "padding: 16px; background: {}; border: 1px solid {}; border-radius: 16px;",
        colors.bg_secondary, colors.border
    );

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px;",

            div {
                style: "{card_style}",
                div { style: "color: {colors.text_secondary};", "Tasks completed" }
                div { style: "font-size: 32px; font-weight: 700; color: {colors.success};", "{summary.tasks_completed}" }
            }
            div {
                style: "{card_style}",
                div { style: "color: {colors.text_secondary};", "Tasks pending" }
                div { style: "font-size: 32px; font-weight: 700; color: {colors.warning};", "{summary.tasks_pending}" }
            }
        }

        div {
            style: "{card_style}",
            div { style: "font-weight: 700; margin-bottom: 6px;", "💡 AI suggestion" }
            div { style: "white-space: pre-wrap; color: {colors.text_secondary};", "{suggestion}" }
        }

        if let Some(analysis) = analysis {
            div {
                style: "{card_style}",
                div { style: "font-weight: 700; margin-bottom: 6px;", "🧠 Mood analysis" }
                div { style: "white-space: pre-wrap; color: {colors.text_secondary};", "{analysis}" }
            }
        }

        div {
            style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px;",

            div {
                style: "{card_style}",
                div { style: "font-weight: 700; margin-bottom: 8px;", "Diary entries" }
                if summary.entries.is_empty() {
                    div { style: "color: {colors.text_muted};", "No entries on this day" }
                }
                for entry in summary.entries.clone() {
                    {
                        let tone = tone_color(mood_tone(entry.mood.as_deref()));
                        let title = entry.display_title().to_string();
                        let content = entry.display_content().to_string();

                        rsx! {
                            div {
                                key: "{entry.id}",
                                style: "padding: 8px 0 8px 10px; border-left: 3px solid {tone}; margin-bottom: 6px;",
                                div {
                                    style: "display: flex; gap: 8px; align-items: center;",
                                    MoodBadge { mood: entry.mood.clone() }
                                    span { style: "font-weight: 600;", "{title}" }
                                }
                                div { style: "color: {colors.text_secondary}; margin-top: 4px;", "{content}" }
                            }
                        }
                    }
                }
            }

            div {
                style: "{card_style}",
                div { style: "font-weight: 700; margin-bottom: 8px;", "Tasks" }
                if summary.tasks.is_empty() {
                    div { style: "color: {colors.text_muted};", "No tasks on this day" }
                }
                for task in summary.tasks.clone() {
                    {
                        let icon = if task.status.is_completed() { "✅" } else { "⬜" };
                        let status = capitalize_first(&task.status.as_str().replace('_', " "));

                        rsx! {
                            div {
                                key: "{task.id}",
                                style: "display: flex; gap: 8px; padding: 4px 0;",
                                span { "{icon}" }
                                span { style: "flex: 1;", "{task.title}" }
                                span { style: "font-size: 12px; color: {colors.text_muted};", "{status}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TrendStrip(trend: MoodTrend) -> Element {
    let colors = palette();
    if trend.is_empty() {
        return rsx! {
            div {
                style: "color: {colors.text_muted};",
                "No mood data yet. Write a few diary entries to see your trend."
            }
        };
    }

    let dominant = trend
        .dominant_mood()
        .map(|mood| (mood_emoji(Some(mood.as_str())), mood));

    rsx! {
        if let Some((emoji, mood)) = dominant {
            div {
                style: "color: {colors.text_secondary};",
                "Most frequent mood: {emoji} {mood}"
            }
        }

        div {
            class: "mood-trend",
            style: "display: flex; gap: 8px; overflow-x: auto; padding-bottom: 8px;",

            for point in trend.points {
                {
                    let emoji = mood_emoji(Some(point.mood.as_str()));
                    let tone = tone_color(mood_tone(Some(point.mood.as_str())));
                    let day = point.date.format("%m/%d").to_string();

                    rsx! {
                        div {
                            key: "{point.date}",
                            title: "{point.mood}",
                            style: "
                                min-width: 56px;
                                display: flex;
                                flex-direction: column;
                                align-items: center;
                                gap: 4px;
                                padding: 8px 4px;
                                border-radius: 12px;
                                background: {colors.bg_secondary};
                                border-bottom: 4px solid {tone};
                            ",
                            span { style: "font-size: 22px;", "{emoji}" }
                            span { style: "font-size: 11px; color: {colors.text_muted};", "{day}" }
                        }
                    }
                }
            }
        }
    }
}
