//! App header with navigation and sign out

use dioxus::prelude::*;

use moodicat_core::route::Route;

use super::button::{Button, ButtonVariant};
use crate::queries::{use_current_user_query, Loadable};
use crate::state::AppState;
use crate::theme::palette;

const NAV_ROUTES: [Route; 3] = [Route::Home, Route::Reports, Route::Reminders];

#[component]
pub fn Header(active: Route) -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let current_user = use_current_user_query(state.api());

    // Prefer the freshly fetched account over the one stored at sign in
    let username = Loadable::of(&current_user)
        .ready()
        .map(|user| user.username.clone())
        .or_else(|| state.user().map(|user| user.username))
        .unwrap_or_default();

    // `App` refreshes the caches once the account is gone
    let logout = move |_| {
        if let Some(service) = state.service() {
            if let Err(e) = service.logout() {
                tracing::error!("Failed to clear stored session: {}", e);
            }
        }
        state.signed_out();
    };

    rsx! {
        header {
            class: "app-header",
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                padding: 12px 24px;
                background: {colors.bg_secondary};
                border-bottom: 1px solid {colors.border};
            ",

            div {
                style: "font-size: 20px; font-weight: 700; color: {colors.accent};",
                "🐱 Moodicat"
            }

            if !username.is_empty() {
                div {
                    style: "color: {colors.text_secondary};",
                    "Hi, {username}"
                }
            }

            // Spacer
            div { style: "flex: 1;" }

            for route in NAV_ROUTES {
                {
                    let title = route.title();
                    let variant = if route == active {
                        ButtonVariant::Primary
                    } else {
                        ButtonVariant::Ghost
                    };

                    rsx! {
                        Button {
                            key: "{title}",
                            variant,
                            onclick: move |_| state.navigate(route),
                            "{title}"
                        }
                    }
                }
            }

            Button {
                variant: ButtonVariant::Secondary,
                onclick: logout,
                "Logout"
            }
        }
    }
}
