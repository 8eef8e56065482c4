//! Main application component

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dioxus::prelude::*;

use moodicat_core::route::{resolve_route, AuthStatus, Route, RouteView};

use crate::components::ErrorBanner;
use crate::queries::{
    invalidate_all_queries, invalidate_tasks_query, invalidate_today_mood_query, AccountWatch,
    RefreshSchedule,
};
use crate::services::{self, DesktopAuth};
use crate::state::AppState;
use crate::theme::palette;
use crate::views::{Home, Login, Reminders, Reports};
use crate::SESSION_EXPIRED;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Root application component
#[component]
pub fn App() -> Element {
    let mut auth_service: Signal<Option<Arc<DesktopAuth>>> = use_signal(|| None);
    let mut auth = use_signal(|| AuthStatus::Checking);
    let mut route = use_signal(Route::default);
    let mut startup_error = use_signal(|| None::<String>);
    let mut initialized = use_signal(|| false);

    // Connect and verify any stored session (only once)
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true); // Mark immediately to prevent double init

        spawn(async move {
            let service = match services::connect() {
                Ok(service) => Arc::new(service),
                Err(e) => {
                    tracing::error!("Failed to initialize API client: {}", e);
                    startup_error.set(Some(e.to_string()));
                    auth.set(AuthStatus::Anonymous);
                    return;
                }
            };
            auth_service.set(Some(service.clone()));

            match service.restore_session().await {
                Ok(Some(user)) => {
                    tracing::info!("Restored session for {}", user.username);
                    auth.set(AuthStatus::Authenticated(user));
                }
                Ok(None) => auth.set(AuthStatus::Anonymous),
                Err(e) => {
                    tracing::error!("Failed to read stored session: {}", e);
                    auth.set(AuthStatus::Anonymous);
                }
            }
        });
    });

    // Poll for expired sessions, account switches and periodic refetches.
    // Runs in the root scope so it outlives the views that change the session.
    use_future(move || async move {
        let mut schedule = RefreshSchedule::new(Instant::now());
        let mut accounts = AccountWatch::default();
        loop {
            if SESSION_EXPIRED.swap(false, Ordering::SeqCst) {
                tracing::info!("Session expired - returning to sign in");
                auth.set(AuthStatus::Anonymous);
                route.set(Route::Login);
            }

            let account = auth.read().user().map(|user| user.id);
            if accounts.changed(account) {
                tracing::info!("Signed-in account changed - refreshing all queries");
                invalidate_all_queries().await;
            }

            let due = schedule.poll(Instant::now());
            if auth.read().is_authenticated() {
                if due.tasks {
                    invalidate_tasks_query().await;
                }
                if due.today_mood {
                    invalidate_today_mood_query().await;
                }
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    });

    use_context_provider(|| AppState {
        auth_service,
        auth,
        route,
        startup_error,
    });

    let colors = palette();
    let view = resolve_route(route(), &auth());

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: 'Nunito', system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            if let Some(message) = startup_error() {
                ErrorBanner { message }
            }

            {match view {
                RouteView::Loading => rsx! { Splash {} },
                RouteView::Show(Route::Login) => rsx! { Login {} },
                RouteView::Show(Route::Home) => rsx! { Home {} },
                RouteView::Show(Route::Reports) => rsx! { Reports {} },
                RouteView::Show(Route::Reminders) => rsx! { Reminders {} },
            }}
        }
    }
}

/// Shown while a stored session is being verified
#[component]
fn Splash() -> Element {
    let colors = palette();

    rsx! {
        div {
            style: "
                height: 100vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                color: {colors.text_secondary};
            ",
            div { style: "font-size: 48px;", "🐱" }
            div { "Loading..." }
        }
    }
}
