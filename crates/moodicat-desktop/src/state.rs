//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use moodicat_core::models::UserInfo;
use moodicat_core::route::{AuthStatus, Route};

use crate::queries::ApiHandle;
use crate::services::DesktopAuth;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Auth service and API client (wrapped in Arc for sharing)
    pub auth_service: Signal<Option<Arc<DesktopAuth>>>,
    /// Where the session currently stands
    pub auth: Signal<AuthStatus>,
    /// Screen the user asked for; the auth gate may override it
    pub route: Signal<Route>,
    /// Error raised while building the API client
    pub startup_error: Signal<Option<String>>,
}

impl AppState {
    /// Handle for query capabilities, scoped to the signed-in account
    #[must_use]
    pub fn api(&self) -> ApiHandle {
        let account = self.auth.read().user().map(|user| user.id);
        ApiHandle::new(self.auth_service.read().clone(), account)
    }

    #[must_use]
    pub fn service(&self) -> Option<Arc<DesktopAuth>> {
        self.auth_service.read().clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<UserInfo> {
        self.auth.read().user().cloned()
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigating to {:?}", route);
        self.route.set(route);
    }

    pub fn signed_in(&mut self, user: UserInfo) {
        tracing::info!("Session active for {}", user.username);
        self.auth.set(AuthStatus::Authenticated(user));
        self.route.set(Route::Home);
    }

    pub fn signed_out(&mut self) {
        self.auth.set(AuthStatus::Anonymous);
        self.route.set(Route::Login);
    }
}
