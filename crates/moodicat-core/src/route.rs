//! Authentication gate for the top-level views.

use crate::models::UserInfo;

/// Top-level screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    Login,
    #[default]
    Home,
    Reports,
    Reminders,
}

impl Route {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Home => "Home",
            Self::Reports => "Reports",
            Self::Reminders => "Reminders",
        }
    }
}

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// A stored token is being verified.
    #[default]
    Checking,
    Anonymous,
    Authenticated(UserInfo),
}

impl AuthStatus {
    pub const fn user(&self) -> Option<&UserInfo> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Checking | Self::Anonymous => None,
        }
    }

    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// What to render for a requested route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteView {
    Loading,
    Show(Route),
}

pub const fn resolve_route(requested: Route, status: &AuthStatus) -> RouteView {
    match status {
        AuthStatus::Checking => RouteView::Loading,
        AuthStatus::Anonymous => RouteView::Show(Route::Login),
        AuthStatus::Authenticated(_) => match requested {
            Route::Login => RouteView::Show(Route::Home),
            other => RouteView::Show(other),
        },
    }
}
