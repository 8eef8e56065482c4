//! Session handling and the login/register flows.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::error::{Error, Result};
use crate::models::{User, UserInfo};

/// Token plus the user it belongs to, as persisted between launches.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserInfo,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthSession")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

/// Storage backend for the current session.
pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load_session(&self) -> Result<Option<AuthSession>>;
    fn save_session(&self, session: &AuthSession) -> Result<()>;
    fn clear_session(&self) -> Result<()>;
}

/// In-process session store, used by tests and headless tools.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Arc<Mutex<Option<AuthSession>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(session))),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<AuthSession>>> {
        self.inner
            .lock()
            .map_err(|_| Error::SecureStorage("session lock poisoned".to_string()))
    }
}

impl SessionPersistence for MemorySessionStore {
    fn load_session(&self) -> Result<Option<AuthSession>> {
        Ok(self.lock()?.clone())
    }

    fn save_session(&self, session: &AuthSession) -> Result<()> {
        *self.lock()? = Some(session.clone());
        Ok(())
    }

    fn clear_session(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}

/// Login, registration and session restore on top of [`ApiClient`].
#[derive(Clone)]
pub struct AuthService<S: SessionPersistence> {
    api: ApiClient<S>,
}

impl<S: SessionPersistence> AuthService<S> {
    pub const fn new(api: ApiClient<S>) -> Self {
        Self { api }
    }

    pub const fn api(&self) -> &ApiClient<S> {
        &self.api
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession> {
        validate_credentials(username, password)?;

        let response = self.api.login(username.trim(), password).await?;
        let session = AuthSession {
            token: response.token,
            user: response.user,
        };
        self.api.store().save_session(&session)?;
        tracing::info!("Signed in as {}", session.user.username);
        Ok(session)
    }

    /// Create an account, then sign in with the same credentials.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthSession> {
        validate_credentials(username, password)?;

        let user = self.api.register(username.trim(), email.trim(), password).await?;
        tracing::info!("Registered account {}", user.username);
        self.login(username, password).await
    }

    pub async fn current_user(&self) -> Result<User> {
        self.api.current_user().await
    }

    /// Validate a persisted session against `/auth/me`.
    ///
    /// Returns `None` when nothing is stored or the server rejected the
    /// token. Transport failures keep the stored user signed in.
    pub async fn restore_session(&self) -> Result<Option<UserInfo>> {
        let Some(stored) = self.api.store().load_session()? else {
            return Ok(None);
        };

        match self.api.current_user().await {
            Ok(user) => {
                let user = UserInfo::from(user);
                if user != stored.user {
                    self.api.store().save_session(&AuthSession {
                        token: stored.token,
                        user: user.clone(),
                    })?;
                }
                Ok(Some(user))
            }
            Err(Error::Unauthorized) => {
                tracing::info!("Stored session was rejected by the server");
                Ok(None)
            }
            Err(error) => {
                tracing::warn!("Could not verify stored session: {}", error);
                Ok(Some(stored.user))
            }
        }
    }

    pub fn logout(&self) -> Result<()> {
        tracing::info!("Signing out");
        self.api.store().clear_session()
    }
}

fn validate_credentials(username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Error::InvalidInput("Username is required".to_string()));
    }
    if password.is_empty() {
        return Err(Error::InvalidInput("Password is required".to_string()));
    }
    Ok(())
}

/// User-facing message for a failed login.
pub fn describe_login_error(error: &Error) -> String {
    match error {
        Error::InvalidInput(message) => message.clone(),
        Error::Unauthorized => "Invalid username or password. Please try again.".to_string(),
        _ => match error.status() {
            Some(401) => "Invalid username or password. Please try again.".to_string(),
            Some(400) => error
                .server_message()
                .unwrap_or("Please check your input and try again.")
                .to_string(),
            _ => error
                .server_message()
                .unwrap_or("Login failed. Please try again.")
                .to_string(),
        },
    }
}

/// User-facing message for a failed registration.
pub fn describe_register_error(error: &Error) -> String {
    match error {
        Error::InvalidInput(message) => message.clone(),
        _ => match error.status() {
            Some(409) => "Username already exists. Please sign in instead.".to_string(),
            Some(400) => error
                .server_message()
                .unwrap_or("Please check your input and try again.")
                .to_string(),
            _ => error
                .server_message()
                .unwrap_or("Registration failed. Please try again.")
                .to_string(),
        },
    }
}
