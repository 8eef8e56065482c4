//! Application services
//!
//! Builds the API client and auth service shared by every view.

mod session_store;

use std::sync::atomic::Ordering;

use moodicat_core::{ApiClient, AuthService, ClientConfig, Result};

pub use session_store::KeyringSessionStore;

use crate::SESSION_EXPIRED;

pub type DesktopApi = ApiClient<KeyringSessionStore>;
pub type DesktopAuth = AuthService<KeyringSessionStore>;

/// Build the auth service from the environment configuration.
///
/// A 401 from any endpoint raises [`SESSION_EXPIRED`], which the app loop
/// turns into a sign-out.
pub fn connect() -> Result<DesktopAuth> {
    let config = ClientConfig::from_env()?;
    tracing::info!("Using API at {}", config.api_base_url);

    let api = ApiClient::new(&config, KeyringSessionStore::default())?
        .with_unauthorized_hook(|| SESSION_EXPIRED.store(true, Ordering::SeqCst));
    Ok(AuthService::new(api))
}
