//! Desktop session persistence using the OS keyring.

use keyring::Entry;
use moodicat_core::auth::{AuthSession, SessionPersistence};
use moodicat_core::{Error, Result};

const KEYRING_SERVICE_NAME: &str = "moodicat";
const KEYRING_SESSION_USERNAME: &str = "api_session";

/// Desktop session store backed by the OS keyring (`keyring` crate).
#[derive(Debug, Clone)]
pub struct KeyringSessionStore {
    service_name: String,
    username: String,
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_SESSION_USERNAME.to_string(),
        }
    }
}

impl KeyringSessionStore {
    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }
}

impl SessionPersistence for KeyringSessionStore {
    fn load_session(&self) -> Result<Option<AuthSession>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(session) => Ok(Some(session)),
                Err(error) => {
                    // Unreadable sessions are dropped so the user can sign in again.
                    tracing::warn!("Discarding unreadable stored session: {}", error);
                    self.clear_session()?;
                    Ok(None)
                }
            },
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }

    fn save_session(&self, session: &AuthSession) -> Result<()> {
        let serialized = serde_json::to_string(session)?;
        self.entry()?
            .set_password(&serialized)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }

    fn clear_session(&self) -> Result<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }
}
