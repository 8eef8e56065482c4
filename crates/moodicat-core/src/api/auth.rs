//! `/auth` endpoints

use serde_json::json;

use super::ApiClient;
use crate::auth::SessionPersistence;
use crate::error::Result;
use crate::models::{LoginResponse, User};

impl<S: SessionPersistence> ApiClient<S> {
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User> {
        tracing::debug!("POST auth/register");
        let payload = json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let request = self.client.post(self.url("auth/register")).json(&payload);
        Ok(self.execute_public(request).await?.json::<User>().await?)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        tracing::debug!("POST auth/login");
        let payload = json!({
            "username": username,
            "password": password,
        });
        let request = self.client.post(self.url("auth/login")).json(&payload);
        Ok(self
            .execute_public(request)
            .await?
            .json::<LoginResponse>()
            .await?)
    }

    pub async fn current_user(&self) -> Result<User> {
        self.get_json("auth/me", &[]).await
    }
}
