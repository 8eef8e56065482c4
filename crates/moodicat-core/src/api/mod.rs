//! REST client for the Moodicat backend.
//!
//! Every authenticated request carries the stored bearer token. A 401 from
//! any authenticated endpoint clears the stored session, fires the
//! unauthorized hook and surfaces as [`Error::Unauthorized`].

mod auth;
mod chat;
mod diary;
mod reminders;
mod reports;
mod tasks;

use std::fmt;
use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::SessionPersistence;
use crate::config::ClientConfig;
use crate::error::{Error, Result};

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient<S: SessionPersistence> {
    base_url: String,
    client: Client,
    store: S,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl<S: SessionPersistence> fmt::Debug for ApiClient<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl<S: SessionPersistence> ApiClient<S> {
    pub fn new(config: &ClientConfig, store: S) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
            store,
            on_unauthorized: None,
        })
    }

    /// Register a callback invoked whenever the server rejects the token.
    #[must_use]
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Whether a session token is currently stored.
    pub fn has_session(&self) -> bool {
        matches!(self.store.load_session(), Ok(Some(_)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Base URL extended with percent-encoded path segments.
    fn segment_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("Invalid API URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| Error::Config(format!("API URL cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(match self.store.load_session()? {
            Some(session) => request.bearer_auth(session.token),
            None => request,
        })
    }

    /// Send an authenticated request and check the response status.
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorized(request)?.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response)
    }

    /// Send a request without a token; a 401 here is an ordinary API error.
    async fn execute_public(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response)
    }

    fn handle_unauthorized(&self) {
        tracing::warn!("API rejected the session token; clearing stored session");
        if let Err(error) = self.store.clear_session() {
            tracing::error!("Failed to clear stored session: {}", error);
        }
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        tracing::debug!("GET {}", path);
        let request = self.client.get(self.url(path)).query(query);
        Ok(self.execute(request).await?.json::<T>().await?)
    }

    async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        tracing::debug!("GET {}", path);
        let request = self.client.get(self.url(path)).query(query);
        Ok(self.execute(request).await?.text().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {}", path);
        let request = self.client.post(self.url(path)).json(body);
        Ok(self.execute(request).await?.json::<T>().await?)
    }

    async fn post_text<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String> {
        tracing::debug!("POST {}", path);
        let request = self.client.post(self.url(path)).json(body);
        Ok(self.execute(request).await?.text().await?)
    }

    async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("PUT {}", path);
        let request = self.client.put(self.url(path)).json(body);
        Ok(self.execute(request).await?.json::<T>().await?)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        tracing::debug!("DELETE {}", path);
        self.execute(self.client.delete(self.url(path))).await?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: Option<String>,
    error: Option<String>,
}

async fn error_from_response(response: Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Error::Api {
        status: status.as_u16(),
        message: parse_api_error(&body),
    }
}

/// Extract the server's message from an error body.
///
/// Prefers the JSON `message`/`error` fields, then the raw text body. An
/// empty result means the server sent nothing usable.
pub(crate) fn parse_api_error(body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(message) = payload
            .message
            .filter(|message| !message.trim().is_empty())
            .or(payload.error)
        {
            return message.trim().to_string();
        }
    }
    if let Ok(serde_json::Value::String(message)) = serde_json::from_str(body) {
        return message.trim().to_string();
    }
    body.trim().to_string()
}
