//! moodicat-core - Core library for Moodicat
//!
//! This crate contains the shared models, the REST client, session handling
//! and the mood heuristics used by the Moodicat interfaces.

pub mod api;
pub mod auth;
pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod mood;
pub mod reports;
pub mod route;
pub mod util;

pub use api::ApiClient;
pub use auth::{AuthService, AuthSession, MemorySessionStore, SessionPersistence};
pub use config::ClientConfig;
pub use error::{Error, Result};
