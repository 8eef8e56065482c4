//! Moodicat Desktop Application
//!
//! Mood diary, tasks and reminders with an AI companion.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod queries;
mod services;
mod state;
mod theme;
mod views;

use std::sync::atomic::AtomicBool;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

/// Set by the API client when the server rejects the session token.
pub static SESSION_EXPIRED: AtomicBool = AtomicBool::new(false);

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "moodicat=debug".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Moodicat...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Moodicat")
            .with_inner_size(LogicalSize::new(1280.0, 820.0))
            .with_min_inner_size(LogicalSize::new(960.0, 640.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
