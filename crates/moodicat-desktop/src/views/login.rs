//! Login view - sign in or create an account

use dioxus::prelude::*;

use moodicat_core::auth::{describe_login_error, describe_register_error};

use crate::components::{Button, ButtonVariant, ErrorBanner};
use crate::state::AppState;
use crate::theme::palette;

#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let mut registering = use_signal(|| false);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let mut submit = move || {
        if busy() {
            return;
        }
        let Some(service) = state.service() else {
            error.set(Some("Not connected to the Moodicat server".to_string()));
            return;
        };
        let is_register = registering();
        let name = username();
        let mail = email();
        let secret = password();

        busy.set(true);
        error.set(None);
        spawn(async move {
            let result = if is_register {
                service
                    .register(&name, &mail, &secret)
                    .await
                    .map_err(|e| describe_register_error(&e))
            } else {
                service
                    .login(&name, &secret)
                    .await
                    .map_err(|e| describe_login_error(&e))
            };

            busy.set(false);
            match result {
                Ok(session) => {
                    password.set(String::new());
                    // Unmounts this view; `App` refreshes the caches for the new account
                    state.signed_in(session.user);
                }
                Err(message) => {
                    tracing::warn!("Authentication failed: {}", message);
                    error.set(Some(message));
                }
            }
        });
    };

    let is_register = registering();
    let heading = if is_register { "Create your account" } else { "Welcome back" };
    let submit_label = match (is_register, busy()) {
        (true, true) => "Creating account...",
        (true, false) => "Sign up",
        (false, true) => "Signing in...",
        (false, false) => "Sign in",
    };
    let toggle_label = if is_register {
        "Already have an account? Sign in"
    } else {
        "New here? Create an account"
    };
    let input_style = format!(
        "padding: 10px 12px; border: 1px solid {}; border-radius: 8px; font-size: 14px; outline: none;",
        colors.border
    );

    rsx! {
        div {
            class: "login-view",
            style: "
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                background: linear-gradient(135deg, {colors.bg_tertiary}, {colors.bg_primary});
            ",

            div {
                style: "
                    width: 360px;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    padding: 32px;
                    background: {colors.bg_secondary};
                    border: 1px solid {colors.border};
                    border-radius: 20px;
                    box-shadow: 0 12px 32px rgba(56, 190, 207, 0.15);
                ",

                div { style: "font-size: 40px; text-align: center;", "🐱" }
                h2 { style: "margin: 0; text-align: center; color: {colors.accent};", "Moodicat" }
                div { style: "text-align: center; color: {colors.text_secondary};", "{heading}" }

                input {
                    r#type: "text",
                    style: "{input_style}",
                    placeholder: "Username",
                    value: "{username}",
                    disabled: busy(),
                    oninput: move |evt| username.set(evt.value()),
                }
                if is_register {
                    input {
                        r#type: "email",
                        style: "{input_style}",
                        placeholder: "Email",
                        value: "{email}",
                        disabled: busy(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                input {
                    r#type: "password",
                    style: "{input_style}",
                    placeholder: "Password",
                    value: "{password}",
                    disabled: busy(),
                    oninput: move |evt| password.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }

                if let Some(message) = error() {
                    ErrorBanner { message }
                }

                Button {
                    disabled: busy(),
                    style: "padding: 10px 14px; font-size: 14px;",
                    onclick: move |_| submit(),
                    "{submit_label}"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: busy(),
                    onclick: move |_| {
                        registering.set(!is_register);
                        error.set(None);
                    },
                    "{toggle_label}"
                }
            }
        }
    }
}
