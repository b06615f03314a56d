//! Login page view.

use dioxus::prelude::*;
use ui::components::{use_toast, Button, FormAlert, TextField};
use ui::{
    notify, schemas, use_api, use_config, use_session, use_single_flight, Access, FormState, Level,
};

use super::{field_error, navigate_after, AuthCard};
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let delay = use_config().ui.redirect_delay_ms;
    let mut session = use_session();
    let toasts = use_toast();
    let nav = use_navigator();
    // Prefilled after an expired session or a registration
    let mut form = use_signal(|| {
        FormState::new(schemas::LOGIN).with_values(session.remembered_email().map(|e| ("email", e)))
    });
    let mut flight = use_single_flight();

    // Already signed in: skip the form. A login in progress handles its own redirect.
    if session.access() == Access::Authenticated && !form.read().phase().is_locked() {
        nav.replace(Route::DashboardHome {});
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if flight.is_busy() || !form.write().begin_submit() {
            return;
        }
        let email = form.read().value("email").to_string();
        let password = form.read().value("password").to_string();
        let api = api.clone();
        session.remember_email(&email);

        flight.run(async move {
            match api.login(&email, &password).await {
                Ok(token) => {
                    session.sign_in(token);
                    form.write().succeed();
                    notify(&toasts, Level::Success, "Login successful");
                    form.write().navigating();
                    navigate_after(delay, nav, Route::DashboardHome {}).await;
                }
                Err(e) => {
                    let message = e.user_message("Invalid credentials");
                    notify(&toasts, Level::Error, &message);
                    form.write().fail(message);
                }
            }
        });
    };

    let locked = form.read().phase().is_locked();
    let submitting = form.read().phase().is_submitting();

    rsx! {
        AuthCard {
            title: "Welcome back",
            subtitle: "Sign in to manage the plant catalog",

            if let Some(message) = form.read().server_error() {
                FormAlert { level: Level::Error, message: "{message}" }
            }

            form {
                onsubmit,
                novalidate: true,

                TextField {
                    name: "email",
                    label: "Email",
                    r#type: "email",
                    placeholder: "you@gmail.com",
                    value: form.read().value("email").to_string(),
                    error: field_error(form, "email"),
                    disabled: locked,
                    oninput: move |v| form.write().change("email", v),
                    onblur: move |_| form.write().blur("email"),
                }
                TextField {
                    name: "password",
                    label: "Password",
                    r#type: "password",
                    value: form.read().value("password").to_string(),
                    error: field_error(form, "password"),
                    disabled: locked,
                    oninput: move |v| form.write().change("password", v),
                    onblur: move |_| form.write().blur("password"),
                }

                div {
                    class: "auth-row",
                    Link { to: Route::ForgotPassword {}, "Forgot password?" }
                }

                Button {
                    r#type: "submit",
                    class: "auth-submit",
                    disabled: locked,
                    aria_busy: submitting,
                    if submitting {
                        span { class: "spinner" }
                        "Signing in..."
                    } else {
                        "Login"
                    }
                }
            }

            p {
                class: "auth-footer",
                "Don't have an account? "
                Link { to: Route::Register {}, "Create one" }
            }
        }
    }
}
