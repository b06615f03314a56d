use api::{SignupOutcome, SignupRequest};
use dioxus::prelude::*;
use ui::components::{use_toast, Button, FormAlert, TextField};
use ui::{
    notify, schemas, use_api, use_config, use_session, use_single_flight, Access, FormState, Level,
};

use super::{field_error, navigate_after, AuthCard};
use crate::Route;

/// Account creation page.
///
/// An address that already has an account gets a fresh verification mail
/// instead of an error; the form stays editable.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let delay = use_config().ui.redirect_delay_ms;
    let mut session = use_session();
    let toasts = use_toast();
    let nav = use_navigator();
    let mut form = use_signal(|| FormState::new(schemas::REGISTER));
    let mut flight = use_single_flight();
    let mut notice = use_signal(|| Option::<String>::None);

    if session.access() == Access::Authenticated && !form.read().phase().is_locked() {
        nav.replace(Route::DashboardHome {});
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if flight.is_busy() || !form.write().begin_submit() {
            return;
        }
        notice.set(None);
        let request = {
            let form = form.read();
            SignupRequest {
                user_name: form.value("userName").trim().to_string(),
                email: form.value("email").trim().to_string(),
                password: form.value("password").to_string(),
            }
        };
        let api = api.clone();

        flight.run(async move {
            session.remember_email(&request.email);
            match api.signup(&request).await {
                Ok(SignupOutcome::Created { token, message }) => {
                    form.write().succeed();
                    let text = message.unwrap_or_else(|| "Registration successful".to_string());
                    notify(&toasts, Level::Success, &text);
                    form.write().navigating();
                    match token {
                        Some(token) => {
                            session.sign_in(token);
                            navigate_after(delay, nav, Route::DashboardHome {}).await;
                        }
                        None => navigate_after(delay, nav, Route::Login {}).await,
                    }
                }
                Ok(SignupOutcome::AlreadyExists) => {
                    tracing::info!("Signup hit an existing account, resending verification");
                    let message = match api.resend_verification(&request.email).await {
                        Ok(_) => {
                            let text = "User already exists! Verification email re-sent. Please check your inbox.";
                            notice.set(Some(text.to_string()));
                            notify(&toasts, Level::Info, text);
                            "User already exists!".to_string()
                        }
                        Err(e) => {
                            let text = e.user_message("User already exists!");
                            notify(&toasts, Level::Error, &text);
                            text
                        }
                    };
                    form.write().fail(message);
                }
                Err(e) => {
                    let message = e.user_message("Registration failed");
                    notify(&toasts, Level::Error, &message);
                    form.write().fail(message);
                }
            }
        });
    };

    let locked = form.read().phase().is_locked();
    let submitting = form.read().phase().is_submitting();
    let specials = schemas::PASSWORD_SPECIALS;

    rsx! {
        AuthCard {
            title: "Create an account",
            subtitle: "Admins and editors of the Green World catalog",

            if let Some(text) = notice() {
                FormAlert { level: Level::Info, message: text }
            } else if let Some(message) = form.read().server_error() {
                FormAlert { level: Level::Error, message: "{message}" }
            }

            form {
                onsubmit,
                novalidate: true,

                TextField {
                    name: "userName",
                    label: "Username",
                    placeholder: "rose_admin",
                    value: form.read().value("userName").to_string(),
                    error: field_error(form, "userName"),
                    disabled: locked,
                    oninput: move |v| form.write().change("userName", v),
                    onblur: move |_| form.write().blur("userName"),
                }
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
                p {
                    class: "field-hint",
                    "At least 8 characters with upper and lower case letters, a digit, and one of {specials}"
                }

                Button {
                    r#type: "submit",
                    class: "auth-submit",
                    disabled: locked,
                    aria_busy: submitting,
                    if submitting {
                        span { class: "spinner" }
                        "Creating account..."
                    } else {
                        "Register"
                    }
                }
            }

            p {
                class: "auth-footer",
                "Already registered? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
