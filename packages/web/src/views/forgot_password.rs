use dioxus::prelude::*;
use ui::components::{use_toast, Button, FormAlert, TextField};
use ui::{notify, schemas, use_api, use_config, use_session, use_single_flight, FormState, Level};

use super::{field_error, navigate_after, AuthCard};
use crate::Route;

/// First step of password recovery: ask the service to mail a code.
#[component]
pub fn ForgotPassword() -> Element {
    let api = use_api();
    let delay = use_config().ui.redirect_delay_ms;
    let toasts = use_toast();
    let nav = use_navigator();
    let session = use_session();
    let mut form = use_signal(|| {
        FormState::new(schemas::FORGOT_PASSWORD)
            .with_values(session.remembered_email().map(|e| ("email", e)))
    });
    let mut flight = use_single_flight();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if flight.is_busy() || !form.write().begin_submit() {
            return;
        }
        let email = form.read().value("email").trim().to_string();
        let api = api.clone();

        flight.run(async move {
            match api.forget_password(&email).await {
                Ok(ack) => {
                    form.write().succeed();
                    let text = ack.message_or("Verification code sent to your email");
                    notify(&toasts, Level::Success, &text);
                    form.write().navigating();
                    navigate_after(delay, nav, Route::VerifyCode { email }).await;
                }
                Err(e) => {
                    let message = e.user_message("Could not send the verification code");
                    notify(&toasts, Level::Error, &message);
                    form.write().fail(message);
                }
            }
        });
    };

    let locked = form.read().phase().is_locked();
    let submitting = form.read().phase().is_submitting();
    let sent = locked && !submitting;

    rsx! {
        AuthCard {
            title: "Forgot password",
            subtitle: "Enter your account email and we'll send you a 6-digit code",

            if sent {
                FormAlert { level: Level::Success, message: "Code sent. Redirecting..." }
            } else if let Some(message) = form.read().server_error() {
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

                Button {
                    r#type: "submit",
                    class: "auth-submit",
                    disabled: locked,
                    aria_busy: submitting,
                    if submitting {
                        span { class: "spinner" }
                        "Sending..."
                    } else {
                        "Send code"
                    }
                }
            }

            p {
                class: "auth-footer",
                Link { to: Route::Login {}, "Back to login" }
            }
        }
    }
}
