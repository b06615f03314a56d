use dioxus::prelude::*;
use ui::components::{use_toast, Button, FormAlert, TextField};
use ui::{notify, schemas, use_api, use_config, use_single_flight, FormState, Level};

use super::{field_error, navigate_after, AuthCard};
use crate::Route;

/// Last step of password recovery. Reached from a verified code only.
#[component]
pub fn ResetPassword(email: String) -> Element {
    let api = use_api();
    let delay = use_config().ui.redirect_delay_ms;
    let toasts = use_toast();
    let nav = use_navigator();
    let mut form = use_signal(|| FormState::new(schemas::RESET_PASSWORD));
    let mut flight = use_single_flight();

    if email.trim().is_empty() {
        nav.replace(Route::ForgotPassword {});
        return rsx! {};
    }

    let account = email.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if flight.is_busy() || !form.write().begin_submit() {
            return;
        }
        let (password, confirm) = {
            let form = form.read();
            (
                form.value("password").to_string(),
                form.value("confirmPassword").to_string(),
            )
        };
        let email = account.clone();
        let api = api.clone();

        flight.run(async move {
            match api.reset_password(&email, &password, &confirm).await {
                Ok(ack) => {
                    form.write().succeed();
                    let text = ack.message_or("Password reset successfully");
                    notify(&toasts, Level::Success, &text);
                    form.write().navigating();
                    navigate_after(delay, nav, Route::Login {}).await;
                }
                Err(e) => {
                    let message = e.user_message("Could not reset the password");
                    notify(&toasts, Level::Error, &message);
                    form.write().fail(message);
                }
            }
        });
    };

    let locked = form.read().phase().is_locked();
    let submitting = form.read().phase().is_submitting();
    let done = locked && !submitting;

    rsx! {
        AuthCard {
            title: "Choose a new password",
            subtitle: "for {email}",

            if done {
                FormAlert { level: Level::Success, message: "Password updated. Redirecting to login..." }
            } else if let Some(message) = form.read().server_error() {
                FormAlert { level: Level::Error, message: "{message}" }
            }

            form {
                onsubmit,
                novalidate: true,

                TextField {
                    name: "password",
                    label: "New password",
                    r#type: "password",
                    value: form.read().value("password").to_string(),
                    error: field_error(form, "password"),
                    disabled: locked,
                    oninput: move |v| form.write().change("password", v),
                    onblur: move |_| form.write().blur("password"),
                }
                TextField {
                    name: "confirmPassword",
                    label: "Confirm password",
                    r#type: "password",
                    value: form.read().value("confirmPassword").to_string(),
                    error: field_error(form, "confirmPassword"),
                    disabled: locked,
                    oninput: move |v| form.write().change("confirmPassword", v),
                    onblur: move |_| form.write().blur("confirmPassword"),
                }

                Button {
                    r#type: "submit",
                    class: "auth-submit",
                    disabled: locked,
                    aria_busy: submitting,
                    if submitting {
                        span { class: "spinner" }
                        "Saving..."
                    } else {
                        "Reset password"
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
