use dioxus::prelude::*;
use ui::components::{use_toast, FormAlert};
use ui::{notify, use_api, use_config, Level};

use super::{navigate_after, AuthCard};
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
enum Verification {
    Checking,
    Verified(String),
    Failed(String),
}

/// Landing page of the link in the verification mail.
///
/// Verifies on mount, then sends the user to login.
#[component]
pub fn VerifyEmail(token: String) -> Element {
    let api = use_api();
    let delay = use_config().ui.redirect_delay_ms;
    let toasts = use_toast();
    let nav = use_navigator();
    let mut status = use_signal(|| Verification::Checking);

    // Runs once per mounted instance; the route token does not change under it.
    use_hook(move || {
        spawn(async move {
            match api.verify_email(&token).await {
                Ok(ack) => {
                    let text = ack.message_or("Email verified successfully!");
                    notify(&toasts, Level::Success, &text);
                    status.set(Verification::Verified(text));
                    navigate_after(delay, nav, Route::Login {}).await;
                }
                Err(e) => {
                    tracing::warn!("Email verification failed: {}", e);
                    let message = e.user_message("Verification link is invalid or expired");
                    notify(&toasts, Level::Error, &message);
                    status.set(Verification::Failed(message));
                }
            }
        });
    });

    rsx! {
        AuthCard {
            title: "Email verification",

            match status() {
                Verification::Checking => rsx! {
                    div { class: "auth-loading",
                        span { class: "spinner" }
                        "Verifying your email..."
                    }
                },
                Verification::Verified(text) => rsx! {
                    FormAlert { level: Level::Success, message: "{text} Redirecting to login..." }
                },
                Verification::Failed(message) => rsx! {
                    FormAlert { level: Level::Error, message }
                    p { class: "auth-footer",
                        Link { to: Route::Login {}, "Go to login" }
                    }
                },
            }
        }
    }
}
