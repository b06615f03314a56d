use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, FormAlert};
use ui::otp::mask_email;
use ui::{notify, use_api, use_config, use_single_flight, Level, OtpCode, OtpInput, SubmitPhase};

use super::{navigate_after, AuthCard};
use crate::Route;

/// Second step of password recovery: check the mailed 6-digit code.
#[component]
pub fn VerifyCode(email: String) -> Element {
    let api = use_api();
    let delay = use_config().ui.redirect_delay_ms;
    let toasts = use_toast();
    let nav = use_navigator();
    let code = use_signal(OtpCode::default);
    let mut phase = use_signal(SubmitPhase::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut flight = use_single_flight();
    let mut resend = use_single_flight();

    let submit_email = email.clone();
    let submit_api = api.clone();
    let submit = use_callback(move |_: ()| {
        if flight.is_busy() || phase.peek().is_locked() {
            return;
        }
        let Some(otp) = code.peek().code() else {
            error.set(Some("Please enter all 6 digits".to_string()));
            return;
        };
        phase.write().advance(SubmitPhase::Validating);
        phase.write().advance(SubmitPhase::Submitting);
        error.set(None);
        let email = submit_email.clone();
        let api = submit_api.clone();

        flight.run(async move {
            match api.verify_otp(&email, &otp).await {
                Ok(ack) => {
                    phase.write().advance(SubmitPhase::Success);
                    let text = ack.message_or("Code verified");
                    notify(&toasts, Level::Success, &text);
                    phase.write().advance(SubmitPhase::Navigating);
                    navigate_after(delay, nav, Route::ResetPassword { email }).await;
                }
                Err(e) => {
                    let message = e.user_message("Invalid or expired code");
                    notify(&toasts, Level::Error, &message);
                    phase.write().advance(SubmitPhase::Error);
                    error.set(Some(message));
                }
            }
        });
    });

    // The code is bound to an address; without one there is nothing to verify.
    if email.trim().is_empty() {
        nav.replace(Route::ForgotPassword {});
        return rsx! {};
    }

    let resend_email = email.clone();
    let on_resend = move |_: MouseEvent| {
        let email = resend_email.clone();
        let api = api.clone();
        resend.run(async move {
            match api.send_otp(&email).await {
                Ok(ack) => {
                    let text = ack.message_or("A new code is on its way");
                    notify(&toasts, Level::Info, &text);
                }
                Err(e) => {
                    let message = e.user_message("Could not resend the code");
                    notify(&toasts, Level::Error, &message);
                }
            }
        });
    };

    let current = phase();
    let masked = mask_email(&email);

    rsx! {
        AuthCard {
            title: "Check your inbox",
            subtitle: "We sent a 6-digit code to {masked}",

            if let Some(message) = error() {
                FormAlert { level: Level::Error, message }
            }

            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit.call(());
                },
                novalidate: true,

                OtpInput {
                    code,
                    disabled: current.is_locked(),
                    on_submit: submit,
                }

                Button {
                    r#type: "submit",
                    class: "auth-submit",
                    disabled: current.is_locked() || !code().is_complete(),
                    aria_busy: current.is_submitting(),
                    if current.is_submitting() {
                        span { class: "spinner" }
                        "Verifying..."
                    } else {
                        "Verify"
                    }
                }
            }

            div {
                class: "auth-row",
                "Didn't get it? "
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: current.is_locked() || resend.is_busy(),
                    aria_busy: resend.is_busy(),
                    onclick: on_resend,
                    if resend.is_busy() {
                        span { class: "spinner" }
                        "Sending..."
                    } else {
                        "Resend code"
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
