use api::ApiError;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, FormAlert};
use ui::{
    notify, schemas, use_api, use_config, use_session, use_single_flight, FormState, ImagePicker,
    ImagePolicy, ImageSelection, Level,
};

use super::{navigate_after, PlantFields};
use crate::Route;

/// New catalog entry, submitted as multipart with an optional image.
#[component]
pub fn AddPlant() -> Element {
    let api = use_api();
    let config = use_config();
    let delay = config.ui.redirect_delay_ms;
    let policy = ImagePolicy::from(&config);
    let mut session = use_session();
    let toasts = use_toast();
    let nav = use_navigator();
    let mut form = use_signal(|| FormState::new(schemas::PLANT));
    let image = use_signal(ImageSelection::default);
    let mut flight = use_single_flight();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if flight.is_busy() || !form.write().begin_submit() {
            return;
        }
        let Some(draft) = schemas::plant_draft(&form.read()) else {
            form.write().fail("Please check the highlighted fields");
            return;
        };
        let Some(token) = session.token() else {
            form.write().fail("Session expired. Please login again");
            return;
        };
        // A refused pick blocks submission until another file is chosen
        let upload = match image.peek().for_submit() {
            Ok(upload) => upload,
            Err(message) => {
                notify(&toasts, Level::Error, &message);
                form.write().fail(message);
                return;
            }
        };
        let api = api.clone();

        flight.run(async move {
            match api.add_plant(&token, &draft, upload.as_ref()).await {
                Ok(ack) => {
                    form.write().succeed();
                    let text = ack.message_or("Plant created successfully!");
                    notify(&toasts, Level::Success, &text);
                    form.write().navigating();
                    navigate_after(delay, nav, Route::Plants {}).await;
                }
                Err(ApiError::Conflict(_)) => {
                    let message = "Plant already exists!";
                    notify(&toasts, Level::Warning, message);
                    form.write().fail(message);
                }
                Err(e) => {
                    session.absorb(&e);
                    let message = e.user_message("Failed to create plant");
                    notify(&toasts, Level::Error, &message);
                    form.write().fail(message);
                }
            }
        });
    };

    let locked = form.read().phase().is_locked();
    let submitting = form.read().phase().is_submitting();
    let created = locked && !submitting;

    rsx! {
        div { class: "page narrow",
            header { class: "page-header",
                h1 { "Add plant" }
                p { class: "page-subtitle", "Create a new entry in the catalog." }
            }

            if created {
                FormAlert { level: Level::Success, message: "Plant created successfully! Returning to the list..." }
            } else if let Some(message) = form.read().server_error() {
                FormAlert { level: Level::Error, message: "{message}" }
            }

            form { class: "card",
                onsubmit,
                novalidate: true,

                PlantFields { form, disabled: locked }

                ImagePicker {
                    policy,
                    disabled: locked,
                    selection: image,
                }

                div { class: "form-actions",
                    Button {
                        r#type: "submit",
                        disabled: locked,
                        aria_busy: submitting,
                        if submitting {
                            span { class: "spinner" }
                            "Creating..."
                        } else {
                            "Create plant"
                        }
                    }
                    Link { class: "btn btn-outline", to: Route::Plants {}, "Cancel" }
                }
            }
        }
    }
}
