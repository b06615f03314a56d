use api::{ApiError, PlantId};
use dioxus::prelude::*;
use ui::components::{use_toast, Button, FormAlert};
use ui::{
    notify, schemas, use_api, use_config, use_session, use_single_flight, FormState, ImagePicker,
    ImagePolicy, ImageSelection, Level,
};

use super::{navigate_after, PlantFields};
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
enum Load {
    Loading,
    Ready { image_url: Option<String> },
    Failed(String),
}

/// Update form for one record.
///
/// The id from the route is shape-checked before anything is fetched. Nothing
/// is sent until the user submits.
#[component]
pub fn EditPlant(id: String) -> Element {
    let api = use_api();
    let config = use_config();
    let delay = config.ui.redirect_delay_ms;
    let policy = ImagePolicy::from(&config);
    let mut session = use_session();
    let toasts = use_toast();
    let nav = use_navigator();
    let mut form = use_signal(|| FormState::new(schemas::PLANT));
    let image = use_signal(ImageSelection::default);
    let mut load = use_signal(|| Load::Loading);
    let mut flight = use_single_flight();

    let plant_id = use_hook(|| PlantId::parse(&id).ok());

    let fetch_api = api.clone();
    let fetch_id = plant_id.clone();
    use_hook(move || {
        spawn(async move {
            let Some(id) = fetch_id else {
                load.set(Load::Failed(ApiError::InvalidPlantId(String::new()).to_string()));
                return;
            };
            let Some(token) = session.token() else {
                return;
            };
            match fetch_api.get_plant(&token, &id).await {
                Ok(plant) => {
                    form.set(schemas::plant_form(&plant.to_draft()));
                    load.set(Load::Ready {
                        image_url: plant.image_url().map(str::to_string),
                    });
                }
                Err(e) => {
                    let message = e.user_message("Failed to load plant");
                    notify(&toasts, Level::Error, &message);
                    if !session.absorb(&e) {
                        load.set(Load::Failed(message));
                    }
                }
            }
        })
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(id) = plant_id.clone() else {
            return;
        };
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
            match api.update_plant(&token, &id, &draft, upload.as_ref()).await {
                Ok(ack) => {
                    form.write().succeed();
                    let text = ack.message_or("Plant updated successfully!");
                    notify(&toasts, Level::Success, &text);
                    form.write().navigating();
                    navigate_after(delay, nav, Route::Plants {}).await;
                }
                Err(e) => {
                    session.absorb(&e);
                    let message = e.user_message("Failed to update plant");
                    notify(&toasts, Level::Error, &message);
                    form.write().fail(message);
                }
            }
        });
    };

    let locked = form.read().phase().is_locked();
    let submitting = form.read().phase().is_submitting();
    let saved = locked && !submitting;

    let body = match load() {
        Load::Loading => rsx! {
            div { class: "page-loading",
                span { class: "spinner" }
                "Loading plant..."
            }
        },
        Load::Failed(message) => rsx! {
            FormAlert { level: Level::Error, message }
            Link { class: "btn btn-outline", to: Route::Plants {}, "Back to plants" }
        },
        Load::Ready { image_url } => rsx! {
            if saved {
                FormAlert { level: Level::Success, message: "Plant updated successfully! Returning to the list..." }
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
                    current_url: image_url,
                    selection: image,
                }

                div { class: "form-actions",
                    Button {
                        r#type: "submit",
                        disabled: locked,
                        aria_busy: submitting,
                        if submitting {
                            span { class: "spinner" }
                            "Saving..."
                        } else {
                            "Save changes"
                        }
                    }
                    Link { class: "btn btn-outline", to: Route::Plants {}, "Cancel" }
                }
            }
        },
    };

    rsx! {
        div { class: "page narrow",
            header { class: "page-header",
                h1 { "Edit plant" }
                p { class: "page-subtitle", "Changes are saved when you press Save." }
            }
            {body}
        }
    }
}
