use api::{Plant, PlantId};
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, FormAlert, Input};
use ui::icons::{FaMagnifyingGlass, FaPenToSquare, FaPlus, FaTrash};
use ui::{notify, use_api, use_session, use_single_flight, ConfirmDialog, Icon, Level, PlantList};

use crate::Route;

#[derive(Clone, Debug, PartialEq)]
enum Load {
    Loading,
    Ready,
    Failed(String),
}

/// The plant catalog as a searchable table.
///
/// The whole collection is fetched once per visit; the search box filters it
/// locally on every keystroke.
#[component]
pub fn Plants() -> Element {
    let api = use_api();
    let mut session = use_session();
    let toasts = use_toast();
    let mut plants = use_signal(|| PlantList::new(Vec::new()));
    let mut load = use_signal(|| Load::Loading);
    let mut pending_delete = use_signal(|| Option::<Plant>::None);
    let mut deleting = use_single_flight();

    let fetch_api = api.clone();
    use_hook(move || {
        spawn(async move {
            let Some(token) = session.token() else {
                return;
            };
            match fetch_api.list_plants(&token).await {
                Ok(list) => {
                    tracing::debug!("Loaded {} plants", list.len());
                    plants.set(PlantList::new(list));
                    load.set(Load::Ready);
                }
                Err(e) => {
                    let message = e.user_message("Failed to fetch plants");
                    notify(&toasts, Level::Error, &message);
                    // An expired session unmounts this view through the shell guard.
                    if !session.absorb(&e) {
                        load.set(Load::Failed(message));
                    }
                }
            }
        })
    });

    let delete_plant = use_callback(move |plant: Plant| {
        let Some(token) = session.token() else {
            return;
        };
        let api = api.clone();
        deleting.run(async move {
            match api.delete_plant(&token, &plant.id).await {
                Ok(ack) => {
                    plants.write().remove(&plant.id);
                    let text = ack.message_or("Plant deleted successfully");
                    notify(&toasts, Level::Success, &text);
                }
                Err(e) => {
                    if !session.absorb(&e) {
                        tracing::warn!("Delete of {} failed: {}", plant.id, e);
                    }
                    let message = e.user_message("Failed to delete plant");
                    notify(&toasts, Level::Error, &message);
                }
            }
        });
    });

    let list = plants.read();
    let visible = list.visible();
    let total = list.total();
    let shown = visible.len();
    let query = list.query().to_string();

    let body = match load() {
        Load::Loading => rsx! {
            div { class: "page-loading",
                span { class: "spinner" }
                "Loading plants..."
            }
        },
        Load::Failed(message) => rsx! {
            FormAlert { level: Level::Error, message }
        },
        Load::Ready if total == 0 => rsx! {
            div { class: "empty-state", "No plants in the catalog yet." }
        },
        Load::Ready if visible.is_empty() => rsx! {
            div { class: "empty-state", "No plants match \"{query}\"." }
        },
        Load::Ready => rsx! {
            table { class: "data-table",
                thead {
                    tr {
                        th { "Image" }
                        th { "Name" }
                        th { "Scientific name" }
                        th { "Category" }
                        th { "Watering" }
                        th { "Soil" }
                        th { "Temperature" }
                        th { class: "actions", "Actions" }
                    }
                }
                tbody {
                    for plant in visible.iter().map(|p| (*p).clone()) {
                        PlantRow {
                            key: "{plant.id}",
                            plant: plant.clone(),
                            busy: deleting.is_busy(),
                            on_delete: move |p| pending_delete.set(Some(p)),
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "page",
            header { class: "page-header with-actions",
                div {
                    h1 { "Plants" }
                    p { class: "page-subtitle", "{shown} of {total} shown" }
                }
                Link { class: "btn btn-primary", to: Route::AddPlant {},
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add plant" }
                }
            }

            div { class: "search-box",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                Input {
                    r#type: "search",
                    placeholder: "Search by name",
                    value: "{query}",
                    oninput: move |evt: FormEvent| plants.write().set_query(evt.value()),
                }
            }

            {body}

            if let Some(plant) = pending_delete() {
                ConfirmDialog {
                    title: "Delete plant",
                    message: "Delete \"{plant.name}\" from the catalog? This cannot be undone.",
                    on_confirm: move |_| delete_plant.call(plant.clone()),
                    on_close: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn PlantRow(plant: Plant, busy: bool, on_delete: EventHandler<Plant>) -> Element {
    let range = plant
        .temperature_range
        .map(|r| r.to_string())
        .unwrap_or_default();
    let id: PlantId = plant.id.clone();
    let category = plant.category.as_str();
    let watering = plant.watering_frequency.as_str();
    let soil = plant.soil_type.as_str();
    let target = plant.clone();

    rsx! {
        tr {
            td {
                if let Some(url) = plant.image_url() {
                    img { class: "thumb", src: "{url}", alt: "{plant.name}" }
                } else {
                    div { class: "thumb placeholder" }
                }
            }
            td { class: "strong", "{plant.name}" }
            td { class: "muted", em { "{plant.scientific_name}" } }
            td { "{category}" }
            td { "{watering}" }
            td { "{soil}" }
            td { "{range}" }
            td { class: "actions",
                Link {
                    class: "btn btn-ghost",
                    to: Route::EditPlant { id: id.to_string() },
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: busy,
                    aria_label: "Delete",
                    onclick: move |_: MouseEvent| on_delete.call(target.clone()),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}
