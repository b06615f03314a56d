use dioxus::prelude::*;
use ui::components::use_toast;
use ui::icons::{FaLeaf, FaPlus, FaUser};
use ui::{notify, use_api, use_session, Icon, Level};

use crate::Route;

#[derive(Clone, Debug, Default, PartialEq)]
struct Overview {
    greeting: Option<String>,
    plant_count: Option<usize>,
}

/// Dashboard landing page: a greeting and the catalog size.
#[component]
pub fn DashboardHome() -> Element {
    let api = use_api();
    let mut session = use_session();
    let toasts = use_toast();

    let overview = use_resource(move || {
        let api = api.clone();
        async move {
            let Some(token) = session.token() else {
                return Overview::default();
            };
            let mut overview = Overview::default();

            match api.profile(&token).await {
                Ok(profile) => overview.greeting = Some(profile.display_name().to_string()),
                Err(e) => {
                    if session.absorb(&e) {
                        notify(&toasts, Level::Error, &e.user_message(""));
                        return overview;
                    }
                    tracing::warn!("Profile unavailable: {}", e);
                }
            }
            match api.list_plants(&token).await {
                Ok(plants) => overview.plant_count = Some(plants.len()),
                Err(e) => {
                    if session.absorb(&e) {
                        notify(&toasts, Level::Error, &e.user_message(""));
                    } else {
                        tracing::warn!("Plant count unavailable: {}", e);
                    }
                }
            }
            overview
        }
    });

    let current = overview.read().clone();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                match current.as_ref().and_then(|o| o.greeting.clone()) {
                    Some(name) => rsx! { h1 { "Welcome, {name}" } },
                    None => rsx! { h1 { "Welcome" } },
                }
                p { class: "page-subtitle", "Manage the Green World plant catalog." }
            }

            div { class: "stat-grid",
                div { class: "stat-card",
                    Icon { icon: FaLeaf, width: 24, height: 24 }
                    div { class: "stat-label", "Plants in catalog" }
                    div { class: "stat-value",
                        match current.as_ref() {
                            None => rsx! { span { class: "spinner" } },
                            Some(o) => match o.plant_count {
                                Some(n) => rsx! { "{n}" },
                                None => rsx! { "-" },
                            },
                        }
                    }
                }
            }

            div { class: "quick-links",
                Link { class: "btn btn-primary", to: Route::AddPlant {},
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add a plant" }
                }
                Link { class: "btn btn-outline", to: Route::Plants {},
                    Icon { icon: FaLeaf, width: 14, height: 14 }
                    span { "Browse plants" }
                }
                Link { class: "btn btn-outline", to: Route::Profile {},
                    Icon { icon: FaUser, width: 14, height: 14 }
                    span { "Your profile" }
                }
            }
        }
    }
}
