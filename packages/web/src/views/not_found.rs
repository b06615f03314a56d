use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("No route for {}", path);

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { class: "btn btn-primary", to: Route::DashboardHome {}, "Go to dashboard" }
        }
    }
}
