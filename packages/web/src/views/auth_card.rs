use dioxus::prelude::*;

const AUTH_CSS: Asset = asset!("/assets/auth.css");

/// Centered card shared by the login, registration, and recovery screens.
#[component]
pub fn AuthCard(title: String, #[props(default)] subtitle: String, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: AUTH_CSS }

        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div { class: "auth-brand", "Green World" }
                h1 { class: "auth-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "auth-subtitle", "{subtitle}" }
                }
                {children}
            }
        }
    }
}
