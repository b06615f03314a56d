use dioxus::prelude::*;
use dioxus_primitives::toast;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

const STYLE_CSS: Asset = asset!("./style.css");

/// Hosts the toast region. Everything that calls [`use_toast`] must sit below it.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: STYLE_CSS }

        toast::ToastProvider {
            {children}
        }
    }
}
