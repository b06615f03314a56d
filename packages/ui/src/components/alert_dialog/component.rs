use dioxus::prelude::*;
use dioxus_primitives::alert_dialog;

const STYLE_CSS: Asset = asset!("./style.css");

/// Controlled alert dialog. `on_open_change(false)` fires on cancel, Escape,
/// and after the action runs.
#[component]
pub fn AlertDialogRoot(open: bool, on_open_change: EventHandler<bool>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: STYLE_CSS }

        alert_dialog::AlertDialogRoot {
            class: "alert-dialog-backdrop",
            open: Some(open),
            on_open_change: move |value: bool| on_open_change.call(value),
            {children}
        }
    }
}

#[component]
pub fn AlertDialogContent(children: Element) -> Element {
    rsx! {
        alert_dialog::AlertDialogContent { class: "alert-dialog", {children} }
    }
}

#[component]
pub fn AlertDialogTitle(children: Element) -> Element {
    rsx! {
        alert_dialog::AlertDialogTitle { class: "alert-dialog-title", {children} }
    }
}

#[component]
pub fn AlertDialogDescription(children: Element) -> Element {
    rsx! {
        alert_dialog::AlertDialogDescription { class: "alert-dialog-description", {children} }
    }
}

#[component]
pub fn AlertDialogActions(children: Element) -> Element {
    rsx! {
        alert_dialog::AlertDialogActions { class: "alert-dialog-actions", {children} }
    }
}

#[component]
pub fn AlertDialogCancel(children: Element) -> Element {
    rsx! {
        alert_dialog::AlertDialogCancel { class: "alert-dialog-cancel", {children} }
    }
}

#[component]
pub fn AlertDialogAction(on_click: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        alert_dialog::AlertDialogAction {
            class: "alert-dialog-action",
            on_click: move |event: MouseEvent| on_click.call(event),
            {children}
        }
    }
}
