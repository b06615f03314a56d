use dioxus::prelude::*;

use super::{Input, Label};
use crate::notifications::Level;

/// Inline message under an input. Renders nothing without a message.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: "field-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}

/// Form-wide banner for server errors and success confirmations.
#[component]
pub fn FormAlert(level: Level, message: String) -> Element {
    let class = match level {
        Level::Success => "form-alert success",
        Level::Error => "form-alert error",
        Level::Warning => "form-alert warning",
        Level::Info => "form-alert info",
    };
    rsx! {
        div { class, role: "alert", "{message}" }
    }
}

/// Labelled `<input>` with its validation message.
#[component]
pub fn TextField(
    name: &'static str,
    label: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    let invalid = error.is_some();
    rsx! {
        div {
            class: "field",
            Label { html_for: "{name}", "{label}" }
            Input {
                id: name,
                name: name,
                r#type: "{r#type}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled: disabled,
                aria_invalid: invalid,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
                onblur: move |_: FocusEvent| onblur.call(()),
            }
            FieldError { message: error }
        }
    }
}

#[component]
pub fn TextAreaField(
    name: &'static str,
    label: String,
    value: String,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    let invalid = error.is_some();
    rsx! {
        div {
            class: "field",
            Label { html_for: "{name}", "{label}" }
            textarea {
                id: name,
                name,
                class: "input",
                aria_invalid: invalid,
                rows: "4",
                value: "{value}",
                disabled,
                oninput: move |evt| oninput.call(evt.value()),
                onblur: move |_| onblur.call(()),
            }
            FieldError { message: error }
        }
    }
}

/// Labelled `<select>` over `(value, label)` options with an empty placeholder entry.
#[component]
pub fn SelectField(
    name: &'static str,
    label: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
    onchange: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    let invalid = error.is_some();
    let prompt = format!("Select {}", label.to_lowercase());
    rsx! {
        div {
            class: "field",
            Label { html_for: "{name}", "{label}" }
            select {
                id: name,
                name,
                class: "input",
                aria_invalid: invalid,
                value: "{value}",
                disabled,
                onchange: move |evt| onchange.call(evt.value()),
                onblur: move |_| onblur.call(()),
                option { value: "", disabled: true, selected: value.is_empty(), "{prompt}" }
                for (opt_value, opt_label) in options {
                    option {
                        key: "{opt_value}",
                        value: "{opt_value}",
                        selected: opt_value == value,
                        "{opt_label}"
                    }
                }
            }
            FieldError { message: error }
        }
    }
}
