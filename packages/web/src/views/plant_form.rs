use api::{Category, SoilType, WateringFrequency};
use dioxus::prelude::*;
use ui::components::{SelectField, TextAreaField, TextField};
use ui::FormState;

use super::field_error;

/// `(wire value, label)` pairs for a select, labelled with a capitalised value.
fn options(values: impl IntoIterator<Item = &'static str>) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|value| {
            let mut chars = value.chars();
            let label = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            };
            (value.to_string(), label)
        })
        .collect()
}

/// The plant fields shared by the add and update screens.
#[component]
pub fn PlantFields(mut form: Signal<FormState>, disabled: bool) -> Element {
    let text = move |name: &'static str, label: &'static str| {
        rsx! {
            TextField {
                name,
                label: "{label}",
                value: form.read().value(name).to_string(),
                error: field_error(form, name),
                disabled,
                oninput: move |v| form.write().change(name, v),
                onblur: move |_| form.write().blur(name),
            }
        }
    };

    let number = move |name: &'static str, label: &'static str| {
        rsx! {
            TextField {
                name,
                label: "{label}",
                r#type: "number",
                placeholder: "°C",
                value: form.read().value(name).to_string(),
                error: field_error(form, name),
                disabled,
                oninput: move |v| form.write().change(name, v),
                onblur: move |_| form.write().blur(name),
            }
        }
    };

    let select = move |name: &'static str, label: &'static str, choices: Vec<(String, String)>| {
        rsx! {
            SelectField {
                name,
                label: "{label}",
                value: form.read().value(name).to_string(),
                options: choices,
                error: field_error(form, name),
                disabled,
                onchange: move |v| {
                    form.write().change(name, v);
                    form.write().blur(name);
                },
                onblur: move |_| form.write().blur(name),
            }
        }
    };

    rsx! {
        div { class: "form-grid",
            {text("name", "Name")}
            {text("scientificName", "Scientific name")}
            {select("category", "Category", options(Category::ALL.iter().map(Category::as_str)))}
            {text("origin", "Origin")}
        }

        TextAreaField {
            name: "description",
            label: "Description",
            value: form.read().value("description").to_string(),
            error: field_error(form, "description"),
            disabled,
            oninput: move |v| form.write().change("description", v),
            onblur: move |_| form.write().blur("description"),
        }

        div { class: "form-grid",
            {select(
                "wateringFrequency",
                "Watering frequency",
                options(WateringFrequency::ALL.iter().map(WateringFrequency::as_str)),
            )}
            {select("soilType", "Soil type", options(SoilType::ALL.iter().map(SoilType::as_str)))}
            {number("temperatureMin", "Minimum temperature")}
            {number("temperatureMax", "Maximum temperature")}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_labels_keep_wire_values() {
        let opts = options(Category::ALL.iter().map(Category::as_str));
        assert_eq!(opts.len(), 5);
        assert!(opts.contains(&(
            "medicinal & aromatic".to_string(),
            "Medicinal & aromatic".to_string()
        )));
        assert!(opts.contains(&("air-purifying".to_string(), "Air-purifying".to_string())));
    }
}
