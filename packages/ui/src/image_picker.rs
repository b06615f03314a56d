use api::ImageUpload;
use dioxus::prelude::*;

use crate::components::{FieldError, Input, Label};
use crate::image::{ImagePolicy, ImageSelection};

/// File input for the plant image.
///
/// The picked file lands in `selection`, which the owning form reads at
/// submit time. An oversized file is refused before its bytes are read and
/// leaves an error there that blocks submission until another file is picked.
#[component]
pub fn ImagePicker(
    policy: ImagePolicy,
    mut selection: Signal<ImageSelection>,
    #[props(default)] disabled: bool,
    #[props(default)] current_url: Option<String>,
) -> Element {
    let onchange = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            selection.write().clear();
            return;
        };
        let name = file.name();
        if !selection.write().offer(&policy, &name, file.size()) {
            return;
        }
        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => selection.write().accept(ImageUpload {
                    file_name: name,
                    content_type: file.content_type(),
                    bytes: bytes.to_vec(),
                }),
                Err(e) => {
                    tracing::warn!("Could not read {}: {}", name, e);
                    selection.write().reject("Could not read the selected file");
                }
            }
        });
    };

    let (chosen, error) = {
        let current = selection.read();
        (
            current.upload().map(|upload| upload.file_name.clone()),
            current.error().map(str::to_string),
        )
    };
    let invalid = error.is_some();

    rsx! {
        div {
            class: "field",
            Label { html_for: "plant-image", "Image" }
            if let Some(url) = current_url {
                img { class: "image-preview", src: "{url}", alt: "Current image" }
            }
            Input {
                id: "plant-image",
                r#type: "file",
                accept: "image/*",
                disabled: disabled,
                aria_invalid: invalid,
                onchange: onchange,
            }
            if let Some(name) = chosen {
                div { class: "field-hint", "Selected: {name}" }
            }
            FieldError { message: error }
        }
    }
}
