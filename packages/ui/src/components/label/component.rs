use dioxus::prelude::*;

const STYLE_CSS: Asset = asset!("./style.css");

#[component]
pub fn Label(
    html_for: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: STYLE_CSS }

        label {
            class: "label",
            r#for: "{html_for}",
            ..attributes,
            {children}
        }
    }
}
