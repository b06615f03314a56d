use dioxus::prelude::*;

const STYLE_CSS: Asset = asset!("./style.css");

#[component]
pub fn Input(
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    onblur: Option<EventHandler<FocusEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: STYLE_CSS }

        input {
            class: "input",
            oninput: move |e| {
                if let Some(handler) = oninput {
                    handler.call(e);
                }
            },
            onchange: move |e| {
                if let Some(handler) = onchange {
                    handler.call(e);
                }
            },
            onblur: move |e| {
                if let Some(handler) = onblur {
                    handler.call(e);
                }
            },
            ..attributes,
            {children}
        }
    }
}
