use dioxus::prelude::*;

#[component]
pub fn Card(title: String, children: Element) -> Element {
    rsx! {
        section { class: "c-card",
            div { class: "c-card__header",
                h3 { class: "c-card__title", "{title}" }
            }
            div { class: "c-card__body",
                {children}
            }
        }
    }
}
