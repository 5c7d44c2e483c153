use dioxus::prelude::*;

pub fn menu_button_label(open: bool) -> &'static str {
    if open { "Close navigation menu" } else { "Open navigation menu" }
}

/// Top bar with branding and the mobile menu button
#[component]
pub fn Navbar(mobile_open: bool, on_menu_toggle: Callback<()>) -> Element {
    rsx! {
        header { class: "c-navbar",
            button {
                class: "c-navbar__menu",
                r#type: "button",
                // Pressing the menu button must not count as an outside click.
                "data-nav-region": "menu-button",
                "aria-controls": "app-sidebar",
                "aria-expanded": if mobile_open { "true" } else { "false" },
                "aria-label": menu_button_label(mobile_open),
                onclick: move |_| on_menu_toggle.call(()),
                if mobile_open { "✕" } else { "☰" }
            }
            div { class: "c-navbar__brand",
                span { class: "c-navbar__logo", "aria-hidden": "true", "🪞" }
                div {
                    h1 { class: "c-navbar__title", "OC Mirror v2" }
                    p { class: "c-navbar__subtitle", "Mirror workflow console" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_button_label() {
        assert_eq!(menu_button_label(false), "Open navigation menu");
        assert_eq!(menu_button_label(true), "Close navigation menu");
    }
}
