use dioxus::prelude::*;

/// Enter and Space activate a navigation item, like a button.
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

pub fn nav_item_class(active: bool, collapsed: bool) -> &'static str {
    match (active, collapsed) {
        (true, true) => "c-nav__item c-nav__item--active c-nav__item--collapsed",
        (true, false) => "c-nav__item c-nav__item--active",
        (false, true) => "c-nav__item c-nav__item--collapsed",
        (false, false) => "c-nav__item",
    }
}

/// One route entry of the side navigation.
///
/// The anchor keeps its `href` for accessibility, but native navigation is
/// always prevented: `on_activate` is the only way this item navigates.
#[component]
pub fn NavItem(
    path: String,
    icon: &'static str,
    label: &'static str,
    is_active: bool,
    is_collapsed: bool,
    on_activate: Callback<()>,
) -> Element {
    rsx! {
        li { class: "c-nav__entry",
            a {
                class: nav_item_class(is_active, is_collapsed),
                href: "{path}",
                tabindex: "0",
                "aria-label": label,
                "aria-current": if is_active { "page" } else { "false" },
                title: if is_collapsed { label } else { "" },
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_activate.call(());
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if is_activation_key(&evt.key()) {
                        // Also stops Space from scrolling and Enter from synthesising a click.
                        evt.prevent_default();
                        on_activate.call(());
                    }
                },
                span { class: "c-nav__icon", "aria-hidden": "true", "{icon}" }
                if !is_collapsed {
                    span { class: "c-nav__label", "{label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string())));
        assert!(!is_activation_key(&Key::Character("a".to_string())));
        assert!(!is_activation_key(&Key::Tab));
        assert!(!is_activation_key(&Key::Escape));
    }

    #[test]
    fn test_class_marks_active_and_collapsed() {
        assert_eq!(nav_item_class(false, false), "c-nav__item");
        assert!(nav_item_class(true, false).contains("--active"));
        assert!(nav_item_class(false, true).contains("--collapsed"));
        assert!(!nav_item_class(false, true).contains("--active"));
    }
}
