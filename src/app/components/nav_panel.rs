use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::components::NavItem;
use crate::app::registry::RegistryHandle;
use crate::domain::models::Location;
use crate::domain::services::ActiveItemCache;

pub fn toggle_label(collapsed: bool) -> &'static str {
    if collapsed { "Expand sidebar" } else { "Collapse sidebar" }
}

pub fn toggle_glyph(collapsed: bool) -> &'static str {
    if collapsed { "»" } else { "«" }
}

fn panel_class(collapsed: bool, mobile_open: bool) -> &'static str {
    match (collapsed, mobile_open) {
        (true, true) => "c-sidebar c-sidebar--collapsed c-sidebar--mobile-open",
        (true, false) => "c-sidebar c-sidebar--collapsed",
        (false, true) => "c-sidebar c-sidebar--mobile-open",
        (false, false) => "c-sidebar",
    }
}

/// Side navigation: the collapse toggle plus one item per registry entry
#[component]
pub fn NavPanel(
    registry: RegistryHandle,
    location: Location,
    collapsed: bool,
    mobile_open: bool,
    on_toggle: Callback<()>,
    on_navigate: Callback<String>,
) -> Element {
    // Re-derived only when the location path changes.
    let cache = use_hook(|| Rc::new(RefCell::new(ActiveItemCache::default())));
    let active = cache.borrow_mut().resolve(&registry, &location);

    let items = registry.items().iter().enumerate().map(|(index, item)| {
        let path = item.path().to_string();
        let target = path.clone();
        rsx! {
            NavItem {
                key: "{path}",
                path: path.clone(),
                icon: item.icon(),
                label: item.label(),
                is_active: active == Some(index),
                is_collapsed: collapsed,
                on_activate: move |_| on_navigate.call(target.clone()),
            }
        }
    });

    rsx! {
        aside {
            class: panel_class(collapsed, mobile_open),
            id: "app-sidebar",
            "data-nav-region": "panel",
            "aria-label": "Main navigation",
            div { class: "c-sidebar__header",
                button {
                    class: "c-sidebar__toggle",
                    r#type: "button",
                    "aria-expanded": if collapsed { "false" } else { "true" },
                    "aria-controls": "app-sidebar-nav",
                    "aria-label": toggle_label(collapsed),
                    title: toggle_label(collapsed),
                    onclick: move |_| on_toggle.call(()),
                    "{toggle_glyph(collapsed)}"
                }
            }
            nav { class: "c-sidebar__nav", id: "app-sidebar-nav",
                ul { class: "c-nav",
                    {items}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_announcement_follows_state() {
        assert_eq!(toggle_label(false), "Collapse sidebar");
        assert_eq!(toggle_label(true), "Expand sidebar");
        assert_ne!(toggle_glyph(false), toggle_glyph(true));
    }

    #[test]
    fn test_panel_class() {
        assert_eq!(panel_class(false, false), "c-sidebar");
        assert!(panel_class(true, false).contains("--collapsed"));
        assert!(panel_class(false, true).contains("--mobile-open"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod render {
        use super::*;
        use crate::app::registry::build_registry;

        #[component]
        fn PanelAt(path: String, collapsed: bool) -> Element {
            let registry = use_hook(|| RegistryHandle::new(build_registry().unwrap()));
            let on_toggle = use_callback(|_: ()| {});
            let on_navigate = use_callback(|_: String| {});

            rsx! {
                NavPanel {
                    registry,
                    location: Location::new(path),
                    collapsed,
                    mobile_open: false,
                    on_toggle,
                    on_navigate,
                }
            }
        }

        fn render(path: &str, collapsed: bool) -> String {
            let mut dom = VirtualDom::new_with_props(
                PanelAt,
                PanelAtProps { path: path.to_string(), collapsed },
            );
            dom.rebuild_in_place();
            dioxus_ssr::render(&dom)
        }

        #[test]
        fn test_expanded_panel_shows_every_label() {
            let html = render("/config", false);
            assert_eq!(html.matches("c-nav__label").count(), 5);
            assert!(html.contains(r#"aria-expanded="true""#));
            assert!(html.contains("Mirror Configuration"));
        }

        #[test]
        fn test_collapse_hides_labels_and_keeps_active_item() {
            let expanded = render("/config", false);
            let collapsed = render("/config", true);

            assert_eq!(collapsed.matches("c-nav__label").count(), 0);
            assert!(collapsed.contains(r#"aria-expanded="false""#));
            assert!(collapsed.contains("Expand sidebar"));

            for html in [&expanded, &collapsed] {
                assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
                assert_eq!(html.matches("c-nav__item--active").count(), 1);
            }
        }

        #[test]
        fn test_active_item_is_the_exact_match() {
            let html = render("/config", false);
            let active = html
                .split("<a ")
                .find(|anchor| anchor.contains(r#"aria-current="page""#))
                .unwrap();
            assert!(active.contains(r#"href="/config""#));
        }

        #[test]
        fn test_unknown_location_marks_nothing_active() {
            for path in ["/missing", "/config/edit"] {
                let html = render(path, false);
                assert_eq!(html.matches(r#"aria-current="page""#).count(), 0);
                assert_eq!(html.matches("c-nav__item--active").count(), 0);
            }
        }

        #[test]
        fn test_panel_is_a_nav_region() {
            assert!(render("/", false).contains(r#"data-nav-region="panel""#));
        }
    }
}
