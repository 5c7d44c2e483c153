use dioxus::prelude::*;

use crate::domain::models::{MenuEvent, NavigationState, PointerTarget};
use crate::shared::logging::{log_mobile_menu_transition, log_sidebar_toggled};

/// Layout state plus the only callbacks allowed to change it.
///
/// Callbacks keep their identity across renders so children receiving them
/// as props do not re-render for nothing.
#[derive(Clone, Copy, PartialEq)]
pub struct ShellControls {
    pub state: Signal<NavigationState>,
    pub toggle_sidebar: Callback<()>,
    pub toggle_mobile_menu: Callback<()>,
    pub pointer_down: Callback<PointerTarget>,
}

fn apply_menu_event(mut state: Signal<NavigationState>, event: MenuEvent) {
    let mut next = *state.peek();
    if next.apply_menu(event) {
        state.set(next);
        log_mobile_menu_transition(event.as_str(), next.is_mobile_menu_open());
    }
}

/// Hook owning `NavigationState` for the lifetime of the shell
pub fn use_navigation_state() -> ShellControls {
    let mut state = use_signal(NavigationState::default);

    // The menu always starts closed, whatever the previous session left.
    use_effect(move || apply_menu_event(state, MenuEvent::Startup));

    let toggle_sidebar = use_callback(move |_: ()| {
        let mut current = state.write();
        current.toggle_sidebar();
        log_sidebar_toggled(current.collapsed);
    });

    let toggle_mobile_menu = use_callback(move |_: ()| apply_menu_event(state, MenuEvent::Toggle));

    let pointer_down = use_callback(move |target: PointerTarget| {
        apply_menu_event(state, MenuEvent::OutsideClick(target))
    });

    ShellControls {
        state,
        toggle_sidebar,
        toggle_mobile_menu,
        pointer_down,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[component]
    fn ShellState() -> Element {
        let controls = use_navigation_state();
        let state = *controls.state.read();
        let menu = if state.is_mobile_menu_open() { "open" } else { "closed" };

        rsx! {
            p { "collapsed={state.collapsed} menu={menu}" }
        }
    }

    #[test]
    fn test_mount_starts_expanded_with_menu_closed() {
        let mut dom = VirtualDom::new(ShellState);
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("collapsed=false menu=closed"), "{}", html);
    }
}
