//! Application shell: header, side navigation, content outlet and the
//! notification surface, plus the layout state they share.

use dioxus::document;
use dioxus::prelude::*;
use tracing::Instrument;

use crate::app::components::{ErrorMessage, NavPanel, ToastSurface};
use crate::app::layouts::Navbar;
use crate::app::pages::{navigate, Route};
use crate::app::registry::{build_registry, RegistryHandle, ViewFn, ViewLoader, ViewLoads};
use crate::domain::services::{LoadTicket, ViewCache};
use crate::shared::hooks::{use_navigation_state, use_outside_click, use_toaster_provider};
use crate::shared::logging::{log_navigation_request, LogOperation};

/// Layout route for every page. The registry is built once per mount.
#[component]
pub fn Shell() -> Element {
    let registry = use_hook(|| {
        build_registry().map(RegistryHandle::new).map_err(|e| e.to_string())
    });

    match registry {
        Ok(registry) => rsx! {
            ShellFrame { registry }
        },
        Err(message) => {
            tracing::error!("Route registry rejected: {}", message);
            rsx! {
                ErrorMessage { message }
            }
        }
    }
}

#[component]
fn ShellFrame(registry: RegistryHandle) -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_context_provider(|| registry.clone());

    // Loads are spawned in this scope, so leaving a route never drops one.
    let mut cache = use_signal(ViewCache::<ViewFn>::default);
    let start = use_callback(move |(ticket, loader): (LoadTicket, ViewLoader)| {
        let span = crate::log_context!(LogOperation::ViewLoad, ticket.path());
        spawn(async move {
            let result = loader().instrument(span).await;
            cache.write().complete(&ticket, result);
        });
    });
    use_context_provider(|| ViewLoads { cache, start });

    let controls = use_navigation_state();
    use_outside_click(controls.pointer_down);
    use_toaster_provider();

    let navigator = use_navigator();
    let location = use_route::<Route>().location();
    let current_path = location.path.clone();
    let on_navigate = use_callback(move |path: String| {
        log_navigation_request(&current_path, &path);
        navigate(navigator, Route::for_path(&path));
    });

    let state = *controls.state.read();
    let mobile_open = state.is_mobile_menu_open();
    let layout_class = if state.collapsed {
        "c-layout c-layout--collapsed"
    } else {
        "c-layout"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: layout_class,
            Navbar { mobile_open, on_menu_toggle: controls.toggle_mobile_menu }
            div { class: "c-layout__body",
                if mobile_open {
                    div { class: "c-layout__backdrop", "aria-hidden": "true" }
                }
                NavPanel {
                    registry,
                    location,
                    collapsed: state.collapsed,
                    mobile_open,
                    on_toggle: controls.toggle_sidebar,
                    on_navigate,
                }
                main { class: "c-layout__main",
                    Outlet::<Route> {}
                }
            }
            ToastSurface {}
        }
    }
}
