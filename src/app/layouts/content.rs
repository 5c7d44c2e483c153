//! Content region: resolves the location against the registry and renders
//! the matching view once its deferred loader has finished.

use dioxus::prelude::*;

use crate::app::components::{ErrorMessage, LoadingText};
use crate::app::pages::NotFound;
use crate::app::registry::{RegistryHandle, ViewFn, ViewLoader, ViewLoads};
use crate::domain::services::ViewSlot;
use crate::shared::logging::log_route_not_found;

#[component]
pub fn ContentRegion(path: String) -> Element {
    let registry = use_context::<RegistryHandle>();

    match registry.find(&path) {
        Some(item) => {
            let loader = *item.loader();
            rsx! {
                LazyView { key: "{path}", path: path.clone(), loader }
            }
        }
        None => {
            log_route_not_found(&path);
            rsx! {
                NotFound { path }
            }
        }
    }
}

/// Starts the route's load on first display and follows its slot.
#[component]
fn LazyView(path: String, loader: ViewLoader) -> Element {
    let loads = use_context::<ViewLoads>();

    let begin_path = path.clone();
    use_effect(move || {
        let mut cache = loads.cache;
        let ticket = cache.write().begin(&begin_path);
        if let Some(ticket) = ticket {
            loads.start.call((ticket, loader));
        }
    });

    let retry_path = path.clone();
    let retry = move |_: MouseEvent| {
        let mut cache = loads.cache;
        let ticket = cache.write().retry(&retry_path);
        if let Some(ticket) = ticket {
            loads.start.call((ticket, loader));
        }
    };

    let slot = loads.cache.read().status(&path);
    match slot {
        ViewSlot::Idle | ViewSlot::Loading(_) => rsx! {
            LoadingText { message: "Loading..." }
        },
        ViewSlot::Ready(view) => rsx! {
            RouteView { view }
        },
        ViewSlot::Failed(error) => rsx! {
            div { class: "c-content__failure",
                ErrorMessage { message: error.to_string() }
                button {
                    class: "c-button c-button--primary",
                    r#type: "button",
                    onclick: retry,
                    "Retry"
                }
            }
        },
    }
}

/// Own scope for the loaded view, so its hooks live apart from the loader's.
#[component]
fn RouteView(view: ViewFn) -> Element {
    (view.0)()
}
