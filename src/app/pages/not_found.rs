use dioxus::prelude::*;

use crate::app::components::EmptyState;
use crate::app::pages::{navigate, Route};

/// Rendered for locations that match no registered route
#[component]
pub fn NotFound(path: String) -> Element {
    let navigator = use_navigator();

    rsx! {
        EmptyState {
            icon: "🧭",
            title: "Page not found",
            description: "Nothing is registered at {path}.",
            action_text: "Back to dashboard",
            action_handler: move |_| {
                navigate(navigator, Route::Root {});
            },
        }
    }
}
