use dioxus::prelude::*;

use crate::app::components::{EmptyState, PageHeader};
use crate::app::registry::{ViewFn, ViewFuture};
use crate::shared::hooks::use_toasts;

pub fn load() -> ViewFuture {
    Box::pin(async { Ok(ViewFn(view)) })
}

pub fn view() -> Element {
    let toaster = use_toasts();

    rsx! {
        PageHeader {
            icon: "⚙️",
            title: "Mirror Configuration",
            subtitle: "ImageSetConfiguration documents used by oc-mirror",
        }
        EmptyState {
            icon: "📄",
            title: "No configurations yet",
            description: "Saved configurations will be listed here.",
            action_text: "New configuration",
            action_handler: move |_| {
                toaster.info("The configuration editor is not available in this build");
            },
        }
    }
}
