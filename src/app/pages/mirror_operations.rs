use dioxus::prelude::*;

use crate::app::components::{EmptyState, PageHeader};
use crate::app::registry::{ViewFn, ViewFuture};

pub fn load() -> ViewFuture {
    Box::pin(async { Ok(ViewFn(view)) })
}

pub fn view() -> Element {
    rsx! {
        PageHeader {
            icon: "🔄",
            title: "Mirror Operations",
            subtitle: "Running and queued mirror operations",
        }
        EmptyState {
            icon: "⏳",
            title: "No operations running",
            description: "Operations started from a configuration appear here with their progress.",
        }
    }
}
