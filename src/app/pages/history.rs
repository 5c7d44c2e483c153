use dioxus::prelude::*;

use crate::app::components::{EmptyState, PageHeader};
use crate::app::registry::{ViewFn, ViewFuture};

pub fn load() -> ViewFuture {
    Box::pin(async { Ok(ViewFn(view)) })
}

pub fn view() -> Element {
    rsx! {
        PageHeader {
            icon: "📜",
            title: "History",
            subtitle: "Completed and failed operations",
        }
        EmptyState {
            icon: "🗂️",
            title: "Nothing here yet",
            description: "Finished operations are kept with their logs for later review.",
        }
    }
}
