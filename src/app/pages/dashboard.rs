//! Dashboard: entry page with shortcuts into the mirror workflow

use dioxus::prelude::*;

use crate::app::components::{Card, PageHeader};
use crate::app::pages::{navigate, Route};
use crate::app::registry::{ViewFn, ViewFuture};
use crate::shared::constants::STORAGE_SUBDIRS;

/// Shortcut card data for display
struct Shortcut {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    path: &'static str,
}

const SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        icon: "⚙️",
        title: "Configure a mirror",
        description: "Describe the release channels, operators and images to mirror.",
        path: "/config",
    },
    Shortcut {
        icon: "🔄",
        title: "Run an operation",
        description: "Start a mirror-to-disk or disk-to-mirror operation.",
        path: "/operations",
    },
    Shortcut {
        icon: "📜",
        title: "Review history",
        description: "Inspect finished operations and their logs.",
        path: "/history",
    },
];

pub fn load() -> ViewFuture {
    Box::pin(async { Ok(ViewFn(view)) })
}

pub fn view() -> Element {
    let navigator = use_navigator();

    rsx! {
        PageHeader {
            icon: "📊",
            title: "Dashboard",
            subtitle: "Overview of OC Mirror v2 activity",
        }
        div { class: "c-grid",
            for shortcut in SHORTCUTS {
                Card { key: "{shortcut.path}", title: "{shortcut.icon} {shortcut.title}",
                    p { class: "c-card__text", "{shortcut.description}" }
                    button {
                        class: "c-button c-button--secondary",
                        onclick: move |_| {
                            navigate(navigator, Route::for_path(shortcut.path));
                        },
                        "Open"
                    }
                }
            }
        }
        Card { title: "💾 Storage",
            p { class: "c-card__text", "Data is kept in the following directories:" }
            ul { class: "c-list",
                for dir in STORAGE_SUBDIRS {
                    li { key: "{dir}", code { "{dir}/" } }
                }
            }
        }
    }
}
