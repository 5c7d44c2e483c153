//! Settings page. Also the place to check that notifications work.

use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, Card, PageHeader};
use crate::app::registry::{ViewFn, ViewFuture};
use crate::shared::hooks::use_toasts;

pub fn load() -> ViewFuture {
    Box::pin(async { Ok(ViewFn(view)) })
}

pub fn view() -> Element {
    let toaster = use_toasts();

    rsx! {
        PageHeader {
            icon: "🛠️",
            title: "Settings",
            subtitle: "Application preferences",
        }
        Card { title: "🔔 Notifications",
            p { class: "c-card__text",
                "Notifications close after five seconds. Hover one to keep it open, click it to dismiss."
            }
            div { class: "c-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| { toaster.success("Settings saved"); },
                    "Success"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| { toaster.error("Something went wrong"); },
                    "Error"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| { toaster.info("Mirror data is stored under /app/data"); },
                    "Info"
                }
            }
        }
    }
}
