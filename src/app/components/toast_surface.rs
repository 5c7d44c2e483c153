use dioxus::prelude::*;

use crate::domain::models::{Toast, ToastKind};
use crate::shared::hooks::use_toasts;

fn toast_class(kind: ToastKind, paused: bool) -> String {
    let mut class = format!("c-toast c-toast--{}", kind.as_str());
    if paused {
        class.push_str(" c-toast--paused");
    }
    class
}

/// Fixed top-right stack of notifications.
#[component]
pub fn ToastSurface() -> Element {
    let toaster = use_toasts();
    let queue = toaster.queue();
    let toasts: Vec<Toast> = queue.read().visible().into_iter().cloned().collect();

    rsx! {
        div { class: "c-toast-surface", role: "status", "aria-live": "polite",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let toaster = use_toasts();
    let id = toast.id;
    let class = toast_class(toast.kind, toast.is_paused());
    let icon = toast.kind.icon();

    rsx! {
        div {
            class: "{class}",
            role: if toast.kind == ToastKind::Error { "alert" } else { "status" },
            // Clicking anywhere on the toast closes it.
            onclick: move |_| toaster.dismiss(id),
            onmouseenter: move |_| toaster.set_hovered(id, true),
            onmouseleave: move |_| toaster.set_hovered(id, false),
            span { class: "c-toast__icon", "aria-hidden": "true", "{icon}" }
            span { class: "c-toast__message", "{toast.message}" }
            button {
                class: "c-toast__close",
                r#type: "button",
                "aria-label": "Dismiss notification",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    toaster.dismiss(id);
                },
                "×"
            }
        }
    }
}
