use chrono::Utc;
use dioxus::prelude::*;

use crate::domain::models::{NotificationQueue, ToastId, ToastKind};

/// Handle for posting and managing notifications
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<NotificationQueue>,
}

impl Toaster {
    pub fn queue(&self) -> Signal<NotificationQueue> {
        self.queue
    }

    pub fn post(&self, kind: ToastKind, message: impl Into<String>) -> Option<ToastId> {
        let mut queue = self.queue;
        queue.write().post(kind, message, Utc::now())
    }

    pub fn success(&self, message: impl Into<String>) -> Option<ToastId> {
        self.post(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Option<ToastId> {
        self.post(ToastKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Option<ToastId> {
        self.post(ToastKind::Info, message)
    }

    pub fn dismiss(&self, id: ToastId) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn set_hovered(&self, id: ToastId, hovered: bool) {
        let mut queue = self.queue;
        queue.write().set_hovered(id, hovered, Utc::now());
    }
}

/// Create the notification queue and expose it to descendants.
///
/// On the client a task advances countdowns and tracks page focus.
pub fn use_toaster_provider() -> Toaster {
    let queue = use_signal(NotificationQueue::default);
    let toaster = use_context_provider(|| Toaster { queue });

    #[cfg(target_arch = "wasm32")]
    use_hook(move || {
        use crate::shared::constants::TOAST_TICK_MS;
        use crate::shared::services::document_has_focus;

        spawn(async move {
            let mut queue = queue;
            loop {
                gloo_timers::future::TimeoutFuture::new(TOAST_TICK_MS).await;
                let now = Utc::now();
                let focused = document_has_focus();
                if queue.peek().is_surface_focused() != focused {
                    queue.write().set_surface_focused(focused, now);
                }
                if queue.peek().has_expired(now) {
                    queue.write().tick(now);
                }
            }
        });
    });

    toaster
}

/// Access the shell's notification queue
pub fn use_toasts() -> Toaster {
    use_context::<Toaster>()
}
