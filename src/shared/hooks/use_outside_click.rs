use dioxus::prelude::*;

use crate::domain::models::PointerTarget;

/// Register the document pointer listener for as long as the calling
/// component is mounted.
///
/// Browser events are forwarded through a channel to a task running inside
/// the component scope, so `on_pointer` always runs on the Dioxus runtime.
#[cfg(target_arch = "wasm32")]
pub fn use_outside_click(on_pointer: Callback<PointerTarget>) {
    use crate::domain::services::OutsideClickSubscription;
    use crate::shared::services::DocumentPointerSource;
    use futures::StreamExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    let subscription = use_hook(move || {
        let (tx, mut rx) = futures::channel::mpsc::unbounded::<PointerTarget>();
        spawn(async move {
            while let Some(target) = rx.next().await {
                on_pointer.call(target);
            }
        });

        let acquired = OutsideClickSubscription::acquire(
            DocumentPointerSource,
            Box::new(move |target| {
                let _ = tx.unbounded_send(target);
            }),
        );
        if let Err(e) = &acquired {
            tracing::warn!("Outside-click listener unavailable: {}", e);
        }
        Rc::new(RefCell::new(acquired.ok()))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });
}

/// Server-side rendering has no document to listen on.
#[cfg(not(target_arch = "wasm32"))]
pub fn use_outside_click(on_pointer: Callback<PointerTarget>) {
    let _ = on_pointer;
}
