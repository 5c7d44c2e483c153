//! Document-level event bindings for the browser

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::domain::models::PointerTarget;
use crate::domain::services::outside_click::{PointerEventSource, PointerHandler};
use crate::shared::constants::NAV_REGION_ATTR;
use crate::shared::errors::{AppError, Result};

const POINTER_EVENT: &str = "mousedown";

fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Listener("no document available".to_string()))
}

/// Whether the page currently has input focus. Assumes focus when unknown.
pub fn document_has_focus() -> bool {
    document()
        .ok()
        .and_then(|d| d.has_focus().ok())
        .unwrap_or(true)
}

/// Classify an event target against the navigation regions.
fn classify(event: &web_sys::Event) -> PointerTarget {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return PointerTarget::Unresolved;
    };
    if !element.is_connected() {
        return PointerTarget::Unresolved;
    }
    match element.closest(&format!("[{}]", NAV_REGION_ATTR)) {
        Ok(Some(_)) => PointerTarget::InsideNav,
        Ok(None) => PointerTarget::Elsewhere,
        Err(_) => PointerTarget::Unresolved,
    }
}

/// `mousedown` listener on `document`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentPointerSource;

impl PointerEventSource for DocumentPointerSource {
    type Handle = Closure<dyn FnMut(web_sys::Event)>;

    fn subscribe(&self, mut handler: PointerHandler) -> Result<Self::Handle> {
        let document = document()?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            handler(classify(&event));
        });
        document
            .add_event_listener_with_callback(POINTER_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|e| AppError::Listener(format!("{:?}", e)))?;
        Ok(closure)
    }

    fn unsubscribe(&self, handle: Self::Handle) {
        if let Ok(document) = document() {
            if let Err(e) = document.remove_event_listener_with_callback(POINTER_EVENT, handle.as_ref().unchecked_ref()) {
                tracing::warn!("Failed to remove pointer listener: {:?}", e);
            }
        }
    }
}
