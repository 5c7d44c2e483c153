// Shared services
// Browser bindings are WASM-only; the server renders without them
#[cfg(target_arch = "wasm32")]
pub mod dom_events;

#[cfg(target_arch = "wasm32")]
pub use dom_events::{document_has_focus, DocumentPointerSource};
