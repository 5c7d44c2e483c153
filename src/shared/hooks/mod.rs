// Custom Dioxus hooks
pub mod use_navigation;
pub mod use_outside_click;
pub mod use_toasts;

pub use use_navigation::{use_navigation_state, ShellControls};
pub use use_outside_click::use_outside_click;
pub use use_toasts::{use_toaster_provider, use_toasts, Toaster};
