// Domain models (shell entities)
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod notification;

pub use navigation::{Location, MenuEvent, MobileMenu, NavigationItem, NavigationState, PointerTarget};
pub use notification::{NotificationQueue, Toast, ToastConfig, ToastId, ToastKind};
