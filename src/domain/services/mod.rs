// Shell services
// Framework-agnostic, 100% testable

pub mod route_registry;
pub mod view_cache;
pub mod outside_click;

pub use route_registry::{ActiveItemCache, RouteRegistry};
pub use view_cache::{LoadTicket, ViewCache, ViewLoadError, ViewSlot};
pub use outside_click::{OutsideClickSubscription, PointerEventSource};
