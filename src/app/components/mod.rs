pub mod button;
pub mod card;
pub mod common;
pub mod nav_item;
pub mod nav_panel;
pub mod toast_surface;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use common::{EmptyState, ErrorMessage, LoadingText, PageHeader};
pub use nav_item::NavItem;
pub use nav_panel::NavPanel;
pub use toast_surface::ToastSurface;
