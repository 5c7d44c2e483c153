// Route views. Each module exposes `view` plus a deferred `load` used by
// the route registry.
pub mod dashboard;
pub mod mirror_config;
pub mod mirror_operations;
pub mod history;
pub mod settings;
pub mod not_found;
pub mod routes;

pub use not_found::NotFound;
pub use routes::{navigate, App, Route};
