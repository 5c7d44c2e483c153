/// Liveness and configuration probe
pub mod health;

pub use health::{health_handler, HealthResponse};
