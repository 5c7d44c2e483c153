// Domain layer: pure Rust, no framework dependencies
pub mod models;
pub mod services;
