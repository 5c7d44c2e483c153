//! OC Mirror Web - Main Entry Point
//!
//! Serves the navigation shell and the health probe.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use oc_mirror_web::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use anyhow::Context;
    use dioxus::server::axum::{routing::get, Extension};
    use std::sync::Arc;

    use oc_mirror_web::config::AppConfig;
    use oc_mirror_web::handlers::health_handler;
    use oc_mirror_web::infrastructure::storage::ensure_layout;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting OC Mirror Web...");

    dioxus::serve(|| {
        async move {
            let config = AppConfig::from_env().context("Invalid runtime configuration")?;
            tracing::info!(
                "Environment: {}, storage: {}",
                config.environment.as_str(),
                config.storage_dir.display()
            );

            // Permissions are fixed by the deployment tool on the host side.
            let layout = ensure_layout(&config.storage_dir, false)
                .with_context(|| format!("Cannot prepare storage at {}", config.storage_dir.display()))?;
            tracing::info!("Storage ready at {}", layout.root.display());

            let router = dioxus::server::router(App)
                .route("/api/health", get(health_handler))
                .layer(Extension(Arc::new(config)));

            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] OC Mirror Web initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
