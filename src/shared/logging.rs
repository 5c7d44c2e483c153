//! Structured logging module for the OC Mirror web shell
//!
//! Provides consistent, contextual logging across the application.
//! Every event carries an `operation` field so client and server logs can be
//! filtered the same way.

use std::fmt::Display;

/// Log operations for different parts of the shell
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Navigation,
    Sidebar,
    MobileMenu,
    ViewLoad,
    Notification,
    Deploy,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Navigation => "navigation",
            LogOperation::Sidebar => "sidebar",
            LogOperation::MobileMenu => "mobile_menu",
            LogOperation::ViewLoad => "view_load",
            LogOperation::Notification => "notification",
            LogOperation::Deploy => "deploy",
        }
    }
}

/// Log a navigation request coming from the panel
pub fn log_navigation_request(from: &str, to: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        from = from,
        to = to,
        "Navigation requested"
    );
}

/// Log a navigation the router refused
pub fn log_navigation_failed(to: &str, reason: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        to = to,
        reason = reason,
        "Navigation failed"
    );
}

/// Log a location that matched no registry entry
pub fn log_route_not_found(path: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        "No route registered for location"
    );
}

/// Log sidebar collapse changes
pub fn log_sidebar_toggled(collapsed: bool) {
    tracing::debug!(
        operation = LogOperation::Sidebar.as_str(),
        collapsed = collapsed,
        "Sidebar toggled"
    );
}

/// Log mobile menu transitions
pub fn log_mobile_menu_transition(event: &str, open: bool) {
    tracing::debug!(
        operation = LogOperation::MobileMenu.as_str(),
        event = event,
        open = open,
        "Mobile menu transition"
    );
}

/// Log the start of a deferred view load
pub fn log_view_load_start(path: &str, ticket: u64) {
    tracing::debug!(
        operation = LogOperation::ViewLoad.as_str(),
        path = path,
        ticket = ticket,
        "Loading view"
    );
}

/// Log a view that finished loading
pub fn log_view_load_success(path: &str, ticket: u64) {
    tracing::info!(
        operation = LogOperation::ViewLoad.as_str(),
        path = path,
        ticket = ticket,
        "View loaded"
    );
}

/// Log a view that failed to load
pub fn log_view_load_error(path: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::ViewLoad.as_str(),
        path = path,
        error = error,
        "Failed to load view"
    );
}

/// Log a completion that arrived for a superseded ticket
pub fn log_view_load_stale(path: &str, ticket: u64) {
    tracing::debug!(
        operation = LogOperation::ViewLoad.as_str(),
        path = path,
        ticket = ticket,
        "Ignored stale view load completion"
    );
}

/// Log a notification being dropped
pub fn log_notification_dropped(kind: &str, reason: &str) {
    tracing::debug!(
        operation = LogOperation::Notification.as_str(),
        kind = kind,
        reason = reason,
        "Notification dropped"
    );
}

/// Log a deployment step
pub fn log_deploy_step(step: &str, detail: impl Display) {
    tracing::info!(
        operation = LogOperation::Deploy.as_str(),
        step = step,
        detail = %detail,
        "Deployment step"
    );
}

/// Macro for creating structured log context
#[macro_export]
macro_rules! log_context {
    ($operation:expr) => {
        tracing::info_span!("oc_mirror_web", operation = $operation.as_str())
    };
    ($operation:expr, $path:expr) => {
        tracing::info_span!(
            "oc_mirror_web",
            operation = $operation.as_str(),
            path = $path
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Sidebar.as_str(), "sidebar");
        assert_eq!(LogOperation::MobileMenu.as_str(), "mobile_menu");
        assert_eq!(LogOperation::ViewLoad.as_str(), "view_load");
        assert_eq!(LogOperation::Notification.as_str(), "notification");
        assert_eq!(LogOperation::Deploy.as_str(), "deploy");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_navigation_failure_is_a_warning() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(tracing::Level::WARN));
            log_navigation_failed("https://example.com", "External(\"https://example.com\")");
        });
    }

    #[test]
    fn test_log_context_builds_span() {
        let _span = crate::log_context!(LogOperation::ViewLoad, "/config");
    }
}
