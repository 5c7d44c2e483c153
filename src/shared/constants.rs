//! Values shared between the web shell, the server and the deployment tool.

/// Subdirectories created under the storage root.
pub const STORAGE_SUBDIRS: [&str; 4] = ["configs", "operations", "logs", "cache"];

/// Port the application listens on inside the container.
pub const CONTAINER_PORT: u16 = 3001;

/// Port published on the host by the deployment tool.
pub const HOST_PORT: u16 = 3000;

/// Storage root as seen from inside the container.
pub const CONTAINER_STORAGE_DIR: &str = "/app/data";

/// Pull secret location inside the container.
pub const CONTAINER_PULL_SECRET: &str = "/app/pull-secret/pull-secret.json";

pub const IMAGE_NAME: &str = "oc-mirror-web-app:latest";
pub const CONTAINER_NAME: &str = "oc-mirror-web-app";

/// Auto-close delay for notifications, in milliseconds.
pub const TOAST_AUTO_CLOSE_MS: i64 = 5_000;

/// Interval between notification countdown ticks on the client.
pub const TOAST_TICK_MS: u32 = 250;

/// Marker attribute for elements that count as "inside" the navigation.
pub const NAV_REGION_ATTR: &str = "data-nav-region";
