//! On-disk storage layout shared by the server and the deployment tool
//!
//! The application keeps mirror configurations, operation records, logs and
//! cache files in fixed subdirectories of a single storage root.

pub mod layout;

pub use layout::{ensure_layout, StorageLayout};
