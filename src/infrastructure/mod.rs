//! Server-side infrastructure (native only)

pub mod storage;
