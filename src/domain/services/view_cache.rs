//! Per-route deferred view loading.
//!
//! Each route moves through `Idle -> Loading -> Ready | Failed`. A load is
//! identified by a [`LoadTicket`]; only the ticket currently stored in the
//! slot may complete it, so a cancelled or superseded load never mutates
//! state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::logging::{log_view_load_error, log_view_load_stale, log_view_load_start, log_view_load_success};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ViewLoadError {
    #[error("View module for {0} is unavailable")]
    Unavailable(String),

    #[error("View module failed to initialise: {0}")]
    Init(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    path: String,
    id: u64,
}

impl LoadTicket {
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewSlot<V> {
    Idle,
    Loading(LoadTicket),
    Ready(V),
    Failed(ViewLoadError),
}

impl<V> ViewSlot<V> {
    /// True while the content region should show the loading placeholder.
    pub fn is_pending(&self) -> bool {
        matches!(self, ViewSlot::Idle | ViewSlot::Loading(_))
    }
}

#[derive(Debug)]
pub struct ViewCache<V> {
    slots: HashMap<String, ViewSlot<V>>,
    next_ticket: u64,
}

impl<V> Default for ViewCache<V> {
    fn default() -> Self {
        Self { slots: HashMap::new(), next_ticket: 0 }
    }
}

impl<V: Clone> ViewCache<V> {
    pub fn status(&self, path: &str) -> ViewSlot<V> {
        self.slots.get(path).cloned().unwrap_or(ViewSlot::Idle)
    }

    /// Start loading `path` if nothing is loaded or in flight for it.
    pub fn begin(&mut self, path: &str) -> Option<LoadTicket> {
        match self.slots.get(path) {
            None | Some(ViewSlot::Idle) => Some(self.issue(path)),
            _ => None,
        }
    }

    /// Apply a load result. Returns false when the ticket is stale.
    pub fn complete(&mut self, ticket: &LoadTicket, result: Result<V, ViewLoadError>) -> bool {
        let current = matches!(self.slots.get(&ticket.path), Some(ViewSlot::Loading(t)) if t == ticket);
        if !current {
            log_view_load_stale(&ticket.path, ticket.id);
            return false;
        }

        let slot = match result {
            Ok(view) => {
                log_view_load_success(&ticket.path, ticket.id);
                ViewSlot::Ready(view)
            }
            Err(e) => {
                log_view_load_error(&ticket.path, &e.to_string());
                ViewSlot::Failed(e)
            }
        };
        self.slots.insert(ticket.path.clone(), slot);
        true
    }

    /// Abandon an in-flight load. Its completion will be ignored.
    pub fn cancel(&mut self, path: &str) -> bool {
        if matches!(self.slots.get(path), Some(ViewSlot::Loading(_))) {
            self.slots.insert(path.to_string(), ViewSlot::Idle);
            return true;
        }
        false
    }

    /// Restart a failed load.
    pub fn retry(&mut self, path: &str) -> Option<LoadTicket> {
        match self.slots.get(path) {
            Some(ViewSlot::Failed(_)) => Some(self.issue(path)),
            _ => None,
        }
    }

    fn issue(&mut self, path: &str) -> LoadTicket {
        self.next_ticket += 1;
        let ticket = LoadTicket { path: path.to_string(), id: self.next_ticket };
        log_view_load_start(path, ticket.id);
        self.slots.insert(path.to_string(), ViewSlot::Loading(ticket.clone()));
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_access_loads_then_ready() {
        let mut cache: ViewCache<&'static str> = ViewCache::default();
        assert_eq!(cache.status("/config"), ViewSlot::Idle);

        let ticket = cache.begin("/config").unwrap();
        assert!(cache.status("/config").is_pending());
        assert!(cache.begin("/config").is_none());

        assert!(cache.complete(&ticket, Ok("config view")));
        assert_eq!(cache.status("/config"), ViewSlot::Ready("config view"));
        assert!(cache.begin("/config").is_none());
    }

    #[test]
    fn test_failure_is_distinct_state_and_retryable() {
        let mut cache: ViewCache<&'static str> = ViewCache::default();
        let ticket = cache.begin("/history").unwrap();
        let error = ViewLoadError::Unavailable("/history".into());

        assert!(cache.complete(&ticket, Err(error.clone())));
        assert_eq!(cache.status("/history"), ViewSlot::Failed(error));
        assert!(!cache.status("/history").is_pending());

        let retry = cache.retry("/history").unwrap();
        assert_ne!(retry, ticket);
        assert!(!cache.complete(&ticket, Ok("late")));
        assert!(cache.complete(&retry, Ok("history view")));
        assert_eq!(cache.status("/history"), ViewSlot::Ready("history view"));
    }

    #[test]
    fn test_cancelled_load_never_mutates_state() {
        let mut cache: ViewCache<&'static str> = ViewCache::default();
        let ticket = cache.begin("/settings").unwrap();
        assert!(cache.cancel("/settings"));

        assert!(!cache.complete(&ticket, Ok("settings view")));
        assert_eq!(cache.status("/settings"), ViewSlot::Idle);
    }

    #[test]
    fn test_routes_load_independently() {
        let mut cache: ViewCache<u8> = ViewCache::default();
        let a = cache.begin("/").unwrap();
        let b = cache.begin("/operations").unwrap();
        assert!(cache.complete(&b, Ok(2)));
        assert!(cache.status("/").is_pending());
        assert!(cache.complete(&a, Ok(1)));
        assert_eq!(cache.status("/"), ViewSlot::Ready(1));
    }

    #[test]
    fn test_retry_only_from_failed() {
        let mut cache: ViewCache<u8> = ViewCache::default();
        assert!(cache.retry("/").is_none());
        cache.begin("/");
        assert!(cache.retry("/").is_none());
        assert!(!cache.cancel("/missing"));
    }
}
