//! The application's route registry and deferred view plumbing.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::future::LocalBoxFuture;

use crate::app::pages::{dashboard, history, mirror_config, mirror_operations, settings};
use crate::domain::models::NavigationItem;
use crate::domain::services::{LoadTicket, RouteRegistry, ViewCache, ViewLoadError};
use crate::shared::errors::Result;

/// A no-argument view function produced by a view module.
#[derive(Clone, Copy)]
pub struct ViewFn(pub fn() -> Element);

impl PartialEq for ViewFn {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.0, other.0)
    }
}

impl fmt::Debug for ViewFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ViewFn")
    }
}

pub type ViewFuture = LocalBoxFuture<'static, std::result::Result<ViewFn, ViewLoadError>>;

/// Deferred producer of a route's view
pub type ViewLoader = fn() -> ViewFuture;

pub type AppRegistry = RouteRegistry<ViewLoader>;

/// Shared registry whose equality is identity: the list is built once per
/// shell mount and never rebuilt.
#[derive(Clone)]
pub struct RegistryHandle(Rc<AppRegistry>);

impl RegistryHandle {
    pub fn new(registry: AppRegistry) -> Self {
        Self(Rc::new(registry))
    }
}

impl PartialEq for RegistryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for RegistryHandle {
    type Target = AppRegistry;

    fn deref(&self) -> &AppRegistry {
        &self.0
    }
}

/// View cache and the loader entry point, provided by the shell.
#[derive(Clone, Copy, PartialEq)]
pub struct ViewLoads {
    pub cache: Signal<ViewCache<ViewFn>>,
    pub start: Callback<(LoadTicket, ViewLoader)>,
}

/// The five shell routes, in navigation order.
pub fn build_registry() -> Result<AppRegistry> {
    RouteRegistry::new(vec![
        NavigationItem::new("/", "📊", "Dashboard", dashboard::load as ViewLoader)?,
        NavigationItem::new("/config", "⚙️", "Mirror Configuration", mirror_config::load as ViewLoader)?,
        NavigationItem::new("/operations", "🔄", "Mirror Operations", mirror_operations::load as ViewLoader)?,
        NavigationItem::new("/history", "📜", "History", history::load as ViewLoader)?,
        NavigationItem::new("/settings", "🛠️", "Settings", settings::load as ViewLoader)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Location;

    #[test]
    fn test_standard_registry() {
        let registry = build_registry().unwrap();
        let paths: Vec<&str> = registry.items().iter().map(|i| i.path()).collect();
        assert_eq!(paths, vec!["/", "/config", "/operations", "/history", "/settings"]);
    }

    #[test]
    fn test_single_active_item_per_location() {
        let registry = build_registry().unwrap();
        for (index, item) in registry.items().iter().enumerate() {
            assert_eq!(registry.active_index(&Location::new(item.path())), Some(index));
        }
        assert_eq!(registry.active_index(&Location::new("/missing")), None);
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let a = RegistryHandle::new(build_registry().unwrap());
        let b = RegistryHandle::new(build_registry().unwrap());
        assert!(a == a.clone());
        assert!(a != b);
    }

    #[test]
    fn test_loaders_resolve_to_views() {
        let registry = build_registry().unwrap();
        for item in registry.items() {
            let loaded = futures::executor::block_on((item.loader())());
            assert!(loaded.is_ok(), "{} failed to load", item.path());
        }
    }
}
