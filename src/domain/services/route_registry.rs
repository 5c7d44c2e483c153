//! Ordered path-to-view registry and active item derivation.

use std::collections::HashSet;

use crate::domain::models::{Location, NavigationItem};
use crate::shared::errors::{AppError, Result};

/// Immutable, ordered list of navigation items with unique paths.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRegistry<L> {
    items: Vec<NavigationItem<L>>,
}

impl<L> RouteRegistry<L> {
    pub fn new(items: Vec<NavigationItem<L>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.path()) {
                return Err(AppError::DuplicatePath(item.path().to_string()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[NavigationItem<L>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact path lookup. No prefix matching.
    pub fn find(&self, path: &str) -> Option<&NavigationItem<L>> {
        self.items.iter().find(|item| item.path() == path)
    }

    /// Index of the item whose path equals the location path.
    pub fn active_index(&self, location: &Location) -> Option<usize> {
        self.items.iter().position(|item| item.path() == location.path)
    }
}

/// Remembers the last derived active item, recomputing only when the
/// location path changes.
#[derive(Debug, Default)]
pub struct ActiveItemCache {
    last_path: Option<String>,
    active: Option<usize>,
    recomputations: usize,
}

impl ActiveItemCache {
    pub fn resolve<L>(&mut self, registry: &RouteRegistry<L>, location: &Location) -> Option<usize> {
        if self.last_path.as_deref() != Some(location.path.as_str()) {
            self.active = registry.active_index(location);
            self.last_path = Some(location.path.clone());
            self.recomputations += 1;
        }
        self.active
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RouteRegistry<()> {
        RouteRegistry::new(vec![
            NavigationItem::new("/", "📊", "Dashboard", ()).unwrap(),
            NavigationItem::new("/config", "⚙️", "Config", ()).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_paths_rejected() {
        let result = RouteRegistry::new(vec![
            NavigationItem::new("/history", "📜", "History", ()).unwrap(),
            NavigationItem::new("/history", "📜", "History again", ()).unwrap(),
        ]);
        assert!(matches!(result, Err(AppError::DuplicatePath(p)) if p == "/history"));
    }

    #[test]
    fn test_exact_match_marks_single_item() {
        let registry = registry();
        assert_eq!(registry.active_index(&Location::new("/config")), Some(1));
        assert_eq!(registry.active_index(&Location::new("/")), Some(0));
        assert_eq!(registry.find("/config").map(|i| i.label()), Some("Config"));
    }

    #[test]
    fn test_no_prefix_matching() {
        let registry = registry();
        assert_eq!(registry.active_index(&Location::new("/config/edit")), None);
        assert_eq!(registry.active_index(&Location::new("/conf")), None);
        assert_eq!(registry.active_index(&Location::new("/unknown")), None);
        assert!(registry.find("/config/").is_none());
    }

    #[test]
    fn test_order_is_preserved() {
        let labels: Vec<&str> = registry().items().iter().map(|i| i.label()).collect();
        assert_eq!(labels, vec!["Dashboard", "Config"]);
    }

    #[test]
    fn test_cache_recomputes_only_on_location_change() {
        let registry = registry();
        let mut cache = ActiveItemCache::default();
        let config = Location::new("/config");

        assert_eq!(cache.resolve(&registry, &config), Some(1));
        assert_eq!(cache.resolve(&registry, &config), Some(1));
        assert_eq!(cache.recomputations(), 1);

        assert_eq!(cache.resolve(&registry, &Location::new("/nowhere")), None);
        assert_eq!(cache.recomputations(), 2);
    }
}
