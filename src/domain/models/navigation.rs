use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};

/// One navigable entry of the shell.
///
/// `L` is the deferred view producer. Keeping it generic lets the model stay
/// free of any UI framework type.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationItem<L> {
    path: String,
    icon: &'static str,
    label: &'static str,
    loader: L,
}

impl<L> NavigationItem<L> {
    /// Build an item, rejecting paths that are empty or not rooted at `/`.
    pub fn new(path: impl Into<String>, icon: &'static str, label: &'static str, loader: L) -> Result<Self> {
        let path = path.into();
        if path.is_empty() || !path.starts_with('/') {
            return Err(AppError::InvalidPath(path));
        }
        Ok(Self { path, icon, label, loader })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

/// Current location as reported by the router.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Mobile overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

/// Where a document-level pointer event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the navigation panel or its toggle button
    InsideNav,
    /// Anywhere else in the document
    Elsewhere,
    /// The target could not be resolved to an attached element
    Unresolved,
}

/// Events driving the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    OutsideClick(PointerTarget),
    Startup,
}

impl MenuEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuEvent::Toggle => "toggle",
            MenuEvent::OutsideClick(_) => "outside_click",
            MenuEvent::Startup => "startup",
        }
    }
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        matches!(self, MobileMenu::Open)
    }

    /// Next state for `event`. Unresolved pointer targets count as outside.
    pub fn next(self, event: MenuEvent) -> MobileMenu {
        match (self, event) {
            (MobileMenu::Closed, MenuEvent::Toggle) => MobileMenu::Open,
            (MobileMenu::Open, MenuEvent::Toggle) => MobileMenu::Closed,
            (state, MenuEvent::OutsideClick(PointerTarget::InsideNav)) => state,
            (_, MenuEvent::OutsideClick(_)) => MobileMenu::Closed,
            (_, MenuEvent::Startup) => MobileMenu::Closed,
        }
    }
}

/// Layout state owned by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub collapsed: bool,
    pub mobile_menu: MobileMenu,
}

impl NavigationState {
    pub fn toggle_sidebar(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Apply a menu event, returning whether anything changed.
    pub fn apply_menu(&mut self, event: MenuEvent) -> bool {
        let next = self.mobile_menu.next(event);
        let changed = next != self.mobile_menu;
        self.mobile_menu = next;
        changed
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu.is_open()
    }
}
