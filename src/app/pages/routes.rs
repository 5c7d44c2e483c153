use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::layouts::{ContentRegion, Shell};
use crate::domain::models::Location;
use crate::shared::logging::log_navigation_failed;

/// Router table. Every location renders inside the shell, which resolves
/// the path against the route registry itself.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Root {},

    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

impl Route {
    /// Router target for an absolute path
    pub fn for_path(path: &str) -> Route {
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            Route::Root {}
        } else {
            Route::Page { segments }
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Route::Root {} => Location::new("/"),
            Route::Page { segments } => Location::new(format!("/{}", segments.join("/"))),
        }
    }
}

/// Push `route`, logging the failure when the router refuses it.
pub fn navigate(navigator: Navigator, route: Route) {
    let target = route.location();
    if let Some(failure) = navigator.push(route) {
        log_navigation_failed(&target.path, &format!("{:?}", failure));
    }
}

#[component]
fn Root() -> Element {
    rsx! {
        ContentRegion { path: "/" }
    }
}

#[component]
fn Page(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        ContentRegion { path }
    }
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("OC Mirror shell initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}
