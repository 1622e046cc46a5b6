//! Route dispatcher owning the three views.

use std::sync::Arc;

use prune_core::EmailApi;
use tracing::debug;

use crate::confirm::Confirm;
use crate::format::DateFormatter;
use crate::notify::Notifier;
use crate::route::Route;
use crate::view::{ComposeView, DetailView, ListView};

/// Application state: the current route and one controller per screen.
pub struct App {
    route: Route,
    list: ListView,
    detail: DetailView,
    compose: ComposeView,
    notifier: Arc<dyn Notifier>,
}

impl App {
    /// Creates the views around shared capabilities. Nothing is loaded yet.
    #[must_use]
    pub fn new(
        api: Arc<dyn EmailApi>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn Confirm>,
        formatter: DateFormatter,
    ) -> Self {
        Self {
            route: Route::List,
            list: ListView::new(
                Arc::clone(&api),
                Arc::clone(&notifier),
                Arc::clone(&confirm),
                formatter,
            ),
            detail: DetailView::new(Arc::clone(&api), Arc::clone(&notifier), confirm, formatter),
            compose: ComposeView::new(api, Arc::clone(&notifier)),
            notifier,
        }
    }

    /// Activates the screen for `route`, following redirects.
    ///
    /// Returns the route that ended up current.
    pub async fn navigate(&mut self, route: Route) -> &Route {
        let mut route = route;
        loop {
            debug!("Navigating to {}", route);
            let redirect = match &route {
                Route::List => {
                    self.list.on_activate().await;
                    None
                }
                Route::Compose => {
                    self.compose.on_activate();
                    None
                }
                Route::Detail(id) => self.detail.on_activate(Some(id.as_str())).await,
            };

            match redirect {
                Some(next) if next != route => route = next,
                _ => break,
            }
        }

        self.route = route;
        &self.route
    }

    /// Activates the screen for a path; unknown paths land on the list.
    pub async fn open(&mut self, path: &str) -> &Route {
        self.navigate(Route::parse(path)).await
    }

    /// The current route.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// The list screen.
    #[must_use]
    pub const fn list(&self) -> &ListView {
        &self.list
    }

    /// The list screen, for actions.
    pub fn list_mut(&mut self) -> &mut ListView {
        &mut self.list
    }

    /// The detail screen.
    #[must_use]
    pub const fn detail(&self) -> &DetailView {
        &self.detail
    }

    /// The detail screen, for actions.
    pub fn detail_mut(&mut self) -> &mut DetailView {
        &mut self.detail
    }

    /// The compose screen.
    #[must_use]
    pub const fn compose(&self) -> &ComposeView {
        &self.compose
    }

    /// The compose screen, for actions.
    pub fn compose_mut(&mut self) -> &mut ComposeView {
        &mut self.compose
    }

    /// Notifier shared with the views.
    #[must_use]
    pub const fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("list", &self.list)
            .field("detail", &self.detail)
            .field("compose", &self.compose)
            .finish_non_exhaustive()
    }
}
