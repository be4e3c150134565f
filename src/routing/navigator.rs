use parking_lot::RwLock;
use tracing::{debug, info};

use super::route::{Route, guard};
use crate::session::Session;

#[derive(Debug)]
struct NavigatorState {
    current: Route,
    history: Vec<Route>,
}

/// Tracks the current screen and the path that led to it.
///
/// The API client holds one so a 401/403 from any call can force the console
/// back to the login screen.
#[derive(Debug)]
pub struct Navigator {
    state: RwLock<NavigatorState>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Creates a navigator sitting on the login screen.
    pub fn new() -> Self {
        Self::starting_at(Route::Login)
    }

    /// Creates a navigator sitting on `route`.
    pub fn starting_at(route: Route) -> Self {
        Self {
            state: RwLock::new(NavigatorState {
                current: route,
                history: vec![route],
            }),
        }
    }

    /// Moves to `route` unconditionally.
    pub fn navigate(&self, route: Route) {
        let mut state = self.state.write();
        if state.current != route {
            debug!(from = %state.current, to = %route, "Navigating");
            state.current = route;
            state.history.push(route);
        }
    }

    /// Moves to wherever `route` resolves under the session's guard.
    pub fn navigate_guarded(&self, route: Route, session: &Session) -> Route {
        let target = guard(route, session);
        self.navigate(target);
        target
    }

    /// Returns the current route.
    pub fn current(&self) -> Route {
        self.state.read().current
    }

    /// Forces the login screen.
    pub fn redirect_to_login(&self) {
        info!("Redirecting to login");
        self.navigate(Route::Login);
    }

    /// Returns every route visited, oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.state.read().history.clone()
    }
}
