use std::fmt;

use crate::models::Role;
use crate::session::Session;

/// Every screen the console can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Public sign-in screen.
    Login,
    /// Admin overview with aggregate counts.
    AdminDashboard,
    /// Worker management.
    AdminWorkers,
    /// Position management.
    AdminPositions,
    /// Pay period management.
    AdminPayroll,
    /// Disbursement overview.
    AdminDisbursements,
    /// Disbursement batch listing.
    AdminBatches,
    /// Payout listing and search.
    AdminPayouts,
    /// Regular user overview.
    UserDashboard,
    /// Single payment form for regular users.
    UserMakePayment,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 10] = [
        Route::Login,
        Route::AdminDashboard,
        Route::AdminWorkers,
        Route::AdminPositions,
        Route::AdminPayroll,
        Route::AdminDisbursements,
        Route::AdminBatches,
        Route::AdminPayouts,
        Route::UserDashboard,
        Route::UserMakePayment,
    ];

    /// Returns the URL path of the route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::AdminDashboard => "/admin/dashboard",
            Route::AdminWorkers => "/admin/workers",
            Route::AdminPositions => "/admin/positions",
            Route::AdminPayroll => "/admin/payroll",
            Route::AdminDisbursements => "/admin/disbursements",
            Route::AdminBatches => "/admin/disbursements/batches",
            Route::AdminPayouts => "/admin/disbursements/payouts",
            Route::UserDashboard => "/user/dashboard",
            Route::UserMakePayment => "/user/disbursements/new",
        }
    }

    /// Resolves a URL path to a route.
    ///
    /// `/` resolves to the login screen and the bare `/admin` and `/user`
    /// prefixes resolve to their dashboards. A trailing slash is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use fund_disbursement::routing::Route;
    ///
    /// assert_eq!(Route::from_path("/"), Some(Route::Login));
    /// assert_eq!(Route::from_path("/admin/"), Some(Route::AdminDashboard));
    /// assert_eq!(Route::from_path("/nowhere"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "/" | "" => Some(Route::Login),
            "/admin" => Some(Route::AdminDashboard),
            "/user" => Some(Route::UserDashboard),
            other => Route::ALL.into_iter().find(|r| r.path() == other),
        }
    }

    /// Returns the role a route requires, or `None` for public routes.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Login => None,
            Route::UserDashboard | Route::UserMakePayment => Some(Role::User),
            _ => Some(Role::Admin),
        }
    }

    /// Returns the landing route for a role.
    pub fn dashboard_for(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminDashboard,
            Role::User => Route::UserDashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Decides where a request for `route` actually lands.
///
/// Without a live session every protected route lands on the login screen; a
/// signed-in user asking for another role's screen lands on their own
/// dashboard.
pub fn guard(route: Route, session: &Session) -> Route {
    let Some(required) = route.required_role() else {
        return route;
    };
    if !session.is_authenticated() {
        return Route::Login;
    }
    match session.role() {
        Some(role) if role == required => route,
        Some(role) => Route::dashboard_for(role),
        None => Route::Login,
    }
}

/// One entry of the admin layout's side navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    /// Text shown in the navigation.
    pub label: &'static str,
    /// Destination.
    pub route: Route,
}

/// The admin layout's navigation entries, top to bottom.
pub fn admin_sections() -> [NavSection; 5] {
    [
        NavSection {
            label: "Dashboard",
            route: Route::AdminDashboard,
        },
        NavSection {
            label: "Workers",
            route: Route::AdminWorkers,
        },
        NavSection {
            label: "Positions",
            route: Route::AdminPositions,
        },
        NavSection {
            label: "Payroll",
            route: Route::AdminPayroll,
        },
        NavSection {
            label: "Disbursements",
            route: Route::AdminDisbursements,
        },
    ]
}
