//! Routes and the authentication guard.
//!
//! Admin routes render only for a signed-in session; the flag comes from
//! the one `check_auth` call made when the app starts. Unknown paths fall
//! back to the home page.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Fixtures,
    Results,
    Tables,
    Stats,
    News,
    Teams,
    Players,
    AdminLogin,
    AdminDashboard,
    AdminTeams,
    AdminPlayers,
    AdminFixtures,
    AdminNews,
}

impl Route {
    pub const ALL: [Route; 14] = [
        Route::Home,
        Route::Fixtures,
        Route::Results,
        Route::Tables,
        Route::Stats,
        Route::News,
        Route::Teams,
        Route::Players,
        Route::AdminLogin,
        Route::AdminDashboard,
        Route::AdminTeams,
        Route::AdminPlayers,
        Route::AdminFixtures,
        Route::AdminNews,
    ];

    /// Public entries of the navigation bar, in display order.
    pub const PUBLIC_NAV: [Route; 8] = [
        Route::Home,
        Route::Fixtures,
        Route::Results,
        Route::Tables,
        Route::Stats,
        Route::News,
        Route::Teams,
        Route::Players,
    ];

    /// Match a path exactly. Query strings, fragments and a trailing slash
    /// are ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match path {
            // The navigation bar has always linked teams as /clubs
            "/clubs" => Some(Route::Teams),
            p => Route::ALL.into_iter().find(|r| r.path() == p),
        }
    }

    /// Resolve a path, sending anything unknown to the home page.
    pub fn resolve(path: &str) -> Route {
        Route::parse(path).unwrap_or(Route::Home)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Fixtures => "/fixtures",
            Route::Results => "/results",
            Route::Tables => "/tables",
            Route::Stats => "/stats",
            Route::News => "/news",
            Route::Teams => "/teams",
            Route::Players => "/players",
            Route::AdminLogin => "/admin/login",
            Route::AdminDashboard => "/admin/dashboard",
            Route::AdminTeams => "/admin/teams",
            Route::AdminPlayers => "/admin/players",
            Route::AdminFixtures => "/admin/fixtures",
            Route::AdminNews => "/admin/news",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Fixtures => "Fixtures",
            Route::Results => "Results",
            Route::Tables => "League Table",
            Route::Stats => "Statistics",
            Route::News => "News",
            Route::Teams => "Teams",
            Route::Players => "Players",
            Route::AdminLogin => "Admin Login",
            Route::AdminDashboard => "Admin Dashboard",
            Route::AdminTeams => "Manage Teams",
            Route::AdminPlayers => "Manage Players",
            Route::AdminFixtures => "Manage Fixtures",
            Route::AdminNews => "Manage News",
        }
    }

    pub fn is_admin(&self) -> bool {
        self.path().starts_with("/admin/")
    }

    pub fn requires_auth(&self) -> bool {
        self.is_admin() && *self != Route::AdminLogin
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of guarding a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect { from: Route, to: Route },
}

impl Navigation {
    /// The route that ends up on screen.
    pub fn target(&self) -> Route {
        match self {
            Navigation::Render(route) => *route,
            Navigation::Redirect { to, .. } => *to,
        }
    }
}

pub fn guard(route: Route, authenticated: bool) -> Navigation {
    match route {
        r if r.requires_auth() && !authenticated => Navigation::Redirect {
            from: r,
            to: Route::AdminLogin,
        },
        Route::AdminLogin if authenticated => Navigation::Redirect {
            from: Route::AdminLogin,
            to: Route::AdminDashboard,
        },
        r => Navigation::Render(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/fixtures/"), Some(Route::Fixtures));
        assert_eq!(Route::parse("/admin/teams?tab=1"), Some(Route::AdminTeams));
        assert_eq!(Route::parse("/clubs"), Some(Route::Teams));
        assert_eq!(Route::parse("/admin"), None);
        assert_eq!(Route::resolve("/nowhere"), Route::Home);
    }

    #[test]
    fn test_every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
    }

    #[test]
    fn test_guard_redirects_unauthenticated_admin_routes() {
        for route in Route::ALL.into_iter().filter(Route::requires_auth) {
            assert_eq!(
                guard(route, false),
                Navigation::Redirect {
                    from: route,
                    to: Route::AdminLogin
                }
            );
            assert_eq!(guard(route, true), Navigation::Render(route));
        }
    }

    #[test]
    fn test_guard_login_route() {
        assert_eq!(
            guard(Route::AdminLogin, false),
            Navigation::Render(Route::AdminLogin)
        );
        assert_eq!(
            guard(Route::AdminLogin, true).target(),
            Route::AdminDashboard
        );
    }

    #[test]
    fn test_public_routes_always_render() {
        for route in Route::PUBLIC_NAV {
            assert!(!route.is_admin());
            assert_eq!(guard(route, false), Navigation::Render(route));
            assert_eq!(guard(route, true), Navigation::Render(route));
        }
    }
}
