//! Navigation bar.

use crate::guard::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Go(Route),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub action: NavAction,
}

/// Entries shown for the current session: the public pages, then either
/// the admin link and logout, or the admin login link.
pub fn nav_entries(authenticated: bool) -> Vec<NavEntry> {
    let mut entries: Vec<NavEntry> = Route::PUBLIC_NAV
        .into_iter()
        .map(|route| NavEntry {
            label: route.title(),
            action: NavAction::Go(route),
        })
        .collect();

    if authenticated {
        entries.push(NavEntry {
            label: "Admin",
            action: NavAction::Go(Route::AdminDashboard),
        });
        entries.push(NavEntry {
            label: "Logout",
            action: NavAction::Logout,
        });
    } else {
        entries.push(NavEntry {
            label: "Admin Login",
            action: NavAction::Go(Route::AdminLogin),
        });
    }
    entries
}

/// One-line bar with the current page in brackets.
pub fn render_nav(current: Route, authenticated: bool) -> String {
    nav_entries(authenticated)
        .into_iter()
        .map(|entry| match entry.action {
            NavAction::Go(route) if route == current => format!("[{}]", entry.label),
            _ => entry.label.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_depends_on_auth() {
        let signed_out = nav_entries(false);
        assert_eq!(signed_out.len(), 9);
        assert_eq!(signed_out.last().unwrap().label, "Admin Login");
        assert!(!signed_out.iter().any(|e| e.action == NavAction::Logout));

        let signed_in = nav_entries(true);
        assert_eq!(signed_in.len(), 10);
        assert!(signed_in.iter().any(|e| e.action == NavAction::Logout));
        assert!(signed_in
            .iter()
            .any(|e| e.action == NavAction::Go(Route::AdminDashboard)));
    }

    #[test]
    fn test_render_nav_marks_current() {
        let bar = render_nav(Route::Tables, false);
        assert!(bar.starts_with("Home | Fixtures | Results | [League Table]"));
        assert!(bar.ends_with("Admin Login"));
    }
}
