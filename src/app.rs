//! One application load.
//!
//! [`App::start`] asks the API once whether the session is signed in. Every
//! visit after that is guarded with that flag: an admin route that is not
//! allowed redirects to the login page without fetching anything.

use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use crate::{
    admin::{Editor, FixtureForm, NewsForm, PlayerForm, Resource, TeamForm},
    api::ApiClient,
    error::NuflError,
    guard::{guard, Navigation, Route},
    models::{
        AuthStatus, Credentials, Fixture, LeagueStats, LeagueTableRow, NewsArticle, Player, Team,
        User,
    },
    views::{self, HomePage, StatsPage},
    FixtureFilter, Result,
};

/// Data mounted for a page, ready to render.
#[derive(Debug)]
pub enum Page {
    Home(HomePage),
    Fixtures(Vec<Fixture>),
    Results(Vec<Fixture>),
    Tables(Vec<LeagueTableRow>),
    Stats {
        page: StatsPage,
        fixtures: Vec<Fixture>,
    },
    News(Vec<NewsArticle>),
    Teams(Vec<Team>),
    Players {
        players: Vec<Player>,
        teams: Vec<Team>,
    },
    Login,
    Dashboard(LeagueStats),
    AdminTeams(Editor<TeamForm>),
    AdminPlayers(Editor<PlayerForm>),
    AdminFixtures(Editor<FixtureForm>),
    AdminNews(Editor<NewsForm>),
    /// A fetch failed; the page shows an error state instead of data.
    Unavailable {
        route: Route,
        message: String,
    },
}

impl Page {
    pub fn render(&self) -> String {
        match self {
            Page::Home(home) => home.render(),
            Page::Fixtures(fixtures) => views::render_fixtures(fixtures, &[], FixtureFilter::All),
            Page::Results(fixtures) => views::render_results(fixtures, &[], None),
            Page::Tables(rows) => views::render_standings(rows),
            Page::Stats { page, fixtures } => page.render(fixtures, &[]),
            Page::News(articles) => views::render_news(articles),
            Page::Teams(teams) => views::render_teams(teams),
            Page::Players { players, teams } => views::render_players(players, teams, None),
            Page::Login => {
                "Sign in with `nufl admin login --username <name>` to manage the league.\n"
                    .to_string()
            }
            Page::Dashboard(stats) => views::render_dashboard(stats, None),
            Page::AdminTeams(editor) => views::render_teams(editor.records()),
            Page::AdminPlayers(editor) => {
                views::render_players(editor.records(), editor.teams(), None)
            }
            Page::AdminFixtures(editor) => {
                let mut out = String::new();
                for fixture in editor.records() {
                    out.push_str(&views::fixtures::fixture_row(fixture, editor.teams()));
                    out.push('\n');
                }
                if out.is_empty() {
                    out.push_str("No fixtures scheduled.\n");
                }
                out
            }
            Page::AdminNews(editor) => views::render_news(editor.records()),
            Page::Unavailable { route, message } => {
                format!("Could not load {}: {}\n", route.title(), message)
            }
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(match self {
            Page::Home(home) => serde_json::to_value(home)?,
            Page::Fixtures(fixtures) | Page::Results(fixtures) => serde_json::to_value(fixtures)?,
            Page::Tables(rows) => serde_json::to_value(rows)?,
            Page::Stats { page, .. } => serde_json::to_value(page)?,
            Page::News(articles) => serde_json::to_value(articles)?,
            Page::Teams(teams) => serde_json::to_value(teams)?,
            Page::Players { players, .. } => serde_json::to_value(players)?,
            Page::Login => json!({ "login_required": true }),
            Page::Dashboard(stats) => serde_json::to_value(stats)?,
            Page::AdminTeams(editor) => serde_json::to_value(editor.records())?,
            Page::AdminPlayers(editor) => serde_json::to_value(editor.records())?,
            Page::AdminFixtures(editor) => serde_json::to_value(editor.records())?,
            Page::AdminNews(editor) => serde_json::to_value(editor.records())?,
            Page::Unavailable { route, message } => {
                json!({ "route": route.path(), "error": message })
            }
        })
    }
}

/// Result of visiting a path.
#[derive(Debug)]
pub struct Visit {
    pub navigation: Navigation,
    pub page: Page,
}

pub struct App {
    api: ApiClient,
    auth: AuthStatus,
}

impl App {
    /// Load the app: one `check_auth` call. A transport failure counts as
    /// signed out.
    pub async fn start(api: ApiClient) -> Self {
        let auth = match api.check_auth().await {
            Ok(status) => status,
            Err(e) => {
                warn!(error = %e, "check_auth failed; continuing signed out");
                AuthStatus::signed_out()
            }
        };
        debug!(authenticated = auth.authenticated, "app started");
        Self { api, auth }
    }

    /// An app with a known auth state, without asking the API.
    pub fn with_auth(api: ApiClient, auth: AuthStatus) -> Self {
        Self { api, auth }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.authenticated
    }

    pub fn user(&self) -> Option<&User> {
        self.auth.user.as_ref()
    }

    pub fn navigate(&self, route: Route) -> Navigation {
        guard(route, self.is_authenticated())
    }

    /// Record a failure seen by a caller. A rejected session flips the app
    /// to signed out, matching what the client did to the cookie jar.
    pub fn observe(&mut self, err: &NuflError) {
        if matches!(err, NuflError::Unauthorized { .. }) {
            self.auth = AuthStatus::signed_out();
        }
    }

    /// Guard, then mount the page at `path`.
    pub async fn visit(&mut self, path: &str) -> Visit {
        let requested = Route::resolve(path);
        let navigation = self.navigate(requested);
        let target = navigation.target();
        if let Navigation::Redirect { from, to } = navigation {
            info!(%from, %to, "redirected");
        }

        match self.mount(target).await {
            Ok(page) => Visit { navigation, page },
            Err(e) if e.is_auth_failure() => {
                self.observe(&e);
                Visit {
                    navigation: Navigation::Redirect {
                        from: target,
                        to: Route::AdminLogin,
                    },
                    page: Page::Login,
                }
            }
            Err(e) => {
                error!(route = %target, error = %e, "failed to load page");
                Visit {
                    navigation,
                    page: Page::Unavailable {
                        route: target,
                        message: e.to_string(),
                    },
                }
            }
        }
    }

    async fn mount(&mut self, route: Route) -> Result<Page> {
        let api = &self.api;
        Ok(match route {
            Route::Home => {
                let (fixtures, table, news) =
                    tokio::try_join!(api.list_fixtures(), api.league_table(), api.list_news())?;
                Page::Home(HomePage::new(&fixtures, table, news))
            }
            Route::Fixtures => Page::Fixtures(api.list_fixtures().await?),
            Route::Results => Page::Results(api.list_fixtures().await?),
            Route::Tables => Page::Tables(api.league_table().await?),
            Route::Stats => {
                let (fixtures, table) = tokio::try_join!(api.list_fixtures(), api.league_table())?;
                let server = if self.is_authenticated() {
                    Some(api.stats().await?)
                } else {
                    None
                };
                Page::Stats {
                    page: StatsPage::new(server, &fixtures, &table),
                    fixtures,
                }
            }
            Route::News => Page::News(api.list_news().await?),
            Route::Teams => Page::Teams(api.list_teams().await?),
            Route::Players => {
                let (players, teams) = tokio::try_join!(api.list_players(), api.list_teams())?;
                Page::Players { players, teams }
            }
            Route::AdminLogin => Page::Login,
            Route::AdminDashboard => Page::Dashboard(api.stats().await?),
            Route::AdminTeams => Page::AdminTeams(self.mount_editor().await?),
            Route::AdminPlayers => Page::AdminPlayers(self.mount_editor().await?),
            Route::AdminFixtures => Page::AdminFixtures(self.mount_editor().await?),
            Route::AdminNews => Page::AdminNews(self.mount_editor().await?),
        })
    }

    /// Mount the admin form for `R`, refusing locally when the guard would
    /// redirect.
    pub async fn mount_editor<R: Resource>(&mut self) -> Result<Editor<R>> {
        if let Navigation::Redirect { .. } = self.navigate(R::ROUTE) {
            return Err(NuflError::LoginRequired {
                path: R::ROUTE.path().to_string(),
            });
        }
        Editor::<R>::mount(&self.api).await.map_err(|e| {
            self.observe(&e);
            e
        })
    }

    pub async fn login(&mut self, credentials: &Credentials) -> Result<User> {
        let user = self.api.login(credentials).await?;
        self.auth = AuthStatus::signed_in(user.clone());
        Ok(user)
    }

    pub async fn logout(&mut self) -> Result<()> {
        let result = self.api.logout().await;
        self.auth = AuthStatus::signed_out();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionStore;

    fn offline_api() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9/api", SessionStore::in_memory()).unwrap()
    }

    #[tokio::test]
    async fn test_mount_editor_refused_when_signed_out() {
        let mut app = App::with_auth(offline_api(), AuthStatus::signed_out());
        let err = app.mount_editor::<TeamForm>().await.unwrap_err();
        assert!(matches!(err, NuflError::LoginRequired { ref path } if path == "/admin/teams"));
    }

    #[tokio::test]
    async fn test_login_page_needs_no_fetch() {
        let mut app = App::with_auth(offline_api(), AuthStatus::signed_out());
        let visit = app.visit("/admin/login").await;
        assert_eq!(visit.navigation, Navigation::Render(Route::AdminLogin));
        assert!(matches!(visit.page, Page::Login));
    }

    #[test]
    fn test_observe_unauthorized_signs_out() {
        let mut app = App::with_auth(
            offline_api(),
            AuthStatus::signed_in(User {
                username: "admin".to_string(),
            }),
        );
        app.observe(&NuflError::SameTeams);
        assert!(app.is_authenticated());
        app.observe(&NuflError::Unauthorized {
            endpoint: "/teams".to_string(),
        });
        assert!(!app.is_authenticated());
    }
}
