//! Public page commands.

use serde::Serialize;
use tracing::error;

use super::{print_json, print_visit};
use crate::{
    app::{App, Page},
    guard::Route,
    views, FixtureFilter, FixtureId, NewsId, PlayerId, Result, TeamId,
};

/// Visit `path` and print whatever the guard lets through.
pub async fn handle_open(app: &mut App, path: &str, as_json: bool) -> Result<()> {
    let visit = app.visit(path).await;
    print_visit(app, &visit, as_json)
}

pub async fn handle_page(app: &mut App, route: Route, as_json: bool) -> Result<()> {
    handle_open(app, route.path(), as_json).await
}

/// Print one fetched record, or an error state when the fetch failed.
/// Only an expired session is passed up.
fn show_record<T: Serialize>(
    what: &str,
    fetched: Result<T>,
    as_json: bool,
    render: impl FnOnce(&T) -> String,
) -> Result<()> {
    match fetched {
        Ok(record) if as_json => print_json(&record),
        Ok(record) => {
            print!("{}", render(&record));
            Ok(())
        }
        Err(e) if e.is_auth_failure() => Err(e),
        Err(e) => {
            error!(error = %e, "failed to load {}", what);
            println!("Could not load {}: {}", what, e);
            Ok(())
        }
    }
}

pub async fn handle_fixtures(
    app: &mut App,
    filter: FixtureFilter,
    id: Option<FixtureId>,
    as_json: bool,
) -> Result<()> {
    if let Some(id) = id {
        let fetched = app.api().get_fixture(id).await;
        return show_record("fixture", fetched, as_json, |f| {
            views::render_fixture(f, &[])
        });
    }

    let mut visit = app.visit(Route::Fixtures.path()).await;
    if let Page::Fixtures(fixtures) = &mut visit.page {
        if as_json {
            fixtures.retain(|f| filter.matches(f));
            return print_json(&*fixtures);
        }
        println!("{}", views::format::heading(Route::Fixtures.title()));
        print!("{}", views::render_fixtures(fixtures, &[], filter));
        return Ok(());
    }
    print_visit(app, &visit, as_json)
}

pub async fn handle_results(
    app: &mut App,
    matchweek: Option<FixtureId>,
    as_json: bool,
) -> Result<()> {
    let visit = app.visit(Route::Results.path()).await;
    if let Page::Results(fixtures) = &visit.page {
        if as_json {
            let shown: Vec<_> = views::results::completed(fixtures)
                .into_iter()
                .filter(|f| matchweek.map_or(true, |week| f.id == week))
                .collect();
            return print_json(&shown);
        }
        println!("{}", views::format::heading(Route::Results.title()));
        print!("{}", views::render_results(fixtures, &[], matchweek));
        return Ok(());
    }
    print_visit(app, &visit, as_json)
}

pub async fn handle_news(app: &mut App, id: Option<NewsId>, as_json: bool) -> Result<()> {
    match id {
        Some(id) => {
            let fetched = app.api().get_news(id).await;
            show_record("news article", fetched, as_json, views::render_article)
        }
        None => handle_page(app, Route::News, as_json).await,
    }
}

pub async fn handle_teams(app: &mut App, id: Option<TeamId>, as_json: bool) -> Result<()> {
    let Some(id) = id else {
        return handle_page(app, Route::Teams, as_json).await;
    };

    let api = app.api();
    let fetched = tokio::try_join!(api.get_team(id), api.list_team_players(id));
    show_record("team", fetched, as_json, |(team, squad)| {
        views::render_team(team, squad)
    })
}

pub async fn handle_players(
    app: &mut App,
    team: Option<TeamId>,
    id: Option<PlayerId>,
    as_json: bool,
) -> Result<()> {
    if let Some(id) = id {
        let api = app.api();
        let fetched = tokio::try_join!(api.get_player(id), api.list_teams());
        return show_record("player", fetched, as_json, |(player, teams)| {
            views::render_player(player, teams)
        });
    }

    let mut visit = app.visit(Route::Players.path()).await;
    if let Page::Players { players, teams } = &mut visit.page {
        if as_json {
            players.retain(|p| team.map_or(true, |id| p.team_id == Some(id)));
            return print_json(&*players);
        }
        println!("{}", views::format::heading(Route::Players.title()));
        print!("{}", views::render_players(players, teams, team));
        return Ok(());
    }
    print_visit(app, &visit, as_json)
}
