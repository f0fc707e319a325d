//! Session commands and the admin dashboard.

use serde_json::json;

use super::{print_json, print_visit, resolve_password};
use crate::{
    app::{App, Page},
    error::NuflError,
    guard::{Navigation, Route},
    models::Credentials,
    views, Result,
};

pub async fn handle_login(app: &mut App, username: String, password: Option<String>) -> Result<()> {
    if let Navigation::Redirect { .. } = app.navigate(Route::AdminLogin) {
        let who = app.user().map(|u| u.username.as_str()).unwrap_or("an admin");
        println!("Already signed in as {}. Run `nufl admin logout` first to switch.", who);
        return Ok(());
    }

    let password = resolve_password(password)?;
    let user = app.login(&Credentials { username, password }).await?;
    println!("✓ Signed in as {}", user.username);
    Ok(())
}

pub async fn handle_logout(app: &mut App) -> Result<()> {
    app.logout().await?;
    println!("✓ Signed out");
    Ok(())
}

pub fn handle_whoami(app: &App, as_json: bool) -> Result<()> {
    if as_json {
        return print_json(&json!({
            "authenticated": app.is_authenticated(),
            "user": app.user(),
            "api_url": app.api().base_url(),
        }));
    }
    match app.user() {
        Some(user) if app.is_authenticated() => println!("Signed in as {}", user.username),
        _ if app.is_authenticated() => println!("Signed in"),
        _ => println!("Not signed in"),
    }
    println!("API: {}", app.api().base_url());
    Ok(())
}

pub async fn handle_dashboard(app: &mut App, as_json: bool) -> Result<()> {
    let visit = app.visit(Route::AdminDashboard.path()).await;
    match &visit.page {
        Page::Login => Err(NuflError::LoginRequired {
            path: Route::AdminDashboard.path().to_string(),
        }),
        Page::Dashboard(stats) if !as_json => {
            println!("{}", views::format::heading(Route::AdminDashboard.title()));
            print!("{}", views::render_dashboard(stats, app.user()));
            Ok(())
        }
        _ => print_visit(app, &visit, as_json),
    }
}
