//! Command implementations for the NUFL CLI

pub mod admin;
pub mod manage;
pub mod public;

use serde::Serialize;

use crate::{
    app::{App, Page, Visit},
    guard::Navigation,
    Result,
};

pub const PASSWORD_ENV_VAR: &str = "NUFL_PASSWORD";

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a visited page, noting any redirect first.
pub fn print_visit(app: &App, visit: &Visit, as_json: bool) -> Result<()> {
    if as_json {
        let mut body = visit.page.to_json()?;
        if let (Navigation::Redirect { to, .. }, Some(obj)) = (visit.navigation, body.as_object_mut())
        {
            obj.insert("redirected_to".to_string(), to.path().into());
        }
        return print_json(&body);
    }

    if let Navigation::Redirect { from, to } = visit.navigation {
        println!("→ {} requires signing in; showing {}", from, to);
    }
    println!(
        "{}\n",
        crate::views::render_nav(visit.navigation.target(), app.is_authenticated())
    );
    println!("{}", crate::views::format::heading(visit.navigation.target().title()));
    print!("{}", visit.page.render());
    if let Page::Unavailable { .. } = visit.page {
        println!("(check that the league API is reachable and try again)");
    }
    Ok(())
}

/// Password from the flag, then `NUFL_PASSWORD`, then a masked prompt.
pub fn resolve_password(flag: Option<String>) -> Result<String> {
    if let Some(password) = flag.filter(|p| !p.is_empty()) {
        return Ok(password);
    }
    if let Ok(password) = std::env::var(PASSWORD_ENV_VAR) {
        if !password.is_empty() {
            return Ok(password);
        }
    }
    let password = inquire::Password::new("Password:")
        .without_confirmation()
        .prompt()?;
    Ok(password)
}
