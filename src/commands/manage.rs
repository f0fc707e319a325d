//! Admin CRUD commands.
//!
//! Each command runs the same cycle as the admin pages: mount the editor,
//! fill the draft, validate, upload any image, submit once, re-fetch.

use std::path::Path;

use super::{print_json, print_visit};
use crate::{
    admin::{
        AssumeYes, DeleteOutcome, Editor, FixtureEndpoints, FixtureForm, NewsForm, PlayerForm,
        PromptConfirm, Resource, SaveOutcome, TeamForm,
    },
    app::{App, Page},
    cli::{
        FixtureArgs, FixtureCmd, NewsArgs, NewsCmd, PlayerArgs, PlayerCmd, TeamArgs, TeamCmd,
    },
    error::NuflError,
    guard::Route,
    models::{FixtureDraft, NewsDraft, PlayerDraft, ScoreDraft, TeamDraft},
    Result,
};

/// Let the app see a failure before passing it on.
fn settle<T>(app: &mut App, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        app.observe(e);
    }
    result
}

async fn list(app: &mut App, route: Route, as_json: bool) -> Result<()> {
    let visit = app.visit(route.path()).await;
    if let Page::Login = visit.page {
        return Err(NuflError::LoginRequired {
            path: route.path().to_string(),
        });
    }
    print_visit(app, &visit, as_json)
}

/// Mount the form, switch to edit mode when `id` is given, apply the
/// command line values and validate.
async fn prepare<R: Resource>(
    app: &mut App,
    id: Option<R::Id>,
    apply: impl FnOnce(&mut R::Draft),
) -> Result<Editor<R>> {
    let mut editor = app.mount_editor::<R>().await?;
    if let Some(id) = id {
        editor.begin_edit(id)?;
    }
    apply(editor.draft_mut());
    R::validate(editor.draft(), editor.teams())?;
    Ok(editor)
}

/// Upload `file` and store its URL in `target`.
async fn bind_upload(app: &mut App, file: Option<&Path>, target: &mut Option<String>) -> Result<()> {
    let Some(path) = file else {
        return Ok(());
    };
    let result = app.api().upload_image(path).await;
    let uploaded = settle(app, result)?;
    println!("✓ Uploaded {} → {}", path.display(), uploaded.url);
    *target = Some(uploaded.url);
    Ok(())
}

fn report_save<R: Resource>(
    app: &mut App,
    result: Result<SaveOutcome>,
    stale: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let outcome = settle(app, result)?;
    let (verb, ack) = match &outcome {
        SaveOutcome::Created(ack) => ("Created", ack),
        SaveOutcome::Updated(ack) => ("Updated", ack),
    };
    if let Some(reason) = stale {
        eprintln!("! Saved, but the {} list could not be reloaded: {}", R::NAME, reason);
    }
    if as_json {
        return print_json(ack);
    }
    match ack.id {
        Some(id) => println!("✓ {} {} #{}", verb, R::NAME, id),
        None => println!("✓ {} {}", verb, R::NAME),
    }
    if let Some(message) = ack.message.as_deref() {
        println!("  {}", message);
    }
    Ok(())
}

async fn delete<R: Resource>(app: &mut App, id: R::Id, yes: bool, as_json: bool) -> Result<()> {
    let mut editor = app.mount_editor::<R>().await?;
    let result = if yes {
        editor.delete(app.api(), id, &mut AssumeYes).await
    } else {
        editor.delete(app.api(), id, &mut PromptConfirm).await
    };
    let outcome = settle(app, result)?;
    if let Some(reason) = editor.load_error() {
        eprintln!("! Deleted, but the {} list could not be reloaded: {}", R::NAME, reason);
    }
    match outcome {
        DeleteOutcome::Deleted(ack) if as_json => print_json(&ack),
        DeleteOutcome::Deleted(_) => {
            println!("✓ Deleted {} #{}", R::NAME, id);
            Ok(())
        }
        DeleteOutcome::Cancelled => {
            println!("Cancelled; nothing was deleted.");
            Ok(())
        }
    }
}

/// Set `target` when a value was given. An empty value clears the field.
fn set_opt(target: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        *target = Some(v.trim().to_string()).filter(|s| !s.is_empty());
    }
}

fn set_some<T: Copy>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

pub fn apply_team(args: &TeamArgs, draft: &mut TeamDraft) {
    if let Some(name) = &args.name {
        draft.name = name.trim().to_string();
    }
    set_opt(&mut draft.university, &args.university);
    set_opt(&mut draft.city, &args.city);
    set_opt(&mut draft.stadium, &args.stadium);
    set_some(&mut draft.founded, args.founded);
    set_opt(&mut draft.coach, &args.coach);
    set_opt(&mut draft.logo_url, &args.logo_url);
}

pub fn apply_player(args: &PlayerArgs, draft: &mut PlayerDraft) {
    if let Some(name) = &args.name {
        draft.name = name.trim().to_string();
    }
    set_some(&mut draft.position, args.position);
    set_some(&mut draft.team_id, args.team);
    set_some(&mut draft.jersey_number, args.jersey_number);
    set_some(&mut draft.age, args.age);
    set_opt(&mut draft.nationality, &args.nationality);
    set_some(&mut draft.height, args.height);
    set_some(&mut draft.weight, args.weight);
    set_opt(&mut draft.photo_url, &args.photo_url);
}

pub fn apply_fixture(args: &FixtureArgs, draft: &mut FixtureDraft) {
    set_some(&mut draft.home_team_id, args.home);
    set_some(&mut draft.away_team_id, args.away);
    if let Some(date) = &args.date {
        draft.date = date.trim().to_string();
    }
    if let Some(time) = &args.time {
        draft.time = time.trim().to_string();
    }
    if let Some(venue) = &args.venue {
        draft.venue = venue.trim().to_string();
    }
    if let Some(status) = args.status {
        draft.status = status;
    }
}

pub fn apply_news(args: &NewsArgs, draft: &mut NewsDraft) {
    if let Some(title) = &args.title {
        draft.title = title.trim().to_string();
    }
    if let Some(content) = &args.content {
        draft.content = content.clone();
    }
    set_opt(&mut draft.author, &args.author);
    set_opt(&mut draft.category, &args.category);
    set_opt(&mut draft.image_url, &args.image_url);
    if let Some(published) = args.published {
        draft.published = published;
    }
}

pub async fn handle_team_cmd(app: &mut App, cmd: TeamCmd, as_json: bool) -> Result<()> {
    let (id, args) = match cmd {
        TeamCmd::List => return list(app, TeamForm::ROUTE, as_json).await,
        TeamCmd::Delete { id, yes } => return delete::<TeamForm>(app, id, yes, as_json).await,
        TeamCmd::Add(args) => (None, args),
        TeamCmd::Edit { id, args } => (Some(id), args),
    };

    let mut editor = prepare::<TeamForm>(app, id, |d| apply_team(&args, d)).await?;
    bind_upload(app, args.logo.as_deref(), &mut editor.draft_mut().logo_url).await?;
    let result = editor.submit(app.api()).await;
    report_save::<TeamForm>(app, result, editor.load_error(), as_json)
}

pub async fn handle_player_cmd(app: &mut App, cmd: PlayerCmd, as_json: bool) -> Result<()> {
    let (id, args) = match cmd {
        PlayerCmd::List => return list(app, PlayerForm::ROUTE, as_json).await,
        PlayerCmd::Delete { id, yes } => return delete::<PlayerForm>(app, id, yes, as_json).await,
        PlayerCmd::Add(args) => (None, args),
        PlayerCmd::Edit { id, args } => (Some(id), args),
    };

    let mut editor = prepare::<PlayerForm>(app, id, |d| apply_player(&args, d)).await?;
    bind_upload(app, args.photo.as_deref(), &mut editor.draft_mut().photo_url).await?;
    let result = editor.submit(app.api()).await;
    report_save::<PlayerForm>(app, result, editor.load_error(), as_json)
}

pub async fn handle_fixture_cmd(app: &mut App, cmd: FixtureCmd, as_json: bool) -> Result<()> {
    let (id, args, endpoints) = match cmd {
        FixtureCmd::List => return list(app, FixtureForm::ROUTE, as_json).await,
        FixtureCmd::Delete { id, yes } => {
            return delete::<FixtureForm>(app, id, yes, as_json).await
        }
        FixtureCmd::Result {
            id,
            home_score,
            away_score,
            legacy,
        } => {
            let endpoints = if legacy {
                FixtureEndpoints::Legacy
            } else {
                FixtureEndpoints::Current
            };
            let mut editor = app.mount_editor::<FixtureForm>().await?;
            if editor.find(id).is_none() {
                return Err(NuflError::NotFound {
                    resource: FixtureForm::NAME,
                    id: id.as_u64(),
                });
            }
            let score = ScoreDraft {
                home_score,
                away_score,
            };
            let result = editor.record_result(app.api(), id, score, endpoints).await;
            let ack = settle(app, result)?;
            if let Some(reason) = editor.load_error() {
                eprintln!("! Recorded, but the fixture list could not be reloaded: {}", reason);
            }
            if as_json {
                return print_json(&ack);
            }
            println!("✓ Result recorded for fixture #{}: {} - {}", id, home_score, away_score);
            return Ok(());
        }
        FixtureCmd::Add { args, legacy } => (
            None,
            args,
            if legacy {
                FixtureEndpoints::Legacy
            } else {
                FixtureEndpoints::Current
            },
        ),
        FixtureCmd::Edit { id, args } => (Some(id), args, FixtureEndpoints::Current),
    };

    let mut editor = prepare::<FixtureForm>(app, id, |d| apply_fixture(&args, d)).await?;
    let result = editor.submit_via(app.api(), endpoints).await;
    report_save::<FixtureForm>(app, result, editor.load_error(), as_json)
}

pub async fn handle_news_cmd(app: &mut App, cmd: NewsCmd, as_json: bool) -> Result<()> {
    let (id, args) = match cmd {
        NewsCmd::List => return list(app, NewsForm::ROUTE, as_json).await,
        NewsCmd::Delete { id, yes } => return delete::<NewsForm>(app, id, yes, as_json).await,
        NewsCmd::Add(args) => (None, args),
        NewsCmd::Edit { id, args } => (Some(id), args),
    };

    let mut editor = prepare::<NewsForm>(app, id, |d| apply_news(&args, d)).await?;
    bind_upload(app, args.image.as_deref(), &mut editor.draft_mut().image_url).await?;
    let result = editor.submit(app.api()).await;
    report_save::<NewsForm>(app, result, editor.load_error(), as_json)
}
