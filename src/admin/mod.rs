//! Admin form workflow.
//!
//! Every admin page follows the same cycle: mount (fetch the list, plus the
//! team list when the form has team pickers), edit a draft in create or edit
//! mode, submit exactly one create or update, reset, re-fetch. Deletes are
//! confirmed first. [`Editor`] implements the cycle once; [`Resource`] binds
//! it to one record type and its endpoints.

pub mod resources;

use std::{fmt, future::Future};
use tracing::{debug, error, info};

use crate::{
    api::ApiClient,
    error::NuflError,
    guard::Route,
    models::{Ack, Team},
    Result,
};

pub use resources::{FixtureEndpoints, FixtureForm, NewsForm, PlayerForm, TeamForm};

/// A record type editable from the admin area.
pub trait Resource {
    type Record: Clone + fmt::Debug;
    type Id: Copy + Eq + fmt::Display + fmt::Debug + Into<u64>;
    type Draft: Clone + Default + fmt::Debug;

    /// Singular noun used in prompts and logs.
    const NAME: &'static str;
    /// Admin page hosting the form.
    const ROUTE: Route;
    /// Whether the form picks teams and so needs the team list on mount.
    const NEEDS_TEAMS: bool = false;

    fn id(record: &Self::Record) -> Self::Id;
    fn to_draft(record: &Self::Record) -> Self::Draft;
    fn validate(draft: &Self::Draft, teams: &[Team]) -> Result<()>;

    fn list(api: &ApiClient) -> impl Future<Output = Result<Vec<Self::Record>>>;
    fn create(api: &ApiClient, draft: &Self::Draft) -> impl Future<Output = Result<Ack>>;
    fn update(
        api: &ApiClient,
        id: Self::Id,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<Ack>>;
    fn delete(api: &ApiClient, id: Self::Id) -> impl Future<Output = Result<Ack>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<Id> {
    Create,
    Edit(Id),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created(Ack),
    Updated(Ack),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(Ack),
    Cancelled,
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Confirms everything (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Interactive y/N prompt on the terminal. Defaults to no; a cancelled or
/// failed prompt counts as no.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        match inquire::Confirm::new(prompt).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(e) => {
                debug!(error = %e, "confirmation prompt ended without an answer");
                false
            }
        }
    }
}

pub fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to delete this {}?", name)
}

/// State of one admin page.
pub struct Editor<R: Resource> {
    records: Vec<R::Record>,
    teams: Vec<Team>,
    draft: R::Draft,
    mode: Mode<R::Id>,
    loading: bool,
    /// Set when the last re-fetch failed; the list shown may be stale.
    load_error: Option<String>,
}

impl<R: Resource> fmt::Debug for Editor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("resource", &R::NAME)
            .field("records", &self.records.len())
            .field("teams", &self.teams.len())
            .field("draft", &self.draft)
            .field("mode", &self.mode)
            .field("loading", &self.loading)
            .field("load_error", &self.load_error)
            .finish()
    }
}

impl<R: Resource> Default for Editor<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            teams: Vec::new(),
            draft: R::Draft::default(),
            mode: Mode::Create,
            loading: false,
            load_error: None,
        }
    }
}

impl<R: Resource> Editor<R> {
    /// Fetch the page's data. When the form needs the team list both
    /// requests run concurrently and must both succeed.
    pub async fn mount(api: &ApiClient) -> Result<Self> {
        let mut editor = Self {
            loading: true,
            ..Self::default()
        };
        debug!(resource = R::NAME, "mounting editor");

        let fetched = if R::NEEDS_TEAMS {
            tokio::try_join!(R::list(api), api.list_teams())
        } else {
            R::list(api).await.map(|records| (records, Vec::new()))
        };
        editor.loading = false;

        let (records, teams) = fetched.map_err(|e| {
            error!(resource = R::NAME, error = %e, "failed to load");
            e
        })?;
        editor.records = records;
        editor.teams = teams;
        Ok(editor)
    }

    pub fn records(&self) -> &[R::Record] {
        &self.records
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut R::Draft {
        &mut self.draft
    }

    pub fn mode(&self) -> Mode<R::Id> {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Why the last re-fetch failed, if it did.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn find(&self, id: R::Id) -> Option<&R::Record> {
        self.records.iter().find(|r| R::id(r) == id)
    }

    /// Re-fetch the list. On failure the old list is kept and the error is
    /// recorded in [`Editor::load_error`].
    pub async fn refresh(&mut self, api: &ApiClient) -> Result<()> {
        self.loading = true;
        let fetched = R::list(api).await;
        self.loading = false;
        match fetched {
            Ok(records) => {
                self.records = records;
                self.load_error = None;
                Ok(())
            }
            Err(e) => {
                error!(resource = R::NAME, error = %e, "failed to refresh");
                self.load_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Re-fetch after a mutation the server already accepted. A failure is
    /// logged and left in [`Editor::load_error`]; the mutation still counts.
    pub(crate) async fn refresh_after_save(&mut self, api: &ApiClient) {
        let _ = self.refresh(api).await;
    }

    /// Switch to edit mode with every field of the record copied into the
    /// draft.
    pub fn begin_edit(&mut self, id: R::Id) -> Result<()> {
        let record = self.find(id).ok_or_else(|| NuflError::NotFound {
            resource: R::NAME,
            id: id.into(),
        })?;
        self.draft = R::to_draft(record);
        self.mode = Mode::Edit(id);
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.draft = R::Draft::default();
        self.mode = Mode::Create;
    }

    /// Validate, then issue exactly one create or update, reset the form and
    /// re-fetch once. A rejected draft is kept and nothing is sent.
    pub async fn submit(&mut self, api: &ApiClient) -> Result<SaveOutcome> {
        R::validate(&self.draft, &self.teams)?;

        self.loading = true;
        let saved = match self.mode {
            Mode::Create => R::create(api, &self.draft).await.map(SaveOutcome::Created),
            Mode::Edit(id) => R::update(api, id, &self.draft)
                .await
                .map(SaveOutcome::Updated),
        };
        self.loading = false;

        let outcome = saved.map_err(|e| {
            error!(resource = R::NAME, error = %e, "failed to save");
            e
        })?;
        match &outcome {
            SaveOutcome::Created(ack) => info!(resource = R::NAME, id = ?ack.id, "created"),
            SaveOutcome::Updated(_) => info!(resource = R::NAME, "updated"),
        }

        self.cancel();
        self.refresh_after_save(api).await;
        Ok(outcome)
    }

    /// Ask for confirmation, then delete `id` and re-fetch. Declining sends
    /// nothing.
    pub async fn delete(
        &mut self,
        api: &ApiClient,
        id: R::Id,
        confirm: &mut impl Confirm,
    ) -> Result<DeleteOutcome> {
        if !confirm.confirm(&delete_prompt(R::NAME)) {
            debug!(resource = R::NAME, %id, "delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let ack = R::delete(api, id).await.map_err(|e| {
            error!(resource = R::NAME, %id, error = %e, "failed to delete");
            e
        })?;
        info!(resource = R::NAME, %id, "deleted");

        if self.mode == Mode::Edit(id) {
            self.cancel();
        }
        self.refresh_after_save(api).await;
        Ok(DeleteOutcome::Deleted(ack))
    }
}
