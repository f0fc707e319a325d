//! Bindings of the admin workflow to the four editable record types.

use tracing::{error, info};

use super::{Editor, Mode, Resource, SaveOutcome};
use crate::{
    api::ApiClient,
    guard::Route,
    models::{
        Ack, Fixture, FixtureDraft, NewsArticle, NewsDraft, Player, PlayerDraft, ScoreDraft, Team,
        TeamDraft,
    },
    FixtureId, NewsId, PlayerId, Result, TeamId,
};

#[derive(Debug, Clone, Copy)]
pub struct TeamForm;

impl Resource for TeamForm {
    type Record = Team;
    type Id = TeamId;
    type Draft = TeamDraft;

    const NAME: &'static str = "team";
    const ROUTE: Route = Route::AdminTeams;

    fn id(record: &Team) -> TeamId {
        record.id
    }

    fn to_draft(record: &Team) -> TeamDraft {
        TeamDraft::from(record)
    }

    fn validate(draft: &TeamDraft, _teams: &[Team]) -> Result<()> {
        draft.validate()
    }

    async fn list(api: &ApiClient) -> Result<Vec<Team>> {
        api.list_teams().await
    }

    async fn create(api: &ApiClient, draft: &TeamDraft) -> Result<Ack> {
        api.create_team(draft).await
    }

    async fn update(api: &ApiClient, id: TeamId, draft: &TeamDraft) -> Result<Ack> {
        api.update_team(id, draft).await
    }

    async fn delete(api: &ApiClient, id: TeamId) -> Result<Ack> {
        api.delete_team(id).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlayerForm;

impl Resource for PlayerForm {
    type Record = Player;
    type Id = PlayerId;
    type Draft = PlayerDraft;

    const NAME: &'static str = "player";
    const ROUTE: Route = Route::AdminPlayers;
    const NEEDS_TEAMS: bool = true;

    fn id(record: &Player) -> PlayerId {
        record.id
    }

    fn to_draft(record: &Player) -> PlayerDraft {
        PlayerDraft::from(record)
    }

    fn validate(draft: &PlayerDraft, teams: &[Team]) -> Result<()> {
        draft.validate(teams)
    }

    async fn list(api: &ApiClient) -> Result<Vec<Player>> {
        api.list_players().await
    }

    async fn create(api: &ApiClient, draft: &PlayerDraft) -> Result<Ack> {
        api.create_player(draft).await
    }

    async fn update(api: &ApiClient, id: PlayerId, draft: &PlayerDraft) -> Result<Ack> {
        api.update_player(id, draft).await
    }

    async fn delete(api: &ApiClient, id: PlayerId) -> Result<Ack> {
        api.delete_player(id).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixtureForm;

impl Resource for FixtureForm {
    type Record = Fixture;
    type Id = FixtureId;
    type Draft = FixtureDraft;

    const NAME: &'static str = "fixture";
    const ROUTE: Route = Route::AdminFixtures;
    const NEEDS_TEAMS: bool = true;

    fn id(record: &Fixture) -> FixtureId {
        record.id
    }

    fn to_draft(record: &Fixture) -> FixtureDraft {
        FixtureDraft::from(record)
    }

    fn validate(draft: &FixtureDraft, teams: &[Team]) -> Result<()> {
        draft.validate(teams)
    }

    async fn list(api: &ApiClient) -> Result<Vec<Fixture>> {
        api.list_fixtures().await
    }

    async fn create(api: &ApiClient, draft: &FixtureDraft) -> Result<Ack> {
        api.create_fixture(draft).await
    }

    async fn update(api: &ApiClient, id: FixtureId, draft: &FixtureDraft) -> Result<Ack> {
        api.update_fixture(id, draft).await
    }

    async fn delete(api: &ApiClient, id: FixtureId) -> Result<Ack> {
        api.delete_fixture(id).await
    }
}

/// Which fixture endpoints a write goes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FixtureEndpoints {
    /// `/fixtures` and `/fixtures/:id/result`
    #[default]
    Current,
    /// `/add_fixture` and `/update_result/:id`
    Legacy,
}

impl Editor<FixtureForm> {
    /// Like [`Editor::submit`], but creates through `/add_fixture` when asked
    /// to. Updates have no legacy endpoint.
    pub async fn submit_via(
        &mut self,
        api: &ApiClient,
        endpoints: FixtureEndpoints,
    ) -> Result<SaveOutcome> {
        if endpoints == FixtureEndpoints::Current || self.mode() != Mode::Create {
            return self.submit(api).await;
        }
        FixtureForm::validate(self.draft(), self.teams())?;
        let legacy = self.draft().to_legacy(self.teams())?;

        let ack = api.add_fixture_legacy(&legacy).await.map_err(|e| {
            error!(resource = FixtureForm::NAME, error = %e, "failed to save");
            e
        })?;
        info!(resource = FixtureForm::NAME, "created via /add_fixture");

        self.cancel();
        self.refresh_after_save(api).await;
        Ok(SaveOutcome::Created(ack))
    }

    /// Record the final score of a fixture, then re-fetch.
    pub async fn record_result(
        &mut self,
        api: &ApiClient,
        id: FixtureId,
        score: ScoreDraft,
        endpoints: FixtureEndpoints,
    ) -> Result<Ack> {
        let recorded = match endpoints {
            FixtureEndpoints::Current => api.record_result(id, &score).await,
            FixtureEndpoints::Legacy => api.update_result_legacy(id, &score).await,
        };
        let ack = recorded.map_err(|e| {
            error!(resource = FixtureForm::NAME, %id, error = %e, "failed to record result");
            e
        })?;
        info!(
            %id,
            home = score.home_score,
            away = score.away_score,
            "result recorded"
        );
        self.refresh_after_save(api).await;
        Ok(ack)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NewsForm;

impl Resource for NewsForm {
    type Record = NewsArticle;
    type Id = NewsId;
    type Draft = NewsDraft;

    const NAME: &'static str = "news article";
    const ROUTE: Route = Route::AdminNews;

    fn id(record: &NewsArticle) -> NewsId {
        record.id
    }

    fn to_draft(record: &NewsArticle) -> NewsDraft {
        NewsDraft::from(record)
    }

    fn validate(draft: &NewsDraft, _teams: &[Team]) -> Result<()> {
        draft.validate()
    }

    async fn list(api: &ApiClient) -> Result<Vec<NewsArticle>> {
        api.list_news().await
    }

    async fn create(api: &ApiClient, draft: &NewsDraft) -> Result<Ack> {
        api.create_news(draft).await
    }

    async fn update(api: &ApiClient, id: NewsId, draft: &NewsDraft) -> Result<Ack> {
        api.update_news(id, draft).await
    }

    async fn delete(api: &ApiClient, id: NewsId) -> Result<Ack> {
        api.delete_news(id).await
    }
}
