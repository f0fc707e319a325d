//! Typed client for the league REST API.
//!
//! Every call carries the session cookies and `Accept: application/json`;
//! the jar is saved after each response.
//! Responses are mapped onto [`NuflError`] by status:
//!
//! - 401 clears the stored session and yields [`NuflError::Unauthorized`],
//!   which callers treat as "go to the admin login route". `/check_auth` is
//!   exempt: a 401 there just means nobody is signed in.
//! - other 4xx yield [`NuflError::Validation`] carrying the API's message.
//! - 5xx yield [`NuflError::Server`].
//!
//! Nothing is retried.

use reqwest::{
    multipart::{Form, Part},
    Client, Method, RequestBuilder, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::{
    core::{default_headers, error_message, ClientConfig, SessionStore},
    error::NuflError,
    models::{
        Ack, AuthStatus, Credentials, Fixture, FixtureDraft, LeagueStats, LeagueTableRow,
        LegacyFixture, LoginResponse, NewsArticle, NewsDraft, Player, PlayerDraft, ScoreDraft,
        Team, TeamDraft, UploadedImage, User,
    },
    FixtureId, NewsId, PlayerId, Result, TeamId,
};

pub const CHECK_AUTH_PATH: &str = "/check_auth";

/// Image types accepted by `POST /upload`.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("nufl/", env!("CARGO_PKG_VERSION")))
            .default_headers(default_headers())
            .cookie_provider(session.jar())
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Client for the configured API, with the on-disk session jar.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(
            config.api_url.clone(),
            SessionStore::open(&config.session_file),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response> {
        debug!(%method, path, "api request");
        let builder = self.http.request(method, self.url(path));
        let response = build(builder).send().await?;
        debug!(path, status = response.status().as_u16(), "api response");
        self.session.persist()?;
        Ok(response)
    }

    async fn expect_success(&self, path: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);

        if status == StatusCode::UNAUTHORIZED {
            warn!(endpoint = path, "session rejected; clearing stored cookies");
            self.session.clear()?;
            return Err(NuflError::Unauthorized {
                endpoint: path.to_string(),
            });
        }
        if status.is_client_error() {
            return Err(NuflError::Validation {
                status: status.as_u16(),
                message,
            });
        }
        Err(NuflError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Acknowledgements are informational; an empty body is fine.
    async fn decode_ack(response: Response) -> Result<Ack> {
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Ack::default());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::GET, path, |b| b).await?;
        let response = self.expect_success(path, response).await?;
        Self::decode(response).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Ack> {
        let response = self.send(method, path, |b| b.json(body)).await?;
        let response = self.expect_success(path, response).await?;
        Self::decode_ack(response).await
    }

    async fn delete_at(&self, path: &str) -> Result<Ack> {
        let response = self.send(Method::DELETE, path, |b| b).await?;
        let response = self.expect_success(path, response).await?;
        Self::decode_ack(response).await
    }

    // ---- auth ----

    /// Ask the API whether the stored session is signed in.
    pub async fn check_auth(&self) -> Result<AuthStatus> {
        let response = self.send(Method::GET, CHECK_AUTH_PATH, |b| b).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            debug!("check_auth: not signed in");
            return Ok(AuthStatus::signed_out());
        }
        let response = self.expect_success(CHECK_AUTH_PATH, response).await?;
        Self::decode(response).await
    }

    /// Sign in. On success the API's session cookie is now in the jar.
    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        let response = self
            .send(Method::POST, "/login", |b| b.json(credentials))
            .await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            return Err(NuflError::LoginRejected {
                message: error_message(&body),
            });
        }
        let response = self.expect_success("/login", response).await?;
        let body: LoginResponse = Self::decode(response).await?;
        if body.success == Some(false) {
            return Err(NuflError::LoginRejected {
                message: body.message.unwrap_or_else(|| "Login failed".to_string()),
            });
        }
        let user = body.user.unwrap_or_else(|| User {
            username: credentials.username.clone(),
        });
        info!(user = %user.username, "signed in");
        Ok(user)
    }

    /// Sign out. The local session is cleared whatever the API answers.
    pub async fn logout(&self) -> Result<()> {
        let result = match self.send(Method::POST, "/logout", |b| b).await {
            Ok(response) => self.expect_success("/logout", response).await.map(|_| ()),
            Err(e) => Err(e),
        };
        self.session.clear()?;
        match result {
            Err(NuflError::Unauthorized { .. }) => Ok(()),
            other => other,
        }
    }

    // ---- teams ----

    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        self.get_json("/teams").await
    }

    pub async fn get_team(&self, id: TeamId) -> Result<Team> {
        self.get_json(&format!("/teams/{}", id)).await
    }

    pub async fn create_team(&self, draft: &TeamDraft) -> Result<Ack> {
        self.send_json(Method::POST, "/teams", draft).await
    }

    pub async fn update_team(&self, id: TeamId, draft: &TeamDraft) -> Result<Ack> {
        self.send_json(Method::PUT, &format!("/teams/{}", id), draft)
            .await
    }

    pub async fn delete_team(&self, id: TeamId) -> Result<Ack> {
        self.delete_at(&format!("/teams/{}", id)).await
    }

    /// Squad of one team.
    pub async fn list_team_players(&self, id: TeamId) -> Result<Vec<Player>> {
        self.get_json(&format!("/teams/{}/players", id)).await
    }

    // ---- players ----

    pub async fn list_players(&self) -> Result<Vec<Player>> {
        self.get_json("/players").await
    }

    pub async fn get_player(&self, id: PlayerId) -> Result<Player> {
        self.get_json(&format!("/players/{}", id)).await
    }

    pub async fn create_player(&self, draft: &PlayerDraft) -> Result<Ack> {
        self.send_json(Method::POST, "/players", draft).await
    }

    pub async fn update_player(&self, id: PlayerId, draft: &PlayerDraft) -> Result<Ack> {
        self.send_json(Method::PUT, &format!("/players/{}", id), draft)
            .await
    }

    pub async fn delete_player(&self, id: PlayerId) -> Result<Ack> {
        self.delete_at(&format!("/players/{}", id)).await
    }

    // ---- fixtures ----

    pub async fn list_fixtures(&self) -> Result<Vec<Fixture>> {
        self.get_json("/fixtures").await
    }

    pub async fn get_fixture(&self, id: FixtureId) -> Result<Fixture> {
        self.get_json(&format!("/fixtures/{}", id)).await
    }

    pub async fn create_fixture(&self, draft: &FixtureDraft) -> Result<Ack> {
        self.send_json(Method::POST, "/fixtures", draft).await
    }

    pub async fn update_fixture(&self, id: FixtureId, draft: &FixtureDraft) -> Result<Ack> {
        self.send_json(Method::PUT, &format!("/fixtures/{}", id), draft)
            .await
    }

    pub async fn delete_fixture(&self, id: FixtureId) -> Result<Ack> {
        self.delete_at(&format!("/fixtures/{}", id)).await
    }

    /// Record a final score; the API marks the fixture completed.
    pub async fn record_result(&self, id: FixtureId, score: &ScoreDraft) -> Result<Ack> {
        self.send_json(Method::POST, &format!("/fixtures/{}/result", id), score)
            .await
    }

    /// `POST /add_fixture`, kept for deployments that predate `/fixtures`.
    /// Teams are sent by name.
    pub async fn add_fixture_legacy(&self, fixture: &LegacyFixture) -> Result<Ack> {
        self.send_json(Method::POST, "/add_fixture", fixture).await
    }

    /// `POST /update_result/:id`, kept for deployments that predate
    /// `/fixtures/:id/result`.
    pub async fn update_result_legacy(&self, id: FixtureId, score: &ScoreDraft) -> Result<Ack> {
        self.send_json(Method::POST, &format!("/update_result/{}", id), score)
            .await
    }

    // ---- news ----

    pub async fn list_news(&self) -> Result<Vec<NewsArticle>> {
        self.get_json("/news").await
    }

    pub async fn get_news(&self, id: NewsId) -> Result<NewsArticle> {
        self.get_json(&format!("/news/{}", id)).await
    }

    pub async fn create_news(&self, draft: &NewsDraft) -> Result<Ack> {
        self.send_json(Method::POST, "/news", draft).await
    }

    pub async fn update_news(&self, id: NewsId, draft: &NewsDraft) -> Result<Ack> {
        self.send_json(Method::PUT, &format!("/news/{}", id), draft)
            .await
    }

    pub async fn delete_news(&self, id: NewsId) -> Result<Ack> {
        self.delete_at(&format!("/news/{}", id)).await
    }

    // ---- aggregates ----

    pub async fn league_table(&self) -> Result<Vec<LeagueTableRow>> {
        self.get_json("/league_table").await
    }

    pub async fn stats(&self) -> Result<LeagueStats> {
        self.get_json("/stats").await
    }

    // ---- upload ----

    /// Upload an image file and return the URL the API will serve it from.
    pub async fn upload_image(&self, path: &Path) -> Result<UploadedImage> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let mime = image_mime(&file_name).ok_or_else(|| NuflError::UnsupportedImage {
            file: path.display().to_string(),
        })?;
        let bytes = tokio::fs::read(path).await?;
        debug!(file = %file_name, size = bytes.len(), "uploading image");

        let part = Part::bytes(bytes).file_name(file_name).mime_str(mime)?;
        let form = Form::new().part("file", part);

        let response = self
            .send(Method::POST, "/upload", move |b| b.multipart(form))
            .await?;
        let response = self.expect_success("/upload", response).await?;
        Self::decode(response).await
    }
}

/// MIME type for an allowed image file name.
pub fn image_mime(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
