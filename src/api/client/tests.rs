//! Unit tests for the API client

use super::*;
use serde_json::json;
use std::io::Write as _;
use wiremock::{
    matchers::{body_json, header, header_exists, method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(format!("{}/api", server.uri()), SessionStore::in_memory()).unwrap()
}

#[test]
fn test_image_mime() {
    assert_eq!(image_mime("crest.png"), Some("image/png"));
    assert_eq!(image_mime("PHOTO.JPG"), Some("image/jpeg"));
    assert_eq!(image_mime("a.b.webp"), Some("image/webp"));
    assert_eq!(image_mime("notes.txt"), None);
    assert_eq!(image_mime("no_extension"), None);
}

#[test]
fn test_base_url_trailing_slash_dropped() {
    let client = ApiClient::new("http://localhost:5000/api/", SessionStore::in_memory()).unwrap();
    assert_eq!(client.base_url(), "http://localhost:5000/api");
}

#[tokio::test]
async fn test_list_teams_sends_json_accept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teams"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Lagos Lions", "university": "University of Lagos", "founded": "1962"},
            {"id": 2, "name": "Ibadan Eagles", "player_count": 18}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let teams = client_for(&server).await.list_teams().await.unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].founded, Some(1962));
    assert_eq!(teams[1].player_count, Some(18));
}

#[tokio::test]
async fn test_session_cookie_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"username": "admin", "password": "admin123"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=s3cr3t; HttpOnly; Path=/")
                .set_body_json(json!({
                    "success": true,
                    "message": "Login successful",
                    "user": {"username": "admin"}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/check_auth"))
        .and(header("cookie", "session=s3cr3t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authenticated": true,
            "user": {"username": "admin"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let user = client
        .login(&Credentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.username, "admin");
    assert_eq!(client.session().get("session").as_deref(), Some("s3cr3t"));

    let status = client.check_auth().await.unwrap();
    assert!(status.authenticated);
}

#[tokio::test]
async fn test_expired_set_cookie_removes_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/check_auth"))
        .and(header("cookie", "session=abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "set-cookie",
                    "session=deleted; expires=Thu, 01-Jan-1970 00:00:01 GMT; path=/",
                )
                .set_body_json(json!({"authenticated": false})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("session.json");
    let client = ApiClient::new(
        format!("{}/api", server.uri()),
        SessionStore::open(&file),
    )
    .unwrap();
    client
        .session()
        .set(client.base_url(), "session", "abc")
        .unwrap();
    assert!(file.exists());

    let status = client.check_auth().await.unwrap();
    assert!(!status.authenticated);
    assert_eq!(client.session().get("session"), None);
    assert!(!file.exists());

    client.list_teams().await.unwrap();
    let requests = server.received_requests().await.unwrap();
    let last = requests.last().unwrap();
    assert!(last.headers.get("cookie").is_none());
}

#[tokio::test]
async fn test_check_auth_401_means_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/check_auth"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"authenticated": false})))
        .mount(&server)
        .await;

    let status = client_for(&server).await.check_auth().await.unwrap();
    assert_eq!(status, AuthStatus::signed_out());
}

#[tokio::test]
async fn test_login_rejected_carries_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .login(&Credentials {
            username: "admin".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    match err {
        NuflError::LoginRejected { message } => assert_eq!(message, "Invalid credentials"),
        other => panic!("expected LoginRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/teams"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .session()
        .set(client.base_url(), "session", "stale")
        .unwrap();

    let draft = TeamDraft {
        name: "Lagos Lions".to_string(),
        ..Default::default()
    };
    let err = client.create_team(&draft).await.unwrap_err();
    assert!(err.is_auth_failure());
    assert!(matches!(err, NuflError::Unauthorized { ref endpoint } if endpoint == "/teams"));
    assert!(client.session().is_empty());
}

#[tokio::test]
async fn test_status_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/teams/3"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Team name already exists"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/teams/3"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/teams/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Team not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let draft = TeamDraft {
        name: "Duplicate".to_string(),
        ..Default::default()
    };

    match client.update_team(TeamId::new(3), &draft).await {
        Err(NuflError::Validation { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Team name already exists");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
    match client.delete_team(TeamId::new(3)).await {
        Err(NuflError::Server { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Server, got {other:?}"),
    }
    assert!(matches!(
        client.get_team(TeamId::new(99)).await,
        Err(NuflError::Validation { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_create_returns_ack_with_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/fixtures"))
        .and(body_json(json!({
            "home_team_id": 1,
            "away_team_id": 2,
            "date": "2025-10-04",
            "time": "15:00",
            "venue": "Main Bowl",
            "status": "scheduled"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"message": "Fixture created successfully", "id": 7})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let draft = FixtureDraft {
        home_team_id: Some(TeamId::new(1)),
        away_team_id: Some(TeamId::new(2)),
        date: "2025-10-04".to_string(),
        time: "15:00".to_string(),
        venue: "Main Bowl".to_string(),
        status: crate::FixtureStatus::Scheduled,
    };
    let ack = client_for(&server)
        .await
        .create_fixture(&draft)
        .await
        .unwrap();
    assert_eq!(ack.id, Some(7));
}

#[tokio::test]
async fn test_empty_ack_body_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/news/4"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let ack = client_for(&server)
        .await
        .delete_news(NewsId::new(4))
        .await
        .unwrap();
    assert_eq!(ack, Ack::default());
}

#[tokio::test]
async fn test_result_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/fixtures/5/result"))
        .and(body_json(json!({"home_score": 2, "away_score": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/update_result/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let score = ScoreDraft {
        home_score: 2,
        away_score: 1,
    };
    client
        .record_result(FixtureId::new(5), &score)
        .await
        .unwrap();
    let ack = client
        .update_result_legacy(FixtureId::new(5), &score)
        .await
        .unwrap();
    assert_eq!(ack.success, Some(true));
}

#[tokio::test]
async fn test_logout_clears_session_even_when_already_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .session()
        .set(client.base_url(), "session", "abc")
        .unwrap();
    client.logout().await.unwrap();
    assert!(client.session().is_empty());
}

#[tokio::test]
async fn test_upload_image_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(header_exists("content-type"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"url": "/uploads/crest.png"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("crest.png");
    std::fs::File::create(&file)
        .unwrap()
        .write_all(b"\x89PNG\r\n")
        .unwrap();

    let uploaded = client_for(&server)
        .await
        .upload_image(&file)
        .await
        .unwrap();
    assert_eq!(uploaded.url, "/uploads/crest.png");

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"crest.png\""));
}

#[tokio::test]
async fn test_upload_rejects_unknown_extension_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .upload_image(Path::new("/tmp/notes.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, NuflError::UnsupportedImage { .. }));
}

#[tokio::test]
async fn test_aggregates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/league_table"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"team_id": 1, "team_name": "Lagos Lions", "matches_played": 3, "wins": 2,
             "draws": 1, "losses": 0, "goals_for": 7, "goals_against": 2,
             "goal_difference": 5, "points": 7}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_teams": 8, "total_players": 120, "total_fixtures": 28,
            "completed_matches": 12, "upcoming_matches": 16
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let table = client.league_table().await.unwrap();
    assert_eq!(table[0].points, 7);
    assert_eq!(table[0].goal_difference, 5);

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total_teams, 8);
    assert_eq!(stats.upcoming_matches, 16);
}
