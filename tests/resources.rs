use reweave::{AuthorizedApiConnection, ConnectionConfig, ShardboundServer};
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> ConnectionConfig {
    ConnectionConfig::new("app-id", "unused.example.test", "lkg").with_base_url(server.uri())
}

fn authorized(server: &MockServer) -> AuthorizedApiConnection {
    AuthorizedApiConnection::new(config(server), "tok").unwrap()
}

#[tokio::test]
async fn requests_carry_bearer_token_and_advertise_gzip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/show/u1"))
        .and(header("authorization", "Bearer tok"))
        .and(header("accept", "*/*"))
        .and(header("accept-encoding", "gzip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"user_id": "u1"})))
        .mount(&server)
        .await;

    let user = authorized(&server).users().show("u1").await.unwrap();
    assert_eq!(user.user_id.as_deref(), Some("u1"));
}

#[tokio::test]
async fn login_posts_form_encoded_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login/steam"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("application_id=app-id&steam_ticket=ticket-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "fresh-token",
            "user_id": "u1",
            "scope": ["native"]
        })))
        .mount(&server)
        .await;

    let shard = ShardboundServer::new(config(&server)).unwrap();
    let login = shard.login("ticket-1").await.unwrap();
    assert_eq!(login.access_token.as_deref(), Some("fresh-token"));
}

#[tokio::test]
async fn authorize_upgrades_to_an_authorized_connection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login/steam"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "fresh-token",
            "scope": ["native"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/show_private"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accepted_eula": true,
            "user_id": "u1"
        })))
        .mount(&server)
        .await;

    let shard = ShardboundServer::new(config(&server)).unwrap();
    let connection = shard.authorize("ticket-1").await.unwrap();

    let private = connection.users().show_private().await.unwrap();
    assert!(private.accepted_eula);
}

#[tokio::test]
async fn match_history_unwraps_the_game_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/history/show/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "games": [
                {"game_id": "g1", "adjusted_end_condition": 0},
                {"game_id": "g2", "adjusted_end_condition": 1}
            ]
        })))
        .mount(&server)
        .await;

    let games = authorized(&server).users().match_history("u1").await.unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].game_id.as_deref(), Some("g1"));
}

#[tokio::test]
async fn friends_unwrap_the_id_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/friend/showall"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "friends": ["u2", "u3"]
        })))
        .mount(&server)
        .await;

    let friends = authorized(&server).friends().show_all().await.unwrap();
    assert_eq!(friends, vec!["u2".to_string(), "u3".to_string()]);
}

#[tokio::test]
async fn preferences_update_posts_the_changed_entries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/preferences/update"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"music_volume": 0.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "music_volume": 0.5,
            "language": "en"
        })))
        .mount(&server)
        .await;

    let mut changed = reweave::types::Preferences::new();
    changed.insert("music_volume".into(), serde_json::json!(0.5));

    let prefs = authorized(&server).preferences().update(&changed).await.unwrap();
    assert_eq!(prefs.get("language"), Some(&serde_json::json!("en")));
}

#[tokio::test]
async fn twitch_expeditions_post_the_prior_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/expedition/show/twitch"))
        .and(body_json(serde_json::json!({
            "prior_twitch_expedition_list": ["e1"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "twitch_expeditions": [{"expedition_id": "e2"}]
        })))
        .mount(&server)
        .await;

    let list = authorized(&server)
        .expeditions()
        .twitch(&["e1".to_string()])
        .await
        .unwrap();
    assert_eq!(list.twitch_expeditions[0].expedition_id.as_deref(), Some("e2"));
}

#[tokio::test]
async fn release_lookups_use_the_environment_tag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/patcher/version/show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"version": "1.2.3"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/client/version/lkg/show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"version": "0.5.0"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/client/Win64/0.5.0/download_url/show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"url": "https://cdn/dl"})))
        .mount(&server)
        .await;

    let shard = ShardboundServer::new(config(&server)).unwrap();
    assert_eq!(shard.patcher().version().await.unwrap(), "1.2.3");
    assert_eq!(shard.client().version().await.unwrap(), "0.5.0");
    assert_eq!(shard.client().download_url("0.5.0").await.unwrap(), "https://cdn/dl");
}

#[tokio::test]
async fn houses_and_decks_resolve_their_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/house/show/h1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "house_id": "h1",
            "house_name": "Stormwatch"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/deck/showall"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "decks": [{"id": "d1"}]
        })))
        .mount(&server)
        .await;

    let connection = authorized(&server);
    let house = connection.houses().show("h1", true).await.unwrap();
    assert_eq!(house.house_name.as_deref(), Some("Stormwatch"));

    let decks = connection.decks().show_all().await.unwrap();
    assert_eq!(decks.decks[0].id.as_deref(), Some("d1"));
}
