use std::time::{Duration, Instant};

use reweave::{ConnectionConfig, ErrorKind, PublicApiConnection, RequestError};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> ConnectionConfig {
    ConnectionConfig::new("app-id", "unused.example.test", "lkg").with_base_url(server.uri())
}

#[tokio::test]
async fn close_is_idempotent() {
    let server = MockServer::start().await;
    let connection = PublicApiConnection::new(config(&server), "tok").unwrap();

    connection.close();
    assert!(connection.is_closed());
    connection.close();
    assert!(connection.is_closed());
}

#[tokio::test]
async fn submit_after_close_fails_without_network_io() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let connection = PublicApiConnection::new(config(&server), "tok").unwrap();
    connection.close();

    let err = connection.users().show("u1").await.unwrap_err();
    assert!(matches!(err, RequestError::ConnectionClosed));
    // Mock expectation of zero requests is verified when the server drops.
}

#[tokio::test]
async fn close_cancels_in_flight_work_promptly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/show/u1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"user_id": "u1"}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let connection = PublicApiConnection::new(config(&server), "tok").unwrap();
    let pending = connection.users().show("u1");

    tokio::time::sleep(Duration::from_millis(100)).await;
    let before = Instant::now();
    connection.close();

    let err = pending.await.unwrap_err();
    assert!(matches!(err, RequestError::ConnectionClosed));
    assert!(before.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn revoke_without_permission_leaves_the_connection_open() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth/revoke"))
        .respond_with(ResponseTemplate::new(405))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/show/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"user_id": "u1"})))
        .mount(&server)
        .await;

    let connection = PublicApiConnection::new(config(&server), "tok").unwrap();

    let err = connection.oauth().revoke().await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::MethodNotAllowed));
    assert!(!connection.is_closed());

    // The connection is still usable afterwards.
    let user = connection.users().show("u1").await.unwrap();
    assert_eq!(user.user_id.as_deref(), Some("u1"));
}

#[tokio::test]
async fn successful_revoke_schedules_graceful_shutdown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth/revoke"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let connection = PublicApiConnection::new(config(&server), "tok").unwrap();

    connection.oauth().revoke().await.unwrap();
    assert!(connection.is_closed());

    let err = connection.users().show("u1").await.unwrap_err();
    assert!(matches!(err, RequestError::ConnectionClosed));
}

#[tokio::test]
async fn verify_credentials_hits_the_oauth_root() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth/verify_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok",
            "user_id": "u1",
            "scope": ["public"]
        })))
        .mount(&server)
        .await;

    let connection = PublicApiConnection::new(config(&server), "tok").unwrap();
    let login = connection.oauth().verify_credentials().await.unwrap();
    assert_eq!(login.user_id.as_deref(), Some("u1"));
}
