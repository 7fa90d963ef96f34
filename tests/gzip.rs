use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use reweave::{ConnectionConfig, PublicApiConnection, RequestError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> ConnectionConfig {
    ConnectionConfig::new("app-id", "unused.example.test", "lkg").with_base_url(server.uri())
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("gzip write");
    encoder.finish().expect("gzip finish")
}

#[tokio::test]
async fn gzip_tagged_body_is_decompressed() {
    let server = MockServer::start().await;
    let body = br#"{"user_id": "u1", "display_name": "Boreeas"}"#;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/show/u1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-encoding", "gzip")
                .set_body_bytes(gzip(body)),
        )
        .mount(&server)
        .await;

    let connection = PublicApiConnection::new(config(&server), "tok").unwrap();
    let user = connection.users().show("u1").await.unwrap();
    assert_eq!(user.display_name.as_deref(), Some("Boreeas"));
}

#[tokio::test]
async fn untagged_body_passes_through_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/show/u1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                &br#"{"user_id": "u1", "wins": 7}"#[..],
                "application/json",
            ),
        )
        .mount(&server)
        .await;

    let connection = PublicApiConnection::new(config(&server), "tok").unwrap();
    let user = connection.users().show("u1").await.unwrap();
    assert_eq!(user.wins, 7);
}

#[tokio::test]
async fn corrupt_gzip_surfaces_as_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/show/u1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-encoding", "gzip")
                .set_body_bytes(b"not actually gzip".to_vec()),
        )
        .mount(&server)
        .await;

    let connection = PublicApiConnection::new(config(&server), "tok").unwrap();
    let err = connection.users().show("u1").await.unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}
