//! Integration tests against a mock HTTP server.

use std::path::Path;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use party_downloader::api::PartyClient;
use party_downloader::download::{
    DownloadEngine, HttpTransport, NoOpObserver, TransferOutcome, TransferRequest,
};
use party_downloader::error::Error;

fn request(server: &MockServer, remote: &str, dir: &Path, name: &str) -> TransferRequest {
    TransferRequest {
        source_url: format!("{}{}", server.uri(), remote),
        destination: dir.join(name),
    }
}

#[tokio::test]
async fn test_engine_writes_bodies_verbatim() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/data/aa/one.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"first body".as_slice()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/bb/two.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"second body".as_slice()))
        .mount(&server)
        .await;

    let engine = DownloadEngine::new(HttpTransport::new().unwrap(), 2).unwrap();
    let requests = vec![
        request(&server, "/data/aa/one.bin", dir.path(), "one.bin"),
        request(&server, "/data/bb/two.bin", dir.path(), "two.bin"),
    ];

    let report = engine.run(requests, &NoOpObserver).await;

    assert_eq!(report.success_count(), 2);
    assert_eq!(std::fs::read(dir.path().join("one.bin")).unwrap(), b"first body");
    assert_eq!(std::fs::read(dir.path().join("two.bin")).unwrap(), b"second body");
}

#[tokio::test]
async fn test_non_success_status_is_a_failure_and_writes_nothing() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    // A body is present but must never reach the destination.
    Mock::given(method("GET"))
        .and(path("/data/missing.bin"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found page"))
        .mount(&server)
        .await;

    let engine = DownloadEngine::new(HttpTransport::new().unwrap(), 1).unwrap();
    let requests = vec![request(&server, "/data/missing.bin", dir.path(), "missing.bin")];

    let report = engine.run(requests, &NoOpObserver).await;

    assert_eq!(report.failure_count(), 1);
    match &report.outcomes()[0] {
        TransferOutcome::Failure { cause, .. } => {
            assert!(matches!(cause, Error::Download(_)), "cause: {:?}", cause)
        }
        _ => panic!("expected failure"),
    }
    assert!(!dir.path().join("missing.bin").exists());
}

#[tokio::test]
async fn test_one_bad_transfer_does_not_abort_the_batch() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/data/good.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".as_slice()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/bad.bin"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let engine = DownloadEngine::new(HttpTransport::new().unwrap(), 2).unwrap();
    let requests = vec![
        request(&server, "/data/good.bin", dir.path(), "good.bin"),
        request(&server, "/data/bad.bin", dir.path(), "bad.bin"),
    ];

    let report = engine.run(requests, &NoOpObserver).await;

    assert_eq!(report.success_count(), 1);
    assert_eq!(report.failure_count(), 1);
    assert_eq!(std::fs::read(dir.path().join("good.bin")).unwrap(), b"ok");
}

#[tokio::test]
async fn test_posts_for_user_hits_documented_path() {
    let server = MockServer::start().await;

    let body = r#"{"posts":[{"file_id":1,"id":"p1","user":"u","service":"s","title":"t","published":"2024-01-01","file":{"name":"a.jpg","path":"/a.jpg"},"attachments":[]}]}"#;
    Mock::given(method("GET"))
        .and(path("/api/v1/fansly/user/123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = PartyClient::new(&server.uri()).unwrap();
    let posts = client.posts_for_user("fansly", "123").await.unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "p1");
    assert!(posts[0].file.is_some());
    assert!(posts[0].attachments.is_empty());
}

#[tokio::test]
async fn test_posts_by_hash_hits_documented_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search_hash/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"posts":[]}"#))
        .mount(&server)
        .await;

    let client = PartyClient::new(&server.uri()).unwrap();
    let posts = client.posts_by_hash("abc123").await.unwrap();

    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_catalog_non_success_status_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/fansly/user/123"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = PartyClient::new(&server.uri()).unwrap();

    assert!(matches!(
        client.posts_for_user("fansly", "123").await,
        Err(Error::Network(_))
    ));
}

#[tokio::test]
async fn test_catalog_bad_json_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/fansly/user/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/fansly/user/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"no_posts_here":[]}"#))
        .mount(&server)
        .await;

    let client = PartyClient::new(&server.uri()).unwrap();

    assert!(matches!(
        client.posts_for_user("fansly", "1").await,
        Err(Error::Parse(_))
    ));
    assert!(matches!(
        client.posts_for_user("fansly", "2").await,
        Err(Error::Parse(_))
    ));
}

#[tokio::test]
async fn test_creators_index_is_fetched_and_parsed() {
    let server = MockServer::start().await;

    let body = r#"[{"id":"123","name":"alice","service":"fansly","updated":1704067200},
                   {"id":"456","name":"bob","service":"patreon","updated":1704067200.5}]"#;
    Mock::given(method("GET"))
        .and(path("/api/v1/creators.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = PartyClient::new(&server.uri()).unwrap();
    let creators = client.creators().await.unwrap();

    assert_eq!(creators.len(), 2);
    assert_eq!(creators[0].name, "alice");
    assert_eq!(creators[1].service, "patreon");
}
