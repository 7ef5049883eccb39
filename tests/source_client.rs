//! Seed loading against a mock user source.

use std::time::Duration;
use user_directory::api::client::UserSourceClient;
use user_directory::core::config::{Config, SourceConfig};
use user_directory::core::error::FetchError;
use user_directory::core::startup::load_seed;
use user_directory::core::state::{AppState, LoadStatus};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn remote_users() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "company": { "name": "Romaguera-Crona" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv"
        },
        {
            "id": 10,
            "name": "Clementina DuBuque",
            "username": "Moriah.Stanton",
            "email": "Rey.Padberg@karina.biz"
        }
    ])
}

fn source(endpoint: String, synthetic_count: usize) -> SourceConfig {
    SourceConfig {
        endpoint,
        timeout_secs: 5,
        synthetic_count,
        rng_seed: Some(42),
    }
}

fn client(endpoint: &str) -> UserSourceClient {
    UserSourceClient::new(endpoint.to_string(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_users_ignores_extra_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_users()))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&format!("{}/users", server.uri()))
        .fetch_users()
        .await
        .unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].username, "Bret");
    assert_eq!(users[2].id, 10);
}

#[tokio::test]
async fn test_fetch_users_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&format!("{}/users", server.uri()))
        .fetch_users()
        .await
        .unwrap_err();

    match err {
        FetchError::Status(status) => assert_eq!(status.as_u16(), 503),
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_users_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client(&format!("{}/users", server.uri()))
        .fetch_users()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_users_missing_required_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "id": 1, "name": "No Email", "username": "x" }])),
        )
        .mount(&server)
        .await;

    let err = client(&format!("{}/users", server.uri()))
        .fetch_users()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_users_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(remote_users())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = UserSourceClient::new(
        format!("{}/users", server.uri()),
        Duration::from_millis(200),
    )
    .unwrap();

    let err = client.fetch_users().await.unwrap_err();
    assert!(matches!(err, FetchError::Request { .. }));
}

#[tokio::test]
async fn test_load_seed_pads_after_highest_remote_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_users()))
        .mount(&server)
        .await;

    let endpoint = format!("{}/users", server.uri());
    let users = load_seed(&client(&endpoint), &source(endpoint.clone(), 25))
        .await
        .unwrap();

    assert_eq!(users.len(), 28);
    let ids: Vec<u32> = users.iter().map(|u| u.id).collect();
    assert_eq!(&ids[..3], &[1, 2, 10]);
    assert_eq!(&ids[3..], (11..36).collect::<Vec<u32>>().as_slice());
    assert!(users[3..].iter().all(|u| u.email.ends_with("@example.com")));
}

#[tokio::test]
async fn test_load_seed_is_deterministic_with_rng_seed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_users()))
        .mount(&server)
        .await;

    let endpoint = format!("{}/users", server.uri());
    let first = load_seed(&client(&endpoint), &source(endpoint.clone(), 10))
        .await
        .unwrap();
    let second = load_seed(&client(&endpoint), &source(endpoint.clone(), 10))
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_load_seed_failure_leaves_state_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let endpoint = format!("{}/users", server.uri());
    let config =
        Config::from_toml(&format!("[source]\nendpoint = \"{endpoint}\"\nrng_seed = 1\n")).unwrap();
    let mut state = AppState::new(config);

    let result = load_seed(&client(&endpoint), &state.config.source.clone()).await;
    state.finish_load(result);

    assert_eq!(state.load, LoadStatus::Failed("Failed to fetch users".to_string()));
    assert!(state.view.records().is_empty());
    assert!(state.view.visible().is_empty());
    assert_eq!(state.view.total_pages(), 1);
}

#[tokio::test]
async fn test_load_seed_into_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_users()))
        .mount(&server)
        .await;

    let endpoint = format!("{}/users", server.uri());
    let config = Config::from_toml(&format!(
        "[source]\nendpoint = \"{endpoint}\"\nsynthetic_count = 25\nrng_seed = 7\n"
    ))
    .unwrap();
    let mut state = AppState::new(config);

    let result = load_seed(&client(&endpoint), &state.config.source.clone()).await;
    state.finish_load(result);

    assert_eq!(state.load, LoadStatus::Ready);
    let snapshot = state.view.snapshot();
    assert_eq!(snapshot.total_count, 28);
    assert_eq!(snapshot.total_pages, 3);
    assert_eq!(snapshot.rows.len(), 10);
}
