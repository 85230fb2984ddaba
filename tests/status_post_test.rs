use httpmock::prelude::*;
use small_tools::{StatusClient, StatusConfig};

#[tokio::test]
async fn test_posts_status_with_bearer_auth() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/2/tweets")
            .header("authorization", "Bearer test-token")
            .json_body(serde_json::json!({"text": "hello from the cli"}));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": {"id": "1460323737035677698", "text": "hello from the cli"}
            }));
    });

    let config = StatusConfig {
        api_url: server.url("/2/tweets"),
        bearer_token: "test-token".to_string(),
    };
    let client = StatusClient::new(config);

    let posted = client.post_status("hello from the cli").await.unwrap();

    api_mock.assert();
    assert_eq!(posted.data.id, "1460323737035677698");
    assert_eq!(posted.data.text, "hello from the cli");
}

#[tokio::test]
async fn test_rejected_credentials_fail_the_post() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/2/tweets");
        then.status(401)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"title": "Unauthorized"}));
    });

    let config = StatusConfig {
        api_url: server.url("/2/tweets"),
        bearer_token: "expired".to_string(),
    };
    let client = StatusClient::new(config);

    let result = client.post_status("should not go through").await;

    api_mock.assert();
    assert!(result.is_err());
}
