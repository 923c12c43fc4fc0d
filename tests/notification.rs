//! Integration tests for work registration

use std::time::Duration;

use mockito::Matcher;
use poet_notifier::{
    http_client::create_http_client,
    models::PublishResult,
    notification::{Credentials, NotifyError, PublishNotifier},
    test_helpers::PublishRequestBuilder,
};
use serde_json::json;
use url::Url;

fn credentials_for(url: &str) -> Credentials {
    Credentials { endpoint_url: Url::parse(url).unwrap(), token: "test-token".to_string() }
}

fn notifier() -> PublishNotifier {
    PublishNotifier::new(reqwest::Client::new())
}

#[tokio::test]
async fn test_success() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_header("token", "test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"workId":"abc123"}"#)
        .create_async()
        .await;

    let request = PublishRequestBuilder::new().build();
    let result = notifier().notify(&request, &credentials_for(&server.url())).await;

    assert_eq!(result.as_ref().unwrap().as_str(), "abc123");

    let publish_result = PublishResult::from(result.ok());
    assert_eq!(publish_result.work_id.unwrap().as_str(), "abc123");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_extra_response_fields_are_ignored() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/")
        .with_status(201)
        .with_body(r#"{"workId":"w9","status":"pending","issuer":"frost"}"#)
        .create_async()
        .await;

    let request = PublishRequestBuilder::new().build();
    let work_id =
        notifier().notify(&request, &credentials_for(&server.url())).await.unwrap();

    assert_eq!(work_id.as_str(), "w9");
}

#[tokio::test]
async fn test_non_json_body_yields_no_identifier() {
    let mut server = mockito::Server::new_async().await;

    server.mock("POST", "/").with_status(200).with_body("not json").create_async().await;

    let request = PublishRequestBuilder::new().build();
    let err =
        notifier().notify(&request, &credentials_for(&server.url())).await.unwrap_err();

    assert!(matches!(err, NotifyError::MalformedResponse(_)));
    assert_eq!(PublishResult::from(None).work_id, None);
}

#[tokio::test]
async fn test_object_without_work_id_yields_no_identifier() {
    let mut server = mockito::Server::new_async().await;

    server.mock("POST", "/").with_status(200).with_body("{}").create_async().await;

    let request = PublishRequestBuilder::new().build();
    let err =
        notifier().notify(&request, &credentials_for(&server.url())).await.unwrap_err();

    assert!(matches!(err, NotifyError::MissingIdentifier));
}

#[tokio::test]
async fn test_error_status_yields_no_identifier() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/")
        .with_status(500)
        .with_body(r#"{"workId":"should-not-be-read"}"#)
        .create_async()
        .await;

    let request = PublishRequestBuilder::new().build();
    let err =
        notifier().notify(&request, &credentials_for(&server.url())).await.unwrap_err();

    assert!(matches!(err, NotifyError::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_yields_no_identifier() {
    // Nothing listens on the discard port.
    let request = PublishRequestBuilder::new().build();
    let err = notifier()
        .notify(&request, &credentials_for("http://127.0.0.1:9/"))
        .await
        .unwrap_err();

    assert!(matches!(err, NotifyError::Transport(_)));
}

#[tokio::test]
async fn test_silent_endpoint_times_out() {
    // A listener that accepts the connection but never answers; the client
    // timeout must bound the call.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let silent = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let client = create_http_client(Duration::from_millis(200)).unwrap();
    let notifier = PublishNotifier::new(client);

    let request = PublishRequestBuilder::new().build();
    let err = notifier
        .notify(&request, &credentials_for(&format!("http://{addr}/")))
        .await
        .unwrap_err();

    assert!(matches!(err, NotifyError::Transport(_)));
    silent.abort();
}

#[tokio::test]
async fn test_tags_joined_on_the_wire() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({ "tags": "poetry,tech" })))
        .with_status(200)
        .with_body(r#"{"workId":"w1"}"#)
        .create_async()
        .await;

    let request = PublishRequestBuilder::new().tags(vec!["poetry", "tech"]).build();
    notifier().notify(&request, &credentials_for(&server.url())).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_tags_serialize_as_empty_string() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({ "tags": "" })))
        .with_status(200)
        .with_body(r#"{"workId":"w1"}"#)
        .create_async()
        .await;

    let request = PublishRequestBuilder::new().tags(vec![]).build();
    notifier().notify(&request, &credentials_for(&server.url())).await.unwrap();

    mock.assert_async().await;
}
