//! Integration tests for the ping API.

mod common;

use common::{client, AUTH_KEY, CODE};
use cronitor_client::{Client, ClientConfig, Error};

const MSG: &str = "a message";

fn unauthed() -> ClientConfig {
    ClientConfig::new().with_code(CODE)
}

fn authed() -> ClientConfig {
    ClientConfig::new().with_code(CODE).with_auth_key(AUTH_KEY)
}

#[tokio::test]
async fn test_events_without_message() {
    let mut server = mockito::Server::new_async().await;
    let client = client(&server, unauthed());

    for endpoint in ["run", "complete", "fail"] {
        let mock = server
            .mock("GET", format!("/{CODE}/{endpoint}").as_str())
            .with_status(200)
            .create_async()
            .await;

        let response = match endpoint {
            "run" => client.run(None).await,
            "complete" => client.complete(None).await,
            _ => client.fail(None).await,
        }
        .unwrap();

        assert_eq!(response.status, 200);
        assert!(!response.url.contains('?'));
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_events_with_message() {
    let mut server = mockito::Server::new_async().await;
    let client = client(&server, unauthed());

    for endpoint in ["run", "complete", "fail"] {
        let mock = server
            .mock("GET", format!("/{CODE}/{endpoint}?msg=a%20message").as_str())
            .with_status(200)
            .create_async()
            .await;

        let response = match endpoint {
            "run" => client.run(Some(MSG)).await,
            "complete" => client.complete(Some(MSG)).await,
            _ => client.fail(Some(MSG)).await,
        }
        .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.url.contains("?msg=a%20message"));
        assert_eq!(response.url.matches("msg=").count(), 1);
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_authed_events() {
    let mut server = mockito::Server::new_async().await;
    let client = client(&server, authed());

    for endpoint in ["run", "complete", "fail"] {
        let mock = server
            .mock("GET", format!("/{CODE}/{endpoint}?auth_key={AUTH_KEY}").as_str())
            .with_status(200)
            .create_async()
            .await;

        let response = match endpoint {
            "run" => client.run(None).await,
            "complete" => client.complete(None).await,
            _ => client.fail(None).await,
        }
        .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.url.contains("?auth_key=12345"));
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_authed_event_with_message() {
    let mut server = mockito::Server::new_async().await;
    let client = client(&server, authed());

    let mock = server
        .mock("GET", "/d3x0c1/complete?msg=a%20message&auth_key=12345")
        .with_status(200)
        .create_async()
        .await;

    let response = client.complete(Some(MSG)).await.unwrap();

    assert_eq!(response.status, 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_pause_and_unpause() {
    let mut server = mockito::Server::new_async().await;
    let client = client(&server, unauthed());

    let pause = server
        .mock("GET", "/d3x0c1/pause/5")
        .with_status(200)
        .create_async()
        .await;
    let unpause = server
        .mock("GET", "/d3x0c1/pause/0")
        .with_status(200)
        .create_async()
        .await;

    assert_eq!(client.pause(5).await.unwrap().status, 200);
    assert_eq!(client.unpause().await.unwrap().status, 200);

    pause.assert_async().await;
    unpause.assert_async().await;
}

#[tokio::test]
async fn test_authed_pause_and_unpause() {
    let mut server = mockito::Server::new_async().await;
    let client = client(&server, authed());

    let pause = server
        .mock("GET", "/d3x0c1/pause/5?auth_key=12345")
        .with_status(200)
        .create_async()
        .await;
    let unpause = server
        .mock("GET", "/d3x0c1/pause/0?auth_key=12345")
        .with_status(200)
        .create_async()
        .await;

    assert_eq!(client.pause(5).await.unwrap().status, 200);
    assert_eq!(client.unpause().await.unwrap().status, 200);

    pause.assert_async().await;
    unpause.assert_async().await;
}

#[tokio::test]
async fn test_plain_text_body_is_kept() {
    let mut server = mockito::Server::new_async().await;
    let client = client(&server, unauthed());

    let _mock = server
        .mock("GET", "/d3x0c1/run")
        .with_status(200)
        .with_body("OK")
        .create_async()
        .await;

    let response = client.run(None).await.unwrap();

    assert_eq!(response.data, serde_json::json!("OK"));
}

#[tokio::test]
async fn test_server_error_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let client = client(&server, unauthed());

    let mock = server
        .mock("GET", "/d3x0c1/fail")
        .with_status(503)
        .with_body("Service Unavailable")
        .expect(1)
        .create_async()
        .await;

    let err = client.fail(None).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.data(), Some(&serde_json::json!("Service Unavailable")));
    // exactly one request, no retry
    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_error_hides_auth_key() {
    // nothing listens on port 1
    let client = Client::builder()
        .code("abc")
        .auth_key("s3cr3t")
        .ping_endpoint("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.run(None).await.unwrap_err();

    assert!(matches!(err, Error::Connection(_) | Error::Http(_)));
    assert_eq!(err.status(), None);
    assert!(!err.to_string().contains("s3cr3t"));
    assert!(!format!("{err:?}").contains("s3cr3t"));
}
