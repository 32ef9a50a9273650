use crate::error::{ClientError, TransportError};
use crate::transport::tests::test_helpers::{ScriptedExchange, ok_with_version, transport_over};
use crate::transport::{
    CLIENT_VERSION_HEADER, ExchangeRequest, ExchangeResponse, ResourcePath, SERVER_VERSION_HEADER,
};
use http::StatusCode;
use pretty_assertions::assert_eq;
use std::time::Duration;

fn config_get() -> ExchangeRequest {
    ExchangeRequest::get(ResourcePath::new(["config"]))
}

fn config_put() -> ExchangeRequest {
    ExchangeRequest::put(ResourcePath::new(["config"]))
}

//-----------------------------------------------------------------------------
// Request tagging
//-----------------------------------------------------------------------------

#[tokio::test]
async fn first_request_carries_initial_version() {
    // Arrange
    let exchange = ScriptedExchange::new();
    let transport = transport_over(&exchange);

    // Act
    transport.send(config_get()).await.unwrap();

    // Assert
    assert_eq!(exchange.last_request().header(CLIENT_VERSION_HEADER), Some("0"));
}

#[tokio::test]
async fn adopted_version_is_sent_next() {
    // Arrange
    let exchange = ScriptedExchange::new();
    exchange.push(ok_with_version("7"));
    let transport = transport_over(&exchange);

    // Act
    transport.send(config_get()).await.unwrap();
    transport.send(config_put()).await.unwrap();

    // Assert
    assert_eq!(transport.known_version(), "7");
    assert_eq!(exchange.last_request().header(CLIENT_VERSION_HEADER), Some("7"));
}

//-----------------------------------------------------------------------------
// Adoption
//-----------------------------------------------------------------------------

#[tokio::test]
async fn last_processed_response_wins() {
    // Arrange
    let exchange = ScriptedExchange::new();
    exchange.push(ok_with_version("12"));
    exchange.push(ok_with_version("9"));
    let transport = transport_over(&exchange);

    // Act
    transport.send(config_get()).await.unwrap();
    transport.send(config_get()).await.unwrap();

    // Assert
    assert_eq!(transport.known_version(), "9");
}

#[tokio::test]
async fn completion_order_decides_not_issue_order() {
    // Arrange
    // The first request issued is the last to complete.
    let exchange = ScriptedExchange::new();
    exchange.push_delayed(Duration::from_millis(80), ok_with_version("first-issued"));
    exchange.push_delayed(Duration::from_millis(5), ok_with_version("second-issued"));
    let transport = transport_over(&exchange);

    // Act
    let (a, b) = tokio::join!(transport.send(config_get()), transport.send(config_get()));

    // Assert
    assert!(a.is_ok() && b.is_ok());
    assert_eq!(transport.known_version(), "first-issued");
}

#[tokio::test]
async fn header_lookup_is_case_insensitive() {
    // Arrange
    let exchange = ScriptedExchange::new();
    let mut response = ExchangeResponse::new(StatusCode::OK);
    response.headers.insert(
        http::HeaderName::from_bytes(b"X-Server-Version").unwrap(),
        http::HeaderValue::from_static("3"),
    );
    exchange.push(response);
    let transport = transport_over(&exchange);

    // Act
    transport.send(config_get()).await.unwrap();

    // Assert
    assert_eq!(transport.known_version(), "3");
}

#[tokio::test]
async fn response_without_version_keeps_known_version() {
    // Arrange
    let exchange = ScriptedExchange::new();
    exchange.push(ok_with_version("4"));
    exchange.push(ExchangeResponse::new(StatusCode::OK));
    let transport = transport_over(&exchange);

    // Act
    transport.send(config_get()).await.unwrap();
    transport.send(config_get()).await.unwrap();

    // Assert
    assert_eq!(transport.known_version(), "4");
}

#[tokio::test]
async fn other_failures_still_resynchronise() {
    // Arrange
    let exchange = ScriptedExchange::new();
    exchange.push(
        ExchangeResponse::new(StatusCode::NOT_FOUND)
            .with_header(SERVER_VERSION_HEADER, "5")
            .with_body("no such gateway"),
    );
    let transport = transport_over(&exchange);

    // Act
    let result = transport.send(config_get()).await;

    // Assert
    match result {
        Err(ClientError::Transport(TransportError::Status { status, body })) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, "no such gateway");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
    assert_eq!(transport.known_version(), "5");
}

//-----------------------------------------------------------------------------
// Classified statuses
//-----------------------------------------------------------------------------

#[tokio::test]
async fn conflict_never_changes_known_version() {
    // Arrange
    let exchange = ScriptedExchange::new();
    exchange.push(ok_with_version("2"));
    exchange.push(
        ExchangeResponse::new(StatusCode::CONFLICT).with_header(SERVER_VERSION_HEADER, "8"),
    );
    let transport = transport_over(&exchange);
    transport.send(config_get()).await.unwrap();

    // Act
    let result = transport.send(config_put()).await;

    // Assert
    match result {
        Err(ClientError::VersionConflict { server_version }) => {
            assert_eq!(server_version.as_deref(), Some("8"));
        }
        other => panic!("Expected VersionConflict, got {:?}", other),
    }
    assert_eq!(transport.known_version(), "2");
}

#[tokio::test]
async fn conflict_without_header_is_still_a_conflict() {
    // Arrange
    let exchange = ScriptedExchange::new();
    exchange.push(ExchangeResponse::new(StatusCode::CONFLICT));
    let transport = transport_over(&exchange);

    // Act
    let err = transport.send(config_put()).await.unwrap_err();

    // Assert
    assert!(err.is_version_conflict());
    assert!(err.requires_refetch());
    assert_eq!(err.status(), Some(StatusCode::CONFLICT));
    assert_eq!(transport.known_version(), "0");
}

#[tokio::test]
async fn unauthorized_never_changes_known_version() {
    // Arrange
    let exchange = ScriptedExchange::new();
    exchange.push(
        ExchangeResponse::new(StatusCode::UNAUTHORIZED).with_header(SERVER_VERSION_HEADER, "8"),
    );
    let transport = transport_over(&exchange);

    // Act
    let err = transport.send(config_get()).await.unwrap_err();

    // Assert
    assert!(err.is_unauthorized());
    assert_eq!(transport.known_version(), "0");
}

#[tokio::test]
async fn exchange_failure_is_propagated_unchanged() {
    // Arrange
    let exchange = ScriptedExchange::new();
    exchange.push_failure(ClientError::Transport(TransportError::InvalidUrl {
        base: "x".to_string(),
        reason: "boom".to_string(),
    }));
    let transport = transport_over(&exchange);

    // Act
    let err = transport.send(config_get()).await.unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ClientError::Transport(TransportError::InvalidUrl { ref reason, .. }) if reason == "boom"
    ));
    assert_eq!(exchange.requests().len(), 1);
    assert_eq!(transport.known_version(), "0");
}
