use gateadmin_core::Session;
use gateadmin_core::conf::Credentials;
use integration_tests::harness::MockAdmin;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn secured_server_rejects_anonymous_calls() {
    // Arrange
    let admin = MockAdmin::start_secured("admin", "s3cret");
    admin.bump_version();
    let client = admin.client();

    // Act
    let err = client.get_config_names().await.unwrap_err();

    // Assert
    assert!(err.is_unauthorized());
    assert_eq!(client.session().known_version(), "0");
}

#[tokio::test]
async fn wrong_credentials_are_unauthorized() {
    // Arrange
    let admin = MockAdmin::start_secured("admin", "s3cret");
    let client = admin.client();

    // Act
    let err = client
        .login(&Credentials::new("admin", "guess"))
        .await
        .unwrap_err();

    // Assert
    assert!(err.is_unauthorized());
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn login_token_is_attached_to_later_calls() {
    // Arrange
    let admin = MockAdmin::start_secured("admin", "s3cret");
    let client = admin.client();
    let credentials = admin.credentials().unwrap();

    // Act
    client.login(&credentials).await.unwrap();
    let names = client.get_config_names().await;

    // Assert
    assert!(names.is_ok());
    let login = &admin.requests()[0];
    assert_eq!(login.path, "/auth/login");
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&login.body).unwrap(),
        serde_json::json!({"accessKey": "admin", "secretKey": "s3cret"})
    );
    assert_eq!(
        admin.last_request().header("authorization"),
        Some("Bearer test-token")
    );
}

#[tokio::test]
async fn shared_session_shares_the_login() {
    // Arrange
    let admin = MockAdmin::start_secured("admin", "s3cret");
    let session = Session::new();
    let first = admin.client_with_session(session.clone());
    let second = admin.client_with_session(session.clone());

    // Act
    first.login(&admin.credentials().unwrap()).await.unwrap();
    let result = second.get_config_names().await;

    // Assert
    assert!(result.is_ok());
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn login_on_open_server_succeeds_without_token() {
    // Arrange
    let admin = MockAdmin::start();
    let client = admin.client();

    // Act
    let login = client.login(&Credentials::new("admin", "anything")).await;
    let names = client.get_config_names().await;

    // Assert
    assert!(login.is_ok());
    assert!(names.is_ok());
    assert!(!client.session().is_authenticated());
    assert_eq!(admin.last_request().header("authorization"), None);
}

#[tokio::test]
async fn stale_anonymous_write_conflicts_before_auth() {
    // Arrange
    let admin = MockAdmin::start_secured("admin", "s3cret");
    admin.bump_version();
    let client = admin.client();

    // Act
    let err = client.delete_config_item("edge").await.unwrap_err();

    // Assert
    match err {
        gateadmin_core::ClientError::VersionConflict { server_version } => {
            assert_eq!(server_version.as_deref(), Some("1"));
        }
        other => panic!("Expected VersionConflict, got {:?}", other),
    }
    assert_eq!(admin.server_version(), 1);
}
