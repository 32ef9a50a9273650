use integration_tests::harness::{MockAdmin, find_event};
use tracing::Level;

#[tokio::test]
async fn version_adoption_is_logged() {
    // Arrange
    let admin = MockAdmin::start();
    for _ in 0..7 {
        admin.bump_version();
    }
    let client = admin.client();

    // Act
    client.get_config_names().await.unwrap();

    // Assert
    let adopted = find_event(
        Level::INFO,
        "adopted server version",
        &[("from", "0"), ("to", "7")],
    )
    .expect("expected an 'adopted server version' event");
    assert!(adopted.target.starts_with("gateadmin_core"));
}

#[tokio::test]
async fn conflicts_are_logged_as_warnings() {
    // Arrange
    let admin = MockAdmin::start();
    for _ in 0..3 {
        admin.bump_version();
    }
    let client = admin.client();

    // Act
    let result = client.delete_config_item("edge").await;

    // Assert
    assert!(result.unwrap_err().is_version_conflict());
    assert!(
        find_event(
            Level::WARN,
            "version conflict, entity must be re-read",
            &[("server_version", "3")],
        )
        .is_some()
    );
}
