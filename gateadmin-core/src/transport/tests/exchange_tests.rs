use crate::transport::{ExchangeRequest, ResourcePath};
use pretty_assertions::assert_eq;
use url::Url;

#[test]
fn url_appends_segments_below_base_path() {
    // Arrange
    let base = Url::parse("http://admin.local:9080/api/").unwrap();
    let request = ExchangeRequest::get(ResourcePath::new(["config", "item", "edge"]));

    // Act
    let url = request.url(&base).unwrap();

    // Assert
    assert_eq!(url.as_str(), "http://admin.local:9080/api/config/item/edge");
}

#[test]
fn segments_are_percent_encoded() {
    // Arrange
    let base = Url::parse("http://admin.local").unwrap();
    let request = ExchangeRequest::delete(
        ResourcePath::new(["config", "item"]).join("a/b c?"),
    );

    // Act
    let url = request.url(&base).unwrap();

    // Assert
    assert_eq!(url.path(), "/config/item/a%2Fb%20c%3F");
    assert_eq!(url.query(), None);
}

#[test]
fn query_pairs_are_encoded() {
    // Arrange
    let base = Url::parse("http://admin.local").unwrap();
    let request = ExchangeRequest::get(ResourcePath::new(["config", "plugin"]))
        .with_query([("code", "a&b"), ("uid", "18446744073709551615")]);

    // Act
    let url = request.url(&base).unwrap();

    // Assert
    assert_eq!(url.query(), Some("code=a%26b&uid=18446744073709551615"));
}

#[test]
fn cannot_be_a_base_url_is_rejected() {
    // Arrange
    let base = Url::parse("mailto:ops@example.com").unwrap();
    let request = ExchangeRequest::get(ResourcePath::new(["config"]));

    // Act
    let result = request.url(&base);

    // Assert
    assert!(result.is_err());
}

#[test]
fn json_body_sets_content_type() {
    // Act
    let request = ExchangeRequest::post(ResourcePath::new(["config"]))
        .with_json(&serde_json::json!({"a": 1}))
        .unwrap();

    // Assert
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.body.as_deref(), Some(&b"{\"a\":1}"[..]));
}

#[test]
fn path_renders_for_logs() {
    assert_eq!(ResourcePath::new(["plugin", "list"]).to_string(), "/plugin/list");
    assert_eq!(ResourcePath::default().to_string(), "/");
}
