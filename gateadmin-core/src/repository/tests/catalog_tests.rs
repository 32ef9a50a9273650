use crate::model::PluginAttributes;
use crate::repository::ConfigRepository;
use crate::transport::tests::test_helpers::{ScriptedExchange, json_ok, transport_over};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn catalog_endpoints() {
    // Arrange
    let exchange = ScriptedExchange::new();
    exchange.push(json_ok(json!(["limit", "redirect"])));
    exchange.push(json_ok(json!([{
        "code": "limit",
        "mono": false,
        "meta": {"authors": "ops", "description": null, "version": "1", "homepage": null, "repository": null}
    }])));
    exchange.push(json_ok(json!(null)));
    exchange.push(json_ok(json!({"type": "object"})));
    let repo = ConfigRepository::new(Arc::new(transport_over(&exchange)));

    // Act
    let list = repo.plugin_list().await.unwrap();
    let attrs = repo.plugin_attr_all().await.unwrap();
    let attr = repo.plugin_attr("nope").await.unwrap();
    let schema = repo.plugin_schema("limit").await.unwrap();

    // Assert
    assert_eq!(list, vec!["limit", "redirect"]);
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].code, "limit");
    assert_eq!(attrs[0].meta.authors.as_deref(), Some("ops"));
    assert_eq!(attr, None::<PluginAttributes>);
    assert_eq!(schema, Some(json!({"type": "object"})));
    let paths: Vec<String> = exchange
        .requests()
        .iter()
        .map(|r| r.path.to_string())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/plugin/list",
            "/plugin/attr-all",
            "/plugin/attr/nope",
            "/plugin/schema/limit"
        ]
    );
}
