use crate::identity::PluginIdentityResolver;
use crate::model::PluginInstanceId;
use pretty_assertions::assert_eq;

fn pairs_of(id: &PluginInstanceId) -> Vec<(String, String)> {
    PluginIdentityResolver::encode(id)
        .pairs()
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn expected(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn uid_identity_encodes_code_and_uid() {
    // Arrange
    let id = PluginInstanceId::uid("c1", 42);

    // Act
    let pairs = pairs_of(&id);

    // Assert
    assert_eq!(pairs, expected(&[("code", "c1"), ("uid", "42")]));
}

#[test]
fn named_identity_encodes_code_and_name() {
    // Arrange
    let id = PluginInstanceId::named("c1", "n1").unwrap();

    // Act
    let pairs = pairs_of(&id);

    // Assert
    assert_eq!(pairs, expected(&[("code", "c1"), ("name", "n1")]));
}

#[test]
fn mono_identity_encodes_code_only() {
    // Arrange
    let id = PluginInstanceId::mono("c1");

    // Act
    let pairs = pairs_of(&id);

    // Assert
    assert_eq!(pairs, expected(&[("code", "c1")]));
}

#[test]
fn uid_above_f64_precision_is_exact() {
    // Arrange
    // 2^53 + 1 is the first integer an f64 cannot represent.
    let id = PluginInstanceId::uid("limit", 9_007_199_254_740_993);

    // Act
    let query = PluginIdentityResolver::encode(&id);

    // Assert
    assert_eq!(query.get("uid"), Some("9007199254740993"));
}

#[test]
fn max_uid_is_exact() {
    // Arrange
    let id = PluginInstanceId::uid("limit", u64::MAX);

    // Act
    let query = PluginIdentityResolver::encode(&id);

    // Assert
    assert_eq!(query.get("uid"), Some("18446744073709551615"));
}

#[test]
fn encoded_query_is_never_empty() {
    // Arrange
    let ids = vec![
        PluginInstanceId::uid("a", 0),
        PluginInstanceId::named("b", "x-1").unwrap(),
        PluginInstanceId::mono("c"),
    ];

    for id in ids {
        // Act
        let query = PluginIdentityResolver::encode(&id);

        // Assert
        assert!(!query.is_empty(), "empty query for {id}");
        assert_eq!(query.get("code"), Some(id.code()));
        assert!(!query.to_query_string().is_empty());
    }
}

#[test]
fn query_string_escapes_code() {
    // Arrange
    let id = PluginInstanceId::uid("a b&c", 7);

    // Act
    let rendered = PluginIdentityResolver::encode(&id).to_query_string();

    // Assert
    assert_eq!(rendered, "code=a+b%26c&uid=7");
}
