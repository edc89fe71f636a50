use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single news article as returned by the upstream search API
///
/// The article is kept as its raw JSON object so that fields the relay never
/// inspects (source, url, publishedAt, ...) round-trip untouched, including
/// their key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Article(Map<String, Value>);

impl Article {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Article title, empty when absent or not a string
    pub fn title(&self) -> &str {
        self.text_field("title")
    }

    /// Article description, empty when absent or not a string
    pub fn description(&self) -> &str {
        self.text_field("description")
    }

    /// Article content, empty when absent or not a string
    pub fn content(&self) -> &str {
        self.text_field("content")
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    fn text_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_read_as_empty() {
        let article: Article = serde_json::from_value(json!({ "url": "https://example.com" })).unwrap();

        assert_eq!(article.title(), "");
        assert_eq!(article.description(), "");
        assert_eq!(article.content(), "");
    }

    #[test]
    fn test_null_and_non_string_fields_read_as_empty() {
        let article: Article = serde_json::from_value(json!({
            "title": null,
            "description": 42,
            "content": "Body"
        }))
        .unwrap();

        assert_eq!(article.title(), "");
        assert_eq!(article.description(), "");
        assert_eq!(article.content(), "Body");
    }

    #[test]
    fn test_passthrough_fields_keep_order() {
        let raw = r#"{"source":{"id":null,"name":"BBC"},"title":"Oslo","url":"https://x","publishedAt":"2024-01-01T00:00:00Z"}"#;
        let article: Article = serde_json::from_str(raw).unwrap();

        assert_eq!(serde_json::to_string(&article).unwrap(), raw);
    }
}
