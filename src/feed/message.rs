//! Recommendation payloads exchanged over the channel.

use serde::{Deserialize, Serialize};

use super::error::FeedError;

/// An ordered list of recommendation labels
///
/// Serialized as a bare JSON array so the wire stays `["a","b"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recommendations(Vec<String>);

impl Recommendations {
    pub fn new(labels: Vec<String>) -> Self {
        Self(labels)
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Encode as the text frame sent to clients
    pub fn to_payload(&self) -> String {
        // A Vec<String> always serializes
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Recommendations {
    fn from(labels: Vec<String>) -> Self {
        Self(labels)
    }
}

impl<'a> From<&'a [&'a str]> for Recommendations {
    fn from(labels: &'a [&'a str]) -> Self {
        Self(labels.iter().map(|s| s.to_string()).collect())
    }
}

/// Parse a server text frame into a recommendation list
///
/// Anything other than a JSON array of strings is rejected.
pub fn parse_recommendations(payload: &str) -> Result<Recommendations, FeedError> {
    serde_json::from_str::<Recommendations>(payload).map_err(|e| FeedError::malformed(payload, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_array() {
        let list = parse_recommendations(r#"["Milk","Bread"]"#).unwrap();
        assert_eq!(list.labels(), &["Milk".to_string(), "Bread".to_string()]);
    }

    #[test]
    fn test_parse_empty_array() {
        let list = parse_recommendations("[]").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_recommendations("Received: Product A").unwrap_err();
        assert!(matches!(err, FeedError::MalformedPayload { .. }));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_recommendations(r#"{"recommendations": ["A"]}"#).is_err());
        assert!(parse_recommendations(r#""Product A""#).is_err());
    }

    #[test]
    fn test_parse_rejects_mixed_items() {
        assert!(parse_recommendations(r#"["A", 2, null]"#).is_err());
    }

    #[test]
    fn test_payload_is_bare_array() {
        let list = Recommendations::from(&["Product B", "Product C"][..]);
        assert_eq!(list.to_payload(), r#"["Product B","Product C"]"#);
        assert_eq!(Recommendations::default().to_payload(), "[]");
    }
}
