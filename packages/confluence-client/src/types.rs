//! Confluence REST API response types.

use serde::Deserialize;

/// Raw content response from `GET /rest/api/content/{id}?expand=body.storage`.
#[derive(Debug, Deserialize)]
pub struct PageResponseRaw {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<PageBody>,
}

#[derive(Debug, Deserialize)]
pub struct PageBody {
    #[serde(default)]
    pub storage: Option<PageStorage>,
}

#[derive(Debug, Deserialize)]
pub struct PageStorage {
    #[serde(default)]
    pub value: String,
}

/// A fetched Confluence page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Page id as reported by the API (falls back to the requested id)
    pub id: String,
    /// Page title
    pub title: String,
    /// Storage-format body markup
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_deserialization() {
        let raw = r#"{
            "id": "123456",
            "title": "Release Plan",
            "body": {"storage": {"value": "<p>Hello</p>"}}
        }"#;

        let response: PageResponseRaw = serde_json::from_str(raw).unwrap();
        assert_eq!(response.id.as_deref(), Some("123456"));
        assert_eq!(response.title, "Release Plan");
        assert_eq!(response.body.unwrap().storage.unwrap().value, "<p>Hello</p>");
    }

    #[test]
    fn test_page_response_missing_body() {
        let response: PageResponseRaw = serde_json::from_str(r#"{"title": "Empty"}"#).unwrap();
        assert_eq!(response.title, "Empty");
        assert!(response.body.is_none());
    }
}
