//! Page id extraction and URL shape checks.
//!
//! Confluence exposes several URL shapes for the same page: modern
//! `/wiki/spaces/KEY/pages/123456/Title` links, legacy
//! `viewpage.action?pageId=123456` links, and plain `pageId=` query
//! strings. The extractor tries them in a fixed precedence order; the
//! first match wins and later patterns are not consulted.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    /// Path and query patterns, in precedence order.
    static ref PAGE_ID_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"/pages/(\d+)/").unwrap(),
        Regex::new(r"/viewpage\.action\?pageId=(\d+)").unwrap(),
        Regex::new(r"/pages/viewpage\.action\?pageId=(\d+)").unwrap(),
        Regex::new(r"pageId=(\d+)").unwrap(),
    ];
}

/// Extract a Confluence page id from a URL.
///
/// A `pageId` query parameter takes precedence over path patterns; its
/// first value is returned verbatim. Returns `None` when no pattern
/// matches; never fails on malformed input.
pub fn extract_page_id(url: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(url) {
        if let Some((_, value)) = parsed.query_pairs().find(|(key, _)| key == "pageId") {
            return Some(value.into_owned());
        }
    }

    for pattern in PAGE_ID_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(url) {
            if let Some(id) = captures.get(1) {
                return Some(id.as_str().to_string());
            }
        }
    }

    None
}

/// Check whether a URL looks like a Confluence page link.
///
/// True when the host contains the Atlassian cloud suffix or the URL
/// carries a wiki/display path or a `pageId=` query. Returns false
/// (never fails) when the URL cannot be parsed.
pub fn is_confluence_url(url: &str) -> bool {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    if parsed
        .host_str()
        .map_or(false, |host| host.contains("atlassian.net"))
    {
        return true;
    }

    url.contains("/wiki/") || url.contains("/display/") || url.contains("pageId=")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_pages_path() {
        assert_eq!(
            extract_page_id("https://team.atlassian.net/wiki/spaces/DEV/pages/123/My+Page"),
            Some("123".to_string())
        );
    }

    #[test]
    fn test_extract_from_query_param() {
        assert_eq!(
            extract_page_id("https://wiki.example.com/pages/viewpage.action?pageId=123"),
            Some("123".to_string())
        );
    }

    #[test]
    fn test_query_param_wins_over_path() {
        // Query parameter takes precedence when both shapes disagree.
        assert_eq!(
            extract_page_id("https://team.atlassian.net/wiki/pages/999/Title?pageId=123"),
            Some("123".to_string())
        );
    }

    #[test]
    fn test_extract_same_id_across_shapes() {
        let urls = [
            "https://team.atlassian.net/wiki/spaces/X/pages/123/T",
            "https://wiki.example.com/viewpage.action?pageId=123",
            "https://wiki.example.com/pages/viewpage.action?pageId=123",
            "https://wiki.example.com/display/X/T?pageId=123",
        ];
        for url in urls {
            assert_eq!(extract_page_id(url), Some("123".to_string()), "url: {url}");
        }
    }

    #[test]
    fn test_extract_no_match() {
        assert_eq!(extract_page_id("https://example.com/blog/post"), None);
        assert_eq!(extract_page_id("not a url at all"), None);
        assert_eq!(extract_page_id(""), None);
    }

    #[test]
    fn test_is_confluence_url_atlassian_host() {
        assert!(is_confluence_url("https://team.atlassian.net/anything"));
    }

    #[test]
    fn test_is_confluence_url_wiki_and_display_paths() {
        assert!(is_confluence_url("https://docs.example.com/wiki/spaces/X"));
        assert!(is_confluence_url("https://docs.example.com/display/X/Page"));
        assert!(is_confluence_url(
            "https://docs.example.com/viewpage.action?pageId=42"
        ));
    }

    #[test]
    fn test_is_confluence_url_rejects_others() {
        assert!(!is_confluence_url("https://example.com/blog"));
        assert!(!is_confluence_url("not a url"));
    }
}
