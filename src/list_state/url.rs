//! URL Query Codec
//!
//! The address-bar half of the list state: `page`, `perPage`, `search`,
//! `categoryId`. Absent keys mean "default".

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Unreserved characters (RFC 3986) stay literal; everything else is escaped
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub const PAGE_KEY: &str = "page";
pub const PER_PAGE_KEY: &str = "perPage";
pub const SEARCH_KEY: &str = "search";
pub const CATEGORY_KEY: &str = "categoryId";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub category_id: String,
}

impl UrlQuery {
    pub fn defaults(per_page: u32) -> Self {
        Self { page: 1, per_page: per_page.max(1), search: String::new(), category_id: String::new() }
    }

    /// Build from already-decoded parameters (e.g. the router's query map)
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>, default_per_page: u32) -> Self {
        let defaults = Self::defaults(default_per_page);
        Self {
            page: parse_positive(get(PAGE_KEY)).unwrap_or(defaults.page),
            per_page: parse_positive(get(PER_PAGE_KEY)).unwrap_or(defaults.per_page),
            search: get(SEARCH_KEY).unwrap_or_default(),
            category_id: get(CATEGORY_KEY).unwrap_or_default(),
        }
    }

    /// Parse a raw query string, with or without the leading `?`
    pub fn parse(query_string: &str, default_per_page: u32) -> Self {
        let pairs: Vec<(String, String)> = query_string
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(pair), String::new()),
            })
            .collect();
        // First occurrence wins, as with URLSearchParams.get
        Self::from_lookup(
            |key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()),
            default_per_page,
        )
    }

    /// Serialize without the leading `?`. Page and per-page are always present.
    pub fn to_query_string(&self) -> String {
        let mut out = format!("{}={}&{}={}", PAGE_KEY, self.page, PER_PAGE_KEY, self.per_page);
        if !self.search.is_empty() {
            out.push_str(&format!("&{}={}", SEARCH_KEY, encode_component(&self.search)));
        }
        if !self.category_id.is_empty() {
            out.push_str(&format!("&{}={}", CATEGORY_KEY, encode_component(&self.category_id)));
        }
        out
    }
}

/// Whether writing `next` over `current` would change the address bar text
pub fn needs_write(current: &str, next: &str) -> bool {
    current.trim_start_matches('?') != next.trim_start_matches('?')
}

fn parse_positive(value: Option<String>) -> Option<u32> {
    value.and_then(|v| v.trim().parse::<u32>().ok()).filter(|n| *n >= 1)
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let state = UrlQuery { page: 2, per_page: 20, search: "foo".into(), category_id: "5".into() };
        let text = state.to_query_string();
        assert_eq!(text, "page=2&perPage=20&search=foo&categoryId=5");
        assert_eq!(UrlQuery::parse(&text, 20), state);
    }

    #[test]
    fn test_round_trip_escapes_reserved_characters() {
        let state = UrlQuery { page: 1, per_page: 10, search: "a&b = c?ü".into(), category_id: String::new() };
        let text = state.to_query_string();
        assert_eq!(text, "page=1&perPage=10&search=a%26b%20%3D%20c%3F%C3%BC");
        assert_eq!(UrlQuery::parse(&text, 20), state);
    }

    #[test]
    fn test_empty_filters_are_omitted() {
        assert_eq!(UrlQuery::defaults(20).to_query_string(), "page=1&perPage=20");
    }

    #[test]
    fn test_parse_falls_back_to_defaults() {
        let parsed = UrlQuery::parse("?page=abc&perPage=0&other=1", 20);
        assert_eq!(parsed, UrlQuery::defaults(20));
        assert_eq!(UrlQuery::parse("", 15), UrlQuery::defaults(15));
    }

    #[test]
    fn test_parse_plus_as_space() {
        let parsed = UrlQuery::parse("search=two+words&categoryId=3", 20);
        assert_eq!(parsed.search, "two words");
        assert_eq!(parsed.category_id, "3");
        assert_eq!(parsed.page, 1);
    }

    #[test]
    fn test_identical_query_needs_no_write() {
        let state = UrlQuery { page: 3, per_page: 20, search: "x".into(), category_id: String::new() };
        let current = format!("?{}", state.to_query_string());
        assert!(!needs_write(&current, &state.to_query_string()));
        let next = UrlQuery { page: 4, ..state };
        assert!(needs_write(&current, &next.to_query_string()));
    }

    #[test]
    fn test_from_lookup() {
        let parsed = UrlQuery::from_lookup(
            |key| match key {
                "page" => Some("7".to_string()),
                "search" => Some("trait objects".to_string()),
                _ => None,
            },
            20,
        );
        assert_eq!(parsed.page, 7);
        assert_eq!(parsed.per_page, 20);
        assert_eq!(parsed.search, "trait objects");
    }
}
