/// Navigation targets split into path, query and hash

use std::borrow::Cow;
use std::fmt;

use super::normalize_path;

/// A parsed navigation target
///
/// # Examples
///
/// ```
/// use triproute_router::Location;
///
/// let location = Location::parse("/detail/42/?tab=photos#day-2");
/// assert_eq!(location.path, "/detail/42");
/// assert_eq!(location.query_value("tab"), Some("photos"));
/// assert_eq!(location.hash.as_deref(), Some("day-2"));
/// assert_eq!(location.full_path(), "/detail/42?tab=photos#day-2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Normalized path
    pub path: String,
    /// Decoded query pairs in source order
    pub query: Vec<(String, String)>,
    /// Fragment without the leading `#`
    pub hash: Option<String>,
}

impl Location {
    /// Parses a target such as `/edit-trip/7?step=2#notes`
    pub fn parse(target: &str) -> Self {
        let (rest, hash) = match target.split_once('#') {
            Some((rest, hash)) if !hash.is_empty() => (rest, Some(hash.to_string())),
            Some((rest, _)) => (rest, None),
            None => (target, None),
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (rest, Vec::new()),
        };

        Self {
            path: normalize_path(path).into_owned(),
            query,
            hash,
        }
    }

    /// The root location `/`
    pub fn root() -> Self {
        Self::parse("/")
    }

    /// First query value for `key`
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Renders path, query and hash back into a single string
    pub fn full_path(&self) -> String {
        let mut out = self.path.clone();

        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| {
                    if v.is_empty() {
                        urlencoding::encode(k).into_owned()
                    } else {
                        format!("{}={}", urlencoding::encode(k), urlencoding::encode(v))
                    }
                })
                .collect::<Vec<_>>()
                .join("&");
            out.push('?');
            out.push_str(&query);
        }

        if let Some(hash) = &self.hash {
            out.push('#');
            out.push_str(hash);
        }

        out
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

/// Decodes a percent-encoded component, keeping the raw text if it is not UTF-8
pub(crate) fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                decode_component(&key.replace('+', " ")),
                decode_component(&value.replace('+', " ")),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_path() {
        let location = Location::parse("/my-trips");
        assert_eq!(location.path, "/my-trips");
        assert!(location.query.is_empty());
        assert_eq!(location.hash, None);
    }

    #[test]
    fn test_parse_normalizes_path() {
        assert_eq!(Location::parse("/create-trip/").path, "/create-trip");
        assert_eq!(Location::parse("").path, "/");
    }

    #[test]
    fn test_parse_query_decodes() {
        let location = Location::parse("/?q=kyoto+trip&city=S%C3%A3o%20Paulo&flag");
        assert_eq!(location.query_value("q"), Some("kyoto trip"));
        assert_eq!(location.query_value("city"), Some("São Paulo"));
        assert_eq!(location.query_value("flag"), Some(""));
        assert_eq!(location.query_value("missing"), None);
    }

    #[test]
    fn test_empty_hash_is_dropped() {
        let location = Location::parse("/detail/1#");
        assert_eq!(location.hash, None);
        assert_eq!(location.full_path(), "/detail/1");
    }

    #[test]
    fn test_full_path_encodes_query() {
        let location = Location::parse("/?city=S%C3%A3o%20Paulo");
        assert_eq!(location.full_path(), "/?city=S%C3%A3o%20Paulo");
    }

    #[test]
    fn test_decode_component_keeps_invalid_utf8() {
        assert_eq!(decode_component("%FF"), "%FF");
        assert_eq!(decode_component("caf%C3%A9"), "café");
    }
}
