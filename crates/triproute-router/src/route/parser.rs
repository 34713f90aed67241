/// Pattern parsing and specificity for routes
///
/// Pure functional parser that turns a route pattern into its canonical form.
/// All functions are **pure**: same input → same output, no side effects.

use super::pattern::{classify_segment, PatternSegmentType, SegmentRank};
use crate::RouteError;

/// A validated route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// Canonical pattern, parameters written as `:name`
    pub pattern: String,
    /// Typed segments in path order
    pub segments: Vec<PatternSegmentType>,
    /// Parameter names in path order
    pub params: Vec<String>,
}

impl ParsedPattern {
    /// Per-segment ranks, compared lexicographically to order routes
    pub fn specificity(&self) -> Vec<SegmentRank> {
        self.segments.iter().map(PatternSegmentType::rank).collect()
    }

    /// Pattern with parameter names erased
    ///
    /// Two patterns with the same shape match exactly the same paths.
    ///
    /// ```
    /// use triproute_router::route::parse_pattern;
    ///
    /// let a = parse_pattern("/edit-trip/:id").unwrap();
    /// let b = parse_pattern("/edit-trip/{trip}").unwrap();
    /// assert_eq!(a.shape(), b.shape());
    /// ```
    pub fn shape(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }

        self.segments
            .iter()
            .map(|segment| match segment {
                PatternSegmentType::Static(text) => format!("/{}", text),
                PatternSegmentType::Param(_) => "/:".to_string(),
            })
            .collect()
    }
}

/// Fold accumulator for parsing
#[derive(Default)]
struct ParseState {
    pattern: String,
    segments: Vec<PatternSegmentType>,
    params: Vec<String>,
}

impl ParseState {
    fn with_static_segment(mut self, segment: String) -> Self {
        self.pattern.push('/');
        self.pattern.push_str(&segment);
        self.segments.push(PatternSegmentType::Static(segment));
        self
    }

    fn with_param(mut self, name: String) -> Result<Self, &'static str> {
        if self.params.contains(&name) {
            return Err("parameter names must be unique within a pattern");
        }

        self.pattern.push_str("/:");
        self.pattern.push_str(&name);
        self.params.push(name.clone());
        self.segments.push(PatternSegmentType::Param(name));
        Ok(self)
    }

    fn finalize(mut self) -> ParsedPattern {
        if self.pattern.is_empty() {
            self.pattern = "/".to_string();
        }

        ParsedPattern {
            pattern: self.pattern,
            segments: self.segments,
            params: self.params,
        }
    }
}

/// Parses a route pattern into its canonical form
///
/// Empty segments are dropped, so `/detail//:id/` parses like `/detail/:id`.
///
/// # Examples
///
/// ```
/// use triproute_router::route::parse_pattern;
///
/// let parsed = parse_pattern("/detail/{id}").unwrap();
/// assert_eq!(parsed.pattern, "/detail/:id");
/// assert_eq!(parsed.params, vec!["id".to_string()]);
///
/// assert!(parse_pattern("detail/:id").is_err());
/// ```
pub fn parse_pattern(raw: &str) -> Result<ParsedPattern, RouteError> {
    let invalid = |reason: &'static str| RouteError::InvalidPattern {
        pattern: raw.to_string(),
        reason,
    };

    if !raw.starts_with('/') {
        return Err(invalid("patterns must start with '/'"));
    }

    raw.split('/')
        .filter(|s| !s.is_empty())
        .try_fold(ParseState::default(), |state, segment| {
            match classify_segment(segment)? {
                PatternSegmentType::Static(text) => Ok(state.with_static_segment(text)),
                PatternSegmentType::Param(name) => state.with_param(name),
            }
        })
        .map(ParseState::finalize)
        .map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        let parsed = parse_pattern("/").unwrap();
        assert_eq!(parsed.pattern, "/");
        assert!(parsed.segments.is_empty());
        assert_eq!(parsed.shape(), "/");
    }

    #[test]
    fn test_parse_static() {
        let parsed = parse_pattern("/my-trips").unwrap();
        assert_eq!(parsed.pattern, "/my-trips");
        assert!(parsed.params.is_empty());
        assert_eq!(parsed.specificity(), vec![SegmentRank::Static]);
    }

    #[test]
    fn test_parse_dynamic() {
        let parsed = parse_pattern("/edit-trip/:id").unwrap();
        assert_eq!(parsed.pattern, "/edit-trip/:id");
        assert_eq!(parsed.params, vec!["id".to_string()]);
        assert_eq!(
            parsed.specificity(),
            vec![SegmentRank::Static, SegmentRank::Param]
        );
        assert_eq!(parsed.shape(), "/edit-trip/:");
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        let parsed = parse_pattern("/detail//:id/").unwrap();
        assert_eq!(parsed.pattern, "/detail/:id");
    }

    #[test]
    fn test_parse_requires_leading_slash() {
        let err = parse_pattern("my-trips").unwrap_err();
        assert!(matches!(err, RouteError::InvalidPattern { .. }));
    }

    #[test]
    fn test_parse_rejects_duplicate_params() {
        let err = parse_pattern("/trips/:id/stops/:id").unwrap_err();
        assert!(matches!(err, RouteError::InvalidPattern { .. }));
    }

    #[test]
    fn test_parse_rejects_malformed_segment() {
        assert!(parse_pattern("/trip-:id").is_err());
        assert!(parse_pattern("/detail/:").is_err());
    }
}
