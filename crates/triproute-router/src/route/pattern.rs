/// Pattern parsing for route segments
///
/// Classifies a single segment of a route pattern. All functions are pure.

/// A single segment of a route pattern
///
/// # Examples
///
/// ```
/// use triproute_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// let seg = classify_segment("my-trips").unwrap();
/// assert!(matches!(seg, PatternSegmentType::Static(_)));
///
/// let seg = classify_segment(":id").unwrap();
/// assert_eq!(seg, PatternSegmentType::Param("id".to_string()));
///
/// // Brace placeholders are accepted as well
/// let seg = classify_segment("{id}").unwrap();
/// assert_eq!(seg, PatternSegmentType::Param("id".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType {
    /// Named parameter: `:id` or `{id}`
    Param(String),
    /// Static text segment
    Static(String),
}

impl PatternSegmentType {
    /// Rank of this segment when ordering routes by specificity
    pub fn rank(&self) -> SegmentRank {
        match self {
            PatternSegmentType::Static(_) => SegmentRank::Static,
            PatternSegmentType::Param(_) => SegmentRank::Param,
        }
    }
}

/// Per-segment specificity rank
///
/// Lower sorts first: a literal segment always beats a parameter at the same
/// position, so `/trips/new` is tried before `/trips/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentRank {
    Static,
    Param,
}

/// Classifies a segment into a pattern type
///
/// # Parsing Rules
///
/// 1. `:name` → parameter
/// 2. `{name}` → parameter
/// 3. anything else → static, unless it contains `:`, `{` or `}`
///
/// Parameter names must be non-empty ASCII alphanumerics or `_`, and a
/// parameter must occupy the whole segment (`trip-:id` is rejected).
pub fn classify_segment(segment: &str) -> Result<PatternSegmentType, &'static str> {
    let param = segment
        .strip_prefix(':')
        .or_else(|| segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')));

    match param {
        Some(name) if is_valid_param_name(name) => Ok(PatternSegmentType::Param(name.to_string())),
        Some(_) => Err("parameter names must be non-empty ASCII alphanumerics or '_'"),
        None if segment.contains(|c: char| matches!(c, ':' | '{' | '}')) => {
            Err("a parameter must occupy a whole segment")
        }
        None => Ok(PatternSegmentType::Static(segment.to_string())),
    }
}

fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        let seg = classify_segment("create-trip").unwrap();
        assert_eq!(seg, PatternSegmentType::Static("create-trip".to_string()));
    }

    #[test]
    fn test_classify_colon_param() {
        let seg = classify_segment(":id").unwrap();
        assert_eq!(seg, PatternSegmentType::Param("id".to_string()));
    }

    #[test]
    fn test_classify_brace_param() {
        let seg = classify_segment("{trip_id}").unwrap();
        assert_eq!(seg, PatternSegmentType::Param("trip_id".to_string()));
    }

    #[test]
    fn test_classify_rejects_empty_name() {
        assert!(classify_segment(":").is_err());
        assert!(classify_segment("{}").is_err());
    }

    #[test]
    fn test_classify_rejects_bad_name() {
        assert!(classify_segment(":trip-id").is_err());
        assert!(classify_segment("{id?}").is_err());
    }

    #[test]
    fn test_classify_rejects_partial_param() {
        assert!(classify_segment("trip-:id").is_err());
        assert!(classify_segment("{id").is_err());
        assert!(classify_segment("id}").is_err());
    }

    #[test]
    fn test_static_ranks_before_param() {
        assert!(SegmentRank::Static < SegmentRank::Param);
        assert_eq!(
            PatternSegmentType::Param("id".to_string()).rank(),
            SegmentRank::Param
        );
    }
}
