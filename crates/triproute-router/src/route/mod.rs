/// Route pattern handling
///
/// Pure functions that turn pattern strings like `/edit-trip/:id` into typed
/// segments, parameter lists and specificity ranks.

pub mod parser;
pub mod pattern;

pub use parser::{parse_pattern, ParsedPattern};
pub use pattern::{classify_segment, PatternSegmentType, SegmentRank};
