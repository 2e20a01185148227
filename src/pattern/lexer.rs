use crate::path::split_path;
use smallvec::SmallVec;

use super::{PatternError, PatternResult, PatternSegments, Segment};

#[tracing::instrument(level = "trace", skip_all, fields(pattern = %pattern))]
pub fn parse_pattern(pattern: &str) -> PatternResult<PatternSegments> {
    let mut segments: PatternSegments = SmallVec::new();
    for raw in split_path(pattern) {
        segments.push(parse_segment(pattern, raw)?);
    }
    Ok(segments)
}

/// Parses one pattern segment.
///
/// A segment starting with `:` is a parameter and an optional trailing `?`
/// marks it optional. Parameters without a name (`:`, `:?`) and names that
/// still contain `:` (`::id`) are rejected, so such tables fail at
/// construction instead of producing routes whose params can never be
/// substituted or rebuilt.
pub fn parse_segment(pattern: &str, seg: &str) -> PatternResult<Segment> {
    let Some(rest) = seg.strip_prefix(':') else {
        return Ok(Segment::Literal(seg.to_string()));
    };

    let (name, optional) = match rest.strip_suffix('?') {
        Some(name) => (name, true),
        None => (rest, false),
    };

    if name.is_empty() {
        return Err(PatternError::ParameterMissingName {
            pattern: pattern.to_string(),
            segment: seg.to_string(),
        });
    }

    if name.contains(':') {
        return Err(PatternError::ParameterNameContainsColon {
            pattern: pattern.to_string(),
            name: name.to_string(),
        });
    }

    Ok(Segment::Dynamic {
        name: name.to_string(),
        optional,
    })
}
