//! First-match-wins pattern matching over an ordered pattern list.
//!
//! Unlike the route trie, nothing here prefers a static segment over a
//! dynamic one: for `["/users/:id", "/users/me"]` the path `/users/me` matches
//! `/users/:id` with `id = "me"` because it comes first. Callers that want the
//! static route to win must list it first.

use crate::path::split_path;
use crate::pattern::{Pattern, Segment};
use crate::types::ParamMap;

use super::{PreloadError, PreloadResult, RouteSpec};

pub fn match_segments(pattern: &[Segment], path: &[&str]) -> Option<ParamMap> {
    let mut params = ParamMap::new();
    let mut consumed = 0usize;

    for segment in pattern {
        match segment {
            Segment::Literal(text) => {
                if path.get(consumed) != Some(&text.as_str()) {
                    return None;
                }
                consumed += 1;
            }
            Segment::Dynamic { name, optional } => match path.get(consumed) {
                Some(value) => {
                    params.insert(name.clone(), (*value).to_string());
                    consumed += 1;
                }
                None if *optional => {}
                None => return None,
            },
        }
    }

    (consumed == path.len()).then_some(params)
}

pub fn match_pattern(pattern: &Pattern, path: &str) -> Option<ParamMap> {
    match_segments(pattern.segments(), &split_path(path))
}

/// Returns the first spec in `specs` whose pattern matches `path`.
pub fn match_route<'a>(
    specs: &'a [RouteSpec],
    path: &str,
) -> PreloadResult<Option<(&'a RouteSpec, ParamMap)>> {
    let segments = split_path(path);
    for spec in specs {
        let pattern =
            Pattern::parse(&spec.pattern).map_err(|source| PreloadError::InvalidPattern {
                pattern: spec.pattern.clone(),
                source,
            })?;
        if let Some(params) = match_segments(pattern.segments(), &segments) {
            return Ok(Some((spec, params)));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(raw: &str) -> Pattern {
        Pattern::parse(raw).expect("pattern should parse")
    }

    #[test]
    fn match_pattern_rejects_trailing_path_segments() {
        assert!(match_pattern(&pattern("/users/:id"), "/users/1/posts").is_none());
    }

    #[test]
    fn match_pattern_binds_nothing_for_absent_optional() {
        let params = match_pattern(&pattern("/posts/:page?"), "/posts").expect("should match");
        assert!(params.is_empty());
    }

    #[test]
    fn match_pattern_requires_literal_after_optional_when_optional_absent() {
        // the optional param consumes "edit", leaving the literal unmatched
        assert!(match_pattern(&pattern("/doc/:rev?/edit"), "/doc/edit").is_none());
        let params =
            match_pattern(&pattern("/doc/:rev?/edit"), "/doc/3/edit").expect("should match");
        assert_eq!(params.get("rev").map(String::as_str), Some("3"));
    }
}
