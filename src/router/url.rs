use crate::pattern::{Pattern, Segment};
use crate::types::{ParamMap, QueryParams};

use super::{UrlBuildError, UrlBuildResult};

/// Reconstructs a concrete path from `pattern` and `params`.
///
/// Emission stops at the first optional parameter without a value; nothing
/// after it is written, even literals or required parameters. Empty values
/// count as missing since an empty segment can never be matched.
pub fn build_path(pattern: &Pattern, params: &ParamMap) -> UrlBuildResult<String> {
    let mut out = String::with_capacity(pattern.raw().len());

    for segment in pattern.segments() {
        let text = match segment {
            Segment::Literal(text) => text.as_str(),
            Segment::Dynamic { name, optional } => {
                match params.get(name).filter(|value| !value.is_empty()) {
                    Some(value) => value.as_str(),
                    None if *optional => break,
                    None => {
                        return Err(UrlBuildError::MissingRequiredParameter {
                            param: name.clone(),
                            pattern: pattern.raw().to_string(),
                        });
                    }
                }
            }
        };
        out.push('/');
        out.push_str(text);
    }

    if out.is_empty() {
        out.push('/');
    }

    Ok(out)
}

/// Appends `?k=v&...` with keys and values percent-encoded. Does nothing for
/// an empty map.
pub fn append_query(url: &mut String, query: &QueryParams) {
    let mut separator = '?';
    for (key, value) in query {
        url.push(separator);
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
        separator = '&';
    }
}
