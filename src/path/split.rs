use memchr::{memchr, memchr_iter};
use smallvec::SmallVec;

pub type PathSegments<'a> = SmallVec<[&'a str; 8]>;

/// Splits a path on `/`, dropping empty segments.
///
/// Leading, trailing and repeated slashes are all treated the same way, so
/// `"/users/42"`, `"users/42/"` and `"//users//42"` yield the same segments.
pub fn split_path(path: &str) -> PathSegments<'_> {
    let bytes = path.as_bytes();
    let mut out: PathSegments<'_> = SmallVec::new();
    let mut start = 0usize;

    for idx in memchr_iter(b'/', bytes) {
        if idx > start {
            out.push(&path[start..idx]);
        }
        start = idx + 1;
    }

    if start < bytes.len() {
        out.push(&path[start..]);
    }

    out
}

/// Returns the pathname portion of a URL, without any `?query` or `#fragment`.
pub fn strip_query(url: &str) -> &str {
    let bytes = url.as_bytes();
    let end = match (memchr(b'?', bytes), memchr(b'#', bytes)) {
        (Some(q), Some(h)) => q.min(h),
        (Some(q), None) => q,
        (None, Some(h)) => h,
        (None, None) => bytes.len(),
    };
    &url[..end]
}
