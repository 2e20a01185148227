mod split;

pub use split::{PathSegments, split_path, strip_query};
