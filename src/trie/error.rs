use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrieError {
    #[error("route table is empty; the first route must be '/'")]
    EmptyRouteTable,
    #[error("first route must be '/' (found '{found}')")]
    RootNotFirst { found: String },
    #[error(
        "dynamic segment conflict in '{pattern}': ':{incoming}' shares a position with ':{existing}'"
    )]
    DynamicSegmentConflict {
        pattern: String,
        existing: String,
        incoming: String,
    },
    #[error("a different route is already registered for pattern '{pattern}' (existing '{existing}')")]
    DuplicateRoute { pattern: String, existing: String },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type TrieResult<T> = Result<T, TrieError>;
