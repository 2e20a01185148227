use crate::pattern::PatternError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreloadError {
    #[error("invalid route pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
    #[error("route pattern '{pattern}' is declared more than once")]
    DuplicatePattern { pattern: String },
    #[error("failed to parse route spec table: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Options(#[from] PreloadOptionsError),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreloadOptionsError {
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("timeout must not exceed {max:?} (got {provided:?})")]
    TimeoutTooLarge { provided: Duration, max: Duration },
    #[error("max_parallel must be at least 1 (got {provided})")]
    MaxParallelInvalid { provided: usize },
}

pub type PreloadResult<T> = Result<T, PreloadError>;
