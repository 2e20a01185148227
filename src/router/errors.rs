use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no route found for pathname '{path}'")]
    NoMatch { path: String },
}

pub type ResolveResult<T> = Result<T, ResolveError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UrlBuildError {
    #[error("route '{pattern}' is not registered on this router")]
    UnregisteredRoute { pattern: String },
    #[error("missing required parameter '{param}' for route '{pattern}'")]
    MissingRequiredParameter { param: String, pattern: String },
}

pub type UrlBuildResult<T> = Result<T, UrlBuildError>;
