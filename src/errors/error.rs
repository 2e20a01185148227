use super::RouterErrorCode;
use crate::router::{ResolveError, RouterOptionsError, UrlBuildError};
use crate::trie::TrieError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("router has been torn down")]
    TornDown,
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error(transparent)]
    Trie(#[from] TrieError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    UrlBuild(#[from] UrlBuildError),
}

impl RouterError {
    pub fn code(&self) -> RouterErrorCode {
        match self {
            RouterError::TornDown => RouterErrorCode::TornDown,
            RouterError::Options(_) => RouterErrorCode::InvalidOptions,
            RouterError::Trie(_) => RouterErrorCode::ConstructionConflict,
            RouterError::Resolve(ResolveError::NoMatch { .. }) => RouterErrorCode::NoMatch,
            RouterError::UrlBuild(UrlBuildError::MissingRequiredParameter { .. }) => {
                RouterErrorCode::MissingRequiredParameter
            }
            RouterError::UrlBuild(UrlBuildError::UnregisteredRoute { .. }) => {
                RouterErrorCode::UnregisteredRoute
            }
        }
    }
}

pub type RouterResult<T> = Result<T, RouterError>;
