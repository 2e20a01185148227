mod errors;
mod location;
mod options;
mod route;
mod service;
pub mod url;

pub use errors::{ResolveError, ResolveResult, UrlBuildError, UrlBuildResult};
pub use location::{Location, MemoryLocation};
pub use options::{
    DEFAULT_CACHE_CAPACITY_HINT, RouterConfig, RouterConfigBuilder, RouterConfigError,
    RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};
pub use route::{Route, RouteFactory};
pub use service::{Listener, Router};
