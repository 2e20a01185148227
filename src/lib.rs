pub mod cache;
pub mod errors;
pub mod path;
pub mod pattern;
pub mod preload;
pub mod router;
pub mod trie;
pub mod types;

pub use errors::{RouterError, RouterErrorCode, RouterResult};
pub use pattern::{Pattern, PatternError, Segment};
pub use preload::{
    PreloadEngine, PreloadError, PreloadExecutor, PreloadOptions, PreloadOutcome, RouteSpec,
    RouteTable, RpcSpec,
};
pub use router::{
    Location, MemoryLocation, ResolveError, Route, Router, RouterOptions, RouterOptionsBuilder,
    RouterOptionsError, UrlBuildError,
};
pub use trie::TrieError;
pub use types::{ListenerId, ParamMap, QueryParams, RouteId, RouteParams};
