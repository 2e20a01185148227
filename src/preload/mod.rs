mod engine;
mod error;
pub mod linear;
mod options;
mod spec;
mod substitute;
mod table;

pub use engine::{PreloadContext, PreloadEngine, PreloadExecutor, PreloadOutcome};
pub use error::{PreloadError, PreloadOptionsError, PreloadResult};
pub use linear::{match_pattern, match_route, match_segments};
pub use options::{
    DEFAULT_MAX_PARALLEL, DEFAULT_PRELOAD_TIMEOUT, MAX_PRELOAD_TIMEOUT, PreloadOptions,
    PreloadOptionsBuilder,
};
pub use spec::{RouteSpec, RpcSpec};
pub use substitute::{has_unsubstituted_param, substitute_params};
pub use table::{PlannedCall, PreloadPlan, RouteMatch, RouteTable};
