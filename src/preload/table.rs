use hashbrown::HashSet as FastHashSet;

use super::linear::match_segments;
use super::substitute::{has_unsubstituted_param, substitute_params};
use super::{PreloadError, PreloadResult, RouteSpec, RpcSpec};
use crate::path::split_path;
use crate::pattern::Pattern;
use crate::types::ParamMap;

#[derive(Debug, Clone)]
struct CompiledRoute {
    spec: RouteSpec,
    pattern: Pattern,
}

/// Ordered route specs with their patterns parsed once up front.
///
/// Matching is first-match-wins in declaration order (see [`super::linear`]).
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub spec: &'a RouteSpec,
    pub params: ParamMap,
}

/// One declared sub-call with its parameters substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCall {
    pub method: String,
    pub params: Option<ParamMap>,
    /// A parameter value still holds a `:`; the call must not run.
    pub unresolved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadPlan {
    pub pattern: String,
    pub route_params: ParamMap,
    pub calls: Vec<PlannedCall>,
}

impl PreloadPlan {
    pub fn runnable(&self) -> impl Iterator<Item = &PlannedCall> {
        self.calls.iter().filter(|call| !call.unresolved)
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &PlannedCall> {
        self.calls.iter().filter(|call| call.unresolved)
    }
}

impl RouteTable {
    pub fn new(specs: Vec<RouteSpec>) -> PreloadResult<Self> {
        let mut seen: FastHashSet<String> = FastHashSet::with_capacity(specs.len());
        let mut routes = Vec::with_capacity(specs.len());

        for spec in specs {
            let pattern =
                Pattern::parse(&spec.pattern).map_err(|source| PreloadError::InvalidPattern {
                    pattern: spec.pattern.clone(),
                    source,
                })?;
            if !seen.insert(spec.pattern.clone()) {
                return Err(PreloadError::DuplicatePattern {
                    pattern: spec.pattern,
                });
            }
            routes.push(CompiledRoute { spec, pattern });
        }

        Ok(Self { routes })
    }

    /// Builds a table from a JSON array of `{ "pattern", "subcalls" }`
    /// objects. `rpcs` is accepted as an alias of `subcalls`.
    pub fn from_json(json: &str) -> PreloadResult<Self> {
        let specs: Vec<RouteSpec> = serde_json::from_str(json)?;
        Self::new(specs)
    }

    pub fn specs(&self) -> impl Iterator<Item = &RouteSpec> {
        self.routes.iter().map(|route| &route.spec)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn match_route(&self, path: &str) -> Option<RouteMatch<'_>> {
        let segments = split_path(path);
        self.routes.iter().find_map(|route| {
            match_segments(route.pattern.segments(), &segments).map(|params| RouteMatch {
                spec: &route.spec,
                params,
            })
        })
    }

    pub fn plan(&self, path: &str) -> Option<PreloadPlan> {
        let RouteMatch { spec, params } = self.match_route(path)?;
        let calls = spec
            .subcalls
            .iter()
            .map(|call| plan_call(call, &params))
            .collect();

        tracing::event!(
            tracing::Level::TRACE,
            operation = "plan",
            path = %path,
            pattern = %spec.pattern
        );

        Some(PreloadPlan {
            pattern: spec.pattern.clone(),
            route_params: params,
            calls,
        })
    }
}

fn plan_call(call: &RpcSpec, route_params: &ParamMap) -> PlannedCall {
    let params = substitute_params(call.params.as_ref(), route_params);
    let unresolved = params.as_ref().is_some_and(has_unsubstituted_param);
    PlannedCall {
        method: call.method.clone(),
        params,
        unresolved,
    }
}
