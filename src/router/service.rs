use crate::cache::MetadataCache;
use crate::errors::{RouterError, RouterResult};
use crate::path::{split_path, strip_query};
use crate::router::url::{append_query, build_path};
use crate::router::{Location, ResolveError, Route, RouterOptions, UrlBuildError};
use crate::trie::RouteTree;
use crate::types::{ListenerId, ParamMap, QueryParams, RouteParams};
use parking_lot::RwLock;
use std::sync::Arc;

pub type Listener<M> = Arc<dyn Fn(&str, &Arc<M>) + Send + Sync>;

struct RouterState<M> {
    tree: RouteTree<M>,
    cache: Option<MetadataCache<M>>,
    listeners: Vec<(ListenerId, Listener<M>)>,
    next_listener_id: ListenerId,
}

impl<M> RouterState<M> {
    fn resolve(&self, pathname: &str, debug: bool) -> RouterResult<Arc<M>> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(pathname) {
                if debug {
                    tracing::event!(
                        tracing::Level::DEBUG,
                        cache = "hit",
                        pathname = %pathname,
                        "router cache hit"
                    );
                }
                return Ok(hit);
            }
            if debug {
                tracing::event!(
                    tracing::Level::DEBUG,
                    cache = "miss",
                    pathname = %pathname,
                    "router cache miss"
                );
            }
        }

        let segments = split_path(pathname);
        let (entry, params) =
            self.tree
                .lookup(&segments)
                .ok_or_else(|| ResolveError::NoMatch {
                    path: pathname.to_string(),
                })?;

        let metadata = Arc::new(entry.route().build(&params));

        Ok(match &self.cache {
            Some(cache) => cache.insert(pathname, metadata),
            None => metadata,
        })
    }
}

/// Client-side router: resolves pathnames to route metadata through the
/// segment trie and builds URLs for registered routes.
///
/// The route table is fixed at construction. Only the metadata cache and the
/// listener list change afterwards, both behind the router's lock.
pub struct Router<M> {
    inner: RwLock<Option<RouterState<M>>>,
    options: RouterOptions,
}

impl<M> Router<M> {
    pub fn new(routes: Vec<Route<M>>, options: Option<RouterOptions>) -> RouterResult<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;

        let tree = RouteTree::build(routes)?;
        let cache = options
            .cache_metadata
            .then(|| MetadataCache::with_capacity(options.cache_capacity_hint));

        Ok(Self {
            inner: RwLock::new(Some(RouterState {
                tree,
                cache,
                listeners: Vec::new(),
                next_listener_id: 1,
            })),
            options,
        })
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    #[tracing::instrument(level = "trace", skip_all, fields(pathname = %pathname))]
    pub fn resolve(&self, pathname: &str) -> RouterResult<Arc<M>> {
        let guard = self.inner.read();
        let state = guard.as_ref().ok_or(RouterError::TornDown)?;
        state.resolve(pathname, self.options.debug)
    }

    /// Extracts route parameters for `pathname` without invoking the factory
    /// or touching the cache.
    pub fn params_for(&self, pathname: &str) -> RouterResult<RouteParams> {
        let guard = self.inner.read();
        let state = guard.as_ref().ok_or(RouterError::TornDown)?;
        let segments = split_path(pathname);
        state
            .tree
            .lookup(&segments)
            .map(|(_, params)| params)
            .ok_or_else(|| {
                ResolveError::NoMatch {
                    path: pathname.to_string(),
                }
                .into()
            })
    }

    /// Rebuilds a path for a registered `route`, then appends `query`.
    ///
    /// An empty parameter value counts as missing: a required parameter set
    /// to `""` fails with `MissingRequiredParameter`, and an optional one
    /// truncates the URL there.
    pub fn build_url(
        &self,
        route: &Route<M>,
        params: &ParamMap,
        query: Option<&QueryParams>,
    ) -> RouterResult<String> {
        let guard = self.inner.read();
        let state = guard.as_ref().ok_or(RouterError::TornDown)?;
        let entry = state
            .tree
            .entry_for(route)
            .ok_or_else(|| UrlBuildError::UnregisteredRoute {
                pattern: route.path().to_string(),
            })?;

        let mut url = build_path(entry.pattern(), params)?;
        if let Some(query) = query {
            append_query(&mut url, query);
        }
        Ok(url)
    }

    pub fn route_for(&self, pattern: &str) -> Option<Route<M>> {
        let guard = self.inner.read();
        guard.as_ref()?.tree.route_for(pattern).cloned()
    }

    pub fn routes(&self) -> Vec<Route<M>> {
        let guard = self.inner.read();
        guard
            .as_ref()
            .map(|state| {
                state
                    .tree
                    .entries()
                    .iter()
                    .map(|entry| entry.route().clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_registered(&self, route: &Route<M>) -> bool {
        let guard = self.inner.read();
        guard
            .as_ref()
            .is_some_and(|state| state.tree.contains(route))
    }

    /// `(hits, misses)` of the metadata cache, when caching is enabled.
    pub fn cache_metrics(&self) -> Option<(u64, u64)> {
        let guard = self.inner.read();
        guard
            .as_ref()?
            .cache
            .as_ref()
            .map(|cache| cache.stats().snapshot())
    }

    pub fn cached_len(&self) -> usize {
        let guard = self.inner.read();
        guard
            .as_ref()
            .and_then(|state| state.cache.as_ref())
            .map_or(0, MetadataCache::len)
    }

    /// Resolves the host's current path.
    pub fn current(&self, location: &dyn Location) -> RouterResult<Arc<M>> {
        let url = location.current_path();
        self.resolve(strip_query(&url))
    }

    /// Builds a URL for `route`, hands it to the host, then notifies
    /// listeners with the resolved metadata.
    pub fn navigate(
        &self,
        location: &dyn Location,
        route: &Route<M>,
        params: &ParamMap,
        query: Option<&QueryParams>,
    ) -> RouterResult<Arc<M>> {
        let url = self.build_url(route, params, query)?;
        location.navigate(&url);
        self.notify(strip_query(&url))
    }

    pub fn subscribe<F>(&self, listener: F) -> RouterResult<ListenerId>
    where
        F: Fn(&str, &Arc<M>) + Send + Sync + 'static,
    {
        let mut guard = self.inner.write();
        let state = guard.as_mut().ok_or(RouterError::TornDown)?;
        let id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listeners.push((id, Arc::new(listener)));
        Ok(id)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut guard = self.inner.write();
        let Some(state) = guard.as_mut() else {
            return false;
        };
        let before = state.listeners.len();
        state.listeners.retain(|(existing, _)| *existing != id);
        state.listeners.len() != before
    }

    /// Resolves `pathname` and hands the metadata to every listener.
    ///
    /// Listeners run after the router lock is released, so they may call back
    /// into the router.
    pub fn notify(&self, pathname: &str) -> RouterResult<Arc<M>> {
        let (metadata, listeners) = {
            let guard = self.inner.read();
            let state = guard.as_ref().ok_or(RouterError::TornDown)?;
            let metadata = state.resolve(pathname, self.options.debug)?;
            let listeners: Vec<Listener<M>> = state
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect();
            (metadata, listeners)
        };

        for listener in listeners {
            listener(pathname, &metadata);
        }
        Ok(metadata)
    }

    /// Drops the route tree, the cache and every listener. Later calls fail
    /// with `RouterError::TornDown`; calling this again is a no-op.
    pub fn teardown(&self) {
        let mut guard = self.inner.write();
        if let Some(state) = guard.take() {
            if let Some(cache) = &state.cache {
                cache.clear();
            }
            tracing::event!(
                tracing::Level::DEBUG,
                operation = "teardown",
                routes = state.tree.len() as u64,
                listeners = state.listeners.len() as u64,
                "router torn down"
            );
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.read().is_none()
    }
}

impl<M> std::fmt::Debug for Router<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.inner.read();
        let mut out = f.debug_struct("Router");
        match guard.as_ref() {
            Some(state) => out
                .field("routes", &state.tree.len())
                .field("nodes", &state.tree.node_count())
                .field("listeners", &state.listeners.len()),
            None => out.field("torn_down", &true),
        };
        out.field("options", &self.options).finish()
    }
}
