use crate::types::{RouteId, RouteParams};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ROUTE_ID: AtomicU64 = AtomicU64::new(1);

pub type RouteFactory<M> = Arc<dyn Fn(&RouteParams) -> M + Send + Sync>;

/// A path pattern paired with the factory that produces its metadata.
///
/// Cloning a route keeps its identity: clones compare equal and are accepted
/// by the URL builder of any router the original was registered on.
pub struct Route<M> {
    id: RouteId,
    path: Arc<str>,
    factory: RouteFactory<M>,
}

impl<M> Route<M> {
    pub fn new<F>(path: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&RouteParams) -> M + Send + Sync + 'static,
    {
        let path: String = path.into();
        Self {
            id: NEXT_ROUTE_ID.fetch_add(1, Ordering::Relaxed),
            path: Arc::from(path),
            factory: Arc::new(factory),
        }
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn build(&self, params: &RouteParams) -> M {
        (self.factory)(params)
    }
}

impl<M> Clone for Route<M> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            path: self.path.clone(),
            factory: self.factory.clone(),
        }
    }
}

impl<M> PartialEq for Route<M> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<M> Eq for Route<M> {}

impl<M> fmt::Debug for Route<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("id", &self.id)
            .field("path", &self.path)
            .finish()
    }
}
