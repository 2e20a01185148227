use hashbrown::HashMap as FastHashMap;

use super::node::{ROOT_NODE, RouteSlot, TrieNode};
use super::{TrieError, TrieResult};
use crate::pattern::Pattern;
use crate::router::Route;
use crate::types::RouteId;

#[derive(Debug)]
pub struct RouteEntry<M> {
    pub(crate) route: Route<M>,
    pub(crate) pattern: Pattern,
}

impl<M> RouteEntry<M> {
    pub fn route(&self) -> &Route<M> {
        &self.route
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// Segment trie over the registered routes.
///
/// Nodes live in a flat arena and refer to their children by index. The tree
/// is built once from an ordered route list and is read-only afterwards.
#[derive(Debug)]
pub struct RouteTree<M> {
    pub(crate) nodes: Vec<TrieNode>,
    pub(crate) entries: Vec<RouteEntry<M>>,
    pub(crate) slots: FastHashMap<RouteId, RouteSlot>,
}

impl<M> RouteTree<M> {
    pub fn build<I>(routes: I) -> TrieResult<Self>
    where
        I: IntoIterator<Item = Route<M>>,
    {
        let mut routes = routes.into_iter();
        let root = routes.next().ok_or(TrieError::EmptyRouteTable)?;

        if root.path() != "/" {
            return Err(TrieError::RootNotFirst {
                found: root.path().to_string(),
            });
        }

        let mut tree = Self {
            nodes: vec![TrieNode::default()],
            entries: Vec::new(),
            slots: FastHashMap::new(),
        };

        let root_pattern = Pattern::parse(root.path())?;
        let root_slot = tree.register(root, root_pattern);
        tree.nodes[ROOT_NODE].terminal = Some(root_slot);

        for route in routes {
            tree.insert(route)?;
        }

        tracing::event!(
            tracing::Level::DEBUG,
            operation = "build",
            routes = tree.entries.len() as u64,
            nodes = tree.nodes.len() as u64,
            "route tree built"
        );

        Ok(tree)
    }

    pub(super) fn register(&mut self, route: Route<M>, pattern: Pattern) -> RouteSlot {
        if let Some(&slot) = self.slots.get(&route.id()) {
            return slot;
        }
        let slot = self.entries.len();
        self.slots.insert(route.id(), slot);
        self.entries.push(RouteEntry { route, pattern });
        slot
    }

    pub fn entries(&self) -> &[RouteEntry<M>] {
        &self.entries
    }

    pub(crate) fn entry(&self, slot: RouteSlot) -> &RouteEntry<M> {
        &self.entries[slot]
    }

    pub fn entry_for(&self, route: &Route<M>) -> Option<&RouteEntry<M>> {
        self.slots.get(&route.id()).map(|&slot| &self.entries[slot])
    }

    pub fn contains(&self, route: &Route<M>) -> bool {
        self.slots.contains_key(&route.id())
    }

    pub fn route_for(&self, pattern: &str) -> Option<&Route<M>> {
        self.entries
            .iter()
            .find(|entry| entry.pattern.raw() == pattern)
            .map(|entry| &entry.route)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
