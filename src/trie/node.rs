use hashbrown::HashMap as FastHashMap;

pub(crate) type NodeId = usize;
pub(crate) const ROOT_NODE: NodeId = 0;

/// Index into the tree's route entry table.
pub(crate) type RouteSlot = usize;

#[derive(Debug, Clone)]
pub(crate) struct DynamicEdge {
    pub(crate) name: Box<str>,
    pub(crate) optional: bool,
    pub(crate) child: NodeId,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    pub(crate) terminal: Option<RouteSlot>,
    pub(crate) static_children: FastHashMap<Box<str>, NodeId>,
    pub(crate) dynamic_child: Option<DynamicEdge>,
}

impl TrieNode {
    #[inline]
    pub(crate) fn static_child(&self, key: &str) -> Option<NodeId> {
        self.static_children.get(key).copied()
    }
}
