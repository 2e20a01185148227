use super::node::{DynamicEdge, NodeId, ROOT_NODE, TrieNode};
use super::{RouteTree, TrieError, TrieResult};
use crate::pattern::{Pattern, Segment};
use crate::router::Route;

impl<M> RouteTree<M> {
    pub(super) fn insert(&mut self, route: Route<M>) -> TrieResult<()> {
        tracing::event!(tracing::Level::TRACE, operation = "insert", path = %route.path());

        let pattern = Pattern::parse(route.path())?;
        let slot = self.register(route, pattern);
        let pattern = &self.entries[slot].pattern;
        let nodes = &mut self.nodes;

        let mut current = ROOT_NODE;
        for segment in pattern.segments() {
            current = match segment {
                Segment::Literal(text) => descend_static(nodes, current, text),
                Segment::Dynamic { name, optional } => {
                    let child = descend_dynamic(nodes, current, name, *optional, pattern.raw())?;
                    // the path without the optional tail resolves to this route
                    if *optional && nodes[current].terminal.is_none() {
                        nodes[current].terminal = Some(slot);
                    }
                    child
                }
            };
        }

        match nodes[current].terminal {
            None => {
                nodes[current].terminal = Some(slot);
                Ok(())
            }
            Some(existing) if existing == slot => Ok(()),
            Some(existing) => Err(TrieError::DuplicateRoute {
                pattern: pattern.raw().to_string(),
                existing: self.entries[existing].pattern.raw().to_string(),
            }),
        }
    }
}

fn alloc_node(nodes: &mut Vec<TrieNode>) -> NodeId {
    nodes.push(TrieNode::default());
    nodes.len() - 1
}

fn descend_static(nodes: &mut Vec<TrieNode>, current: NodeId, text: &str) -> NodeId {
    if let Some(child) = nodes[current].static_child(text) {
        return child;
    }
    let child = alloc_node(nodes);
    nodes[current]
        .static_children
        .insert(text.to_owned().into_boxed_str(), child);
    child
}

fn descend_dynamic(
    nodes: &mut Vec<TrieNode>,
    current: NodeId,
    name: &str,
    optional: bool,
    pattern: &str,
) -> TrieResult<NodeId> {
    if let Some(edge) = &nodes[current].dynamic_child {
        if edge.name.as_ref() != name {
            return Err(TrieError::DynamicSegmentConflict {
                pattern: pattern.to_string(),
                existing: edge.name.to_string(),
                incoming: name.to_string(),
            });
        }
        return Ok(edge.child);
    }

    let child = alloc_node(nodes);
    nodes[current].dynamic_child = Some(DynamicEdge {
        name: name.into(),
        optional,
        child,
    });
    Ok(child)
}
