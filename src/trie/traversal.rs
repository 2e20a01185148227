use super::node::{ROOT_NODE, RouteSlot};
use super::{RouteEntry, RouteTree};
use crate::pattern::{Pattern, Segment};
use crate::types::RouteParams;

impl<M> RouteTree<M> {
    /// Walks the trie one pathname segment at a time.
    ///
    /// A static edge always wins over the dynamic edge at the same node, and
    /// a static choice is never revisited.
    pub(crate) fn find_slot(&self, segments: &[&str]) -> Option<RouteSlot> {
        let mut current = ROOT_NODE;

        for segment in segments {
            let node = &self.nodes[current];

            if let Some(child) = node.static_child(segment) {
                current = child;
                continue;
            }

            let edge = node.dynamic_child.as_ref()?;
            tracing::event!(
                tracing::Level::TRACE,
                operation = "descend_dynamic",
                param = %edge.name,
                optional = edge.optional,
                segment = %segment
            );
            current = edge.child;
        }

        self.nodes[current].terminal
    }

    pub fn lookup(&self, segments: &[&str]) -> Option<(&RouteEntry<M>, RouteParams)> {
        let slot = self.find_slot(segments)?;
        let entry = self.entry(slot);
        let params = extract_params(&entry.pattern, segments);
        Some((entry, params))
    }
}

/// Binds every dynamic segment of `pattern` to the pathname segment at the
/// same index, or to `None` when the pathname is shorter.
pub(crate) fn extract_params(pattern: &Pattern, segments: &[&str]) -> RouteParams {
    let mut params = RouteParams::with_capacity(pattern.segments().len());
    for (index, segment) in pattern.segments().iter().enumerate() {
        if let Segment::Dynamic { name, .. } = segment {
            let value = segments.get(index).map(|value| (*value).to_string());
            params.insert(name.clone(), value);
        }
    }
    params
}
