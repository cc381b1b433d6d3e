use crate::kind::NodeKind;
use crate::node::AnyNode;
use crate::rewrite::{Rewriter, dispatch};
use std::collections::BTreeMap;

/// Identity rewrite that tallies every node it passes, per kind.
#[derive(Debug, Default, Clone)]
pub struct KindCounter {
    counts: BTreeMap<NodeKind, usize>,
}

impl KindCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Kinds seen at least once, in `NodeKind` order.
    pub fn counts(&self) -> &BTreeMap<NodeKind, usize> {
        &self.counts
    }
}

impl Rewriter for KindCounter {
    fn visit(&mut self, node: AnyNode) -> AnyNode {
        *self.counts.entry(node.kind()).or_insert(0) += 1;
        dispatch(self, node)
    }
}
