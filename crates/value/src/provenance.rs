//! Node references with provenance, and the ordered lists built from them.
//!
//! Extended-axis evaluation is position-sensitive relative to the node that
//! produced a result, not just to static document order, so every node
//! handle can carry the ordinal position of its originating context node and
//! the cardinality of that context's result set at creation time. Both are
//! fixed at construction and never recomputed, even if later steps mutate
//! the live page.

use crate::node::PageNode;

/// One DOM-node handle plus its optional provenance annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRef<N> {
    node: N,
    context_position: Option<usize>,
    context_size: Option<usize>,
}

impl<N: PageNode> NodeRef<N> {
    /// Wraps a node with no provenance annotation.
    pub fn new(node: N) -> Self {
        Self {
            node,
            context_position: None,
            context_size: None,
        }
    }

    /// Wraps a node, recording the 1-based position of the context node that
    /// generated it and the size of that context's result set.
    pub fn with_context(node: N, position: usize, size: usize) -> Self {
        Self {
            node,
            context_position: Some(position),
            context_size: Some(size),
        }
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn context_position(&self) -> Option<usize> {
        self.context_position
    }

    pub fn context_size(&self) -> Option<usize> {
        self.context_size
    }
}

/// An ordered, duplicate-permitting sequence of node references. Insertion
/// order is document/evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Provenance<N> {
    refs: Vec<NodeRef<N>>,
}

impl<N: PageNode> Provenance<N> {
    pub fn new() -> Self {
        Self { refs: Vec::new() }
    }

    pub fn push(&mut self, node_ref: NodeRef<N>) {
        self.refs.push(node_ref);
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn first(&self) -> Option<&NodeRef<N>> {
        self.refs.first()
    }

    pub fn get(&self, index: usize) -> Option<&NodeRef<N>> {
        self.refs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeRef<N>> {
        self.refs.iter()
    }

    /// A defensive copy of the underlying references.
    pub fn to_vec(&self) -> Vec<NodeRef<N>> {
        self.refs.clone()
    }
}

impl<N: PageNode> Default for Provenance<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: PageNode> From<Vec<NodeRef<N>>> for Provenance<N> {
    fn from(refs: Vec<NodeRef<N>>) -> Self {
        Self { refs }
    }
}

impl<N: PageNode> FromIterator<NodeRef<N>> for Provenance<N> {
    fn from_iter<I: IntoIterator<Item = NodeRef<N>>>(iter: I) -> Self {
        Self {
            refs: iter.into_iter().collect(),
        }
    }
}

impl<N: PageNode> IntoIterator for Provenance<N> {
    type Item = NodeRef<N>;
    type IntoIter = std::vec::IntoIter<NodeRef<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockNode;

    #[test]
    fn test_provenance_is_fixed_at_creation() {
        let node = MockNode::element("a", "link");
        let node_ref = NodeRef::with_context(node, 3, 7);
        assert_eq!(node_ref.context_position(), Some(3));
        assert_eq!(node_ref.context_size(), Some(7));

        // Cloning and listing does not recompute the annotation.
        let mut list = Provenance::new();
        list.push(node_ref.clone());
        list.push(node_ref);
        let copy = list.to_vec();
        assert_eq!(copy[1].context_position(), Some(3));
        assert_eq!(copy[1].context_size(), Some(7));
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let a = NodeRef::new(MockNode::element("a", "one"));
        let b = NodeRef::new(MockNode::element("b", "two"));
        let list: Provenance<MockNode> = vec![a.clone(), b.clone(), a.clone()].into();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0), Some(&a));
        assert_eq!(list.get(1), Some(&b));
        assert_eq!(list.get(2), Some(&a));
    }

    #[test]
    fn test_unannotated_ref() {
        let node_ref = NodeRef::new(MockNode::element("p", "text"));
        assert_eq!(node_ref.context_position(), None);
        assert_eq!(node_ref.context_size(), None);
    }
}
