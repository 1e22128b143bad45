//! Views of chain-resident nodes.
//!
//! Positional access returns a view rather than a bare `&T`, so callers can
//! read, replace or take the value through a position, follow the link
//! onward, or splice after the viewed node, all without exposing arena slots.

use super::Chain;
use crate::{Node, NodeId};

/// Shared view of one node inside a [`Chain`].
pub struct NodeRef<'a, T> {
    chain: &'a Chain<T>,
    id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    #[inline]
    pub(super) fn new(chain: &'a Chain<T>, id: NodeId) -> Self {
        NodeRef { chain, id }
    }

    /// Arena ID of the viewed node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn value(&self) -> Option<&'a T> {
        self.chain.slot(self.id).value.as_ref()
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        self.chain.slot(self.id).value.is_some()
    }

    /// The successor node, if any.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.chain
            .slot(self.id)
            .next
            .map(|id| NodeRef::new(self.chain, id))
    }

    /// Returns `true` if this is the chain's last node.
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.chain.tail == Some(self.id)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &self.value())
            .finish()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for NodeMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeMut")
            .field("id", &self.id)
            .field("value", &self.value())
            .finish()
    }
}

/// Exclusive view of one node inside a [`Chain`].
///
/// Holds the whole chain mutably, so a splice through this view keeps the
/// chain's size and tail exact.
pub struct NodeMut<'a, T> {
    chain: &'a mut Chain<T>,
    id: NodeId,
}

impl<'a, T> NodeMut<'a, T> {
    #[inline]
    pub(super) fn new(chain: &'a mut Chain<T>, id: NodeId) -> Self {
        NodeMut { chain, id }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.chain.slot(self.id).value.as_ref()
    }

    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.chain.slot_mut(self.id).value.as_mut()
    }

    /// Replace the value at this position; the previous value is dropped.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.chain.slot_mut(self.id).value = Some(value);
    }

    /// Move the value out, leaving this position empty.
    #[inline]
    pub fn take_value(&mut self) -> Option<T> {
        self.chain.slot_mut(self.id).value.take()
    }

    /// Splice `node` (and everything it links to) directly after this node.
    ///
    /// The chain's size grows by the fragment's length. If this node was the
    /// tail, the fragment's last node becomes the tail.
    pub fn insert_after(&mut self, node: Box<Node<T>>) {
        let (first, last, count) = self.chain.adopt(node);
        let old_next = self.chain.slot_mut(self.id).next.replace(first);
        self.chain.slot_mut(last).next = old_next;
        if self.chain.tail == Some(self.id) {
            self.chain.tail = Some(last);
        }
        self.chain.len += count;
        tracing::trace!(count, len = self.chain.len, "spliced after node");
    }

    /// Move this view to the successor node.
    pub fn into_next(self) -> Option<NodeMut<'a, T>> {
        let next = self.chain.slot(self.id).next?;
        Some(NodeMut::new(self.chain, next))
    }

    /// Reborrow as a shared view.
    pub fn as_shared(&self) -> NodeRef<'_, T> {
        NodeRef::new(self.chain, self.id)
    }
}
