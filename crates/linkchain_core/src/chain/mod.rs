//! Size- and tail-tracked chain controller.
//!
//! A [`Chain`] keeps its nodes in a flat arena (`Vec<Slot<T>>`) and links them
//! through [`NodeId`] indices. The arena only grows; chain order is defined by
//! the `next` links alone, so splices never move existing slots.
//!
//! # Invariants
//!
//! - `len == 0` iff `head` is `None` iff `tail` is `None`
//! - following `next` from `head` exactly `len - 1` times reaches `tail`
//! - `tail`'s `next` is `None`
//!
//! Every mutating path below updates `head`, `tail` and `len` together, and
//! every fallible path validates before touching any of them.
//!
//! Teardown is the drop of the arena `Vec`, which never recurses along links.

mod grid;
mod view;

use std::fmt;

use crate::{Axis, ChainError, Node, NodeId, Violation};

pub use view::{NodeMut, NodeRef};

/// Arena entry: one chain-resident node.
#[derive(Clone)]
struct Slot<T> {
    value: Option<T>,
    next: Option<NodeId>,
}

/// Singly-linked sequence with O(1) append and walk-based indexing.
///
/// When `T` is itself a `Chain<U>` and the row-major flag is set, the chain
/// is a 2-D table: each top-level node holds one row. See the row-major
/// methods on `Chain<Chain<U>>`.
#[derive(Clone)]
pub struct Chain<T> {
    slots: Vec<Slot<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    row_major: bool,
}

impl<T> Chain<T> {
    /// Create an empty, flat chain.
    pub const fn new() -> Self {
        Chain {
            slots: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            row_major: false,
        }
    }

    /// Create a chain of `length` nodes, each holding its own copy of `pad`.
    pub fn filled(length: usize, pad: T) -> Self
    where
        T: Clone,
    {
        std::iter::repeat_n(pad, length).collect()
    }

    /// Create a chain of `length` nodes that hold no value.
    pub fn empty_slots(length: usize) -> Self {
        let mut chain = Chain::new();
        chain.slots.reserve(length);
        for _ in 0..length {
            chain.append_slot(None);
        }
        chain
    }

    /// Create a one-node chain whose head and tail are `node`.
    ///
    /// Fails with [`Violation::TrailingLinks`] if `node` already links onward.
    pub fn from_single(node: Box<Node<T>>) -> Result<Self, ChainError> {
        if node.next().is_some() {
            tracing::debug!("from_single rejected a node with trailing links");
            return Err(Violation::TrailingLinks.into());
        }
        Ok(Chain::from_nodes(node))
    }

    /// Create a two-node chain from a head and a tail.
    ///
    /// The head must not link anywhere yet (otherwise the tail would not be
    /// its direct successor) and the tail must be a last node.
    pub fn from_head_tail(head: Box<Node<T>>, tail: Box<Node<T>>) -> Result<Self, ChainError> {
        if head.next().is_some() {
            tracing::debug!("from_head_tail rejected: head already linked");
            return Err(Violation::HeadAlreadyLinked.into());
        }
        if tail.next().is_some() {
            tracing::debug!("from_head_tail rejected: tail is not last");
            return Err(Violation::TailNotLast.into());
        }
        let mut chain = Chain::from_nodes(head);
        chain.append_at_end(tail);
        Ok(chain)
    }

    /// Adopt an entire boxed chain, counting its nodes.
    pub fn from_nodes(head: Box<Node<T>>) -> Self {
        let mut chain = Chain::new();
        chain.append_at_end(head);
        chain
    }

    /// Number of nodes reachable from the head.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the elements of this chain are rows.
    #[inline]
    pub fn is_row_major(&self) -> bool {
        self.row_major
    }

    pub fn head(&self) -> Option<NodeRef<'_, T>> {
        self.head.map(|id| NodeRef::new(self, id))
    }

    pub fn tail(&self) -> Option<NodeRef<'_, T>> {
        self.tail.map(|id| NodeRef::new(self, id))
    }

    /// Attach `node` (and everything it links to) after the current tail.
    ///
    /// This is true end-of-chain placement in O(k) for a k-node fragment,
    /// independent of the chain's length. The tail becomes the fragment's last node.
    pub fn append_at_end(&mut self, node: Box<Node<T>>) {
        let (first, last, count) = self.adopt(node);
        self.attach(first, last, count);
    }

    /// Append `value` in a new node at the end of the chain.
    pub fn append(&mut self, value: T) {
        self.append_slot(Some(value));
    }

    /// Append a node whose value may be absent.
    pub fn append_slot(&mut self, value: Option<T>) {
        let id = self.alloc(value);
        self.attach(id, id, 1);
    }

    /// View the node at position `index`, walking from the head.
    pub fn index(&self, index: usize) -> Result<NodeRef<'_, T>, ChainError> {
        let id = self.locate(index, Axis::Position)?;
        Ok(NodeRef::new(self, id))
    }

    /// Mutable view of the node at position `index`.
    pub fn index_mut(&mut self, index: usize) -> Result<NodeMut<'_, T>, ChainError> {
        let id = self.locate(index, Axis::Position)?;
        Ok(NodeMut::new(self, id))
    }

    /// Iterate values in chain order; empty nodes yield `None`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Iterate node views in chain order.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            chain: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Give the chain back as free boxed nodes.
    pub fn into_nodes(mut self) -> Option<Box<Node<T>>> {
        let mut values = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let slot = self.slot_mut(id);
            values.push(slot.value.take());
            cursor = slot.next;
        }
        Node::link(values)
    }

    /// Remove every node. The row-major flag is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // -- Arena plumbing --

    #[inline]
    fn slot(&self, id: NodeId) -> &Slot<T> {
        &self.slots[id.index()]
    }

    #[inline]
    fn slot_mut(&mut self, id: NodeId) -> &mut Slot<T> {
        &mut self.slots[id.index()]
    }

    fn alloc(&mut self, value: Option<T>) -> NodeId {
        let id = NodeId::from_len(self.slots.len());
        self.slots.push(Slot { value, next: None });
        id
    }

    /// Move a boxed chain into the arena, linked in order.
    ///
    /// Returns the first and last adopted IDs and how many nodes were adopted.
    /// The adopted run is not yet reachable from `head`.
    fn adopt(&mut self, head: Box<Node<T>>) -> (NodeId, NodeId, usize) {
        let (value, mut rest) = head.into_parts();
        let first = self.alloc(value);
        let mut last = first;
        let mut count = 1;
        while let Some(node) = rest {
            let (value, next) = node.into_parts();
            let id = self.alloc(value);
            self.slot_mut(last).next = Some(id);
            last = id;
            count += 1;
            rest = next;
        }
        (first, last, count)
    }

    /// Link an adopted run `first..=last` after the current tail.
    fn attach(&mut self, first: NodeId, last: NodeId, count: usize) {
        match self.tail {
            Some(tail) => self.slot_mut(tail).next = Some(first),
            None => self.head = Some(first),
        }
        self.tail = Some(last);
        self.len += count;
        tracing::trace!(count, len = self.len, "appended at chain end");
    }

    /// Walk `index` links from the head.
    fn locate(&self, index: usize, axis: Axis) -> Result<NodeId, ChainError> {
        if index >= self.len {
            tracing::debug!(%axis, index, len = self.len, "index out of bounds");
            return Err(ChainError::out_of_bounds(axis, index, self.len));
        }
        let mut cursor = self.head;
        for _ in 0..index {
            cursor = cursor.and_then(|id| self.slot(id).next);
        }
        cursor.ok_or_else(|| ChainError::out_of_bounds(axis, index, self.len))
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.row_major == other.row_major && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Chain::new();
        chain.extend(iter);
        chain
    }
}

impl<T> Extend<T> for Chain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.slots.reserve(iter.size_hint().0);
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = Option<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            cursor: self.head,
            remaining: self.len,
            slots: self.slots,
        }
    }
}

/// Borrowing iterator over chain values.
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let slot = self.chain.slot(id);
        self.cursor = slot.next;
        self.remaining -= 1;
        Some(slot.value.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Borrowing iterator over node views.
pub struct Nodes<'a, T> {
    chain: &'a Chain<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.chain.slot(id).next;
        self.remaining -= 1;
        Some(NodeRef::new(self.chain, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}

/// Owning iterator over chain values; empty nodes yield `None`.
pub struct IntoIter<T> {
    slots: Vec<Slot<T>>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = Option<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let slot = &mut self.slots[id.index()];
        self.cursor = slot.next;
        self.remaining -= 1;
        Some(slot.value.take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
