//! Free-standing link nodes.
//!
//! A [`Node`] owns one optional value and, through `Box`, the entire chain
//! that follows it. There is exactly one owner for every node, so re-parenting
//! a sub-chain always goes through [`Node::take_next`], which leaves the
//! source link empty.
//!
//! Long chains are torn down, cloned and compared iteratively; none of the
//! operations here recurse along `next`.

use std::fmt;

/// One link of a singly-linked chain.
///
/// `value` may be absent: that is the empty sentinel, not an error.
pub struct Node<T> {
    value: Option<T>,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Create a node with no value and no successor.
    #[inline]
    pub const fn empty() -> Self {
        Node {
            value: None,
            next: None,
        }
    }

    /// Create a node holding `value`, with no successor.
    #[inline]
    pub const fn new(value: T) -> Self {
        Node {
            value: Some(value),
            next: None,
        }
    }

    /// Create a node holding `value` that owns `next` as its successor.
    #[inline]
    pub fn with_next(value: T, next: Box<Node<T>>) -> Self {
        Node {
            value: Some(value),
            next: Some(next),
        }
    }

    /// Create a node from a possibly-absent value.
    #[inline]
    pub const fn from_slot(value: Option<T>) -> Self {
        Node { value, next: None }
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Returns `true` if this node holds a value.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Replace the held value. The previous value is dropped; links are untouched.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Move the held value out, leaving this node empty.
    #[inline]
    pub fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }

    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    /// Detach and return the rest of the chain, leaving `next` empty.
    #[inline]
    pub fn take_next(&mut self) -> Option<Box<Node<T>>> {
        self.next.take()
    }

    /// Splice `new_node` directly after this node.
    ///
    /// The previous successor is re-attached after the last node of
    /// `new_node`'s own chain, so a multi-node fragment is inserted whole.
    /// This is a local splice; it does not go to the end of the chain.
    pub fn insert_after(&mut self, new_node: Box<Node<T>>) {
        let rest = self.next.take();
        self.next = relink(unlink(new_node), rest);
    }

    /// Number of nodes in the chain starting at this node (itself included).
    pub fn chain_len(&self) -> usize {
        let mut count = 1;
        let mut cursor = self.next();
        while let Some(node) = cursor {
            count += 1;
            cursor = node.next();
        }
        count
    }

    /// Iterate the values of this node and every node after it.
    pub fn iter(&self) -> NodeIter<'_, T> {
        NodeIter { cursor: Some(self) }
    }

    /// Split into value and successor without running the chain teardown.
    pub(crate) fn into_parts(mut self: Box<Self>) -> (Option<T>, Option<Box<Node<T>>>) {
        (self.value.take(), self.next.take())
    }

    /// Build a boxed chain holding `values` in order.
    pub(crate) fn link(values: Vec<Option<T>>) -> Option<Box<Node<T>>> {
        let mut head = None;
        for value in values.into_iter().rev() {
            head = Some(Box::new(Node { value, next: head }));
        }
        head
    }
}

/// Break a chain into its individual boxes, first to last.
fn unlink<T>(head: Box<Node<T>>) -> Vec<Box<Node<T>>> {
    let mut pieces = Vec::new();
    let mut cursor = Some(head);
    while let Some(mut node) = cursor {
        cursor = node.next.take();
        pieces.push(node);
    }
    pieces
}

/// Link `pieces` in order in front of `rest`.
fn relink<T>(mut pieces: Vec<Box<Node<T>>>, rest: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
    let mut head = rest;
    while let Some(mut node) = pieces.pop() {
        node.next = head;
        head = Some(node);
    }
    head
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut cursor = self.next.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let rest: Vec<Option<T>> = self.iter().skip(1).map(|v| v.cloned()).collect();
        Node {
            value: self.value.clone(),
            next: Node::link(rest),
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the values of a node chain, yielding `None` for empty nodes.
pub struct NodeIter<'a, T> {
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for NodeIter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.map(|node| {
            self.cursor = node.next();
            node.value()
        })
    }
}
