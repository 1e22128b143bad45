//! Node IDs for chain arenas.
//!
//! A chain stores its nodes in a flat arena and links them with `NodeId(u32)`
//! indices instead of pointers:
//! - Memory: 4 bytes per index
//! - Equality: O(1) integer compare
//! - No dangling: an ID is only ever produced by the arena that owns the slot

use std::fmt;

/// Index of a node inside one chain's arena.
///
/// IDs are meaningful only for the chain that produced them. Arena order is
/// allocation order, not chain order; follow links to walk the chain.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Create the ID for the next slot of an arena currently holding `len` slots.
    ///
    /// # Panics
    /// Panics if the arena would exceed `u32::MAX` nodes.
    #[inline]
    pub(crate) fn from_len(len: usize) -> Self {
        let raw = u32::try_from(len)
            .unwrap_or_else(|_| panic!("chain arena exceeds u32::MAX nodes ({len})"));
        NodeId(raw)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}
