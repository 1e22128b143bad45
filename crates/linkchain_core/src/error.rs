//! Error taxonomy for chain operations.
//!
//! Two kinds exist: positional requests past the current bounds, and calls
//! that break a construction or mode contract. An absent value is not an
//! error and has no variant here.

use std::fmt;

/// Which coordinate of a positional request was out of range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Position in a flat chain.
    Position,
    /// Row of a row-major chain.
    Row,
    /// Column within one row.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Position => "position",
            Axis::Row => "row",
            Axis::Column => "column",
        })
    }
}

/// A broken caller contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Violation {
    /// A row-major operation was invoked on a chain not marked row-major.
    #[error("operation requires a row-major chain")]
    NotRowMajor,
    /// The head passed to `from_head_tail` already links past itself, so the
    /// given tail is not reachable in one step.
    #[error("head node already links to another node; tail is unreachable from head")]
    HeadAlreadyLinked,
    /// The tail passed to `from_head_tail` links onward, so it is not the last node.
    #[error("tail node links to further nodes and cannot be the last node")]
    TailNotLast,
    /// A single-node constructor received a node that links onward.
    #[error("node links to further nodes but a single node was required")]
    TrailingLinks,
}

/// Error returned by fallible chain operations.
///
/// Every operation that returns this error has left the chain unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// The requested coordinate is at or beyond the current length.
    #[error("{axis} index {index} is out of bounds (length {len})")]
    IndexOutOfBounds {
        /// Which coordinate overflowed.
        axis: Axis,
        /// The requested index.
        index: usize,
        /// The length it was checked against.
        len: usize,
    },
    /// The caller broke a construction or mode contract.
    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] Violation),
}

impl ChainError {
    #[inline]
    pub(crate) fn out_of_bounds(axis: Axis, index: usize, len: usize) -> Self {
        ChainError::IndexOutOfBounds { axis, index, len }
    }

    /// Returns `true` for [`ChainError::IndexOutOfBounds`].
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ChainError::IndexOutOfBounds { .. })
    }
}
