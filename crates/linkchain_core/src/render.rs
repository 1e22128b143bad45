//! Textual rendering.
//!
//! Flat chains render their values in chain order separated by one space.
//! An absent value renders as [`EMPTY_CELL`] (two spaces) instead of being
//! skipped, so columns stay aligned with positions. Row-major chains render
//! one row per line, each row by the flat rule, with no trailing newline.
//!
//! [`Listing`] is the one-value-per-line form, where absent values read
//! `Empty`.

use std::fmt;

use crate::{Chain, Node, NodeRef};

/// Placeholder written for a node without a value.
pub const EMPTY_CELL: &str = "  ";

/// Placeholder written by [`Listing`] for a node without a value.
pub const EMPTY_LINE: &str = "Empty";

fn write_slot<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: Option<&T>) -> fmt::Result {
    match value {
        Some(value) => write!(f, "{value}"),
        None => f.write_str(EMPTY_CELL),
    }
}

impl<T: fmt::Display> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_row_major() { "\n" } else { " " };
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            write_slot(f, value)?;
        }
        Ok(())
    }
}

/// Renders the node's own value only.
impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_slot(f, self.value())
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_slot(f, self.value())
    }
}

/// One-value-per-line rendering of a chain, created by [`Chain::listing`].
pub struct Listing<'a, T> {
    chain: &'a Chain<T>,
}

impl<T> Chain<T> {
    /// Render each value on its own line, absent values as `Empty`.
    pub fn listing(&self) -> Listing<'_, T> {
        Listing { chain: self }
    }
}

impl<T: fmt::Display> fmt::Display for Listing<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.chain {
            match value {
                Some(value) => writeln!(f, "{value}")?,
                None => writeln!(f, "{EMPTY_LINE}")?,
            }
        }
        Ok(())
    }
}
