//! Row-major (2-D) operations.
//!
//! A row-major chain is a `Chain<Chain<U>>` with the row-major flag set:
//! each top-level node holds one row. Rows are ordinary flat chains, so a
//! table can be jagged. Only growth that asks for it (`keep_dims`) keeps the
//! table rectangular.
//!
//! A row node whose value is absent is treated as an empty row: it has
//! length 0 and is materialized when something is appended to it.

use super::{Chain, NodeMut, NodeRef};
use crate::{Axis, ChainError, Violation};

impl<U> Chain<Chain<U>> {
    /// Create a row-major table of `rows` rows, each a fresh chain of `cols`
    /// copies of `pad`.
    #[tracing::instrument(level = "trace", skip(pad))]
    pub fn filled_rectangular(rows: usize, cols: usize, pad: U) -> Self
    where
        U: Clone,
    {
        let mut table: Self = std::iter::repeat_n(Chain::filled(cols, pad), rows).collect();
        table.row_major = true;
        table
    }

    /// Mark (or unmark) this chain's elements as rows.
    pub fn set_row_major(&mut self, row_major: bool) {
        self.row_major = row_major;
    }

    /// Append a new single-cell row holding `value`.
    ///
    /// This is what appending a plain value means for a table: it grows the
    /// table by a row, not an existing row by a cell.
    pub fn append_row(&mut self, value: U) {
        let mut row = Chain::new();
        row.append(value);
        self.append(row);
    }

    /// Append `value` at the end of row `row`.
    ///
    /// With `keep_dims`, every other row is extended by one copy of `pad`, so
    /// a rectangular table stays rectangular. Without it only the target row
    /// grows and the table may become jagged.
    ///
    /// Fails with [`Violation::NotRowMajor`] on a chain not marked row-major,
    /// and with an out-of-bounds error for `row >= len()`. Either way the
    /// table is left untouched.
    #[tracing::instrument(level = "trace", skip(self, value, pad), fields(rows = self.len))]
    pub fn append_2d(
        &mut self,
        value: U,
        row: usize,
        keep_dims: bool,
        pad: U,
    ) -> Result<(), ChainError>
    where
        U: Clone,
    {
        self.require_row_major()?;
        let target = self.locate(row, Axis::Row)?;

        self.slot_mut(target)
            .value
            .get_or_insert_with(Chain::new)
            .append(value);

        if keep_dims {
            let mut pads = std::iter::repeat_n(pad, self.len - 1);
            let mut cursor = self.head;
            while let Some(id) = cursor {
                let slot = self.slot_mut(id);
                cursor = slot.next;
                if id == target {
                    continue;
                }
                if let Some(cell) = pads.next() {
                    slot.value.get_or_insert_with(Chain::new).append(cell);
                }
            }
        }
        Ok(())
    }

    /// Number of cells in row `row`.
    ///
    /// Fails with [`Violation::NotRowMajor`] on a chain not marked row-major.
    pub fn row_size(&self, row: usize) -> Result<usize, ChainError> {
        self.require_row_major()?;
        let id = self.locate(row, Axis::Row)?;
        Ok(self.slot(id).value.as_ref().map_or(0, Chain::len))
    }

    /// Lengths of all rows, top to bottom.
    pub fn row_sizes(&self) -> Vec<usize> {
        self.iter().map(|row| row.map_or(0, Chain::len)).collect()
    }

    /// Returns `true` if every row has the same length.
    pub fn is_rectangular(&self) -> bool {
        let mut sizes = self.iter().map(|row| row.map_or(0, Chain::len));
        match sizes.next() {
            Some(first) => sizes.all(|size| size == first),
            None => true,
        }
    }

    /// View cell `(row, col)`, walking `row` rows then `col` cells.
    pub fn index_2d(&self, row: usize, col: usize) -> Result<NodeRef<'_, U>, ChainError> {
        let row_id = self.locate(row, Axis::Row)?;
        match self.slot(row_id).value.as_ref() {
            Some(cells) => {
                let id = cells.locate(col, Axis::Column)?;
                Ok(NodeRef::new(cells, id))
            }
            None => Err(ChainError::out_of_bounds(Axis::Column, col, 0)),
        }
    }

    /// Mutable view of cell `(row, col)`.
    pub fn index_2d_mut(&mut self, row: usize, col: usize) -> Result<NodeMut<'_, U>, ChainError> {
        let row_id = self.locate(row, Axis::Row)?;
        match self.slot_mut(row_id).value.as_mut() {
            Some(cells) => {
                let id = cells.locate(col, Axis::Column)?;
                Ok(NodeMut::new(cells, id))
            }
            None => Err(ChainError::out_of_bounds(Axis::Column, col, 0)),
        }
    }

    fn require_row_major(&self) -> Result<(), ChainError> {
        if self.row_major {
            Ok(())
        } else {
            tracing::debug!("row-major operation on a flat chain");
            Err(Violation::NotRowMajor.into())
        }
    }
}
