//! Sparse grid storage and the read capability consumed by the formula engine
//!
//! Only non-empty cells are stored. The grid is growable in both dimensions:
//! writes extend the tracked bounds, and [`Grid::insert_row`] /
//! [`Grid::insert_column`] mirror the host application's Add Row / Add Column
//! operations.

use ahash::AHashMap;

use crate::address::{CellAddress, CellRange};

/// Read access to cell text by (row, column).
///
/// This is the formula engine's only boundary. Reads must not panic for any
/// coordinates; unset or out-of-bounds cells read as the empty string.
pub trait GridAccessor {
    /// Get the text of a cell, or `""` if unset or out of bounds
    fn cell_text(&self, row: u32, col: u16) -> &str;

    /// Number of rows currently tracked
    fn row_count(&self) -> u32;

    /// Number of columns currently tracked
    fn column_count(&self) -> u16;
}

/// A growable sparse 2D table of cell text
#[derive(Debug, Clone, Default)]
pub struct Grid {
    /// Non-empty cells, keyed by (row, col)
    cells: AHashMap<(u32, u16), String>,
    /// Tracked row count (grows on write, never shrinks on clear)
    rows: u32,
    /// Tracked column count
    cols: u16,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty grid with the given tracked dimensions
    pub fn with_size(rows: u32, cols: u16) -> Self {
        Self {
            cells: AHashMap::new(),
            rows,
            cols,
        }
    }

    /// Set a cell's text, growing the tracked bounds to cover it.
    ///
    /// Setting empty text removes the stored entry (the cell reads back as
    /// empty either way).
    pub fn set_cell_text<S: Into<String>>(&mut self, row: u32, col: u16, text: S) {
        let text = text.into();

        self.rows = self.rows.max(row + 1);
        self.cols = self.cols.max(col + 1);

        if text.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), text);
        }
    }

    /// Set a cell's text by address
    pub fn set_cell_text_at<S: Into<String>>(&mut self, addr: CellAddress, text: S) {
        self.set_cell_text(addr.row, addr.col, text);
    }

    /// Clear a cell without shrinking the grid
    pub fn clear_cell(&mut self, row: u32, col: u16) {
        self.cells.remove(&(row, col));
    }

    /// Append an empty row at the bottom
    pub fn insert_row(&mut self) {
        self.rows += 1;
    }

    /// Append an empty column at the right
    pub fn insert_column(&mut self) {
        self.cols += 1;
    }

    /// The smallest range covering all non-empty cells, or None if the grid
    /// holds no text
    pub fn used_range(&self) -> Option<CellRange> {
        let mut it = self.cells.keys();
        let &(first_row, first_col) = it.next()?;

        let mut min_row = first_row;
        let mut max_row = first_row;
        let mut min_col = first_col;
        let mut max_col = first_col;

        for &(row, col) in it {
            min_row = min_row.min(row);
            max_row = max_row.max(row);
            min_col = min_col.min(col);
            max_col = max_col.max(col);
        }

        Some(CellRange::from_indices(min_row, min_col, max_row, max_col))
    }

    /// Iterate over all non-empty cells as (row, col, text)
    pub fn cells(&self) -> impl Iterator<Item = (u32, u16, &str)> {
        self.cells
            .iter()
            .map(|(&(row, col), text)| (row, col, text.as_str()))
    }

    /// Number of non-empty cells
    pub fn cell_total(&self) -> usize {
        self.cells.len()
    }

    /// True if no cell holds text
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl GridAccessor for Grid {
    fn cell_text(&self, row: u32, col: u16) -> &str {
        self.cells
            .get(&(row, col))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn row_count(&self) -> u32 {
        self.rows
    }

    fn column_count(&self) -> u16 {
        self.cols
    }
}
