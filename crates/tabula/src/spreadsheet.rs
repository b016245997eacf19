//! The spreadsheet document: grid plus formula store
//!
//! [`Spreadsheet`] owns the [`Grid`] and the [`FormulaStore`] together and
//! ties the store's create/overwrite/delete transitions to cell edits:
//! committing `=`-text stores the formula and writes its display value into
//! the grid; committing plain text deletes any stored formula. The grid
//! therefore always shows a formula cell's last evaluation (or the error
//! marker), never its source text.

use std::path::Path;

use tabula_core::{CellAddress, FormulaStore, Grid, GridAccessor};
use tabula_csv::{CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter};
use tabula_formula::evaluate_display;

/// Statistics from a recalculation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecalcStats {
    /// Total number of formula cells
    pub formula_count: usize,
    /// Number of cells whose display value was written
    pub cells_calculated: usize,
    /// Number of formulas that evaluated to the error marker
    pub errors: usize,
}

/// A grid document with per-cell formulas
#[derive(Debug, Clone, Default)]
pub struct Spreadsheet {
    grid: Grid,
    formulas: FormulaStore,
}

impl Spreadsheet {
    /// Create an empty spreadsheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing grid, adopting cells whose text begins with `=` as
    /// formulas.
    ///
    /// Adopted cells keep their source text as the display until
    /// [`Self::recalculate`] runs.
    pub fn from_grid(grid: Grid) -> Self {
        let mut formulas = FormulaStore::new();

        for (row, col, text) in grid.cells() {
            if let Some(body) = text.strip_prefix('=') {
                formulas.set(CellAddress::new(row, col), body);
            }
        }

        Self { grid, formulas }
    }

    /// Load a CSV file, adopting `=`-cells as formulas
    pub fn open_csv<P: AsRef<Path>>(path: P) -> CsvResult<Self> {
        let grid = CsvReader::read_file(path, &CsvReadOptions::default())?;
        Ok(Self::from_grid(grid))
    }

    /// Save the grid (displayed values, not formula text) to a CSV file
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> CsvResult<()> {
        CsvWriter::write_file(&self.grid, path, &CsvWriteOptions::default())
    }

    /// The underlying grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Commit user text into a cell.
    ///
    /// Text beginning with `=` creates or overwrites the cell's formula and
    /// writes its evaluation (or the error marker) as the display value.
    /// Plain text deletes any stored formula and becomes the display value.
    pub fn set_cell_text(&mut self, row: u32, col: u16, text: &str) {
        let addr = CellAddress::new(row, col);

        if let Some(body) = text.strip_prefix('=') {
            let (display, _is_error) = evaluate_display(body, &self.grid);
            self.formulas.set(addr, body);
            self.grid.set_cell_text(row, col, display);
        } else {
            self.formulas.remove(addr);
            self.grid.set_cell_text(row, col, text);
        }
    }

    /// The displayed text of a cell (empty if unset)
    pub fn cell_display(&self, row: u32, col: u16) -> &str {
        self.grid.cell_text(row, col)
    }

    /// The stored formula text of a cell, without the leading `=`
    pub fn formula_text(&self, row: u32, col: u16) -> Option<&str> {
        self.formulas.get(CellAddress::new(row, col))
    }

    /// Append an empty row at the bottom
    pub fn insert_row(&mut self) {
        self.grid.insert_row();
    }

    /// Append an empty column at the right
    pub fn insert_column(&mut self) {
        self.grid.insert_column();
    }

    /// Re-evaluate every stored formula and write its display value.
    ///
    /// A failing formula writes the error marker and keeps its source text
    /// in the store so the user can correct and resubmit it; it never aborts
    /// the run or affects other cells.
    pub fn recalculate(&mut self) -> RecalcStats {
        let mut stats = RecalcStats {
            formula_count: self.formulas.len(),
            ..Default::default()
        };

        let formulas: Vec<(CellAddress, String)> = self
            .formulas
            .iter()
            .map(|(addr, text)| (addr, text.to_string()))
            .collect();

        for (addr, text) in formulas {
            let (display, is_error) = evaluate_display(&text, &self.grid);

            if is_error {
                stats.errors += 1;
            }

            self.grid.set_cell_text(addr.row, addr.col, display);
            stats.cells_calculated += 1;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabula_formula::ERROR_DISPLAY;

    #[test]
    fn test_plain_text_edit() {
        let mut sheet = Spreadsheet::new();
        sheet.set_cell_text(0, 0, "hello");

        assert_eq!(sheet.cell_display(0, 0), "hello");
        assert!(sheet.formula_text(0, 0).is_none());
    }

    #[test]
    fn test_formula_edit_writes_display() {
        let mut sheet = Spreadsheet::new();
        sheet.set_cell_text(0, 0, "1");
        sheet.set_cell_text(1, 0, "2");
        sheet.set_cell_text(2, 0, "=SUM(A1:A2)");

        assert_eq!(sheet.cell_display(2, 0), "3");
        assert_eq!(sheet.formula_text(2, 0), Some("SUM(A1:A2)"));
    }

    #[test]
    fn test_plain_text_deletes_formula() {
        let mut sheet = Spreadsheet::new();
        sheet.set_cell_text(0, 0, "=1+2");
        assert_eq!(sheet.formula_text(0, 0), Some("1+2"));

        sheet.set_cell_text(0, 0, "plain");
        assert!(sheet.formula_text(0, 0).is_none());
        assert_eq!(sheet.cell_display(0, 0), "plain");
    }

    #[test]
    fn test_failed_formula_shows_error_and_keeps_text() {
        let mut sheet = Spreadsheet::new();
        sheet.set_cell_text(0, 0, "abc");
        sheet.set_cell_text(0, 1, "=SUM(A1:A1)");

        assert_eq!(sheet.cell_display(0, 1), ERROR_DISPLAY);
        assert_eq!(sheet.formula_text(0, 1), Some("SUM(A1:A1)"));
    }

    #[test]
    fn test_recalculate_after_edits() {
        let mut sheet = Spreadsheet::new();
        sheet.set_cell_text(0, 0, "1");
        sheet.set_cell_text(1, 0, "2");
        sheet.set_cell_text(2, 0, "=SUM(A1:A2)");
        assert_eq!(sheet.cell_display(2, 0), "3");

        // Change an input; the display is stale until recalculation
        sheet.set_cell_text(0, 0, "10");
        assert_eq!(sheet.cell_display(2, 0), "3");

        let stats = sheet.recalculate();
        assert_eq!(sheet.cell_display(2, 0), "12");
        assert_eq!(
            stats,
            RecalcStats {
                formula_count: 1,
                cells_calculated: 1,
                errors: 0,
            }
        );
    }

    #[test]
    fn test_recalculate_counts_errors() {
        let mut sheet = Spreadsheet::new();
        sheet.set_cell_text(0, 0, "x");
        sheet.set_cell_text(0, 1, "=SUM(A1:A1)");
        sheet.set_cell_text(0, 2, "=1+1");

        let stats = sheet.recalculate();
        assert_eq!(stats.formula_count, 2);
        assert_eq!(stats.cells_calculated, 2);
        assert_eq!(stats.errors, 1);
        assert_eq!(sheet.cell_display(0, 1), ERROR_DISPLAY);
        assert_eq!(sheet.cell_display(0, 2), "2");
    }

    #[test]
    fn test_from_grid_adopts_formulas() {
        let mut grid = Grid::new();
        grid.set_cell_text(0, 0, "4");
        grid.set_cell_text(0, 1, "=A1*2");

        let mut sheet = Spreadsheet::from_grid(grid);
        assert_eq!(sheet.formula_text(0, 1), Some("A1*2"));
        // Source text remains until recalculation
        assert_eq!(sheet.cell_display(0, 1), "=A1*2");

        sheet.recalculate();
        assert_eq!(sheet.cell_display(0, 1), "8");
    }

    #[test]
    fn test_csv_round_trip_exports_display_values() {
        let mut sheet = Spreadsheet::new();
        sheet.set_cell_text(0, 0, "1");
        sheet.set_cell_text(0, 1, "2");
        sheet.set_cell_text(1, 0, "=SUM(A1:B1)");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        sheet.save_csv(&path).unwrap();

        let loaded = Spreadsheet::open_csv(&path).unwrap();
        // The display value was exported, not the formula text
        assert_eq!(loaded.cell_display(1, 0), "3");
        assert!(loaded.formula_text(1, 0).is_none());
    }
}
