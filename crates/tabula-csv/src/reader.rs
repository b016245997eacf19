//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use tabula_core::{Grid, MAX_COLS, MAX_ROWS};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a grid
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .flexible(options.flexible)
            .has_headers(false)
            .from_reader(reader);

        let mut grid = Grid::new();
        let mut row_idx = 0u32;

        for result in csv_reader.records() {
            let record = result?;

            if row_idx >= MAX_ROWS {
                return Err(CsvError::TooLarge(format!("more than {} rows", MAX_ROWS)));
            }

            for (col, field) in record.iter().enumerate() {
                if col >= MAX_COLS as usize {
                    return Err(CsvError::TooLarge(format!(
                        "more than {} columns",
                        MAX_COLS
                    )));
                }
                // Empty fields still grow the tracked bounds
                grid.set_cell_text(row_idx, col as u16, field);
            }

            row_idx += 1;
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabula_core::GridAccessor;

    #[test]
    fn test_read_simple() {
        let data = "a,b,c\n1,2,3\n";
        let grid = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.cell_text(0, 0), "a");
        assert_eq!(grid.cell_text(1, 2), "3");
    }

    #[test]
    fn test_read_keeps_text_as_text() {
        let data = "1,true,3.5\n";
        let grid = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        // No type coercion: fields land as text
        assert_eq!(grid.cell_text(0, 0), "1");
        assert_eq!(grid.cell_text(0, 1), "true");
        assert_eq!(grid.cell_text(0, 2), "3.5");
    }

    #[test]
    fn test_read_ragged_rows() {
        let data = "a,b\nc\n";
        let grid = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.cell_text(1, 0), "c");
        assert_eq!(grid.cell_text(1, 1), "");
    }

    #[test]
    fn test_read_quoted_fields() {
        let data = "\"a,b\",c\n";
        let grid = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(grid.cell_text(0, 0), "a,b");
        assert_eq!(grid.cell_text(0, 1), "c");
    }
}
