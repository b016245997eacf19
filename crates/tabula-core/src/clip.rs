//! Clipboard text codec
//!
//! Encodes a rectangular grid region as tab-delimited, newline-separated
//! text and decodes such text back into rows of cells. This is the plain
//! interchange format table editors put on the clipboard; talking to the
//! platform clipboard itself is the host's job.

use crate::address::CellRange;
use crate::grid::GridAccessor;

/// Encode a rectangular region as clipboard text.
///
/// Cells within a row are joined by tabs, rows by newlines. The range is
/// normalized first so either corner order selects the same region.
pub fn encode_region<G: GridAccessor>(grid: &G, region: CellRange) -> String {
    let region = region.normalized();
    let mut out = String::new();

    for row in region.start.row..=region.end.row {
        if row > region.start.row {
            out.push('\n');
        }
        for col in region.start.col..=region.end.col {
            if col > region.start.col {
                out.push('\t');
            }
            out.push_str(grid.cell_text(row, col));
        }
    }

    out
}

/// Decode clipboard text into rows of cells.
///
/// Splits on newlines, then tabs. A trailing newline does not produce a
/// phantom empty row. Empty input decodes to no rows.
pub fn decode(text: &str) -> Vec<Vec<&str>> {
    if text.is_empty() {
        return Vec::new();
    }

    text.strip_suffix('\n')
        .unwrap_or(text)
        .split('\n')
        .map(|line| line.split('\t').collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use pretty_assertions::assert_eq;

    fn sample_grid() -> Grid {
        let mut grid = Grid::new();
        grid.set_cell_text(0, 0, "1");
        grid.set_cell_text(0, 1, "2");
        grid.set_cell_text(1, 0, "3");
        // (1, 1) left empty
        grid
    }

    #[test]
    fn test_encode_region() {
        let grid = sample_grid();
        let region = CellRange::parse("A1:B2").unwrap();

        assert_eq!(encode_region(&grid, region), "1\t2\n3\t");
    }

    #[test]
    fn test_encode_reversed_corners_selects_same_region() {
        let grid = sample_grid();
        let region = CellRange::parse("B2:A1").unwrap();

        assert_eq!(encode_region(&grid, region), "1\t2\n3\t");
    }

    #[test]
    fn test_decode() {
        let rows = decode("1\t2\n3\t");
        assert_eq!(rows, vec![vec!["1", "2"], vec!["3", ""]]);
    }

    #[test]
    fn test_decode_empty_and_trailing_newline() {
        assert!(decode("").is_empty());
        assert_eq!(decode("a\n"), vec![vec!["a"]]);
    }

    #[test]
    fn test_round_trip() {
        let grid = sample_grid();
        let region = CellRange::parse("A1:B2").unwrap();

        let text = encode_region(&grid, region);
        let rows = decode(&text);

        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[0][1], "2");
        assert_eq!(rows[1][0], "3");
        assert_eq!(rows[1][1], "");
    }
}
