//! Per-cell formula text storage
//!
//! Formula text is stored separately from the grid: the grid holds the
//! displayed value (the last successful evaluation or the error marker),
//! while this store holds the source text the user committed. A formula has
//! no lifecycle beyond its owning cell: it is created when `=`-text is
//! committed, overwritten by new `=`-text, and deleted when the cell is
//! overwritten with plain text.

use ahash::AHashMap;

use crate::address::CellAddress;

/// Mapping from cell address to stored formula text (without the leading `=`)
#[derive(Debug, Clone, Default)]
pub struct FormulaStore {
    formulas: AHashMap<CellAddress, String>,
}

impl FormulaStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the formula text for a cell
    pub fn set<S: Into<String>>(&mut self, addr: CellAddress, text: S) {
        self.formulas.insert(addr, text.into());
    }

    /// Remove the formula for a cell, returning the old text if present
    pub fn remove(&mut self, addr: CellAddress) -> Option<String> {
        self.formulas.remove(&addr)
    }

    /// Get the formula text for a cell
    pub fn get(&self, addr: CellAddress) -> Option<&str> {
        self.formulas.get(&addr).map(String::as_str)
    }

    /// True if the cell has a stored formula
    pub fn contains(&self, addr: CellAddress) -> bool {
        self.formulas.contains_key(&addr)
    }

    /// Iterate over all (address, formula text) pairs
    pub fn iter(&self) -> impl Iterator<Item = (CellAddress, &str)> {
        self.formulas
            .iter()
            .map(|(&addr, text)| (addr, text.as_str()))
    }

    /// Number of stored formulas
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    /// True if no formulas are stored
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrite_remove() {
        let mut store = FormulaStore::new();
        let a1 = CellAddress::new(0, 0);

        store.set(a1, "SUM(A1:B2)");
        assert_eq!(store.get(a1), Some("SUM(A1:B2)"));

        store.set(a1, "1+2");
        assert_eq!(store.get(a1), Some("1+2"));
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove(a1), Some("1+2".to_string()));
        assert!(store.get(a1).is_none());
        assert!(store.is_empty());
    }
}
