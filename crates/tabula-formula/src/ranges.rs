//! Cell range extraction from formula text
//!
//! Function formulas are not parsed as nested call trees: every substring
//! shaped like `<letters><digits>:<letters><digits>` anywhere in the text
//! becomes one range argument, and all matches are flattened into a single
//! aggregate list. `SUM(A1:B2)+SUM(C1:D2)` therefore contributes two ranges
//! summed together.

use lazy_regex::{lazy_regex, Lazy};
use regex::Regex;
use tabula_core::CellRange;

use crate::error::FormulaResult;

/// Matches one A1:B2-shaped span
static RANGE_RE: Lazy<Regex> = lazy_regex!(r"[A-Za-z]+[0-9]+:[A-Za-z]+[0-9]+");

/// Extract every range-shaped substring from formula text, in order.
///
/// Returns `InvalidReference` if a matched span does not resolve to a pair
/// of valid addresses (e.g. a column beyond the supported maximum).
pub fn extract_ranges(text: &str) -> FormulaResult<Vec<CellRange>> {
    let mut ranges = Vec::new();

    for m in RANGE_RE.find_iter(text) {
        ranges.push(CellRange::parse(m.as_str())?);
    }

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::CellAddress;

    #[test]
    fn test_extract_single_range() {
        let ranges = extract_ranges("SUM(A1:B2)").unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].start, CellAddress::new(0, 0));
        assert_eq!(ranges[0].end, CellAddress::new(1, 1));
    }

    #[test]
    fn test_extract_multiple_ranges_flattened() {
        let ranges = extract_ranges("SUM(A1:B2)+SUM(C1:D2)").unwrap();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[1].start, CellAddress::new(0, 2));
        assert_eq!(ranges[1].end, CellAddress::new(1, 3));
    }

    #[test]
    fn test_no_ranges() {
        assert!(extract_ranges("AVERAGE()").unwrap().is_empty());
        assert!(extract_ranges("1+2").unwrap().is_empty());
        // A bare reference is not a range
        assert!(extract_ranges("SUM(A1)").unwrap().is_empty());
    }

    #[test]
    fn test_case_insensitive_letters() {
        let ranges = extract_ranges("sum(a1:b2)").unwrap();
        assert_eq!(ranges.len(), 1);
    }

    #[test]
    fn test_unresolvable_span_is_invalid_reference() {
        let err = extract_ranges("SUM(ZZZZ1:A1)").unwrap_err();
        assert!(matches!(err, crate::FormulaError::InvalidReference(_)));
    }
}
