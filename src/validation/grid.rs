//! Grid alignment
//!
//! Elements are grouped into rows by their top coordinate. A row is every
//! element sharing one exact `y`.

use std::collections::BTreeMap;

use crate::geometry::Element;
use crate::validation::errors::Errors;

/// Number of elements per distinct `y`, in ascending `y` order
pub fn rows_by_top(elements: &[Element]) -> BTreeMap<i32, usize> {
    let mut rows = BTreeMap::new();
    for element in elements {
        *rows.entry(element.rectangle().y()).or_insert(0) += 1;
    }
    rows
}

/// Check the list forms a grid of `columns` x `rows`; zero skips a dimension.
///
/// The first row whose size differs from `columns` is tolerated silently, so
/// a partially filled last row passes. Every later mismatching row is
/// reported, whatever its position.
pub fn validate_grid_alignment(
    elements: &[Element],
    columns: usize,
    rows: usize,
    errors: &mut Errors,
) {
    let buckets = rows_by_top(elements);

    if rows > 0 && buckets.len() != rows {
        errors.add(format!(
            "Elements in a grid are not aligned properly. Looks like grid has wrong amount of rows. Expected is {}. Actual is {}",
            rows,
            buckets.len()
        ));
    }

    if columns > 0 {
        let mut mismatched_rows = 0;
        for (row, &in_row) in buckets.values().enumerate() {
            if in_row == columns {
                continue;
            }
            mismatched_rows += 1;
            if mismatched_rows > 1 {
                errors.add(format!(
                    "Elements in a grid are not aligned properly in row #{}. Expected {} elements in a row. Actually it's {}",
                    row + 1,
                    columns,
                    in_row
                ));
            }
        }
    }
}
