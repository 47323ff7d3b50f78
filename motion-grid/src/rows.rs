//! Row packing for the 12-unit grid.
//!
//! ## Usage
//!
//! [`pack_rows`] is the pure layout step; the grid controller runs it per
//! patch and attaches animation styles to the result.

use smallvec::SmallVec;

use crate::columns::{ColumnSpec, GRID_UNITS};

/// A slot scheduled into a row by the packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedCell {
    /// Ordinal position of the item within its patch.
    pub slot: usize,
    /// Width in grid units.
    pub width: u8,
}

/// One row produced by [`pack_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackedRow {
    /// Cells in layout order.
    pub cells: SmallVec<[PackedCell; 12]>,
}

impl PackedRow {
    /// Sum of the cell widths in this row.
    pub fn width_sum(&self) -> u32 {
        self.cells.iter().map(|cell| u32::from(cell.width)).sum()
    }
}

/// # pack_rows
///
/// Distributes `item_count` slots into rows of 12 grid units.
///
/// A new row starts once the current row's capacity is exhausted, so every
/// row sums to 12 units except possibly the last. A width larger than the
/// remaining capacity is still placed in the current row and overflows its
/// visual width; specs whose widths do not divide 12 are the caller's
/// responsibility. Empty input yields no rows.
///
/// ## Parameters
///
/// - `item_count`: number of slots to lay out.
/// - `spec`: per-slot widths; see [`ColumnSpec`].
///
/// ## Examples
///
/// ```
/// use motion_grid::{ColumnSpec, pack_rows};
///
/// let spec = ColumnSpec::sequence([6, 6, 4, 4, 4, 12]).unwrap();
/// let widths: Vec<Vec<u8>> = pack_rows(6, &spec)
///     .iter()
///     .map(|row| row.cells.iter().map(|cell| cell.width).collect())
///     .collect();
/// assert_eq!(widths, [vec![6, 6], vec![4, 4, 4], vec![12]]);
/// ```
pub fn pack_rows(item_count: usize, spec: &ColumnSpec) -> Vec<PackedRow> {
    let mut rows = Vec::new();
    let mut current = PackedRow::default();
    let mut remaining = i32::from(GRID_UNITS);

    for slot in 0..item_count {
        let width = spec.width_at(slot);
        if remaining <= 0 {
            rows.push(std::mem::take(&mut current));
            remaining = i32::from(GRID_UNITS);
        }
        current.cells.push(PackedCell { slot, width });
        remaining -= i32::from(width);
    }

    if !current.cells.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn widths(rows: &[PackedRow]) -> Vec<Vec<u8>> {
        rows.iter()
            .map(|row| row.cells.iter().map(|cell| cell.width).collect())
            .collect()
    }

    #[test]
    fn test_sequence_spec_packs_into_expected_rows() {
        let spec = ColumnSpec::sequence([6, 6, 4, 4, 4, 12]).expect("valid spec");
        assert_eq!(
            widths(&pack_rows(6, &spec)),
            [vec![6, 6], vec![4, 4, 4], vec![12]]
        );
    }

    #[test]
    fn test_scalar_spec_packs_fixed_rows() {
        let rows = pack_rows(9, &ColumnSpec::uniform(4));
        assert_eq!(widths(&rows), vec![vec![4, 4, 4]; 3]);
    }

    #[test]
    fn test_empty_input_packs_no_rows() {
        assert!(pack_rows(0, &ColumnSpec::uniform(4)).is_empty());
    }

    #[test]
    fn test_slots_are_assigned_in_order() {
        let rows = pack_rows(5, &ColumnSpec::uniform(6));
        let slots: Vec<usize> = rows
            .iter()
            .flat_map(|row| row.cells.iter().map(|cell| cell.slot))
            .collect();
        assert_eq!(slots, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_oversized_width_overflows_current_row() {
        let spec = ColumnSpec::sequence([8, 8, 4]).expect("valid spec");
        let rows = pack_rows(3, &spec);
        assert_eq!(widths(&rows), [vec![8, 8], vec![4]]);
        assert_eq!(rows[0].width_sum(), 16);
    }

    #[rstest]
    #[case(ColumnSpec::uniform(3), 13)]
    #[case(ColumnSpec::uniform(12), 4)]
    #[case(ColumnSpec::sequence([5, 7, 3, 9]).expect("valid spec"), 11)]
    fn test_all_rows_but_last_reach_capacity(#[case] spec: ColumnSpec, #[case] items: usize) {
        let rows = pack_rows(items, &spec);
        for row in &rows[..rows.len() - 1] {
            assert!(row.width_sum() >= 12, "row below capacity: {row:?}");
        }
    }

    #[test]
    fn test_sequence_cycles_when_items_outnumber_widths() {
        let spec = ColumnSpec::sequence([6, 6]).expect("valid spec");
        assert_eq!(
            widths(&pack_rows(6, &spec)),
            [vec![6, 6], vec![6, 6], vec![6, 6]]
        );
    }
}
