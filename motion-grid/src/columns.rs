//! Per-slot column widths for the 12-unit grid.
//!
//! ## Usage
//!
//! Build a [`ColumnSpec`] with [`ColumnSpec::uniform`] or
//! [`ColumnSpec::sequence`] and set it on the grid args. Widths are grid
//! units out of [`GRID_UNITS`] per row.

use thiserror::Error;
use tracing::warn;

/// Total width units in one grid row.
pub const GRID_UNITS: u8 = 12;

/// Errors produced when a column width sequence fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnSpecError {
    /// The sequence contained no widths.
    #[error("column width sequence is empty")]
    Empty,
    /// A width fell outside `1..=12`.
    #[error("column width {width} at position {index} is outside 1..=12")]
    WidthOutOfRange {
        /// Position of the offending width in the sequence.
        index: usize,
        /// The rejected width value.
        width: u8,
    },
}

/// Per-slot column widths, either one uniform value or a cycling sequence.
///
/// Validation happens at construction, so every spec held by the grid yields
/// well-defined widths. A *valid* spec whose widths do not sum to 12 still
/// over/under-fills rows; see [`pack_rows`](crate::rows::pack_rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    kind: SpecKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SpecKind {
    Uniform(u8),
    Sequence(Vec<u8>),
}

impl ColumnSpec {
    /// Creates a uniform spec where every slot spans `width` units.
    ///
    /// Out-of-range widths are clamped into `1..=12`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use motion_grid::ColumnSpec;
    ///
    /// let spec = ColumnSpec::uniform(4);
    /// assert_eq!(spec.width_at(7), 4);
    /// ```
    pub fn uniform(width: u8) -> Self {
        let clamped = width.clamp(1, GRID_UNITS);
        if clamped != width {
            warn!(width, clamped, "uniform column width out of range, clamping");
        }
        Self {
            kind: SpecKind::Uniform(clamped),
        }
    }

    /// Creates a sequence spec applied per item slot, cycling as needed.
    ///
    /// ## Examples
    ///
    /// ```
    /// use motion_grid::ColumnSpec;
    ///
    /// let spec = ColumnSpec::sequence([6, 6, 4, 4, 4, 12]).unwrap();
    /// assert_eq!(spec.width_at(2), 4);
    /// assert_eq!(spec.width_at(6), 6); // cycles back to the start
    /// ```
    pub fn sequence(widths: impl Into<Vec<u8>>) -> Result<Self, ColumnSpecError> {
        let widths = widths.into();
        if widths.is_empty() {
            return Err(ColumnSpecError::Empty);
        }
        for (index, &width) in widths.iter().enumerate() {
            if !(1..=GRID_UNITS).contains(&width) {
                return Err(ColumnSpecError::WidthOutOfRange { index, width });
            }
        }
        Ok(Self {
            kind: SpecKind::Sequence(widths),
        })
    }

    /// Width in grid units for the item at `slot`.
    pub fn width_at(&self, slot: usize) -> u8 {
        match &self.kind {
            SpecKind::Uniform(width) => *width,
            SpecKind::Sequence(widths) => widths[slot % widths.len()],
        }
    }

    /// Number of placeholder slots needed to fill `rows` shell rows.
    ///
    /// A uniform spec floors `rows * 12 / width` as one product, keeping the
    /// fractional rows that per-row flooring would drop; a sequence spec
    /// consumes cycling widths until `rows * 12` units are covered. Zero
    /// rows always yield zero slots.
    pub fn placeholder_slots(&self, rows: usize) -> usize {
        match &self.kind {
            SpecKind::Uniform(width) => (GRID_UNITS as usize * rows) / *width as usize,
            SpecKind::Sequence(widths) => {
                let target = rows * GRID_UNITS as usize;
                let mut covered = 0;
                let mut slots = 0;
                while covered < target {
                    covered += widths[slots % widths.len()] as usize;
                    slots += 1;
                }
                slots
            }
        }
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::uniform(GRID_UNITS)
    }
}

impl From<u8> for ColumnSpec {
    fn from(width: u8) -> Self {
        Self::uniform(width)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_uniform_clamps_out_of_range_widths() {
        assert_eq!(ColumnSpec::uniform(0).width_at(0), 1);
        assert_eq!(ColumnSpec::uniform(30).width_at(0), 12);
    }

    #[test]
    fn test_sequence_rejects_empty() {
        assert_eq!(
            ColumnSpec::sequence(Vec::new()),
            Err(ColumnSpecError::Empty)
        );
    }

    #[test]
    fn test_sequence_rejects_out_of_range_width() {
        assert_eq!(
            ColumnSpec::sequence([6, 0, 4]),
            Err(ColumnSpecError::WidthOutOfRange { index: 1, width: 0 })
        );
        assert_eq!(
            ColumnSpec::sequence([6, 13]),
            Err(ColumnSpecError::WidthOutOfRange {
                index: 1,
                width: 13
            })
        );
    }

    #[test]
    fn test_sequence_cycles_past_its_length() {
        let spec = ColumnSpec::sequence([6, 4, 2]).expect("valid spec");
        assert_eq!(spec.width_at(0), 6);
        assert_eq!(spec.width_at(3), 6);
        assert_eq!(spec.width_at(5), 2);
    }

    #[rstest]
    #[case(ColumnSpec::uniform(4), 3, 9)]
    #[case(ColumnSpec::uniform(12), 3, 3)]
    #[case(ColumnSpec::uniform(5), 2, 4)]
    #[case(ColumnSpec::uniform(5), 3, 7)]
    #[case(ColumnSpec::uniform(8), 3, 4)]
    #[case(ColumnSpec::uniform(4), 0, 0)]
    fn test_uniform_placeholder_slots(
        #[case] spec: ColumnSpec,
        #[case] rows: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(spec.placeholder_slots(rows), expected);
    }

    #[rstest]
    #[case(vec![6, 6], 1, 2)]
    #[case(vec![6, 6, 4, 4, 4, 12], 3, 6)]
    #[case(vec![8], 1, 2)]
    #[case(vec![4], 0, 0)]
    fn test_sequence_placeholder_slots_fill_whole_rows(
        #[case] widths: Vec<u8>,
        #[case] rows: usize,
        #[case] expected: usize,
    ) {
        let spec = ColumnSpec::sequence(widths).expect("valid spec");
        assert_eq!(spec.placeholder_slots(rows), expected);
    }
}
