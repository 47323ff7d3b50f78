//! App-shell placeholder rows shown while content is missing.
//!
//! ## Usage
//!
//! Enable placeholders on the grid args; frames carry synthetic rows until
//! real items arrive and the minimum display window has passed.

use std::time::{Duration, Instant};

use crate::{
    animation::ItemStyle,
    columns::ColumnSpec,
    grid::{CellContent, GridCell, GridRow},
    rows::pack_rows,
};

/// Tracks how long the shell has been on screen.
///
/// The window opens when the first shell frame is produced and holds the
/// shell visible for the configured minimum, even once items arrive. It
/// resets when the shell condition clears, so a later empty state shows the
/// shell again with a fresh window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShellWindow {
    minimum_display: Duration,
    opened_at: Option<Instant>,
}

impl ShellWindow {
    pub(crate) fn new(minimum_display: Duration) -> Self {
        Self {
            minimum_display,
            opened_at: None,
        }
    }

    /// Decides shell visibility for the frame being produced, opening or
    /// resetting the window as a side effect.
    pub(crate) fn observe(&mut self, now: Instant, has_items: bool) -> bool {
        if !has_items {
            self.opened_at.get_or_insert(now);
            return true;
        }
        if self.is_window_open(now) {
            return true;
        }
        self.opened_at = None;
        false
    }

    /// Read-only variant of [`Self::observe`] for frame scheduling.
    pub(crate) fn is_holding(&self, now: Instant, has_items: bool) -> bool {
        !has_items || self.is_window_open(now)
    }

    /// True while the minimum display window is still counting down.
    pub(crate) fn has_pending_deadline(&self, now: Instant) -> bool {
        self.is_window_open(now)
    }

    fn is_window_open(&self, now: Instant) -> bool {
        self.opened_at
            .is_some_and(|opened_at| now.duration_since(opened_at) < self.minimum_display)
    }
}

/// Synthesizes fully visible placeholder rows through the regular packer.
pub(crate) fn synthesize_rows(spec: &ColumnSpec, placeholder_rows: usize) -> Vec<GridRow> {
    let slots = spec.placeholder_slots(placeholder_rows);
    pack_rows(slots, spec)
        .into_iter()
        .map(|row| GridRow {
            cells: row
                .cells
                .iter()
                .map(|cell| GridCell {
                    content: CellContent::Placeholder,
                    width: cell.width,
                    style: ItemStyle::VISIBLE,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_spec_fills_requested_rows() {
        let rows = synthesize_rows(&ColumnSpec::uniform(4), 3);
        assert_eq!(rows.len(), 3);
        let cells: usize = rows.iter().map(|row| row.cells.len()).sum();
        assert_eq!(cells, 9);
        for cell in rows.iter().flat_map(|row| row.cells.iter()) {
            assert_eq!(cell.content, CellContent::Placeholder);
            assert_eq!(cell.style, ItemStyle::VISIBLE);
            assert_eq!(cell.width, 4);
        }
    }

    #[test]
    fn test_sequence_spec_cycles_across_shell_rows() {
        let spec = ColumnSpec::sequence([6, 6]).expect("valid spec");
        let rows = synthesize_rows(&spec, 2);
        assert_eq!(rows.len(), 2);
        for row in &rows {
            let widths: Vec<u8> = row.cells.iter().map(|cell| cell.width).collect();
            assert_eq!(widths, [6, 6]);
        }
    }

    #[test]
    fn test_zero_rows_yield_no_shell() {
        assert!(synthesize_rows(&ColumnSpec::uniform(4), 0).is_empty());
    }

    #[test]
    fn test_window_opens_while_empty_and_holds_after_items_arrive() {
        let start = Instant::now();
        let mut window = ShellWindow::new(Duration::from_millis(200));

        assert!(window.observe(start, false));
        assert!(
            window.observe(start + Duration::from_millis(50), true),
            "window released before the minimum display time"
        );
        assert!(!window.observe(start + Duration::from_millis(200), true));
    }

    #[test]
    fn test_window_resets_once_released() {
        let start = Instant::now();
        let mut window = ShellWindow::new(Duration::from_millis(100));

        window.observe(start, false);
        assert!(!window.observe(start + Duration::from_millis(100), true));

        // emptying the list later reopens a fresh window
        let later = start + Duration::from_secs(10);
        assert!(window.observe(later, false));
        assert!(window.observe(later + Duration::from_millis(50), true));
    }

    #[test]
    fn test_zero_minimum_display_never_holds() {
        let start = Instant::now();
        let mut window = ShellWindow::new(Duration::ZERO);

        assert!(window.observe(start, false));
        assert!(!window.observe(start, true));
        assert!(!window.has_pending_deadline(start));
    }

    #[test]
    fn test_is_holding_matches_observe_without_mutation() {
        let start = Instant::now();
        let mut window = ShellWindow::new(Duration::from_millis(100));
        assert!(window.is_holding(start, false));
        assert!(!window.is_holding(start, true), "window open before any shell frame");

        window.observe(start, false);
        assert!(window.is_holding(start + Duration::from_millis(50), true));
    }
}
