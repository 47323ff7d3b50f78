//! Pagination directives for the area below the grid.
//!
//! ## Usage
//!
//! Configure [`PagingOptions`] on the grid args, pass the current
//! [`PagingState`] into every frame, and render whatever [`PagingUi`] the
//! frame carries. Load-more fetching stays entirely caller-owned; the grid
//! only reads the state and invokes the configured callback.

use derive_setters::Setters;

use crate::callback::Callback;

/// Caller-owned fetch state, read fresh every frame and never mutated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PagingState {
    /// No further pages exist; paging UI disappears for good.
    pub is_fetched_all: bool,
    /// A page fetch is in flight. Suppresses re-entrant triggers.
    pub is_loading: bool,
}

/// Load-more trigger configuration.
#[derive(Clone, PartialEq, Setters)]
pub struct PagingOptions {
    /// Offer a one-shot load-more button before switching to the scroll
    /// sentinel. When false the sentinel is used from the start.
    pub manual_trigger: bool,
    /// Invoked when the next page should be fetched. Without a handler no
    /// paging UI is emitted at all.
    #[setters(skip)]
    pub load_more: Option<Callback>,
}

impl PagingOptions {
    /// Creates options with the load-more handler.
    pub fn new(load_more: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            manual_trigger: true,
            load_more: Some(Callback::new(load_more)),
        }
    }

    /// Sets the load-more handler using a shared callback.
    pub fn load_more_shared(mut self, load_more: impl Into<Callback>) -> Self {
        self.load_more = Some(load_more.into());
        self
    }
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            manual_trigger: true,
            load_more: None,
        }
    }
}

impl std::fmt::Debug for PagingOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagingOptions")
            .field("manual_trigger", &self.manual_trigger)
            .field("load_more", &self.load_more.is_some())
            .finish()
    }
}

/// What the host should render below the grid this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagingUi {
    /// Nothing below the grid.
    #[default]
    None,
    /// A load-more button.
    LoadMoreButton {
        /// False while a fetch is in flight; render the button inert.
        enabled: bool,
    },
    /// An invisible sentinel; the host reports when it scrolls into view via
    /// [`MotionGrid::notify_sentinel_visible`](crate::MotionGrid::notify_sentinel_visible).
    Sentinel,
    /// A loading indicator shown in place of the sentinel during a fetch.
    LoadingIndicator,
}

/// Resolves the paging directive for one frame.
///
/// Nothing is emitted while paging is disabled, everything is fetched, the
/// entrance animation has not settled, or no handler is configured.
pub(crate) fn resolve_paging_ui(
    enabled: bool,
    options: &PagingOptions,
    state: PagingState,
    settled: bool,
    load_more_clicked: bool,
) -> PagingUi {
    if !enabled || state.is_fetched_all || !settled || options.load_more.is_none() {
        return PagingUi::None;
    }

    if options.manual_trigger && !load_more_clicked {
        return PagingUi::LoadMoreButton {
            enabled: !state.is_loading,
        };
    }

    if state.is_loading {
        PagingUi::LoadingIndicator
    } else {
        PagingUi::Sentinel
    }
}
