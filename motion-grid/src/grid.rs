//! The grid controller and its per-frame render plan.
//!
//! ## Usage
//!
//! Construct a [`MotionGrid`] from [`MotionGridArgs`], feed it item counts
//! as data arrives, and drive it from the host's frame loop: call
//! [`MotionGrid::tick`] and then [`MotionGrid::plan`] each frame while
//! [`MotionGrid::needs_frame`] reports true. The returned [`GridFrame`]
//! describes everything the host should draw.

use std::{
    ops::Range,
    time::{Duration, Instant},
};

use derive_setters::Setters;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    animation::{AnimationKind, ItemStyle},
    columns::ColumnSpec,
    padding::{InnerPadding, ResolvedPadding},
    paging::{PagingOptions, PagingState, PagingUi, resolve_paging_ui},
    patches::{PatchEvent, PatchLog},
    rows::pack_rows,
    settle::SettleState,
    shell::{ShellWindow, synthesize_rows},
    spring::SpringTuning,
};

/// Default values for [`MotionGridArgs`].
pub struct MotionGridDefaults;

impl MotionGridDefaults {
    /// Rows of placeholder cells synthesized while content is missing.
    pub const PLACEHOLDER_ROWS: usize = 3;
    /// Minimum time the shell stays visible once shown.
    pub const MINIMUM_DISPLAY_TIME: Duration = Duration::ZERO;
}

/// Arguments for [`MotionGrid`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct MotionGridArgs {
    /// Per-slot column widths.
    pub columns: ColumnSpec,
    /// Spacing applied around every cell.
    pub inner_padding: InnerPadding,
    /// Entrance animation variant.
    pub animation: AnimationKind,
    /// Bypasses the entrance animation entirely; items render fully visible.
    pub disable_animation: bool,
    /// Whether the entrance animation may run. While false, items hold the
    /// hidden pose; flip it via [`MotionGrid::set_start_animate`] to begin.
    pub start_animate: bool,
    /// Tuning forwarded to the per-item springs.
    pub spring: SpringTuning,
    /// Emit pagination directives below the grid.
    pub enable_paging: bool,
    /// Load-more trigger configuration.
    pub paging: PagingOptions,
    /// Show placeholder rows while no content is available.
    pub enable_placeholders: bool,
    /// Rows of placeholder cells to synthesize.
    pub placeholder_rows: usize,
    /// Minimum time the shell stays visible once shown.
    pub minimum_display_time: Duration,
}

impl Default for MotionGridArgs {
    fn default() -> Self {
        Self {
            columns: ColumnSpec::default(),
            inner_padding: InnerPadding::ZERO,
            animation: AnimationKind::default(),
            disable_animation: false,
            start_animate: true,
            spring: SpringTuning::default(),
            enable_paging: false,
            paging: PagingOptions::default(),
            enable_placeholders: false,
            placeholder_rows: MotionGridDefaults::PLACEHOLDER_ROWS,
            minimum_display_time: MotionGridDefaults::MINIMUM_DISPLAY_TIME,
        }
    }
}

/// What one frame of the grid should render.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFrame {
    /// Rows to render, either shell placeholders or animated patches.
    pub content: FrameContent,
    /// Directive for the area below the grid.
    pub paging: PagingUi,
    /// Sanitized padding to apply around every cell.
    pub padding: ResolvedPadding,
}

/// Row content of one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameContent {
    /// Placeholder rows standing in for missing content.
    Shell(Vec<GridRow>),
    /// One entry per patch, in insertion order.
    Patches(Vec<PatchFrame>),
}

/// Rendered rows of one patch.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchFrame {
    /// Item ordinals covered by this patch.
    pub range: Range<usize>,
    /// Packed rows. Rows reflect the full packing from the first frame;
    /// cells join them as their items cross the visibility threshold.
    pub rows: Vec<GridRow>,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridRow {
    /// Visible cells in layout order.
    pub cells: SmallVec<[GridCell; 12]>,
}

/// One rendered cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// What the host renders inside this cell.
    pub content: CellContent,
    /// Width in grid units out of 12.
    pub width: u8,
    /// Animation pose to apply.
    pub style: ItemStyle,
}

/// Cell payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    /// The caller's item at this ordinal position.
    Item(usize),
    /// A synthetic shell placeholder.
    Placeholder,
}

/// Headless controller laying out items into 12-unit rows with a staggered
/// spring entrance, shell placeholders, and pagination directives.
///
/// The controller never draws and never schedules; the host owns both. It
/// tracks items only by count, and the plans it produces reference items by
/// ordinal index.
///
/// ## Usage
///
/// ```
/// use std::time::Instant;
///
/// use motion_grid::{
///     AnimationKind, ColumnSpec, FrameContent, MotionGrid, MotionGridArgs, PagingState,
/// };
///
/// let args = MotionGridArgs::default()
///     .columns(ColumnSpec::uniform(4))
///     .animation(AnimationKind::BottomFade);
/// let mut grid = MotionGrid::new(args);
/// grid.sync_items(9);
///
/// let mut now = Instant::now();
/// while grid.needs_frame(now) {
///     now += std::time::Duration::from_millis(16);
///     grid.tick(now);
///     let frame = grid.plan(now, PagingState::default());
///     match frame.content {
///         FrameContent::Patches(patches) => { /* draw rows */ }
///         FrameContent::Shell(rows) => { /* draw skeleton */ }
///     }
/// }
/// ```
pub struct MotionGrid {
    args: MotionGridArgs,
    log: PatchLog,
    settle: SettleState,
    shell: ShellWindow,
    load_more_clicked: bool,
    last_frame_time: Option<Instant>,
}

impl MotionGrid {
    /// Creates a controller with no items.
    pub fn new(args: MotionGridArgs) -> Self {
        let shell = ShellWindow::new(args.minimum_display_time);
        Self {
            args,
            log: PatchLog::new(),
            settle: SettleState::default(),
            shell,
            load_more_clicked: false,
            last_frame_time: None,
        }
    }

    /// Current total item count.
    pub fn item_count(&self) -> usize {
        self.log.total()
    }

    /// Number of patches in the log.
    pub fn patch_count(&self) -> usize {
        self.log.patch_count()
    }

    /// True once the entrance animation has settled. Latched for the
    /// controller's lifetime; later patches do not unsettle it.
    pub fn is_settled(&self) -> bool {
        self.settle.is_settled()
    }

    /// Allows or holds the entrance animation at runtime.
    pub fn set_start_animate(&mut self, start_animate: bool) {
        self.args.start_animate = start_animate;
    }

    /// Reconciles the caller's item count, deriving the patch transition.
    ///
    /// Growth appends the new items as one patch; a shrink replaces every
    /// patch with a single fresh one; an unchanged count does nothing.
    pub fn sync_items(&mut self, count: usize) -> Option<PatchEvent> {
        self.log.sync(count, self.effective_kind())
    }

    /// Appends `additional` items as one fresh patch. Zero is a no-op.
    pub fn append_items(&mut self, additional: usize) -> Option<PatchEvent> {
        self.log.append(additional, self.effective_kind())
    }

    /// Replaces the whole list with a single fresh patch of `count` items,
    /// re-running the entrance animation.
    pub fn replace_items(&mut self, count: usize) -> PatchEvent {
        self.log.replace_all(count, self.effective_kind())
    }

    /// Advances animation by one frame.
    ///
    /// Call once per host frame before [`Self::plan`]. Springs do not
    /// advance while the shell is on screen, so the entrance plays once
    /// real content appears.
    pub fn tick(&mut self, now: Instant) {
        let dt = if let Some(last) = self.last_frame_time {
            now.saturating_duration_since(last).as_secs_f32()
        } else {
            1.0 / 60.0
        };
        self.last_frame_time = Some(now);

        if !self.shell_active(now) {
            self.log.step_all(
                self.effective_kind(),
                self.args.spring,
                dt,
                self.args.start_animate,
            );
        }
        self.settle.poll(now);
    }

    /// Produces the render plan for this frame.
    ///
    /// Re-entrant for a fixed `now` apart from the one-shot settle arming
    /// and shell window opening.
    pub fn plan(&mut self, now: Instant, paging: PagingState) -> GridFrame {
        let padding = self.args.inner_padding.resolve();

        let has_items = !self.log.is_empty();
        if self.args.enable_placeholders && self.shell.observe(now, has_items) {
            return GridFrame {
                content: FrameContent::Shell(synthesize_rows(
                    &self.args.columns,
                    self.args.placeholder_rows,
                )),
                paging: PagingUi::None,
                padding,
            };
        }

        if has_items && self.log.all_opaque() {
            self.settle.arm(now);
        }
        self.settle.poll(now);

        let kind = self.effective_kind();
        let patches = self
            .log
            .iter()
            .map(|patch| {
                let range = patch.range();
                let rows = pack_rows(patch.len(), &self.args.columns)
                    .into_iter()
                    .map(|packed| GridRow {
                        cells: packed
                            .cells
                            .iter()
                            .filter_map(|cell| {
                                let style = patch.animation.style_at(cell.slot);
                                kind.is_visible(style).then_some(GridCell {
                                    content: CellContent::Item(range.start + cell.slot),
                                    width: cell.width,
                                    style,
                                })
                            })
                            .collect(),
                    })
                    .collect();
                PatchFrame { range, rows }
            })
            .collect();

        GridFrame {
            content: FrameContent::Patches(patches),
            paging: resolve_paging_ui(
                self.args.enable_paging,
                &self.args.paging,
                paging,
                self.settle.is_settled(),
                self.load_more_clicked,
            ),
            padding,
        }
    }

    /// Reports a load-more button activation.
    ///
    /// Invokes the configured handler unless a load is in flight, then
    /// switches the session to automatic (sentinel) paging for good.
    pub fn notify_load_more_click(&mut self, paging: PagingState) {
        if paging.is_loading {
            debug!("load-more click suppressed while loading");
            return;
        }
        let Some(load_more) = &self.args.paging.load_more else {
            return;
        };
        load_more.call();
        if !self.load_more_clicked {
            self.load_more_clicked = true;
            debug!("switching to automatic paging");
        }
    }

    /// Reports that the scroll sentinel entered the viewport.
    ///
    /// The host calls this once per enter edge; re-entrant triggers are
    /// suppressed only by the caller-maintained loading flag.
    pub fn notify_sentinel_visible(&self, paging: PagingState) {
        if paging.is_loading {
            debug!("sentinel trigger suppressed while loading");
            return;
        }
        if let Some(load_more) = &self.args.paging.load_more {
            load_more.call();
        }
    }

    /// Whether the host should keep driving frames.
    ///
    /// True while any cohort still has entrance work, the settle delay is
    /// counting down, or the shell's minimum display window is open.
    pub fn needs_frame(&self, now: Instant) -> bool {
        let animating = !self.shell_active(now)
            && self
                .log
                .needs_frames(self.effective_kind(), self.args.start_animate);
        animating
            || self.settle.has_pending_delay(now)
            || (self.args.enable_placeholders && self.shell.has_pending_deadline(now))
    }

    fn shell_active(&self, now: Instant) -> bool {
        self.args.enable_placeholders && self.shell.is_holding(now, !self.log.is_empty())
    }

    fn effective_kind(&self) -> AnimationKind {
        if self.args.disable_animation {
            AnimationKind::None
        } else {
            self.args.animation
        }
    }
}
