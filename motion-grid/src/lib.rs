//! motion-grid is a headless controller for responsive item grids with a
//! staggered spring entrance.
//!
//! It owns the layout math and animation state of a grid whose rows hold 12
//! width units, and leaves drawing and frame scheduling entirely to the
//! host. Each frame the controller emits a [`GridFrame`]: packed rows of
//! item ordinals with per-item animation poses, plus a pagination directive
//! and resolved padding.
//!
//! # Layout
//!
//! A [`ColumnSpec`] assigns every item slot a width in grid units, either a
//! single uniform width or a repeating sequence. [`pack_rows`] fills rows
//! greedily in item order and starts a new row once the 12 units are used
//! up. The packer is also available standalone for hosts that only need the
//! layout math.
//!
//! # Entrance animation
//!
//! Items appended together form a cohort that reveals as a cascade: the
//! first item springs toward the visible pose and every later item chases
//! the one before it once that item is opaque enough. Items below the
//! visibility threshold are left out of their row entirely, which is what
//! staggers the reveal. Pick the variant with [`AnimationKind`] and the
//! feel with [`SpringTuning`].
//!
//! # Usage
//!
//! Drive the controller from the host's frame loop: `tick` advances the
//! springs, `plan` produces the frame, and [`MotionGrid::needs_frame`] says
//! whether another frame is worth scheduling.
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use motion_grid::{
//!     AnimationKind, ColumnSpec, FrameContent, MotionGrid, MotionGridArgs, PagingState,
//! };
//!
//! let args = MotionGridArgs::default()
//!     .columns(ColumnSpec::uniform(4))
//!     .animation(AnimationKind::BottomFade);
//! let mut grid = MotionGrid::new(args);
//! grid.sync_items(9);
//!
//! let mut now = Instant::now();
//! while grid.needs_frame(now) {
//!     now += Duration::from_millis(16);
//!     grid.tick(now);
//!     let frame = grid.plan(now, PagingState::default());
//!     if let FrameContent::Patches(patches) = &frame.content {
//!         for patch in patches {
//!             // draw patch.rows with their cell styles
//!         }
//!     }
//! }
//! assert!(grid.is_settled());
//! ```
//!
//! # Pagination and placeholders
//!
//! With paging enabled, frames carry a [`PagingUi`] directive below the
//! grid: first a load-more button, then a scroll sentinel once the button
//! has been used, and a loading indicator while a fetch is in flight.
//! Directives stay hidden until the entrance animation has settled so the
//! grid never invites a fetch mid-reveal. With placeholders enabled, frames
//! show synthetic shell rows while the grid is empty, held for a
//! configurable minimum so the shell never flashes.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
mod callback;
pub mod columns;
mod grid;
pub mod padding;
pub mod paging;
mod patches;
pub mod rows;
mod settle;
mod shell;
pub mod spring;

pub use crate::{
    animation::{AnimationKind, CHASE_THRESHOLD, ENTRANCE_OFFSET, ItemStyle, VISIBILITY_THRESHOLD},
    callback::Callback,
    columns::{ColumnSpec, ColumnSpecError, GRID_UNITS},
    grid::{
        CellContent, FrameContent, GridCell, GridFrame, GridRow, MotionGrid, MotionGridArgs,
        MotionGridDefaults, PatchFrame,
    },
    padding::{InnerPadding, ResolvedPadding},
    paging::{PagingOptions, PagingState, PagingUi},
    patches::PatchEvent,
    rows::{PackedCell, PackedRow, pack_rows},
    spring::SpringTuning,
};
