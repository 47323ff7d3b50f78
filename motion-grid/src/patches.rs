//! Event-sourced log of appended item batches.
//!
//! ## Usage
//!
//! The grid controller feeds item-count changes into a [`PatchLog`]; every
//! transition is an explicit [`PatchEvent`] so growth and collapse stay
//! observable and testable.

use std::ops::Range;

use tracing::debug;

#[cfg(test)]
use crate::animation::ItemStyle;
use crate::{
    animation::{AnimationKind, CohortAnimation},
    spring::SpringTuning,
};

/// An observable transition of the patch log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchEvent {
    /// New items were appended as a fresh patch.
    Append {
        /// Number of appended items.
        count: usize,
    },
    /// The whole item list was replaced by a single fresh patch.
    ReplaceAll {
        /// New total item count.
        count: usize,
    },
}

/// One batch of items appended together, animated as a cohort.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Patch {
    range: Range<usize>,
    pub(crate) animation: CohortAnimation,
}

impl Patch {
    fn new(range: Range<usize>, kind: AnimationKind) -> Self {
        let animation = CohortAnimation::new(kind, range.len());
        Self { range, animation }
    }

    /// Item ordinals covered by this patch.
    pub(crate) fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.range.len()
    }
}

/// Append-only patch log; shrinking collapses it to a single patch.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct PatchLog {
    patches: Vec<Patch>,
    total: usize,
}

impl PatchLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn total(&self) -> usize {
        self.total
    }

    pub(crate) fn patch_count(&self) -> usize {
        self.patches.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Patch> {
        self.patches.iter()
    }

    /// Derives the transition for a new caller item count and applies it.
    ///
    /// Growth appends the delta as a fresh patch, leaving existing cohorts
    /// untouched. A shrink discards every patch for one patch holding the
    /// full new list. An unchanged count is a no-op.
    pub(crate) fn sync(&mut self, count: usize, kind: AnimationKind) -> Option<PatchEvent> {
        if count > self.total {
            self.append(count - self.total, kind)
        } else if count < self.total {
            Some(self.replace_all(count, kind))
        } else {
            None
        }
    }

    /// Appends `additional` items as one fresh patch. Zero is a no-op.
    pub(crate) fn append(
        &mut self,
        additional: usize,
        kind: AnimationKind,
    ) -> Option<PatchEvent> {
        if additional == 0 {
            return None;
        }
        let range = self.total..self.total + additional;
        self.patches.push(Patch::new(range, kind));
        self.total += additional;
        let event = PatchEvent::Append { count: additional };
        debug!(?event, total = self.total, "patch log transition");
        Some(event)
    }

    /// Replaces everything with a single fresh patch of `count` items.
    ///
    /// All animation progress is lost; the new patch re-enters from the
    /// hidden pose. Zero items leave the log empty.
    pub(crate) fn replace_all(&mut self, count: usize, kind: AnimationKind) -> PatchEvent {
        self.patches.clear();
        if count > 0 {
            self.patches.push(Patch::new(0..count, kind));
        }
        self.total = count;
        let event = PatchEvent::ReplaceAll { count };
        debug!(?event, "patch log transition");
        event
    }

    /// Advances every cohort by one frame.
    pub(crate) fn step_all(
        &mut self,
        kind: AnimationKind,
        tuning: SpringTuning,
        dt: f32,
        started: bool,
    ) {
        for patch in &mut self.patches {
            patch.animation.step(kind, tuning, dt, started);
        }
    }

    /// True when every cohort's items are at full opacity.
    ///
    /// Vacuously true for an empty log; callers gate on [`Self::is_empty`].
    pub(crate) fn all_opaque(&self) -> bool {
        self.patches.iter().all(|patch| patch.animation.all_opaque())
    }

    /// Whether any cohort still needs frames to finish its entrance.
    ///
    /// While the animation is held (`started == false`) frames are only
    /// needed to snap strayed cohorts back to the initial pose.
    pub(crate) fn needs_frames(&self, kind: AnimationKind, started: bool) -> bool {
        if kind == AnimationKind::None {
            return false;
        }
        if !started {
            let initial = kind.initial_style();
            return self
                .patches
                .iter()
                .any(|patch| !patch.animation.holds_pose(initial));
        }
        self.patches.iter().any(|patch| !patch.animation.is_complete())
    }

    /// Styles of the most recent frame, patch by patch.
    #[cfg(test)]
    pub(crate) fn styles(&self) -> Vec<Vec<ItemStyle>> {
        self.patches
            .iter()
            .map(|patch| patch.animation.styles())
            .collect()
    }
}
