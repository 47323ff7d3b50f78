//! Staggered entrance animation over patch cohorts.
//!
//! ## Usage
//!
//! Pick an [`AnimationKind`] on the grid args. Styles are computed per item
//! on every `tick`: the first item of a cohort springs toward the visible
//! pose and every later item chases the style of the item before it, so a
//! batch reveals as a cascade.

use crate::spring::{Spring, SpringTuning};

/// Opacity above which an item is emitted into the frame at all.
///
/// Items at or below this threshold are omitted from their row, which is
/// what staggers the reveal.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// Opacity the previous item must reach before the next one starts moving.
pub const CHASE_THRESHOLD: f32 = 0.4;

/// Vertical offset of the hidden pose for [`AnimationKind::BottomFade`].
pub const ENTRANCE_OFFSET: f32 = 40.0;

/// Entrance animation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationKind {
    /// Fade opacity in.
    #[default]
    Fade,
    /// Fade opacity in while translating up from [`ENTRANCE_OFFSET`].
    BottomFade,
    /// No animation; every item is fully visible from the first frame.
    None,
}

impl AnimationKind {
    /// Pose items hold before their animation starts.
    pub fn initial_style(self) -> ItemStyle {
        match self {
            Self::Fade => ItemStyle {
                opacity: 0.0,
                offset: 0.0,
            },
            Self::BottomFade => ItemStyle {
                opacity: 0.0,
                offset: ENTRANCE_OFFSET,
            },
            Self::None => ItemStyle::VISIBLE,
        }
    }

    /// Whether a styled item should be emitted into the frame.
    pub fn is_visible(self, style: ItemStyle) -> bool {
        match self {
            Self::None => true,
            Self::Fade | Self::BottomFade => style.opacity > VISIBILITY_THRESHOLD,
        }
    }
}

/// Animation pose of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    /// Opacity in `0.0..=1.0` (may briefly overshoot with loose tunings).
    pub opacity: f32,
    /// Vertical offset in host units, `0.0` once at rest.
    pub offset: f32,
}

impl ItemStyle {
    /// The fully visible rest pose.
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset: 0.0,
    };
}

impl Default for ItemStyle {
    /// Missing style entries fall back to the visible pose.
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Spring state for one cohort of items appended together.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CohortAnimation {
    opacity: Vec<Spring>,
    offset: Vec<Spring>,
}

impl CohortAnimation {
    pub(crate) fn new(kind: AnimationKind, item_count: usize) -> Self {
        let initial = kind.initial_style();
        Self {
            opacity: vec![Spring::new(initial.opacity); item_count],
            offset: vec![Spring::new(initial.offset); item_count],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.opacity.len()
    }

    /// Style of the item at `index`, falling back to the visible pose when
    /// out of range.
    pub(crate) fn style_at(&self, index: usize) -> ItemStyle {
        match (self.opacity.get(index), self.offset.get(index)) {
            (Some(opacity), Some(offset)) => ItemStyle {
                opacity: opacity.value(),
                offset: offset.value(),
            },
            _ => ItemStyle::default(),
        }
    }

    pub(crate) fn styles(&self) -> Vec<ItemStyle> {
        (0..self.len()).map(|index| self.style_at(index)).collect()
    }

    /// Advances every item by one frame.
    ///
    /// Item 0 springs toward the visible pose. Item `i` holds its exact
    /// previous style until item `i - 1` crosses [`CHASE_THRESHOLD`], then
    /// springs toward item `i - 1`'s previous-frame pose.
    pub(crate) fn step(&mut self, kind: AnimationKind, tuning: SpringTuning, dt: f32, started: bool) {
        if kind == AnimationKind::None {
            return;
        }

        if !started {
            let initial = kind.initial_style();
            for index in 0..self.len() {
                self.opacity[index].snap_to(initial.opacity);
                self.offset[index].snap_to(initial.offset);
            }
            return;
        }

        let prev = self.styles();
        for index in 0..prev.len() {
            let chase = if index == 0 {
                ItemStyle::VISIBLE
            } else if prev[index - 1].opacity < CHASE_THRESHOLD {
                continue;
            } else {
                prev[index - 1]
            };

            self.opacity[index].set_target(chase.opacity);
            self.opacity[index].update(dt, tuning);
            if kind == AnimationKind::BottomFade {
                self.offset[index].set_target(chase.offset);
                self.offset[index].update(dt, tuning);
            }
        }
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.opacity.iter().any(|spring| spring.is_animating())
            || self.offset.iter().any(|spring| spring.is_animating())
    }

    /// True when every item's opacity has reached full.
    pub(crate) fn all_opaque(&self) -> bool {
        self.opacity.iter().all(|spring| spring.value() >= 1.0)
    }

    /// True once every item rests at the visible pose.
    ///
    /// Distinct from [`Self::is_animating`]: items past the chase gate have
    /// their springs at rest on the initial pose and report no motion, yet
    /// the cohort still has entrance work left.
    pub(crate) fn is_complete(&self) -> bool {
        !self.is_animating()
            && (0..self.len()).all(|index| self.style_at(index) == ItemStyle::VISIBLE)
    }

    /// True when every item sits exactly at `pose`.
    pub(crate) fn holds_pose(&self, pose: ItemStyle) -> bool {
        (0..self.len()).all(|index| self.style_at(index) == pose)
    }
}
