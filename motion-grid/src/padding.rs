//! Inner cell padding configuration.
//!
//! ## Usage
//!
//! Configure [`InnerPadding`] on the grid args; the resolved value is carried
//! on every frame so the host can apply it around each cell.

/// Inner padding requested around each grid cell, in host units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InnerPadding {
    /// The same padding on both axes.
    Uniform(f32),
    /// Independent vertical and horizontal padding.
    Axes {
        /// Padding above and below a cell.
        vertical: f32,
        /// Padding left and right of a cell.
        horizontal: f32,
    },
}

impl InnerPadding {
    /// No padding at all.
    pub const ZERO: Self = Self::Uniform(0.0);

    /// Resolve into concrete per-axis values, sanitizing negatives and NaN
    /// to zero.
    pub fn resolve(self) -> ResolvedPadding {
        match self {
            Self::Uniform(value) => {
                let value = sanitize_padding(value);
                ResolvedPadding {
                    vertical: value,
                    horizontal: value,
                }
            }
            Self::Axes {
                vertical,
                horizontal,
            } => ResolvedPadding {
                vertical: sanitize_padding(vertical),
                horizontal: sanitize_padding(horizontal),
            },
        }
    }
}

impl Default for InnerPadding {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f32> for InnerPadding {
    fn from(value: f32) -> Self {
        Self::Uniform(value)
    }
}

/// Sanitized per-axis padding carried on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedPadding {
    /// Padding above and below a cell.
    pub vertical: f32,
    /// Padding left and right of a cell.
    pub horizontal: f32,
}

fn sanitize_padding(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_resolves_both_axes() {
        let resolved = InnerPadding::Uniform(8.0).resolve();
        assert_eq!(resolved.vertical, 8.0);
        assert_eq!(resolved.horizontal, 8.0);
    }

    #[test]
    fn test_axes_resolve_independently() {
        let resolved = InnerPadding::Axes {
            vertical: 4.0,
            horizontal: 12.0,
        }
        .resolve();
        assert_eq!(resolved.vertical, 4.0);
        assert_eq!(resolved.horizontal, 12.0);
    }

    #[test]
    fn test_negative_and_nan_padding_sanitize_to_zero() {
        let resolved = InnerPadding::Axes {
            vertical: -3.0,
            horizontal: f32::NAN,
        }
        .resolve();
        assert_eq!(resolved.vertical, 0.0);
        assert_eq!(resolved.horizontal, 0.0);
    }
}
