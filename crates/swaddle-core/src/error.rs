use thiserror::Error;

use crate::{BoxConstraints, EdgeInsets, Size};

/// Why a wrapper view refused its fields.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum WrapError {
    #[error("Padding insets must be non-negative, got {0:?}")]
    NegativeInsets(EdgeInsets),

    #[error("{kind} {field} must be non-negative, got {value}")]
    NegativeField {
        kind: &'static str,
        field: &'static str,
        value: f32,
    },

    #[error("AspectRatio ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f32),

    #[error("ConstrainedBox constraints are not normalized: {0:?}")]
    InvalidConstraints(BoxConstraints),

    #[error("OverflowBox min {axis} {min} exceeds max {axis} {max}")]
    InvertedOverflowBounds { axis: &'static str, min: f32, max: f32 },

    #[error("SizedOverflowBox size must be non-negative, got {0:?}")]
    NegativeSize(Size),

    #[error("Opacity must be between 0.0 and 1.0, got {0}")]
    OpacityOutOfRange(f32),

    #[error("{kind} expects exactly one child")]
    NotAWrapper { kind: &'static str },
}
