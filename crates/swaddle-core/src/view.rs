use std::sync::atomic::{AtomicU64, Ordering};

use kurbo::BezPath;

use crate::{
    Alignment, BoxConstraints, BoxFit, Clip, Color, CustomClipper, EdgeInsets, Matrix4, Rect,
    Size, TextBaseline, ThemeData, Vec2, WrapError,
};

pub type ViewId = u64;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

fn next_view_id() -> ViewId {
    NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    // Leaves and containers
    Text {
        text: String,
        color: Color,
        font_size: f32,
    },
    Box,
    Row,
    Column,
    Stack,

    // Single-child wrappers
    Padding {
        insets: EdgeInsets,
    },
    Center {
        width_factor: Option<f32>,
        height_factor: Option<f32>,
    },
    Align {
        alignment: Alignment,
    },
    AspectRatio {
        ratio: f32,
    },
    Baseline {
        baseline: f32,
        baseline_type: TextBaseline,
    },
    ConstrainedBox {
        constraints: BoxConstraints,
    },
    Expanded {
        flex: u32,
    },
    FittedBox {
        fit: BoxFit,
        alignment: Alignment,
    },
    FractionallySizedBox {
        alignment: Alignment,
        width_factor: Option<f32>,
        height_factor: Option<f32>,
    },
    IntrinsicHeight,
    IntrinsicWidth {
        step_width: Option<f32>,
        step_height: Option<f32>,
    },
    LimitedBox {
        max_width: f32,
        max_height: f32,
    },
    Offstage {
        offstage: bool,
    },
    OverflowBox {
        alignment: Alignment,
        min_width: Option<f32>,
        max_width: Option<f32>,
        min_height: Option<f32>,
        max_height: Option<f32>,
    },
    SizedBox {
        alignment: Alignment,
        width: Option<f32>,
        height: Option<f32>,
    },
    SizedOverflowBox {
        size: Size,
        alignment: Alignment,
    },
    Transform {
        transform: Matrix4,
        origin: Option<Vec2>,
        alignment: Option<Alignment>,
        /// Pointer events are mapped through `transform` before reaching the child.
        transform_hit_tests: bool,
    },
    ClipOval {
        clipper: Option<CustomClipper<Rect>>,
        clip_behavior: Clip,
    },
    ClipPath {
        clipper: Option<CustomClipper<BezPath>>,
        clip_behavior: Clip,
    },
    ClipRect {
        clipper: Option<CustomClipper<Rect>>,
        clip_behavior: Clip,
    },
    Opacity {
        opacity: f32,
    },
    Theme {
        data: ThemeData,
        is_top_level: bool,
    },
}

impl ViewKind {
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Text { .. } => "Text",
            ViewKind::Box => "Box",
            ViewKind::Row => "Row",
            ViewKind::Column => "Column",
            ViewKind::Stack => "Stack",
            ViewKind::Padding { .. } => "Padding",
            ViewKind::Center { .. } => "Center",
            ViewKind::Align { .. } => "Align",
            ViewKind::AspectRatio { .. } => "AspectRatio",
            ViewKind::Baseline { .. } => "Baseline",
            ViewKind::ConstrainedBox { .. } => "ConstrainedBox",
            ViewKind::Expanded { .. } => "Expanded",
            ViewKind::FittedBox { .. } => "FittedBox",
            ViewKind::FractionallySizedBox { .. } => "FractionallySizedBox",
            ViewKind::IntrinsicHeight => "IntrinsicHeight",
            ViewKind::IntrinsicWidth { .. } => "IntrinsicWidth",
            ViewKind::LimitedBox { .. } => "LimitedBox",
            ViewKind::Offstage { .. } => "Offstage",
            ViewKind::OverflowBox { .. } => "OverflowBox",
            ViewKind::SizedBox { .. } => "SizedBox",
            ViewKind::SizedOverflowBox { .. } => "SizedOverflowBox",
            ViewKind::Transform { .. } => "Transform",
            ViewKind::ClipOval { .. } => "ClipOval",
            ViewKind::ClipPath { .. } => "ClipPath",
            ViewKind::ClipRect { .. } => "ClipRect",
            ViewKind::Opacity { .. } => "Opacity",
            ViewKind::Theme { .. } => "Theme",
        }
    }

    /// Whether this kind decorates exactly one child.
    pub fn is_wrapper(&self) -> bool {
        !matches!(
            self,
            ViewKind::Text { .. } | ViewKind::Box | ViewKind::Row | ViewKind::Column | ViewKind::Stack
        )
    }

    /// Checks the fields a wrapper kind is constructed with.
    pub fn validate(&self) -> Result<(), WrapError> {
        let kind = self.name();
        match self {
            _ if !self.is_wrapper() => Err(WrapError::NotAWrapper { kind }),
            ViewKind::Padding { insets } => {
                if insets.is_non_negative() {
                    Ok(())
                } else {
                    Err(WrapError::NegativeInsets(*insets))
                }
            }
            ViewKind::Center {
                width_factor,
                height_factor,
            }
            | ViewKind::FractionallySizedBox {
                width_factor,
                height_factor,
                ..
            } => {
                non_negative(kind, "width_factor", *width_factor)?;
                non_negative(kind, "height_factor", *height_factor)
            }
            ViewKind::AspectRatio { ratio } => {
                if ratio.is_finite() && *ratio > 0.0 {
                    Ok(())
                } else {
                    Err(WrapError::InvalidAspectRatio(*ratio))
                }
            }
            ViewKind::ConstrainedBox { constraints } => {
                if constraints.is_normalized() {
                    Ok(())
                } else {
                    Err(WrapError::InvalidConstraints(*constraints))
                }
            }
            ViewKind::IntrinsicWidth {
                step_width,
                step_height,
            } => {
                non_negative(kind, "step_width", *step_width)?;
                non_negative(kind, "step_height", *step_height)
            }
            ViewKind::LimitedBox {
                max_width,
                max_height,
            } => {
                non_negative(kind, "max_width", Some(*max_width))?;
                non_negative(kind, "max_height", Some(*max_height))
            }
            ViewKind::OverflowBox {
                min_width,
                max_width,
                min_height,
                max_height,
                ..
            } => {
                ordered("width", *min_width, *max_width)?;
                ordered("height", *min_height, *max_height)
            }
            ViewKind::SizedOverflowBox { size, .. } => {
                if size.is_non_negative() {
                    Ok(())
                } else {
                    Err(WrapError::NegativeSize(*size))
                }
            }
            ViewKind::Opacity { opacity } => {
                if (0.0..=1.0).contains(opacity) {
                    Ok(())
                } else {
                    Err(WrapError::OpacityOutOfRange(*opacity))
                }
            }
            _ => Ok(()),
        }
    }
}

fn non_negative(kind: &'static str, field: &'static str, value: Option<f32>) -> Result<(), WrapError> {
    match value {
        Some(value) if value.is_nan() || value < 0.0 => {
            Err(WrapError::NegativeField { kind, field, value })
        }
        _ => Ok(()),
    }
}

fn ordered(axis: &'static str, min: Option<f32>, max: Option<f32>) -> Result<(), WrapError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => {
            Err(WrapError::InvertedOverflowBounds { axis, min, max })
        }
        _ => Ok(()),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub children: Vec<View>,
}

impl View {
    /// A childless node with a fresh id.
    pub fn new(kind: ViewKind) -> Self {
        View {
            id: next_view_id(),
            kind,
            children: vec![],
        }
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Builds a wrapper node of `kind` around `child`.
    pub fn try_wrap(kind: ViewKind, child: View) -> Result<View, WrapError> {
        if let Err(err) = kind.validate() {
            log::warn!("rejected {} around view {}: {err}", kind.name(), child.id);
            return Err(err);
        }
        let child_id = child.id;
        let view = View::new(kind).with_children(vec![child]);
        log::trace!("wrapped view {child_id} in {} {}", view.kind.name(), view.id);
        Ok(view)
    }

    /// Like [`View::try_wrap`], treating invalid fields as a programming error.
    ///
    /// # Panics
    ///
    /// Panics with the [`WrapError`] message when `kind` rejects its fields.
    #[track_caller]
    pub fn wrap(kind: ViewKind, child: View) -> View {
        match Self::try_wrap(kind, child) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }

    /// The decorated child, if this is a wrapper node.
    pub fn child(&self) -> Option<&View> {
        if self.kind.is_wrapper() {
            self.children.first()
        } else {
            None
        }
    }

    /// Unwraps one level of decoration.
    pub fn into_child(mut self) -> Option<View> {
        if self.kind.is_wrapper() {
            std::mem::take(&mut self.children).into_iter().next()
        } else {
            None
        }
    }
}

/// Long modifier chains nest one level per call; tear them down without
/// recursing once per level.
impl Drop for View {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut view) = pending.pop() {
            pending.append(&mut view.children);
        }
    }
}
