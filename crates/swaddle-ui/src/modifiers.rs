//! # Modifiers
//!
//! [`Modify`] turns every wrapper constructor into a suffix, so decorations
//! read in the order they apply:
//!
//! ```rust
//! use swaddle_core::*;
//! use swaddle_ui::*;
//!
//! let avatar = Text("JD")
//!     .clip_oval()
//!     .translate(Vec2::new(10.0, 20.0))
//!     .padding();
//!
//! assert_eq!(avatar.kind.name(), "Padding");
//! ```
//!
//! The last suffix is the outermost node. Nothing is merged: applying the
//! same modifier twice nests two wrappers.
//!
//! Operations whose parameters all have defaults come in a bare form and a
//! `*_with` form taking an options value. Operations with required
//! parameters take them positionally; if they also have defaulted ones, the
//! `*_with` form adds those.
//!
//! `rotate`, `translate` and `scale` are shorthands for
//! [`Modify::transform_with`] with a prepared matrix and produce the same
//! `Transform` wrapper kind.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use swaddle_core::*;

use crate::wrappers::*;

pub const DEFAULT_PADDING: EdgeInsets = EdgeInsets::all(8.0);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CenterOptions {
    /// Multiple of the child's width to size to; fills the available width when unset.
    pub width_factor: Option<f32>,
    pub height_factor: Option<f32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FittedBoxOptions {
    pub fit: BoxFit,
    pub alignment: Alignment,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FractionallySizedBoxOptions {
    pub alignment: Alignment,
    pub width_factor: Option<f32>,
    pub height_factor: Option<f32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntrinsicWidthOptions {
    pub step_width: Option<f32>,
    pub step_height: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LimitedBoxOptions {
    #[cfg_attr(feature = "serde", serde(with = "swaddle_core::unbounded"))]
    pub max_width: f32,
    #[cfg_attr(feature = "serde", serde(with = "swaddle_core::unbounded"))]
    pub max_height: f32,
}

impl Default for LimitedBoxOptions {
    fn default() -> Self {
        Self {
            max_width: f32::INFINITY,
            max_height: f32::INFINITY,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverflowBoxOptions {
    pub alignment: Alignment,
    /// Unset bounds are taken from the incoming constraints.
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SizedBoxOptions {
    pub alignment: Alignment,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransformOptions {
    pub origin: Option<Vec2>,
    pub alignment: Option<Alignment>,
    pub transform_hit_tests: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            origin: None,
            alignment: None,
            transform_hit_tests: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaleOptions {
    /// Offset of the scaling pivot, added to the point `alignment` denotes.
    pub origin: Option<Vec2>,
    pub alignment: Alignment,
    pub transform_hit_tests: bool,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            origin: None,
            alignment: Alignment::CENTER,
            transform_hit_tests: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClipOvalOptions {
    /// Oval bounds for a given size; the full box when unset.
    pub clipper: Option<CustomClipper<Rect>>,
    pub clip_behavior: Clip,
}

impl Default for ClipOvalOptions {
    fn default() -> Self {
        Self {
            clipper: None,
            clip_behavior: Clip::AntiAlias,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClipPathOptions {
    pub clipper: Option<CustomClipper<BezPath>>,
    pub clip_behavior: Clip,
}

impl Default for ClipPathOptions {
    fn default() -> Self {
        Self {
            clipper: None,
            clip_behavior: Clip::AntiAlias,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClipRectOptions {
    pub clipper: Option<CustomClipper<Rect>>,
    pub clip_behavior: Clip,
}

impl Default for ClipRectOptions {
    fn default() -> Self {
        Self {
            clipper: None,
            clip_behavior: Clip::HardEdge,
        }
    }
}

/// Decoration suffixes for anything that converts into a [`View`].
///
/// Every method moves the receiver into a fresh wrapper node and returns
/// that node. Construction failures panic from the wrapper constructor and
/// are not intercepted here.
pub trait Modify: Into<View> + Sized {
    /// Pads with [`DEFAULT_PADDING`] on every side.
    #[track_caller]
    fn padding(self) -> View {
        self.padding_with(DEFAULT_PADDING)
    }

    #[track_caller]
    fn padding_with(self, insets: EdgeInsets) -> View {
        Padding(insets, self.into())
    }

    #[track_caller]
    fn center(self) -> View {
        self.center_with(CenterOptions::default())
    }

    #[track_caller]
    fn center_with(self, options: CenterOptions) -> View {
        Center(options.width_factor, options.height_factor, self.into())
    }

    fn align(self, alignment: Alignment) -> View {
        Align(alignment, self.into())
    }

    #[track_caller]
    fn aspect_ratio(self, ratio: f32) -> View {
        AspectRatio(ratio, self.into())
    }

    fn baseline(self, baseline: f32, baseline_type: TextBaseline) -> View {
        Baseline(baseline, baseline_type, self.into())
    }

    #[track_caller]
    fn constrained_box(self, constraints: BoxConstraints) -> View {
        ConstrainedBox(constraints, self.into())
    }

    fn expanded(self, flex: u32) -> View {
        Expanded(flex, self.into())
    }

    fn fitted_box(self) -> View {
        self.fitted_box_with(FittedBoxOptions::default())
    }

    fn fitted_box_with(self, options: FittedBoxOptions) -> View {
        FittedBox(options.fit, options.alignment, self.into())
    }

    #[track_caller]
    fn fractionally_sized_box(self) -> View {
        self.fractionally_sized_box_with(FractionallySizedBoxOptions::default())
    }

    #[track_caller]
    fn fractionally_sized_box_with(self, options: FractionallySizedBoxOptions) -> View {
        FractionallySizedBox(
            options.alignment,
            options.width_factor,
            options.height_factor,
            self.into(),
        )
    }

    fn intrinsic_height(self) -> View {
        IntrinsicHeight(self.into())
    }

    #[track_caller]
    fn intrinsic_width(self) -> View {
        self.intrinsic_width_with(IntrinsicWidthOptions::default())
    }

    #[track_caller]
    fn intrinsic_width_with(self, options: IntrinsicWidthOptions) -> View {
        IntrinsicWidth(options.step_width, options.step_height, self.into())
    }

    #[track_caller]
    fn limited_box(self) -> View {
        self.limited_box_with(LimitedBoxOptions::default())
    }

    #[track_caller]
    fn limited_box_with(self, options: LimitedBoxOptions) -> View {
        LimitedBox(options.max_width, options.max_height, self.into())
    }

    fn offstage(self, offstage: bool) -> View {
        Offstage(offstage, self.into())
    }

    #[track_caller]
    fn overflow_box(self) -> View {
        self.overflow_box_with(OverflowBoxOptions::default())
    }

    #[track_caller]
    fn overflow_box_with(self, options: OverflowBoxOptions) -> View {
        OverflowBox(
            options.alignment,
            options.min_width,
            options.max_width,
            options.min_height,
            options.max_height,
            self.into(),
        )
    }

    fn sized_box(self) -> View {
        self.sized_box_with(SizedBoxOptions::default())
    }

    fn sized_box_with(self, options: SizedBoxOptions) -> View {
        SizedBox(options.alignment, options.width, options.height, self.into())
    }

    #[track_caller]
    fn sized_overflow_box(self, size: Size) -> View {
        self.sized_overflow_box_with(size, Alignment::CENTER)
    }

    #[track_caller]
    fn sized_overflow_box_with(self, size: Size, alignment: Alignment) -> View {
        SizedOverflowBox(size, alignment, self.into())
    }

    fn transform(self, transform: Matrix4) -> View {
        self.transform_with(transform, TransformOptions::default())
    }

    fn transform_with(self, transform: Matrix4, options: TransformOptions) -> View {
        Transform(
            transform,
            options.origin,
            options.alignment,
            options.transform_hit_tests,
            self.into(),
        )
    }

    /// Rotates clockwise (in a y-down space) by `radians` about the center.
    fn rotate(self, radians: f32) -> View {
        self.transform_with(
            Matrix4::rotation_z(radians),
            TransformOptions {
                alignment: Some(Alignment::CENTER),
                ..TransformOptions::default()
            },
        )
    }

    fn translate(self, offset: Vec2) -> View {
        self.translate_with(offset, true)
    }

    fn translate_with(self, offset: Vec2, transform_hit_tests: bool) -> View {
        self.transform_with(
            Matrix4::translation(offset.x, offset.y, 0.0),
            TransformOptions {
                transform_hit_tests,
                ..TransformOptions::default()
            },
        )
    }

    fn scale(self, factor: f32) -> View {
        self.scale_with(factor, ScaleOptions::default())
    }

    /// Scales about `options.alignment`, shifted by `options.origin`.
    fn scale_with(self, factor: f32, options: ScaleOptions) -> View {
        self.transform_with(
            Matrix4::diagonal3(factor, factor, 1.0),
            TransformOptions {
                origin: options.origin,
                alignment: Some(options.alignment),
                transform_hit_tests: options.transform_hit_tests,
            },
        )
    }

    fn clip_oval(self) -> View {
        self.clip_oval_with(ClipOvalOptions::default())
    }

    fn clip_oval_with(self, options: ClipOvalOptions) -> View {
        ClipOval(options.clipper, options.clip_behavior, self.into())
    }

    fn clip_path(self) -> View {
        self.clip_path_with(ClipPathOptions::default())
    }

    fn clip_path_with(self, options: ClipPathOptions) -> View {
        ClipPath(options.clipper, options.clip_behavior, self.into())
    }

    fn clip_rect(self) -> View {
        self.clip_rect_with(ClipRectOptions::default())
    }

    fn clip_rect_with(self, options: ClipRectOptions) -> View {
        ClipRect(options.clipper, options.clip_behavior, self.into())
    }

    #[track_caller]
    fn opacity(self, opacity: f32) -> View {
        Opacity(opacity, self.into())
    }

    fn theme(self, data: ThemeData) -> View {
        self.theme_with(data, false)
    }

    fn theme_with(self, data: ThemeData, is_top_level: bool) -> View {
        Theme(data, is_top_level, self.into())
    }
}

impl<T: Into<View>> Modify for T {}
