//! Single-child wrapper constructors.
//!
//! Each function builds one wrapper node around `child` through
//! [`View::wrap`], so invalid fields panic with the [`WrapError`] message.
//!
//! [`WrapError`]: swaddle_core::WrapError

use swaddle_core::*;

#[track_caller]
pub fn Padding(insets: EdgeInsets, child: View) -> View {
    View::wrap(ViewKind::Padding { insets }, child)
}

#[track_caller]
pub fn Center(width_factor: Option<f32>, height_factor: Option<f32>, child: View) -> View {
    View::wrap(
        ViewKind::Center {
            width_factor,
            height_factor,
        },
        child,
    )
}

pub fn Align(alignment: Alignment, child: View) -> View {
    View::wrap(ViewKind::Align { alignment }, child)
}

#[track_caller]
pub fn AspectRatio(ratio: f32, child: View) -> View {
    View::wrap(ViewKind::AspectRatio { ratio }, child)
}

pub fn Baseline(baseline: f32, baseline_type: TextBaseline, child: View) -> View {
    View::wrap(
        ViewKind::Baseline {
            baseline,
            baseline_type,
        },
        child,
    )
}

#[track_caller]
pub fn ConstrainedBox(constraints: BoxConstraints, child: View) -> View {
    View::wrap(ViewKind::ConstrainedBox { constraints }, child)
}

/// Makes `child` take `flex` shares of the free space along a row or column.
pub fn Expanded(flex: u32, child: View) -> View {
    View::wrap(ViewKind::Expanded { flex }, child)
}

pub fn FittedBox(fit: BoxFit, alignment: Alignment, child: View) -> View {
    View::wrap(ViewKind::FittedBox { fit, alignment }, child)
}

#[track_caller]
pub fn FractionallySizedBox(
    alignment: Alignment,
    width_factor: Option<f32>,
    height_factor: Option<f32>,
    child: View,
) -> View {
    View::wrap(
        ViewKind::FractionallySizedBox {
            alignment,
            width_factor,
            height_factor,
        },
        child,
    )
}

pub fn IntrinsicHeight(child: View) -> View {
    View::wrap(ViewKind::IntrinsicHeight, child)
}

#[track_caller]
pub fn IntrinsicWidth(step_width: Option<f32>, step_height: Option<f32>, child: View) -> View {
    View::wrap(
        ViewKind::IntrinsicWidth {
            step_width,
            step_height,
        },
        child,
    )
}

/// Caps `child` only where the incoming constraints are unbounded.
#[track_caller]
pub fn LimitedBox(max_width: f32, max_height: f32, child: View) -> View {
    View::wrap(
        ViewKind::LimitedBox {
            max_width,
            max_height,
        },
        child,
    )
}

pub fn Offstage(offstage: bool, child: View) -> View {
    View::wrap(ViewKind::Offstage { offstage }, child)
}

#[track_caller]
pub fn OverflowBox(
    alignment: Alignment,
    min_width: Option<f32>,
    max_width: Option<f32>,
    min_height: Option<f32>,
    max_height: Option<f32>,
    child: View,
) -> View {
    View::wrap(
        ViewKind::OverflowBox {
            alignment,
            min_width,
            max_width,
            min_height,
            max_height,
        },
        child,
    )
}

pub fn SizedBox(alignment: Alignment, width: Option<f32>, height: Option<f32>, child: View) -> View {
    View::wrap(
        ViewKind::SizedBox {
            alignment,
            width,
            height,
        },
        child,
    )
}

#[track_caller]
pub fn SizedOverflowBox(size: Size, alignment: Alignment, child: View) -> View {
    View::wrap(ViewKind::SizedOverflowBox { size, alignment }, child)
}

pub fn Transform(
    transform: Matrix4,
    origin: Option<Vec2>,
    alignment: Option<Alignment>,
    transform_hit_tests: bool,
    child: View,
) -> View {
    View::wrap(
        ViewKind::Transform {
            transform,
            origin,
            alignment,
            transform_hit_tests,
        },
        child,
    )
}

pub fn ClipOval(clipper: Option<CustomClipper<Rect>>, clip_behavior: Clip, child: View) -> View {
    View::wrap(
        ViewKind::ClipOval {
            clipper,
            clip_behavior,
        },
        child,
    )
}

pub fn ClipPath(clipper: Option<CustomClipper<BezPath>>, clip_behavior: Clip, child: View) -> View {
    View::wrap(
        ViewKind::ClipPath {
            clipper,
            clip_behavior,
        },
        child,
    )
}

pub fn ClipRect(clipper: Option<CustomClipper<Rect>>, clip_behavior: Clip, child: View) -> View {
    View::wrap(
        ViewKind::ClipRect {
            clipper,
            clip_behavior,
        },
        child,
    )
}

#[track_caller]
pub fn Opacity(opacity: f32, child: View) -> View {
    View::wrap(ViewKind::Opacity { opacity }, child)
}

pub fn Theme(data: ThemeData, is_top_level: bool, child: View) -> View {
    View::wrap(ViewKind::Theme { data, is_top_level }, child)
}
