pub use crate::clip::{Clip, CustomClipper};
pub use crate::color::Color;
pub use crate::error::WrapError;
pub use crate::geometry::{
    Alignment, BoxConstraints, BoxFit, EdgeInsets, Matrix4, Rect, Size, TextBaseline, Vec2,
    resolve_transform,
};
pub use crate::theme::{Brightness, ThemeData};
pub use crate::view::{View, ViewId, ViewKind};
pub use kurbo::BezPath;
