#![allow(non_snake_case)]
//! Widgets and the modifier suffixes.
//!
//! Every wrapper kind of `swaddle-core` has a constructor here taking its
//! fields and then its child. The [`Modify`] trait puts the same
//! constructors behind one-line suffixes:
//!
//! ```rust
//! use swaddle_core::*;
//! use swaddle_ui::*;
//!
//! let nested = Padding(
//!     EdgeInsets::all(8.0),
//!     Opacity(0.5, Text("hello")),
//! );
//! let chained = Text("hello").opacity(0.5).padding();
//!
//! assert_eq!(nested.kind, chained.kind);
//! ```

pub mod error;
pub mod modifiers;
pub mod wrappers;

pub use error::{ErrorBoundary, ErrorInfo};
pub use modifiers::*;
pub use wrappers::*;

use swaddle_core::*;

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text {
        text: text.into(),
        color: Color::WHITE,
        font_size: 16.0,
    })
}

pub fn Box() -> View {
    View::new(ViewKind::Box)
}

pub fn Row(children: impl IntoChildren) -> View {
    View::new(ViewKind::Row).with_children(children.into_children())
}

pub fn Column(children: impl IntoChildren) -> View {
    View::new(ViewKind::Column).with_children(children.into_children())
}

pub fn Stack(children: impl IntoChildren) -> View {
    View::new(ViewKind::Stack).with_children(children.into_children())
}

pub trait TextExt {
    fn text_color(self, c: Color) -> View;
    fn font_size(self, size: f32) -> View;
}

impl TextExt for View {
    fn text_color(mut self, c: Color) -> View {
        if let ViewKind::Text { color, .. } = &mut self.kind {
            *color = c;
        }
        self
    }
    fn font_size(mut self, size: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = size;
        }
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
