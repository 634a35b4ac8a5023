use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Size;

/// How a clip edge is rasterized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Clip {
    #[default]
    None,
    HardEdge,
    AntiAlias,
    AntiAliasWithSaveLayer,
}

/// Produces a clip shape for the size the clipping view ends up with.
///
/// Two clippers are equal only when they share the same closure.
pub struct CustomClipper<T>(Arc<dyn Fn(Size) -> T + Send + Sync>);

impl<T> CustomClipper<T> {
    pub fn new(f: impl Fn(Size) -> T + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn get_clip(&self, size: Size) -> T {
        (self.0)(size)
    }
}

impl<T> Clone for CustomClipper<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for CustomClipper<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> fmt::Debug for CustomClipper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomClipper(<fn>)")
    }
}
