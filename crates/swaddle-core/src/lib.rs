//! # Views and wrapper kinds
//!
//! `swaddle-core` holds the view model the rest of the workspace builds on:
//!
//! - [`View`]: a node in the visual tree with a process-unique [`ViewId`].
//! - [`ViewKind`]: what the node is. Leaf and container kinds (`Text`, `Box`,
//!   `Row`, ...) sit next to the single-child wrapper kinds (`Padding`,
//!   `Transform`, `ClipOval`, ...).
//! - The value types wrapper kinds carry: geometry, [`Matrix4`],
//!   [`ThemeData`], clip shapes.
//!
//! Wrapper nodes are built with [`View::wrap`] (or the fallible
//! [`View::try_wrap`]), which checks the fields the same way for every
//! caller:
//!
//! ```rust
//! use swaddle_core::*;
//!
//! let label = View::new(ViewKind::Box);
//! let label_id = label.id;
//!
//! let padded = View::wrap(ViewKind::Padding { insets: EdgeInsets::all(4.0) }, label);
//! assert_eq!(padded.child().map(|c| c.id), Some(label_id));
//!
//! let err = View::try_wrap(ViewKind::Opacity { opacity: 2.0 }, padded).unwrap_err();
//! assert_eq!(err, WrapError::OpacityOutOfRange(2.0));
//! ```
//!
//! Wrapper nodes record their parameters only. Layout, painting and hit
//! testing belong to whichever renderer consumes the tree; the one piece of
//! transform math the model offers is [`resolve_transform`], the effective
//! matrix a transform box applies at a given size.

pub mod clip;
pub mod color;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod theme;
pub mod view;

pub use clip::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use theme::*;
pub use view::*;

pub use kurbo::BezPath;
