//! # Theme data
//!
//! `ThemeData` is the value a theme-scope view hands down to its subtree.
//! It is intentionally small and semantic: colors for surfaces, text and
//! accents, plus the overall brightness.
//!
//! ```rust
//! use swaddle_core::*;
//!
//! let brand = ThemeData {
//!     primary: Color::from_hex("#0061A4"),
//!     on_primary: Color::WHITE,
//!     ..ThemeData::light()
//! };
//! assert_eq!(brand.brightness, Brightness::Light);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Brightness {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThemeData {
    pub brightness: Brightness,
    /// Window background / app root.
    pub background: Color,
    /// Default container surface (cards, sheets, panels).
    pub surface: Color,
    /// Foreground on top of `surface`/`background`.
    pub on_surface: Color,
    /// Accent for buttons, sliders, progress.
    pub primary: Color,
    pub on_primary: Color,
    /// Low-emphasis outline/border color.
    pub outline: Color,
    pub error: Color,
}

impl ThemeData {
    pub fn dark() -> Self {
        Self {
            brightness: Brightness::Dark,
            background: Color::from_hex("#121212"),
            surface: Color::from_hex("#1E1E1E"),
            on_surface: Color::from_hex("#DDDDDD"),
            primary: Color::from_hex("#34AF82"),
            on_primary: Color::WHITE,
            outline: Color::from_hex("#555555"),
            error: Color::from_hex("#AE3636"),
        }
    }

    pub fn light() -> Self {
        Self {
            brightness: Brightness::Light,
            background: Color::WHITE,
            surface: Color::from_hex("#F5F5F5"),
            on_surface: Color::from_hex("#222222"),
            primary: Color::from_hex("#1F7556"),
            on_primary: Color::WHITE,
            outline: Color::from_hex("#BBBBBB"),
            error: Color::from_hex("#B3261E"),
        }
    }
}

impl Default for ThemeData {
    fn default() -> Self {
        Self::dark()
    }
}
