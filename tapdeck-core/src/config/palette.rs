//! UI colors

use crate::traits::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Colors used by the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    /// Screen background, also used for glyphs cut out of the play/pause disc
    pub background: Color,
    /// Text, outlines and released icons
    pub foreground: Color,
    /// Icons whose button is currently held
    pub pressed: Color,
}

impl Palette {
    /// Black on white
    pub const DEFAULT: Self = Self {
        background: Color::WHITE,
        foreground: Color::BLACK,
        pressed: Color::GRAY,
    };

    /// Icon color for a button in the given touch state
    pub const fn icon(&self, touched: bool) -> Color {
        if touched {
            self.pressed
        } else {
            self.foreground
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
