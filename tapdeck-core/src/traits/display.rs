//! LCD controller trait
//!
//! Capability-shaped view of a two-layer LCD controller: each layer is a
//! full frame buffer, exactly one of which is shown on the panel.

use crate::geometry::{Point, Region};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// LCD controller errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// Controller initialization failed
    InitFailed,
    /// Layer frame buffer could not be configured
    LayerInitFailed(Layer),
}

/// One of the two frame buffer layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    L0,
    L1,
}

impl Layer {
    /// The opposite layer
    pub const fn other(self) -> Self {
        match self {
            Layer::L0 => Layer::L1,
            Layer::L1 => Layer::L0,
        }
    }

    /// Layer index (0 or 1)
    pub const fn index(self) -> usize {
        match self {
            Layer::L0 => 0,
            Layer::L1 => 1,
        }
    }
}

/// ARGB8888 color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const GRAY: Self = Self(0xFF80_8080);

    /// Build an opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

/// Horizontal text placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    /// Position is the top-left corner of the string
    Left,
    /// Position x is the horizontal centre of the string, y its top
    Center,
}

/// Two-layer LCD controller
///
/// Drawing calls go to the layer chosen with [`select_layer`](Self::select_layer)
/// using the current text color. Implementations must make
/// [`present`](Self::present) a single update, so that one layer is visible
/// at every instant.
pub trait LcdController {
    /// Initialize the controller and panel timings
    fn init(&mut self) -> Result<(), LcdError>;

    /// Configure the frame buffer backing `layer`
    fn init_layer(&mut self, layer: Layer) -> Result<(), LcdError>;

    /// Switch the panel on
    fn display_on(&mut self);

    /// Panel size in pixels (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Route subsequent drawing to `layer`
    fn select_layer(&mut self, layer: Layer);

    /// Fill the selected layer with `color`
    fn clear(&mut self, color: Color);

    /// Set the foreground color used by fills and text
    fn set_text_color(&mut self, color: Color);

    /// Set the background color used behind text glyphs
    fn set_back_color(&mut self, color: Color);

    /// Fill a closed polygon given in absolute coordinates
    fn fill_polygon(&mut self, points: &[Point]);

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: u16);

    /// Draw a one pixel rectangle outline
    fn draw_rect(&mut self, region: Region);

    /// Fill a rectangle; a zero-width region draws nothing
    fn fill_rect(&mut self, region: Region);

    /// Draw a string
    fn draw_text(&mut self, position: Point, text: &str, align: TextAlign);

    /// Make `layer` the only visible layer
    fn present(&mut self, layer: Layer);

    /// Whether the controller is currently in the vertical blanking interval
    fn in_vertical_blank(&self) -> bool;

    /// Block until the next vertical blanking interval
    ///
    /// Busy-polls [`in_vertical_blank`](Self::in_vertical_blank) by default.
    fn wait_for_vsync(&mut self) {
        while !self.in_vertical_blank() {
            core::hint::spin_loop();
        }
    }
}
