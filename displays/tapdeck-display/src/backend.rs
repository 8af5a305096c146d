//! Software two-layer LCD controller
//!
//! Renders into two caller-owned ARGB8888 buffers with embedded-graphics.
//! Boards with a memory-mapped LCD controller point its layer registers at
//! the same buffers; on the host it serves as a pixel-exact reference.

use embedded_graphics::geometry::{Point as GfxPoint, Size};
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use tapdeck_core::geometry::{Point, Region};
use tapdeck_core::traits::{Color, LcdController, LcdError, Layer, TextAlign};

use crate::framebuffer::{to_rgb, LayerBuffer};
use crate::polygon::fill_polygon;
use crate::vsync::VsyncSource;

/// Two-layer LCD backed by RAM frame buffers
pub struct SoftLcd<'a, V> {
    layers: [LayerBuffer<'a>; 2],
    width: u16,
    height: u16,
    font: &'static MonoFont<'static>,
    vsync: V,
    initialized: bool,
    display_on: bool,
    selected: Layer,
    visible: Option<Layer>,
    text_color: Color,
    back_color: Color,
    /// Set by a vsync wait, cleared by any drawing
    in_blank: bool,
    present_count: u32,
    torn_presents: u32,
}

impl<'a, V: VsyncSource> SoftLcd<'a, V> {
    /// Each buffer must hold `width * height` pixels
    pub fn new(
        layer0: &'a mut [u32],
        layer1: &'a mut [u32],
        width: u16,
        height: u16,
        vsync: V,
    ) -> Self {
        Self {
            layers: [
                LayerBuffer::new(layer0, width, height),
                LayerBuffer::new(layer1, width, height),
            ],
            width,
            height,
            font: &FONT_10X20,
            vsync,
            initialized: false,
            display_on: false,
            selected: Layer::L0,
            visible: None,
            text_color: Color::BLACK,
            back_color: Color::WHITE,
            in_blank: false,
            present_count: 0,
            torn_presents: 0,
        }
    }

    /// Use a different font for text
    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self
    }

    /// Layer on the panel, if any was presented yet
    pub fn visible_layer(&self) -> Option<Layer> {
        self.visible
    }

    /// Pixel currently shown at (x, y)
    pub fn visible_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.visible
            .and_then(|layer| self.layer_pixel(layer, x, y))
    }

    /// Pixel in a given layer, shown or not
    pub fn layer_pixel(&self, layer: Layer, x: i32, y: i32) -> Option<Color> {
        self.layers[layer.index()].pixel(x, y)
    }

    pub fn present_count(&self) -> u32 {
        self.present_count
    }

    /// Presents issued outside a vertical blank
    pub fn torn_presents(&self) -> u32 {
        self.torn_presents
    }

    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    pub fn selected_layer(&self) -> Layer {
        self.selected
    }

    pub fn vsync(&self) -> &V {
        &self.vsync
    }

    fn target(&mut self) -> &mut LayerBuffer<'a> {
        self.in_blank = false;
        &mut self.layers[self.selected.index()]
    }

    fn fill_style(&self) -> PrimitiveStyle<Rgb888> {
        PrimitiveStyle::with_fill(to_rgb(self.text_color))
    }
}

fn gfx(point: Point) -> GfxPoint {
    GfxPoint::new(point.x, point.y)
}

/// Area covered by a fill of `region`: exactly `size` pixels
fn rectangle(region: Region) -> Rectangle {
    Rectangle::new(
        gfx(region.position),
        Size::new(region.size.x.max(0) as u32, region.size.y.max(0) as u32),
    )
}

/// Outline of `region` with edges on both of its inclusive bounds, so the
/// far edge lies at `position + size`
fn outline(region: Region) -> Rectangle {
    let fill = rectangle(region);
    Rectangle::new(fill.top_left, fill.size + Size::new(1, 1))
}

impl<V: VsyncSource> LcdController for SoftLcd<'_, V> {
    fn init(&mut self) -> Result<(), LcdError> {
        if self.width == 0 || self.height == 0 {
            return Err(LcdError::InitFailed);
        }
        self.initialized = true;
        debug!("soft lcd {}x{}", self.width, self.height);
        Ok(())
    }

    fn init_layer(&mut self, layer: Layer) -> Result<(), LcdError> {
        if !self.initialized || !self.layers[layer.index()].is_complete() {
            warn!("layer {} buffer unusable", layer.index());
            return Err(LcdError::LayerInitFailed(layer));
        }
        Ok(())
    }

    fn display_on(&mut self) {
        self.display_on = true;
    }

    fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn select_layer(&mut self, layer: Layer) {
        self.selected = layer;
    }

    fn clear(&mut self, color: Color) {
        self.target().clear(color);
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn set_back_color(&mut self, color: Color) {
        self.back_color = color;
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        let color = to_rgb(self.text_color);
        let _ = fill_polygon(self.target(), points, color);
    }

    fn fill_circle(&mut self, center: Point, radius: u16) {
        let style = self.fill_style();
        let _ = Circle::with_center(gfx(center), 2 * radius as u32 + 1)
            .into_styled(style)
            .draw(self.target());
    }

    fn draw_rect(&mut self, region: Region) {
        let style = PrimitiveStyle::with_stroke(to_rgb(self.text_color), 1);
        let _ = outline(region).into_styled(style).draw(self.target());
    }

    fn fill_rect(&mut self, region: Region) {
        let style = self.fill_style();
        let _ = rectangle(region).into_styled(style).draw(self.target());
    }

    fn draw_text(&mut self, position: Point, text: &str, align: TextAlign) {
        let character_style = MonoTextStyleBuilder::new()
            .font(self.font)
            .text_color(to_rgb(self.text_color))
            .background_color(to_rgb(self.back_color))
            .build();
        let alignment = match align {
            TextAlign::Left => Alignment::Left,
            TextAlign::Center => Alignment::Center,
        };
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();
        let _ = Text::with_text_style(text, gfx(position), character_style, text_style)
            .draw(self.target());
    }

    fn present(&mut self, layer: Layer) {
        if !self.in_blank {
            warn!("layer {} presented outside vertical blank", layer.index());
            self.torn_presents += 1;
        }
        self.visible = Some(layer);
        self.in_blank = false;
        self.present_count += 1;
    }

    fn in_vertical_blank(&self) -> bool {
        self.vsync.in_vertical_blank()
    }

    fn wait_for_vsync(&mut self) {
        while !self.vsync.in_vertical_blank() {
            core::hint::spin_loop();
        }
        self.in_blank = true;
    }
}
