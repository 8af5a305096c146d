//! In-memory ARGB8888 layer buffer

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::Pixel;
use tapdeck_core::traits::Color;

/// One frame buffer layer, row-major, one `u32` per pixel
///
/// Backed by caller-provided memory so a board can place it in external
/// SDRAM.
pub struct LayerBuffer<'a> {
    pixels: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> LayerBuffer<'a> {
    /// Wrap `pixels` as a `width` x `height` layer
    pub fn new(pixels: &'a mut [u32], width: u16, height: u16) -> Self {
        Self {
            pixels,
            width: width as u32,
            height: height as u32,
        }
    }

    /// Whether the backing memory holds a full frame
    pub fn is_complete(&self) -> bool {
        self.width > 0 && self.height > 0 && self.pixels.len() >= self.len()
    }

    fn len(&self) -> usize {
        (self.width * self.height) as usize
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let index = (y as u32 * self.width + x as u32) as usize;
        (index < self.pixels.len()).then_some(index)
    }

    /// Fill the whole layer
    pub fn clear(&mut self, color: Color) {
        let len = self.len().min(self.pixels.len());
        self.pixels[..len].fill(color.0);
    }

    /// Sets a pixel; returns `false` when out of bounds
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some(index) => {
                self.pixels[index] = color.0;
                true
            }
            None => false,
        }
    }

    /// Reads a pixel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|index| Color(self.pixels[index]))
    }
}

impl DrawTarget for LayerBuffer<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let _ = self.set_pixel(point.x, point.y, from_rgb(color));
        }
        Ok(())
    }
}

impl OriginDimensions for LayerBuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

pub fn to_rgb(color: Color) -> Rgb888 {
    Rgb888::new(color.r(), color.g(), color.b())
}

pub fn from_rgb(color: Rgb888) -> Color {
    Color::rgb(color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_set_and_read_pixel() {
        let mut storage = vec![0u32; 4 * 3];
        let mut layer = LayerBuffer::new(&mut storage, 4, 3);
        assert!(layer.is_complete());

        assert!(layer.set_pixel(3, 2, Color::GRAY));
        assert_eq!(layer.pixel(3, 2), Some(Color::GRAY));
        assert!(!layer.set_pixel(4, 0, Color::GRAY));
        assert!(!layer.set_pixel(-1, 0, Color::GRAY));
        assert_eq!(layer.pixel(0, 3), None);
        drop(layer);
        assert_eq!(storage[11], Color::GRAY.0);
    }

    #[test]
    fn test_short_buffer_is_incomplete() {
        let mut storage = vec![0u32; 5];
        let layer = LayerBuffer::new(&mut storage, 4, 3);
        assert!(!layer.is_complete());
        assert_eq!(layer.pixel(1, 2), None);
    }

    #[test]
    fn test_draw_target_clips() {
        let mut storage = vec![0u32; 4 * 4];
        let mut layer = LayerBuffer::new(&mut storage, 4, 4);
        layer.clear(Color::WHITE);

        Rectangle::new(Point::new(2, 2), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::BLACK))
            .draw(&mut layer)
            .unwrap();

        assert_eq!(layer.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(layer.pixel(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn test_color_conversion() {
        let color = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(from_rgb(to_rgb(color)), color);
        assert_eq!(to_rgb(Color::GRAY), Rgb888::new(0x80, 0x80, 0x80));
    }
}
