//! Filled polygons
//!
//! embedded-graphics only strokes polylines, so fills are done here with a
//! scanline pass followed by the outline.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point as GfxPoint, Size};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use heapless::Vec;
use tapdeck_core::geometry::Point;

/// Edge crossings kept per scanline
const MAX_CROSSINGS: usize = 16;

/// Largest vertex magnitude for which the outline is stroked
///
/// Edges reaching further out only get the clipped scanline fill.
const MAX_OUTLINE_COORD: i32 = 1 << 16;

/// Fill a simple polygon given by its vertices
///
/// Edges are included, so a degenerate polygon still draws its outline.
/// Drawing is clipped to the target; vertices may lie anywhere in `i32`.
///
/// At most 16 edge crossings are kept per scanline. Shapes
/// crossing a row more often than that (deep combs or spirals) are filled
/// incorrectly on those rows and a warning is logged. Every icon in the
/// layout is convex and crosses a row at most twice.
pub fn fill_polygon<D: DrawTarget>(
    target: &mut D,
    points: &[Point],
    color: D::Color,
) -> Result<(), D::Error> {
    let bounds = target.bounding_box();
    let Some(bottom_right) = bounds.bottom_right() else {
        return Ok(());
    };
    if points.is_empty() {
        return Ok(());
    }
    let (left, top) = (bounds.top_left.x, bounds.top_left.y);
    let (right, bottom) = (bottom_right.x, bottom_right.y);

    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(top);
    let max_y = points.iter().map(|p| p.y).max().unwrap_or(0).min(bottom);

    let mut truncated = false;
    for y in min_y..=max_y {
        let mut crossings: Vec<i32, MAX_CROSSINGS> = Vec::new();
        for (a, b) in edges(points) {
            // Half-open in y so shared vertices count once
            if (a.y <= y && y < b.y) || (b.y <= y && y < a.y) {
                let x = intercept(a, b, y, left - 1, right + 1);
                if crossings.push(x).is_err() {
                    truncated = true;
                    break;
                }
            }
        }
        crossings.sort_unstable();

        for span in crossings.chunks_exact(2) {
            let (start, end) = (span[0].max(left), span[1].min(right));
            if start > end {
                continue;
            }
            target.fill_solid(
                &Rectangle::new(GfxPoint::new(start, y), Size::new((end - start + 1) as u32, 1)),
                color,
            )?;
        }
    }
    if truncated {
        warn!("polygon exceeds {} crossings per row", MAX_CROSSINGS);
    }

    let stroke = PrimitiveStyle::with_stroke(color, 1);
    for (a, b) in edges(points) {
        if !strokable(a) || !strokable(b) {
            continue;
        }
        Line::new(GfxPoint::new(a.x, a.y), GfxPoint::new(b.x, b.y))
            .into_styled(stroke)
            .draw(target)?;
    }

    Ok(())
}

/// x where edge `a`-`b` meets row `y`, clamped to `min..=max`
///
/// Computed in `i128` so any pair of `i32` vertices is exact.
fn intercept(a: Point, b: Point, y: i32, min: i32, max: i32) -> i32 {
    let (ax, ay) = (a.x as i128, a.y as i128);
    let (bx, by) = (b.x as i128, b.y as i128);
    let x = ax + (y as i128 - ay) * (bx - ax) / (by - ay);
    x.clamp(min as i128, max as i128) as i32
}

fn strokable(p: Point) -> bool {
    (-MAX_OUTLINE_COORD..=MAX_OUTLINE_COORD).contains(&p.x)
        && (-MAX_OUTLINE_COORD..=MAX_OUTLINE_COORD).contains(&p.y)
}

fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::LayerBuffer;
    use embedded_graphics::pixelcolor::Rgb888;
    use tapdeck_core::traits::Color;

    fn count(layer: &LayerBuffer<'_>, w: i32, h: i32, color: Color) -> usize {
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| layer.pixel(x, y) == Some(color))
            .count()
    }

    #[test]
    fn test_square_fills_edges_inclusive() {
        let mut storage = vec![0u32; 8 * 8];
        let mut layer = LayerBuffer::new(&mut storage, 8, 8);
        layer.clear(Color::WHITE);

        let square = [
            Point::new(1, 1),
            Point::new(5, 1),
            Point::new(5, 5),
            Point::new(1, 5),
        ];
        fill_polygon(&mut layer, &square, Rgb888::BLACK).unwrap();

        assert_eq!(count(&layer, 8, 8, Color::BLACK), 25);
        assert_eq!(layer.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(layer.pixel(6, 3), Some(Color::WHITE));
    }

    #[test]
    fn test_triangle_interior() {
        let mut storage = vec![0u32; 16 * 16];
        let mut layer = LayerBuffer::new(&mut storage, 16, 16);
        layer.clear(Color::WHITE);

        let arrow = [
            Point::new(2, 2),
            Point::new(12, 7),
            Point::new(12, 8),
            Point::new(2, 13),
        ];
        fill_polygon(&mut layer, &arrow, Rgb888::BLACK).unwrap();

        assert_eq!(layer.pixel(7, 7), Some(Color::BLACK));
        assert_eq!(layer.pixel(3, 12), Some(Color::BLACK));
        // Outside the slanted edges
        assert_eq!(layer.pixel(11, 3), Some(Color::WHITE));
        assert_eq!(layer.pixel(11, 12), Some(Color::WHITE));
    }

    #[test]
    fn test_far_offscreen_vertices_are_clipped() {
        let mut storage = vec![0u32; 4 * 4];
        let mut layer = LayerBuffer::new(&mut storage, 4, 4);
        layer.clear(Color::WHITE);

        let huge = [
            Point::new(0, 0),
            Point::new(100_000, 0),
            Point::new(100_000, 100_000),
            Point::new(0, 50_000),
        ];
        fill_polygon(&mut layer, &huge, Rgb888::BLACK).unwrap();
        assert_eq!(count(&layer, 4, 4, Color::BLACK), 16);

        let extreme = [
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MIN),
            Point::new(i32::MAX, i32::MAX),
            Point::new(i32::MIN, i32::MAX),
        ];
        layer.clear(Color::WHITE);
        fill_polygon(&mut layer, &extreme, Rgb888::BLACK).unwrap();
        assert_eq!(count(&layer, 4, 4, Color::BLACK), 16);
    }

    #[test]
    fn test_polygon_outside_target_draws_nothing() {
        let mut storage = vec![0u32; 4 * 4];
        let mut layer = LayerBuffer::new(&mut storage, 4, 4);
        layer.clear(Color::WHITE);

        let below = [
            Point::new(-50, 10),
            Point::new(50, 10),
            Point::new(50, 2_000_000_000),
            Point::new(-50, 2_000_000_000),
        ];
        fill_polygon(&mut layer, &below, Rgb888::BLACK).unwrap();
        assert_eq!(count(&layer, 4, 4, Color::WHITE), 16);
    }

    #[test]
    fn test_too_many_crossings_leaves_simple_rows_intact() {
        let mut storage = vec![0u32; 48 * 12];
        let mut layer = LayerBuffer::new(&mut storage, 48, 12);
        layer.clear(Color::WHITE);

        // Comb with 10 teeth: rows 1..8 cross 22 edges, row 9 only two
        let mut comb: heapless::Vec<Point, 32> = heapless::Vec::new();
        comb.push(Point::new(0, 10)).unwrap();
        for i in 0..=20 {
            let y = if i % 2 == 0 { 0 } else { 8 };
            comb.push(Point::new(2 * i, y)).unwrap();
        }
        comb.push(Point::new(40, 10)).unwrap();

        fill_polygon(&mut layer, &comb, Rgb888::BLACK).unwrap();
        for x in 0..=40 {
            assert_eq!(layer.pixel(x, 9), Some(Color::BLACK), "x = {x}");
        }
        assert_eq!(layer.pixel(41, 9), Some(Color::WHITE));
    }

    #[test]
    fn test_empty_polygon_is_noop() {
        let mut storage = vec![0u32; 4];
        let mut layer = LayerBuffer::new(&mut storage, 2, 2);
        fill_polygon(&mut layer, &[], Rgb888::BLACK).unwrap();
        assert_eq!(count(&layer, 2, 2, Color(0)), 4);
    }
}
