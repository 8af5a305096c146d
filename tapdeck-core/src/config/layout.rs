//! Screen layout tables
//!
//! Icon shapes are 4-point outlines relative to the icon's position.

use crate::geometry::{Point, Region};

/// Panel width in pixels
pub const SCREEN_WIDTH: u16 = 480;

/// Panel height in pixels
pub const SCREEN_HEIGHT: u16 = 272;

/// A 4-point polygon outline
pub type Quad = [Point; 4];

const fn quad(p: [(i32, i32); 4]) -> Quad {
    [
        Point::new(p[0].0, p[0].1),
        Point::new(p[1].0, p[1].1),
        Point::new(p[2].0, p[2].1),
        Point::new(p[3].0, p[3].1),
    ]
}

// Back icon: bar followed by a left-pointing arrow
pub const BACK_POSITION: Point = Point::new(98, 172);
pub const BACK_BAR: Quad = quad([(16, 16), (20, 16), (20, 47), (16, 47)]);
pub const BACK_ARROW: Quad = quad([(26, 31), (47, 16), (47, 47), (26, 32)]);

// Next icon: right-pointing arrow followed by a bar
pub const NEXT_POSITION: Point = Point::new(318, 172);
pub const NEXT_ARROW: Quad = quad([(16, 16), (37, 31), (37, 32), (16, 47)]);
pub const NEXT_BAR: Quad = quad([(43, 16), (47, 16), (47, 47), (43, 47)]);

// Play/pause: filled disc with a glyph cut out in the background color
pub const PLAY_PAUSE_POSITION: Point = Point::new(192, 156);
pub const PLAY_PAUSE_CIRCLE_CENTER: Point = Point::new(48, 48);
pub const PLAY_PAUSE_CIRCLE_RADIUS: u16 = 40;
pub const PLAY_GLYPH: Quad = quad([(40, 30), (62, 47), (62, 48), (40, 65)]);
pub const PAUSE_BAR_LEFT: Quad = quad([(36, 32), (43, 32), (43, 63), (36, 63)]);
pub const PAUSE_BAR_RIGHT: Quad = quad([(52, 32), (59, 32), (59, 63), (52, 63)]);

/// Touch regions for the three buttons
pub const BACK_REGION: Region = Region::new(BACK_POSITION, Point::new(64, 64));
pub const NEXT_REGION: Region = Region::new(NEXT_POSITION, Point::new(64, 64));
pub const PLAY_PAUSE_REGION: Region = Region::new(PLAY_PAUSE_POSITION, Point::new(96, 96));

/// Outlined progress track
pub const PROGRESS_TRACK: Region = Region::new(Point::new(17, 132), Point::new(446, 8));

/// Top-left of the file name
pub const FILE_NAME_POSITION: Point = Point::new(17, 91);

/// Top-left of the "index/count" label
pub const TRACK_LABEL_POSITION: Point = Point::new(17, 60);

/// Centre line of the status message
pub const MESSAGE_POSITION: Point = Point::new(SCREEN_WIDTH as i32 / 2, SCREEN_HEIGHT as i32 / 2);
