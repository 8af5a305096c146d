//! Display compositor
//!
//! Draws the player UI into the off-screen layer and publishes it on the
//! next vertical blanking interval.

pub mod compositor;
pub mod layers;
pub mod screen;

pub use compositor::Compositor;
pub use layers::LayerPair;
pub use screen::Screen;
