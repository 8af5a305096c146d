//! Hardware capability traits
//!
//! These traits define the interface between the panel logic and the
//! board-specific display, touch and clock implementations.

pub mod clock;
pub mod display;
pub mod touch;

pub use clock::{TickSource, Ticks};
pub use display::{Color, LcdController, LcdError, Layer, TextAlign};
pub use touch::{TouchError, TouchPanel, TouchSample};
