//! Board-agnostic core logic for the Tapdeck playback panel
//!
//! This crate contains all panel logic that does not depend on specific
//! hardware implementations:
//!
//! - Hardware abstraction traits (LCD controller, touch panel, tick source)
//! - Debounced touch buttons with one-shot press events
//! - Double-buffered, vsync-gated screen compositor
//! - Fixed layout and palette tables
//!
//! A board crate implements the traits and drives [`Panel`] from its tick
//! loop.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod button;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod panel;
pub mod player;
pub mod render;
pub mod shared;
pub mod traits;

#[cfg(test)]
mod testing;

pub use button::{Button, ButtonSet, Transition};
pub use error::PanelError;
pub use events::{ButtonId, PlaybackCommand, PressedButtons};
pub use geometry::{Point, Region};
pub use panel::Panel;
pub use player::{PlayerView, Progress, TrackPosition};
pub use shared::SharedButtons;
