//! RAM-backed display for the Tapdeck panel
//!
//! This crate provides:
//! - `LayerBuffer`: an ARGB8888 frame buffer usable as an embedded-graphics
//!   `DrawTarget`
//! - `SoftLcd`: a two-layer `LcdController` drawing into a pair of buffers
//! - `VsyncSource` implementations used to gate layer swaps
//!
//! Boards whose LCD controller scans out of RAM hand the same buffers to
//! the hardware and supply a `VsyncSource` reading its blanking status.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod backend;
pub mod framebuffer;
pub mod polygon;
pub mod vsync;

// Re-export key types
pub use backend::SoftLcd;
pub use framebuffer::LayerBuffer;
pub use vsync::{AlwaysBlank, SimulatedScanout, VsyncSource};
