//! Panel configuration
//!
//! Fixed screen layout and colors. The layout is tuned for a 480x272 panel
//! and kept as `const` tables so the UI needs no runtime setup.

pub mod layout;
pub mod palette;

pub use layout::*;
pub use palette::Palette;

/// Minimum time (in ticks) a raw touch reading must stay stable before a
/// button commits a state change
pub const DEBOUNCE_TICKS: u32 = 100;

/// Full scale of the progress value (parts per thousand)
pub const PROGRESS_SCALE: i32 = 1000;
