//! Touch controller trait

use crate::geometry::Point;

/// Touch controller errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError {
    /// Controller did not answer during initialization
    NotDetected,
    /// Bus error talking to the controller
    Communication,
}

/// One raw reading of the touch controller
///
/// Only the first touch point is reported; the panel uses a single-touch model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchSample {
    /// No finger detected
    #[default]
    Released,
    /// Finger detected at the given screen coordinate
    Pressed(Point),
}

impl TouchSample {
    /// Touch point, if any
    pub fn point(&self) -> Option<Point> {
        match self {
            TouchSample::Pressed(p) => Some(*p),
            TouchSample::Released => None,
        }
    }

    /// Check if a touch is detected
    pub fn is_pressed(&self) -> bool {
        matches!(self, TouchSample::Pressed(_))
    }
}

/// Touch controller
pub trait TouchPanel {
    /// Initialize the controller for a panel of the given pixel dimensions
    fn init(&mut self, width: u16, height: u16) -> Result<(), TouchError>;

    /// Read the current touch state
    fn read(&mut self) -> TouchSample;
}
