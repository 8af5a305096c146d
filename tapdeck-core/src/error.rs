//! Panel errors

use crate::traits::{LcdError, TouchError};

/// Errors raised while bringing up the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// LCD controller or layer setup failed
    Lcd(LcdError),
    /// Touch controller setup failed
    Touch(TouchError),
}

impl From<LcdError> for PanelError {
    fn from(err: LcdError) -> Self {
        PanelError::Lcd(err)
    }
}

impl From<TouchError> for PanelError {
    fn from(err: TouchError) -> Self {
        PanelError::Touch(err)
    }
}

impl core::fmt::Display for PanelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PanelError::Lcd(LcdError::InitFailed) => write!(f, "LCD initialization failed"),
            PanelError::Lcd(LcdError::LayerInitFailed(layer)) => {
                write!(f, "LCD layer {} initialization failed", layer.index())
            }
            PanelError::Touch(TouchError::NotDetected) => write!(f, "touch controller not detected"),
            PanelError::Touch(TouchError::Communication) => {
                write!(f, "touch controller communication error")
            }
        }
    }
}
