//! Frame buffer pair bookkeeping
//!
//! Exactly one layer is visible and the other is the back layer being drawn
//! into. The roles only swap inside [`LayerPair::publish`], after the
//! controller reports a vertical blanking interval.

use crate::traits::{LcdController, Layer};

/// Tracks which of the two layers is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerPair {
    visible: Layer,
}

impl Default for LayerPair {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerPair {
    /// Layer 0 visible, layer 1 as back layer
    pub const fn new() -> Self {
        Self {
            visible: Layer::L0,
        }
    }

    /// Layer currently driven to the panel
    pub const fn visible(&self) -> Layer {
        self.visible
    }

    /// Layer currently being drawn into
    pub const fn back(&self) -> Layer {
        self.visible.other()
    }

    /// Show the back layer and start drawing into the other one
    ///
    /// Blocks until the controller is in vertical blank, then swaps the
    /// layers with a single `present` call.
    pub fn publish<L: LcdController>(&mut self, lcd: &mut L) {
        lcd.wait_for_vsync();

        let shown = self.back();
        lcd.present(shown);
        lcd.select_layer(shown.other());
        self.visible = shown;

        trace!("layer {} visible", shown.index());
    }
}
