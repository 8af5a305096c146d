//! Double-buffered screen
//!
//! Owns the LCD controller and the layer bookkeeping. Every render call
//! draws a complete frame into the back layer and then publishes it, so a
//! swap never happens mid-draw.

use crate::button::ButtonSet;
use crate::config::Palette;
use crate::player::PlayerView;
use crate::traits::{LcdController, LcdError, Layer};

use super::{Compositor, LayerPair};

/// LCD plus the state needed to flip its two layers
pub struct Screen<L> {
    lcd: L,
    layers: LayerPair,
    compositor: Compositor,
}

impl<L: LcdController> Screen<L> {
    /// Wrap a controller; call [`initialize`](Self::initialize) before rendering
    pub fn new(lcd: L) -> Self {
        Self::with_palette(lcd, Palette::DEFAULT)
    }

    pub fn with_palette(lcd: L, palette: Palette) -> Self {
        Self {
            lcd,
            layers: LayerPair::new(),
            compositor: Compositor::new(palette),
        }
    }

    /// Bring up the controller with both layers blank and one of them shown
    pub fn initialize(&mut self) -> Result<(), LcdError> {
        self.lcd.init()?;
        self.lcd.init_layer(Layer::L0)?;
        self.lcd.init_layer(Layer::L1)?;

        let background = self.compositor.palette().background;
        self.layers = LayerPair::new();
        self.lcd.select_layer(self.layers.visible());
        self.lcd.clear(background);
        self.lcd.select_layer(self.layers.back());
        self.lcd.clear(background);

        self.layers.publish(&mut self.lcd);
        self.lcd.display_on();

        debug!("screen initialized, layer {} visible", self.layers.visible().index());
        Ok(())
    }

    /// Show a single centred status line
    pub fn render_message(&mut self, text: &str) {
        self.compositor.draw_message(&mut self.lcd, text);
        self.layers.publish(&mut self.lcd);
    }

    /// Show the player UI
    pub fn render_player(&mut self, buttons: &ButtonSet, view: &PlayerView<'_>) {
        self.compositor.draw_player(&mut self.lcd, buttons, view);
        self.layers.publish(&mut self.lcd);
    }

    /// Layer currently on the panel
    pub fn visible_layer(&self) -> Layer {
        self.layers.visible()
    }

    /// Panel size in pixels
    pub fn dimensions(&self) -> (u16, u16) {
        self.lcd.dimensions()
    }

    pub fn lcd(&self) -> &L {
        &self.lcd
    }

    pub fn lcd_mut(&mut self) -> &mut L {
        &mut self.lcd
    }

    /// Give back the controller
    pub fn release(self) -> L {
        self.lcd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawOp, MockLcd};
    use crate::traits::Color;

    #[test]
    fn test_initialize_sequence() {
        let mut screen = Screen::new(MockLcd::new());
        screen.initialize().unwrap();

        assert_eq!(
            screen.lcd().ops,
            [
                DrawOp::Init,
                DrawOp::InitLayer(Layer::L0),
                DrawOp::InitLayer(Layer::L1),
                DrawOp::Select(Layer::L0),
                DrawOp::Clear(Color::WHITE),
                DrawOp::Select(Layer::L1),
                DrawOp::Clear(Color::WHITE),
                DrawOp::WaitVsync,
                DrawOp::Present(Layer::L1),
                DrawOp::Select(Layer::L0),
                DrawOp::DisplayOn,
            ]
        );
        assert_eq!(screen.visible_layer(), Layer::L1);
    }

    #[test]
    fn test_initialize_propagates_layer_error() {
        let mut lcd = MockLcd::new();
        lcd.fail_layer = Some(Layer::L1);
        let mut screen = Screen::new(lcd);
        assert_eq!(
            screen.initialize(),
            Err(LcdError::LayerInitFailed(Layer::L1))
        );
        assert_eq!(screen.lcd().present_count(), 0);
    }

    #[test]
    fn test_render_draws_into_back_layer_then_flips() {
        let mut screen = Screen::new(MockLcd::new());
        screen.initialize().unwrap();

        screen.render_message("Hello");
        // Drawn into L0 (selected after init), then L0 shown
        assert_eq!(screen.visible_layer(), Layer::L0);
        assert_eq!(screen.lcd().visible, Some(Layer::L0));
        assert_eq!(screen.lcd().since_last_present(), [DrawOp::Select(Layer::L1)]);

        screen.render_player(&ButtonSet::new(), &PlayerView::default());
        assert_eq!(screen.visible_layer(), Layer::L1);
        screen.lcd().assert_presents_gated_by_vsync();
    }

    #[test]
    fn test_no_visibility_change_while_drawing() {
        let mut screen = Screen::new(MockLcd::new());
        screen.initialize().unwrap();
        screen.render_player(&ButtonSet::new(), &PlayerView::from_raw(2, 1, Some("x"), 300, true));

        let frame = screen.lcd().last_frame();
        // Only the vsync wait may sit between drawing and the flip
        assert_eq!(frame.last(), Some(&DrawOp::WaitVsync));
        assert!(frame[..frame.len() - 1]
            .iter()
            .all(|op| !matches!(op, DrawOp::WaitVsync | DrawOp::Present(_))));
    }
}
