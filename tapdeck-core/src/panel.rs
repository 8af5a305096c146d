//! Playback control panel
//!
//! Ties the screen, the touch input and the three button trackers together
//! behind the interface used by the playback controller. The controller's
//! tick loop calls [`Panel::sample_touch_and_update_buttons`] and one of the
//! render calls each tick, and drains presses whenever it is ready for them.

use crate::button::{Button, ButtonSet};
use crate::config::Palette;
use crate::error::PanelError;
use crate::events::{ButtonId, PressedButtons};
use crate::input::TouchInput;
use crate::player::PlayerView;
use crate::render::Screen;
use crate::traits::{LcdController, Layer, TickSource, TouchPanel};

/// Touchscreen playback panel
pub struct Panel<L, T, C> {
    screen: Screen<L>,
    input: TouchInput<T, C>,
    buttons: ButtonSet,
}

impl<L, T, C> Panel<L, T, C>
where
    L: LcdController,
    T: TouchPanel,
    C: TickSource,
{
    pub fn new(lcd: L, touch: T, clock: C) -> Self {
        Self::with_palette(lcd, touch, clock, Palette::DEFAULT)
    }

    pub fn with_palette(lcd: L, touch: T, clock: C, palette: Palette) -> Self {
        Self {
            screen: Screen::with_palette(lcd, palette),
            input: TouchInput::new(touch, clock),
            buttons: ButtonSet::new(),
        }
    }

    /// Bring up the display (both layers blank, one shown) and then touch
    pub fn initialize_display(&mut self) -> Result<(), PanelError> {
        self.screen.initialize()?;
        let (width, height) = self.screen.dimensions();
        self.input.init(width, height)?;
        info!("panel ready ({}x{})", width, height);
        Ok(())
    }

    /// Show a centred status line (startup, errors, ...)
    pub fn render_message(&mut self, text: &str) {
        self.screen.render_message(text);
    }

    /// Draw and publish the player screen
    pub fn render_player(&mut self, view: &PlayerView<'_>) {
        self.screen.render_player(&self.buttons, view);
    }

    /// Draw the player screen from controller values using `-1` for unknown
    pub fn render_player_raw(
        &mut self,
        file_count: i32,
        current_index: i32,
        file_name: Option<&str>,
        progress_permille: i32,
        is_playing: bool,
    ) {
        let view = PlayerView::from_raw(
            file_count,
            current_index,
            file_name,
            progress_permille,
            is_playing,
        );
        self.render_player(&view);
    }

    /// Take one touch sample and update every button tracker
    pub fn sample_touch_and_update_buttons(&mut self) {
        self.input.update_buttons(&mut self.buttons);
    }

    /// One-shot read of a latched back press
    pub fn drain_back_pressed(&mut self) -> bool {
        self.buttons.drain(ButtonId::Back)
    }

    /// One-shot read of a latched play/pause press
    pub fn drain_play_pause_pressed(&mut self) -> bool {
        self.buttons.drain(ButtonId::PlayPause)
    }

    /// One-shot read of a latched next press
    pub fn drain_next_pressed(&mut self) -> bool {
        self.buttons.drain(ButtonId::Next)
    }

    /// One-shot read of any button's latched press
    pub fn drain_pressed(&mut self, id: ButtonId) -> bool {
        self.buttons.drain(id)
    }

    /// Drain all latched presses, in sampling order
    pub fn drain_events(&mut self) -> PressedButtons {
        self.buttons.drain_all()
    }

    pub fn button(&self, id: ButtonId) -> &Button {
        self.buttons.get(id)
    }

    pub fn buttons(&self) -> &ButtonSet {
        &self.buttons
    }

    /// Layer currently on the panel
    pub fn visible_layer(&self) -> Layer {
        self.screen.visible_layer()
    }

    pub fn lcd(&self) -> &L {
        self.screen.lcd()
    }

    pub fn touch_mut(&mut self) -> &mut T {
        self.input.touch_mut()
    }

    /// Give back the hardware
    pub fn release(self) -> (L, T, C) {
        let (touch, clock) = self.input.release();
        (self.screen.release(), touch, clock)
    }
}
