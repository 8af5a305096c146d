//! Player screen drawing
//!
//! Draws into whichever layer the controller has selected; publishing the
//! frame is left to [`Screen`](super::Screen).

use crate::button::ButtonSet;
use crate::config::{
    Palette, Quad, BACK_ARROW, BACK_BAR, BACK_POSITION, FILE_NAME_POSITION, MESSAGE_POSITION,
    NEXT_ARROW, NEXT_BAR, NEXT_POSITION, PAUSE_BAR_LEFT, PAUSE_BAR_RIGHT, PLAY_GLYPH,
    PLAY_PAUSE_CIRCLE_CENTER, PLAY_PAUSE_CIRCLE_RADIUS, PLAY_PAUSE_POSITION, PROGRESS_TRACK,
    TRACK_LABEL_POSITION,
};
use crate::events::ButtonId;
use crate::geometry::{translate, Point};
use crate::player::PlayerView;
use crate::traits::{LcdController, TextAlign};

/// Draws the player UI and status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Compositor {
    palette: Palette,
}

impl Compositor {
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Draw a single centred status line on a blank screen
    pub fn draw_message<L: LcdController>(&self, lcd: &mut L, text: &str) {
        self.clear(lcd);
        lcd.set_text_color(self.palette.foreground);
        lcd.draw_text(MESSAGE_POSITION, text, TextAlign::Center);
    }

    /// Draw the full player screen
    ///
    /// Icon highlighting follows the committed touch state of each button.
    pub fn draw_player<L: LcdController>(
        &self,
        lcd: &mut L,
        buttons: &ButtonSet,
        view: &PlayerView<'_>,
    ) {
        let palette = &self.palette;
        self.clear(lcd);

        // back
        lcd.set_text_color(palette.icon(buttons.is_touched(ButtonId::Back)));
        fill_quad(lcd, BACK_POSITION, &BACK_BAR);
        fill_quad(lcd, BACK_POSITION, &BACK_ARROW);

        // next
        lcd.set_text_color(palette.icon(buttons.is_touched(ButtonId::Next)));
        fill_quad(lcd, NEXT_POSITION, &NEXT_ARROW);
        fill_quad(lcd, NEXT_POSITION, &NEXT_BAR);

        // play / pause
        lcd.set_text_color(palette.icon(buttons.is_touched(ButtonId::PlayPause)));
        lcd.fill_circle(
            PLAY_PAUSE_POSITION.offset(PLAY_PAUSE_CIRCLE_CENTER),
            PLAY_PAUSE_CIRCLE_RADIUS,
        );
        lcd.set_text_color(palette.background);
        if view.is_playing {
            fill_quad(lcd, PLAY_PAUSE_POSITION, &PAUSE_BAR_LEFT);
            fill_quad(lcd, PLAY_PAUSE_POSITION, &PAUSE_BAR_RIGHT);
        } else {
            fill_quad(lcd, PLAY_PAUSE_POSITION, &PLAY_GLYPH);
        }

        // progress
        lcd.set_text_color(palette.foreground);
        lcd.draw_rect(PROGRESS_TRACK);
        if view.progress.is_started() {
            let filled = view.progress.scale(PROGRESS_TRACK.size.x);
            lcd.fill_rect(PROGRESS_TRACK.with_width(filled));
        }

        if let Some(name) = view.file_name {
            lcd.draw_text(FILE_NAME_POSITION, name, TextAlign::Left);
        }

        if let Some(position) = view.track_position() {
            lcd.draw_text(TRACK_LABEL_POSITION, &position.label(), TextAlign::Left);
        }
    }

    fn clear<L: LcdController>(&self, lcd: &mut L) {
        lcd.clear(self.palette.background);
        lcd.set_back_color(self.palette.background);
    }
}

fn fill_quad<L: LcdController>(lcd: &mut L, position: Point, quad: &Quad) {
    lcd.fill_polygon(&translate(quad, position));
}
