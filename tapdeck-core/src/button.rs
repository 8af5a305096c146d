//! Button state tracker
//!
//! Debounces the raw "is the finger inside my region" signal of each button
//! and latches a press event on every committed touch-down.
//!
//! A candidate transition (raw reading differs from the committed state) only
//! commits if at least [`DEBOUNCE_TICKS`] have passed since the previous
//! candidate. Every candidate restarts that timer, including suppressed ones,
//! so a flickering signal commits only once it has been stable for a full
//! interval after its last flicker.

use crate::config::DEBOUNCE_TICKS;
use crate::events::{ButtonId, PressedButtons};
use crate::geometry::Region;
use crate::traits::{Ticks, TouchSample};

/// Committed state change reported by [`Button::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Untouched -> touched; a press event was latched
    Pressed,
    /// Touched -> untouched
    Released,
}

/// Debounced touch state of one on-screen button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    id: ButtonId,
    region: Region,
    is_touched: bool,
    /// Time of the last candidate transition; `None` until the first one
    last_changed_at: Option<Ticks>,
    was_touched_event: bool,
}

impl Button {
    /// Create an untouched button at its standard region
    pub const fn new(id: ButtonId) -> Self {
        Self::with_region(id, id.region())
    }

    /// Create an untouched button with a custom touch region
    pub const fn with_region(id: ButtonId, region: Region) -> Self {
        Self {
            id,
            region,
            is_touched: false,
            last_changed_at: None,
            was_touched_event: false,
        }
    }

    pub const fn id(&self) -> ButtonId {
        self.id
    }

    pub const fn region(&self) -> Region {
        self.region
    }

    /// Committed (debounced) touch state
    pub const fn is_touched(&self) -> bool {
        self.is_touched
    }

    /// Time of the last observed candidate transition
    pub const fn last_changed_at(&self) -> Option<Ticks> {
        self.last_changed_at
    }

    /// Whether a press is latched and not yet drained
    pub const fn has_pending_press(&self) -> bool {
        self.was_touched_event
    }

    /// Feed one touch sample taken at `now`
    ///
    /// Returns the committed transition, if any.
    pub fn update(&mut self, sample: TouchSample, now: Ticks) -> Option<Transition> {
        let raw_touched = sample
            .point()
            .is_some_and(|p| self.region.contains_point(p));

        if raw_touched == self.is_touched {
            return None;
        }

        let settled = self
            .last_changed_at
            .map_or(true, |last| now.since(last) >= DEBOUNCE_TICKS);
        self.last_changed_at = Some(now);

        if !settled {
            return None;
        }

        self.is_touched = raw_touched;
        if raw_touched {
            self.was_touched_event = true;
            Some(Transition::Pressed)
        } else {
            Some(Transition::Released)
        }
    }

    /// Return the latched press flag and clear it
    pub fn drain_event(&mut self) -> bool {
        core::mem::take(&mut self.was_touched_event)
    }
}

/// The three panel buttons
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet {
    buttons: [Button; 3],
}

impl Default for ButtonSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonSet {
    /// All buttons untouched at their standard regions
    pub const fn new() -> Self {
        Self {
            buttons: [
                Button::new(ButtonId::Back),
                Button::new(ButtonId::Next),
                Button::new(ButtonId::PlayPause),
            ],
        }
    }

    pub fn get(&self, id: ButtonId) -> &Button {
        &self.buttons[id.index()]
    }

    pub fn get_mut(&mut self, id: ButtonId) -> &mut Button {
        &mut self.buttons[id.index()]
    }

    /// Buttons in sampling order
    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }

    /// Committed touch state of one button
    pub fn is_touched(&self, id: ButtonId) -> bool {
        self.get(id).is_touched()
    }

    /// Drain the press latch of one button
    pub fn drain(&mut self, id: ButtonId) -> bool {
        self.get_mut(id).drain_event()
    }

    /// Drain every latch, returning the pressed buttons in sampling order
    pub fn drain_all(&mut self) -> PressedButtons {
        let mut pressed = PressedButtons::new();
        for button in self.buttons.iter_mut() {
            if button.drain_event() {
                // Capacity equals the button count
                let _ = pressed.push(button.id());
            }
        }
        pressed
    }
}
