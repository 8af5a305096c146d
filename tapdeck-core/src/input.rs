//! Input sampler
//!
//! Takes one timestamped reading from the touch controller per call and
//! feeds it to every button tracker in a fixed order (back, next,
//! play/pause).

use crate::button::{ButtonSet, Transition};
use crate::events::ButtonId;
use crate::traits::{TickSource, Ticks, TouchError, TouchPanel, TouchSample};

/// Touch controller paired with the clock that timestamps its samples
pub struct TouchInput<T, C> {
    touch: T,
    clock: C,
}

impl<T: TouchPanel, C: TickSource> TouchInput<T, C> {
    pub fn new(touch: T, clock: C) -> Self {
        Self { touch, clock }
    }

    /// Initialize the touch controller for the given panel size
    pub fn init(&mut self, width: u16, height: u16) -> Result<(), TouchError> {
        self.touch.init(width, height)
    }

    /// Read the clock, then one touch sample
    pub fn sample(&mut self) -> (Ticks, TouchSample) {
        let now = self.clock.now();
        (now, self.touch.read())
    }

    /// Take one sample and update all buttons with it
    pub fn update_buttons(&mut self, buttons: &mut ButtonSet) {
        let (now, sample) = self.sample();
        apply_sample(buttons, sample, now);
    }

    pub fn touch_mut(&mut self) -> &mut T {
        &mut self.touch
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Give back the touch controller and clock
    pub fn release(self) -> (T, C) {
        (self.touch, self.clock)
    }
}

/// Feed one sample to every button in sampling order
pub fn apply_sample(buttons: &mut ButtonSet, sample: TouchSample, now: Ticks) {
    for id in ButtonId::ALL {
        match buttons.get_mut(id).update(sample, now) {
            Some(Transition::Pressed) => debug!("{} pressed at {}", id, now.0),
            Some(Transition::Released) => trace!("{} released at {}", id, now.0),
            None => {}
        }
    }
}
