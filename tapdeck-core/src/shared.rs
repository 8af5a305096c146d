//! Button state shared between independent tasks
//!
//! When the sampler and the compositor run on the same tick they can share a
//! plain [`ButtonSet`]. If they run as separate tasks, wrap the set in
//! [`SharedButtons`]: the sampler updates all buttons under one lock and the
//! compositor renders from a [`snapshot`](SharedButtons::snapshot), so a
//! half-updated button is never observed.
//!
//! ```ignore
//! static BUTTONS: SharedButtons<CriticalSectionRawMutex> = SharedButtons::new();
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::button::ButtonSet;
use crate::events::{ButtonId, PressedButtons};
use crate::input::apply_sample;
use crate::traits::{Ticks, TouchSample};

/// Mutex-guarded [`ButtonSet`]
pub struct SharedButtons<M: RawMutex> {
    inner: Mutex<M, RefCell<ButtonSet>>,
}

impl<M: RawMutex> Default for SharedButtons<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> SharedButtons<M> {
    /// All buttons untouched
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(ButtonSet::new())),
        }
    }

    /// Feed one touch sample to every button atomically
    pub fn apply(&self, sample: TouchSample, now: Ticks) {
        self.inner
            .lock(|buttons| apply_sample(&mut buttons.borrow_mut(), sample, now));
    }

    /// Consistent copy of all button states, for rendering
    pub fn snapshot(&self) -> ButtonSet {
        self.inner.lock(|buttons| buttons.borrow().clone())
    }

    /// Drain the press latch of one button
    pub fn drain(&self, id: ButtonId) -> bool {
        self.inner.lock(|buttons| buttons.borrow_mut().drain(id))
    }

    /// Drain every latch
    pub fn drain_all(&self) -> PressedButtons {
        self.inner.lock(|buttons| buttons.borrow_mut().drain_all())
    }
}
