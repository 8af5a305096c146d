//! Vertical blanking sources

use core::cell::Cell;

/// Reports whether the panel scanout is in vertical blank
pub trait VsyncSource {
    fn in_vertical_blank(&self) -> bool;
}

/// Source that is always in blank (no panel attached)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysBlank;

impl VsyncSource for AlwaysBlank {
    fn in_vertical_blank(&self) -> bool {
        true
    }
}

/// Scanout model that enters blank once every `period` polls
#[derive(Debug, Default)]
pub struct SimulatedScanout {
    period: u32,
    polls: Cell<u32>,
}

impl SimulatedScanout {
    pub const fn new(period: u32) -> Self {
        Self {
            period,
            polls: Cell::new(0),
        }
    }

    /// Total number of polls so far
    pub fn polls(&self) -> u32 {
        self.polls.get()
    }
}

impl VsyncSource for SimulatedScanout {
    fn in_vertical_blank(&self) -> bool {
        let polls = self.polls.get().wrapping_add(1);
        self.polls.set(polls);
        polls % self.period.max(1) == 0
    }
}
