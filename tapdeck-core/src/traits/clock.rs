//! Tick source used to timestamp touch samples

/// Timestamp from a free-running millisecond tick counter
///
/// The counter wraps at `u32::MAX`; differences are computed with
/// wrapping arithmetic so a wrap between two samples is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ticks(pub u32);

impl Ticks {
    /// Ticks elapsed from `earlier` to `self`
    pub const fn since(self, earlier: Ticks) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

impl From<u32> for Ticks {
    fn from(ms: u32) -> Self {
        Self(ms)
    }
}

/// Monotonic tick counter (e.g. the RTOS kernel tick)
pub trait TickSource {
    /// Current tick count
    fn now(&self) -> Ticks;
}
