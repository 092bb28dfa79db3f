//! Monotonic time source
//!
//! The button classifier only ever subtracts two timestamps, so the clock
//! may start anywhere and wrap around `u32::MAX` (about 49 days).

/// Millisecond clock
pub trait MonotonicClock {
    /// Milliseconds since an arbitrary epoch
    fn now_ms(&self) -> u32;
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Clock backed by the embassy time driver
#[cfg(feature = "embassy-time")]
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation keeps the wrapping-difference contract
        embassy_time::Instant::now().as_millis() as u32
    }
}
