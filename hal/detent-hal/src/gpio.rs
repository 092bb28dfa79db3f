//! GPIO input abstractions
//!
//! Provides the digital input trait sampled by the encoder core, plus
//! small adapters for pins that come from elsewhere.

/// Digital input pin
///
/// Reads are total: an implementation always returns a level and never
/// debounces on its own. The encoder samples each pin exactly once per poll.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

impl<P: InputPin + ?Sized> InputPin for &mut P {
    fn is_high(&mut self) -> bool {
        (**self).is_high()
    }
}

/// Placeholder for encoders without an axial pushbutton
///
/// Always reads high, which is the released level of an active-low button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoButton;

impl InputPin for NoButton {
    fn is_high(&mut self) -> bool {
        true
    }
}

/// Adapter for `embedded-hal` 1.0 inputs
///
/// Only pins whose read cannot fail are accepted, which covers the
/// embassy and most PAC-level HAL inputs.
#[cfg(feature = "embedded-hal")]
#[derive(Debug)]
pub struct HalInput<P>(pub P);

#[cfg(feature = "embedded-hal")]
impl<P> HalInput<P> {
    /// Wrap an already-configured input pin
    pub const fn new(pin: P) -> Self {
        Self(pin)
    }

    /// Give back the wrapped pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

#[cfg(feature = "embedded-hal")]
impl<P> InputPin for HalInput<P>
where
    P: embedded_hal::digital::InputPin<Error = core::convert::Infallible>,
{
    fn is_high(&mut self) -> bool {
        match self.0.is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        }
    }
}
