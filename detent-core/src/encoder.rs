//! Polling encoder driver
//!
//! Owns the pins, the clock and both rotary decoders, and delivers
//! classified events to the registered callbacks. Nothing here blocks:
//! call [`RotaryEncoder::poll`] from the main loop often enough to see
//! every raw transition (every few hundred microseconds to a few ms).
//! Missed polls can lose or merge events.

use detent_hal::{InputPin, MonotonicClock, NoButton};

use crate::button::ButtonClassifier;
use crate::config::{ButtonTimings, DebounceMode, EncoderConfig};
use crate::events::EncoderEvent;
use crate::rotary::{CleaningDecoder, QuadratureDecoder, TableDecoder};

/// Event callback
///
/// Runs inline on the polling thread, so it must return quickly.
pub type Callback<'a> = &'a mut dyn FnMut();

/// One optional callback per event kind; `None` is a no-op
#[derive(Default)]
struct Handlers<'a> {
    clockwise: Option<Callback<'a>>,
    counter_clockwise: Option<Callback<'a>>,
    click: Option<Callback<'a>>,
    long_click: Option<Callback<'a>>,
    double_click: Option<Callback<'a>>,
}

impl<'a> Handlers<'a> {
    fn slot(&mut self, event: EncoderEvent) -> &mut Option<Callback<'a>> {
        match event {
            EncoderEvent::Clockwise => &mut self.clockwise,
            EncoderEvent::CounterClockwise => &mut self.counter_clockwise,
            EncoderEvent::Click => &mut self.click,
            EncoderEvent::LongClick => &mut self.long_click,
            EncoderEvent::DoubleClick => &mut self.double_click,
        }
    }

    fn dispatch(&mut self, event: EncoderEvent) {
        if let Some(callback) = self.slot(event).as_deref_mut() {
            callback();
        }
    }
}

/// Rotary encoder with optional axial pushbutton
///
/// # Type parameters
/// - `CLK`, `DT`: quadrature clock and data inputs (pulled up, high at rest)
/// - `SW`: pushbutton input, active low; [`NoButton`] when absent
/// - `T`: millisecond clock used for button timing
pub struct RotaryEncoder<'a, CLK, DT, SW, T> {
    clock_pin: CLK,
    data_pin: DT,
    /// `None` disables button classification entirely
    button_pin: Option<SW>,
    time: T,
    mode: DebounceMode,
    table: TableDecoder,
    cleaning: CleaningDecoder,
    button: ButtonClassifier,
    handlers: Handlers<'a>,
}

impl<'a, CLK, DT, T> RotaryEncoder<'a, CLK, DT, NoButton, T>
where
    CLK: InputPin,
    DT: InputPin,
    T: MonotonicClock,
{
    /// Create an encoder without a pushbutton
    pub fn new(clock_pin: CLK, data_pin: DT, time: T) -> Self {
        Self::build(clock_pin, data_pin, None, time)
    }
}

impl<'a, CLK, DT, SW, T> RotaryEncoder<'a, CLK, DT, SW, T>
where
    CLK: InputPin,
    DT: InputPin,
    SW: InputPin,
    T: MonotonicClock,
{
    /// Create an encoder with an axial pushbutton
    pub fn with_button(clock_pin: CLK, data_pin: DT, button_pin: SW, time: T) -> Self {
        Self::build(clock_pin, data_pin, Some(button_pin), time)
    }

    fn build(clock_pin: CLK, data_pin: DT, button_pin: Option<SW>, time: T) -> Self {
        Self {
            clock_pin,
            data_pin,
            button_pin,
            time,
            mode: DebounceMode::default(),
            table: TableDecoder::new(),
            cleaning: CleaningDecoder::new(),
            button: ButtonClassifier::new(ButtonTimings::default()),
            handlers: Handlers::default(),
        }
    }

    /// Apply a configuration at construction time
    pub fn with_config(mut self, config: EncoderConfig) -> Self {
        self.apply_config(config);
        self
    }

    /// Apply a configuration; decoder and button state are kept
    pub fn apply_config(&mut self, config: EncoderConfig) {
        self.set_mode(config.mode);
        self.button.set_timings(config.timings);
    }

    /// Current configuration
    pub fn config(&self) -> EncoderConfig {
        EncoderConfig {
            mode: self.mode,
            timings: *self.button.timings(),
        }
    }

    /// Select the rotary algorithm: table lookup (`true`, default) or
    /// signal cleaning (`false`)
    pub fn set_debounce_mode(&mut self, use_table_lookup: bool) {
        self.set_mode(DebounceMode::from_table_lookup(use_table_lookup));
    }

    /// Select the rotary algorithm
    ///
    /// Takes effect on the next poll. Neither decoder is reset, so the
    /// first one or two transitions after a switch may be misread.
    pub fn set_mode(&mut self, mode: DebounceMode) {
        #[cfg(feature = "defmt")]
        if mode != self.mode {
            defmt::debug!("encoder: debounce mode {}", mode);
        }
        self.mode = mode;
    }

    /// Active rotary algorithm
    pub fn mode(&self) -> DebounceMode {
        self.mode
    }

    /// Check if button classification is enabled
    pub fn has_button(&self) -> bool {
        self.button_pin.is_some()
    }

    /// Call on every clockwise detent
    pub fn on_clockwise(&mut self, callback: Callback<'a>) {
        self.handlers.clockwise = Some(callback);
    }

    /// Call on every counter-clockwise detent
    pub fn on_counter_clockwise(&mut self, callback: Callback<'a>) {
        self.handlers.counter_clockwise = Some(callback);
    }

    /// Call on a single short press
    pub fn on_click(&mut self, callback: Callback<'a>) {
        self.handlers.click = Some(callback);
    }

    /// Call on a press held past the long-click threshold
    pub fn on_long_click(&mut self, callback: Callback<'a>) {
        self.handlers.long_click = Some(callback);
    }

    /// Call on two short presses within the double-click gap
    pub fn on_double_click(&mut self, callback: Callback<'a>) {
        self.handlers.double_click = Some(callback);
    }

    /// Sample the pins once and deliver any completed events
    ///
    /// The button is classified first, then the rotation.
    pub fn poll(&mut self) {
        if let Some(pin) = self.button_pin.as_mut() {
            let pressed = pin.is_low();
            if let Some(event) = self.button.update(pressed, self.time.now_ms()) {
                self.emit(event.into());
            }
        }

        let clock = self.clock_pin.is_high();
        let data = self.data_pin.is_high();
        let steps = match self.mode {
            DebounceMode::TableLookup => self.table.update(clock, data),
            DebounceMode::Cleaning => self.cleaning.update(clock, data),
        };

        for direction in steps.directions() {
            self.emit(direction.into());
        }
    }

    fn emit(&mut self, event: EncoderEvent) {
        #[cfg(feature = "defmt")]
        defmt::debug!("encoder: {}", event);
        self.handlers.dispatch(event);
    }

    /// Release the pins and clock
    pub fn release(self) -> (CLK, DT, Option<SW>, T) {
        (self.clock_pin, self.data_pin, self.button_pin, self.time)
    }
}
