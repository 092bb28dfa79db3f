//! Debouncing by cleaning the clock and data signals
//!
//! Contacts bounce both when they open/close and while they slide closed,
//! but never on both lines at the same instant. So whenever one line
//! changes (bouncing or not), the other line's level is the settled value
//! for it:
//!
//! ```text
//!                ______          ______
//!           ____||      ||______||           clock
//!              ______          ______
//!           _||      ||______||      ||_     data
//!                 _______         _______
//!           _____|       |_______|           cleaned clock (data copied on clock edges)
//!           _         _______         __
//!            |_______|       |_______|       cleaned data (clock copied on data edges)
//! ```
//!
//! A rising cleaned clock while cleaned data is low is a clockwise detent;
//! a rising cleaned data while cleaned clock is low is counter-clockwise.

use super::{QuadratureDecoder, Steps};

/// Signal cleaning quadrature decoder
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CleaningDecoder {
    clock: bool,
    data: bool,
    cleaned_clock: bool,
    cleaned_data: bool,
    prev_cleaned_clock: bool,
    prev_cleaned_data: bool,
}

impl Default for CleaningDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CleaningDecoder {
    /// Create a decoder resting at the pulled-up (both high) position
    pub const fn new() -> Self {
        Self {
            clock: true,
            data: true,
            cleaned_clock: true,
            cleaned_data: true,
            prev_cleaned_clock: true,
            prev_cleaned_data: true,
        }
    }

    /// Cleaned clock level
    pub const fn cleaned_clock(&self) -> bool {
        self.cleaned_clock
    }

    /// Cleaned data level
    pub const fn cleaned_data(&self) -> bool {
        self.cleaned_data
    }
}

impl QuadratureDecoder for CleaningDecoder {
    fn update(&mut self, clock: bool, data: bool) -> Steps {
        if clock != self.clock {
            self.cleaned_clock = data;
        }
        if data != self.data {
            self.cleaned_data = clock;
        }
        self.clock = clock;
        self.data = data;

        let rising_clock = !self.prev_cleaned_clock && self.cleaned_clock;
        let rising_data = !self.prev_cleaned_data && self.cleaned_data;

        self.prev_cleaned_clock = self.cleaned_clock;
        self.prev_cleaned_data = self.cleaned_data;

        Steps {
            clockwise: rising_clock && !self.cleaned_data,
            counter_clockwise: rising_data && !self.cleaned_clock,
        }
    }
}
