//! Encoder configuration types
//!
//! Plain `Copy` values, so applications can keep them in flash or build
//! them at compile time and hand them to the encoder during setup.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default debounce window for the pushbutton (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Default long-click threshold (ms)
pub const DEFAULT_LONG_CLICK_MS: u32 = 300;

/// Default maximum gap between the clicks of a double click (ms)
pub const DEFAULT_DOUBLE_CLICK_GAP_MS: u32 = 250;

/// Rotary debouncing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DebounceMode {
    /// Accept only valid quadrature transitions, emit on a completed detent
    #[default]
    TableLookup,
    /// Derive each line's clean level from the other line while it bounces
    Cleaning,
}

impl DebounceMode {
    /// Mode selected by the `use_table_lookup` flag
    pub const fn from_table_lookup(use_table_lookup: bool) -> Self {
        if use_table_lookup {
            DebounceMode::TableLookup
        } else {
            DebounceMode::Cleaning
        }
    }

    /// Check if this mode is the table lookup algorithm
    pub const fn uses_table_lookup(self) -> bool {
        matches!(self, DebounceMode::TableLookup)
    }
}

impl From<bool> for DebounceMode {
    fn from(use_table_lookup: bool) -> Self {
        Self::from_table_lookup(use_table_lookup)
    }
}

/// Pushbutton timing thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonTimings {
    /// Releases sooner than this after a press are contact bounce
    pub debounce_ms: u32,
    /// Presses held longer than this are long clicks
    pub long_click_ms: u32,
    /// Quiet time after a first click before it is reported as a single click
    pub double_click_gap_ms: u32,
}

impl ButtonTimings {
    /// Create timings from explicit thresholds
    pub const fn new(debounce_ms: u32, long_click_ms: u32, double_click_gap_ms: u32) -> Self {
        Self {
            debounce_ms,
            long_click_ms,
            double_click_gap_ms,
        }
    }
}

impl Default for ButtonTimings {
    fn default() -> Self {
        Self::new(
            DEFAULT_DEBOUNCE_MS,
            DEFAULT_LONG_CLICK_MS,
            DEFAULT_DOUBLE_CLICK_GAP_MS,
        )
    }
}

/// Complete encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncoderConfig {
    /// Rotary debouncing algorithm
    pub mode: DebounceMode,
    /// Pushbutton thresholds
    pub timings: ButtonTimings,
}
