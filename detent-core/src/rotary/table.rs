//! Debouncing by table lookup of valid transitions
//!
//! Each poll the previous {clock, data} pair and the current pair form a
//! 4-bit transition index (bit 3 = previous clock, bit 2 = previous data,
//! bit 1 = clock, bit 0 = data). Only transitions where exactly one line
//! changed are valid; everything else is bounce and is dropped.
//!
//! ```text
//!                          T1     T2     T3     T4
//! Clockwise           11 -> 10 -> 00 -> 01 -> 11
//! Counter-clockwise   11 -> 01 -> 00 -> 10 -> 11
//!                          t1     t2     t3     t4
//! ```
//!
//! Accepted transitions are shifted into a history, one nibble each. A
//! detent is complete when the last two accepted transitions are T3 T4
//! (`0001 0111`) or t3 t4 (`0010 1011`).

use super::{QuadratureDecoder, Steps};

/// Validity of each 4-bit transition index (1 = exactly one line changed)
pub const VALID_TRANSITIONS: [u8; 16] = [0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0];

/// History byte of a completed clockwise detent (T3 T4)
pub const CLOCKWISE_PATTERN: u8 = 0b0001_0111;

/// History byte of a completed counter-clockwise detent (t3 t4)
pub const COUNTER_CLOCKWISE_PATTERN: u8 = 0b0010_1011;

/// Table lookup quadrature decoder
///
/// Strictly more conservative than [`super::CleaningDecoder`]: a lone
/// spurious edge can never produce a step, at the cost of missing steps
/// when the signal is very dirty or the knob turns very fast.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TableDecoder {
    /// Previous and current pair; advances on every sample
    transition: u8,
    /// Accepted transitions, newest in the low nibble
    history: u16,
}

impl TableDecoder {
    /// Create a decoder with empty history
    pub const fn new() -> Self {
        Self {
            transition: 0,
            history: 0,
        }
    }

    /// Transition index formed by the last sample
    pub const fn transition_index(&self) -> u8 {
        self.transition
    }

    /// Accepted transition history
    pub const fn history(&self) -> u16 {
        self.history
    }

    /// Check if a 4-bit transition index is physically possible
    pub const fn is_valid(index: u8) -> bool {
        VALID_TRANSITIONS[(index & 0b1111) as usize] != 0
    }
}

impl QuadratureDecoder for TableDecoder {
    fn update(&mut self, clock: bool, data: bool) -> Steps {
        let pair = (u8::from(clock) << 1) | u8::from(data);
        self.transition = ((self.transition << 2) | pair) & 0b1111;

        if !Self::is_valid(self.transition) {
            #[cfg(feature = "defmt")]
            defmt::trace!("table: dropped transition {=u8:b}", self.transition);
            return Steps::NONE;
        }

        self.history = (self.history << 4) | u16::from(self.transition);

        match (self.history & 0xff) as u8 {
            CLOCKWISE_PATTERN => Steps::CLOCKWISE,
            COUNTER_CLOCKWISE_PATTERN => Steps::COUNTER_CLOCKWISE,
            _ => Steps::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CW_DETENT: [(bool, bool); 5] = [
        (true, true),
        (true, false),
        (false, false),
        (false, true),
        (true, true),
    ];

    const CCW_DETENT: [(bool, bool); 5] = [
        (true, true),
        (false, true),
        (false, false),
        (true, false),
        (true, true),
    ];

    fn feed(decoder: &mut TableDecoder, levels: &[(bool, bool)]) -> (u32, u32) {
        let mut cw = 0;
        let mut ccw = 0;
        for &(clock, data) in levels {
            let steps = decoder.update(clock, data);
            cw += u32::from(steps.clockwise);
            ccw += u32::from(steps.counter_clockwise);
        }
        (cw, ccw)
    }

    #[test]
    fn test_table_marks_single_bit_changes_valid() {
        for index in 0u8..16 {
            let previous = index >> 2;
            let current = index & 0b11;
            let changed = (previous ^ current).count_ones();
            assert_eq!(TableDecoder::is_valid(index), changed == 1, "index {index:04b}");
        }
    }

    #[test]
    fn test_clockwise_detent() {
        let mut decoder = TableDecoder::new();
        assert_eq!(feed(&mut decoder, &CW_DETENT), (1, 0));
        assert_eq!(decoder.history() & 0xff, u16::from(CLOCKWISE_PATTERN));
    }

    #[test]
    fn test_counter_clockwise_detent() {
        let mut decoder = TableDecoder::new();
        assert_eq!(feed(&mut decoder, &CCW_DETENT), (0, 1));
        assert_eq!(decoder.history() & 0xff, u16::from(COUNTER_CLOCKWISE_PATTERN));
    }

    #[test]
    fn test_consecutive_detents() {
        let mut decoder = TableDecoder::new();
        feed(&mut decoder, &CW_DETENT);
        // Resting at 11, the next detent starts at T1
        assert_eq!(feed(&mut decoder, &CW_DETENT[1..]), (1, 0));
        assert_eq!(feed(&mut decoder, &CCW_DETENT[1..]), (0, 1));
    }

    #[test]
    fn test_double_flip_does_not_advance_history() {
        let mut decoder = TableDecoder::new();
        feed(&mut decoder, &CW_DETENT[..3]); // at 00 after T1 T2
        let history = decoder.history();

        // Both lines flip at once
        assert_eq!(decoder.update(true, true), Steps::NONE);
        assert_eq!(decoder.history(), history);
        assert_eq!(decoder.transition_index(), 0b0011);
    }

    #[test]
    fn test_unchanged_levels_are_ignored() {
        let mut decoder = TableDecoder::new();
        feed(&mut decoder, &CW_DETENT[..3]);
        let history = decoder.history();

        for _ in 0..10 {
            assert_eq!(decoder.update(false, false), Steps::NONE);
        }
        assert_eq!(decoder.history(), history);
    }

    #[test]
    fn test_bounce_on_clock_edge() {
        let mut decoder = TableDecoder::new();
        // Clock chatters 0/1 while data stays low between T2 and T3
        let levels = [
            (true, true),
            (true, false),
            (false, false),
            (true, false),
            (false, false),
            (true, false),
            (false, false),
            (false, true),
            (true, true),
        ];
        assert_eq!(feed(&mut decoder, &levels), (1, 0));
    }

    #[test]
    fn test_half_detent_emits_nothing() {
        let mut decoder = TableDecoder::new();
        let levels = [(true, true), (true, false), (false, false), (false, false)];
        assert_eq!(feed(&mut decoder, &levels), (0, 0));
    }

    #[test]
    fn test_reversal_mid_detent() {
        let mut decoder = TableDecoder::new();
        // Half a detent clockwise, then back out through t3 t4
        let levels = [(true, true), (true, false), (false, false), (true, false), (true, true)];
        assert_eq!(feed(&mut decoder, &levels), (0, 1));
    }
}
