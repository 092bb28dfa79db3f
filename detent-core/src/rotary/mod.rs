//! Quadrature decoding
//!
//! Two interchangeable decoders turn the sampled clock/data levels into
//! detent steps. Both are pure state machines: they never read pins or
//! time themselves, the encoder samples once per poll and feeds them.

pub mod cleaning;
pub mod table;

pub use cleaning::CleaningDecoder;
pub use table::TableDecoder;

use crate::events::Direction;

/// Quadrature decoder fed once per poll
pub trait QuadratureDecoder {
    /// Process the current clock and data levels (true = high)
    fn update(&mut self, clock: bool, data: bool) -> Steps;
}

/// Steps completed during one poll
///
/// The table decoder completes at most one step per poll. The cleaning
/// decoder checks each direction independently, so both flags are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps {
    /// A clockwise detent completed
    pub clockwise: bool,
    /// A counter-clockwise detent completed
    pub counter_clockwise: bool,
}

impl Steps {
    /// No step
    pub const NONE: Self = Self {
        clockwise: false,
        counter_clockwise: false,
    };

    /// One clockwise step
    pub const CLOCKWISE: Self = Self {
        clockwise: true,
        counter_clockwise: false,
    };

    /// One counter-clockwise step
    pub const COUNTER_CLOCKWISE: Self = Self {
        clockwise: false,
        counter_clockwise: true,
    };

    /// Check if no step completed
    pub const fn is_empty(&self) -> bool {
        !self.clockwise && !self.counter_clockwise
    }

    /// Completed directions, clockwise first
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        [
            self.clockwise.then_some(Direction::Clockwise),
            self.counter_clockwise.then_some(Direction::CounterClockwise),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_steps() {
        assert!(Steps::NONE.is_empty());
        assert_eq!(Steps::NONE.directions().count(), 0);
    }

    #[test]
    fn test_directions_order() {
        let both = Steps {
            clockwise: true,
            counter_clockwise: true,
        };
        let mut directions = both.directions();
        assert_eq!(directions.next(), Some(Direction::Clockwise));
        assert_eq!(directions.next(), Some(Direction::CounterClockwise));
        assert_eq!(directions.next(), None);
    }

    #[test]
    fn test_single_direction() {
        assert!(Steps::COUNTER_CLOCKWISE
            .directions()
            .eq([Direction::CounterClockwise]));
    }
}
