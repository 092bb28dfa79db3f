//! Events delivered by the encoder

/// Direction of one completed detent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clock leads data
    Clockwise,
    /// Data leads clock
    CounterClockwise,
}

/// Classified pushbutton action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Single short press, reported once the double-click gap has passed
    Click,
    /// Press held longer than the long-click threshold
    LongClick,
    /// Two short presses within the double-click gap
    DoubleClick,
}

/// Any event the encoder can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderEvent {
    /// One detent clockwise
    Clockwise,
    /// One detent counter-clockwise
    CounterClockwise,
    /// Short press
    Click,
    /// Long press
    LongClick,
    /// Double press
    DoubleClick,
}

impl EncoderEvent {
    /// Returns true if this is a rotation event
    pub fn is_rotation(&self) -> bool {
        matches!(self, EncoderEvent::Clockwise | EncoderEvent::CounterClockwise)
    }

    /// Returns true if this is a button event
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            EncoderEvent::Click | EncoderEvent::LongClick | EncoderEvent::DoubleClick
        )
    }
}

impl From<Direction> for EncoderEvent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => EncoderEvent::Clockwise,
            Direction::CounterClockwise => EncoderEvent::CounterClockwise,
        }
    }
}

impl From<ButtonEvent> for EncoderEvent {
    fn from(event: ButtonEvent) -> Self {
        match event {
            ButtonEvent::Click => EncoderEvent::Click,
            ButtonEvent::LongClick => EncoderEvent::LongClick,
            ButtonEvent::DoubleClick => EncoderEvent::DoubleClick,
        }
    }
}
