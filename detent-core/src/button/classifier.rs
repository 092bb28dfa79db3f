//! Button classifier state machine
//!
//! ```text
//!             press                release < debounce
//!   Idle ───────────────► Pressed ─────────────────────► Idle
//!    ▲                       │  release > long click
//!    │◄──────────────────────┤  (LongClick)
//!    │                       │  otherwise
//!    │                       ▼
//!    │  gap expired, 1 click
//!    ├──(Click)───────── Accumulating ◄──┐ press / short release
//!    │  2+ clicks                │       │
//!    └──(DoubleClick)────────────┴───────┘
//! ```
//!
//! Only polls where the level did not change may report a pending click,
//! so a double click is delivered on the first quiet poll after the second
//! release.

use crate::config::ButtonTimings;
use crate::events::ButtonEvent;

/// Classifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// No press in progress, no clicks pending
    #[default]
    Idle,
    /// Pressed with no clicks pending
    Pressed {
        /// Timestamp of the press edge
        since_ms: u32,
    },
    /// Short clicks waiting to be reported as Click or DoubleClick
    Accumulating {
        /// Short releases seen so far (saturating, 2+ means double click)
        clicks: u8,
        /// Timestamp of the first short release
        first_click_ms: u32,
        /// Timestamp of a press currently held, if any
        pressed_since_ms: Option<u32>,
    },
}

/// How a release is judged from the press duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReleaseKind {
    /// Shorter than the debounce window
    Bounce,
    /// Between the debounce window and the long-click threshold
    Short,
    /// Longer than the long-click threshold
    Long,
}

impl ReleaseKind {
    /// Classify a press duration against the thresholds
    pub fn classify(held_ms: u32, timings: &ButtonTimings) -> Self {
        if held_ms < timings.debounce_ms {
            ReleaseKind::Bounce
        } else if held_ms > timings.long_click_ms {
            ReleaseKind::Long
        } else {
            ReleaseKind::Short
        }
    }
}

impl ButtonState {
    /// Press edge
    fn on_press(self, now_ms: u32) -> Self {
        match self {
            ButtonState::Idle | ButtonState::Pressed { .. } => ButtonState::Pressed { since_ms: now_ms },
            ButtonState::Accumulating {
                clicks,
                first_click_ms,
                ..
            } => ButtonState::Accumulating {
                clicks,
                first_click_ms,
                pressed_since_ms: Some(now_ms),
            },
        }
    }

    /// Release edge
    fn on_release(self, now_ms: u32, timings: &ButtonTimings) -> (Self, Option<ButtonEvent>) {
        match self {
            // No press edge was seen, nothing to measure
            ButtonState::Idle => (self, None),
            ButtonState::Pressed { since_ms } => {
                match ReleaseKind::classify(now_ms.wrapping_sub(since_ms), timings) {
                    ReleaseKind::Bounce => (ButtonState::Idle, None),
                    ReleaseKind::Long => (ButtonState::Idle, Some(ButtonEvent::LongClick)),
                    ReleaseKind::Short => (
                        ButtonState::Accumulating {
                            clicks: 1,
                            first_click_ms: now_ms,
                            pressed_since_ms: None,
                        },
                        None,
                    ),
                }
            }
            ButtonState::Accumulating {
                clicks,
                first_click_ms,
                pressed_since_ms: Some(since_ms),
            } => match ReleaseKind::classify(now_ms.wrapping_sub(since_ms), timings) {
                ReleaseKind::Bounce => (
                    ButtonState::Accumulating {
                        clicks,
                        first_click_ms,
                        pressed_since_ms: None,
                    },
                    None,
                ),
                ReleaseKind::Long => (ButtonState::Idle, Some(ButtonEvent::LongClick)),
                ReleaseKind::Short => (
                    ButtonState::Accumulating {
                        clicks: clicks.saturating_add(1),
                        first_click_ms,
                        pressed_since_ms: None,
                    },
                    None,
                ),
            },
            ButtonState::Accumulating {
                pressed_since_ms: None,
                ..
            } => (self, None),
        }
    }

    /// Poll without a level change
    fn on_steady(self, now_ms: u32, timings: &ButtonTimings) -> (Self, Option<ButtonEvent>) {
        match self {
            ButtonState::Accumulating {
                clicks: 1,
                first_click_ms,
                pressed_since_ms,
            } if now_ms.wrapping_sub(first_click_ms) > timings.double_click_gap_ms => {
                (Self::after_clicks(pressed_since_ms), Some(ButtonEvent::Click))
            }
            ButtonState::Accumulating {
                clicks,
                pressed_since_ms,
                ..
            } if clicks > 1 => (Self::after_clicks(pressed_since_ms), Some(ButtonEvent::DoubleClick)),
            _ => (self, None),
        }
    }

    /// State once pending clicks are reported; a held press keeps its start time
    fn after_clicks(pressed_since_ms: Option<u32>) -> Self {
        match pressed_since_ms {
            Some(since_ms) => ButtonState::Pressed { since_ms },
            None => ButtonState::Idle,
        }
    }

    /// Pending short clicks (0 outside an accumulation window)
    pub fn pending_clicks(&self) -> u8 {
        match self {
            ButtonState::Accumulating { clicks, .. } => *clicks,
            _ => 0,
        }
    }
}

/// Pushbutton classifier
///
/// Feed it the pressed level and the current time once per poll.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonClassifier {
    timings: ButtonTimings,
    pressed: bool,
    state: ButtonState,
}

impl Default for ButtonClassifier {
    fn default() -> Self {
        Self::new(ButtonTimings::default())
    }
}

impl ButtonClassifier {
    /// Create a classifier with the button released
    pub const fn new(timings: ButtonTimings) -> Self {
        Self {
            timings,
            pressed: false,
            state: ButtonState::Idle,
        }
    }

    /// Current thresholds
    pub const fn timings(&self) -> &ButtonTimings {
        &self.timings
    }

    /// Replace the thresholds; pending clicks keep their timestamps
    pub fn set_timings(&mut self, timings: ButtonTimings) {
        self.timings = timings;
    }

    /// Current state
    pub const fn state(&self) -> ButtonState {
        self.state
    }

    /// Level seen on the last update
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Process one sample
    ///
    /// # Arguments
    /// - `pressed`: true while the button is held down
    /// - `now_ms`: monotonic timestamp, compared with wrapping arithmetic
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonEvent> {
        let was_pressed = core::mem::replace(&mut self.pressed, pressed);

        let (next, event) = match (was_pressed, pressed) {
            (false, true) => (self.state.on_press(now_ms), None),
            (true, false) => self.state.on_release(now_ms, &self.timings),
            _ => self.state.on_steady(now_ms, &self.timings),
        };

        self.state = next;
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives a classifier with a 1 ms poll cadence and collects events
    struct Harness {
        classifier: ButtonClassifier,
        now_ms: u32,
        clicks: u32,
        long_clicks: u32,
        double_clicks: u32,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_timings(ButtonTimings::default())
        }

        fn with_timings(timings: ButtonTimings) -> Self {
            Self {
                classifier: ButtonClassifier::new(timings),
                now_ms: 1_000,
                clicks: 0,
                long_clicks: 0,
                double_clicks: 0,
            }
        }

        fn step(&mut self, pressed: bool) {
            match self.classifier.update(pressed, self.now_ms) {
                Some(ButtonEvent::Click) => self.clicks += 1,
                Some(ButtonEvent::LongClick) => self.long_clicks += 1,
                Some(ButtonEvent::DoubleClick) => self.double_clicks += 1,
                None => {}
            }
            self.now_ms = self.now_ms.wrapping_add(1);
        }

        fn hold(&mut self, pressed: bool, ms: u32) {
            for _ in 0..ms {
                self.step(pressed);
            }
        }

        fn events(&self) -> (u32, u32, u32) {
            (self.clicks, self.long_clicks, self.double_clicks)
        }
    }

    #[test]
    fn test_release_classification() {
        let timings = ButtonTimings::default();
        assert_eq!(ReleaseKind::classify(49, &timings), ReleaseKind::Bounce);
        assert_eq!(ReleaseKind::classify(50, &timings), ReleaseKind::Short);
        assert_eq!(ReleaseKind::classify(300, &timings), ReleaseKind::Short);
        assert_eq!(ReleaseKind::classify(301, &timings), ReleaseKind::Long);
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut h = Harness::new();
        h.hold(true, 30);
        h.hold(false, 500);
        assert_eq!(h.events(), (0, 0, 0));
        assert_eq!(h.classifier.state(), ButtonState::Idle);
    }

    #[test]
    fn test_long_click() {
        let mut h = Harness::new();
        h.hold(true, 310);
        h.hold(false, 500);
        assert_eq!(h.events(), (0, 1, 0));
    }

    #[test]
    fn test_single_click_after_gap() {
        let mut h = Harness::new();
        h.hold(true, 100);
        h.hold(false, 250);
        assert_eq!(h.events(), (0, 0, 0));
        assert_eq!(h.classifier.state().pending_clicks(), 1);

        h.hold(false, 10);
        assert_eq!(h.events(), (1, 0, 0));
        assert_eq!(h.classifier.state(), ButtonState::Idle);
    }

    #[test]
    fn test_double_click() {
        let mut h = Harness::new();
        h.hold(true, 100);
        h.hold(false, 100);
        h.hold(true, 100);
        h.hold(false, 1);
        assert_eq!(h.events(), (0, 0, 0));

        // Reported on the first quiet poll after the second release
        h.hold(false, 1);
        assert_eq!(h.events(), (0, 0, 1));

        h.hold(false, 500);
        assert_eq!(h.events(), (0, 0, 1));
    }

    #[test]
    fn test_triple_click_is_double_click() {
        // Without a debounce window, clicks can arrive on back-to-back polls
        let mut h = Harness::with_timings(ButtonTimings::new(0, 300, 250));
        for _ in 0..3 {
            h.step(true);
            h.step(false);
        }
        assert_eq!(h.classifier.state().pending_clicks(), 3);
        assert_eq!(h.events(), (0, 0, 0));

        h.hold(false, 500);
        assert_eq!(h.events(), (0, 0, 1));
    }

    #[test]
    fn test_long_click_clears_pending_click() {
        let mut h = Harness::with_timings(ButtonTimings::new(50, 300, 1_000));
        h.hold(true, 100);
        h.hold(false, 50);
        assert_eq!(h.classifier.state().pending_clicks(), 1);

        h.hold(true, 400);
        h.step(false);
        assert_eq!(h.events(), (0, 1, 0));
        assert_eq!(h.classifier.state(), ButtonState::Idle);

        h.hold(false, 2_000);
        assert_eq!(h.events(), (0, 1, 0));
    }

    #[test]
    fn test_release_bounce_does_not_count() {
        let mut h = Harness::new();
        h.hold(true, 100);
        // Contacts chatter right after the release
        h.hold(false, 2);
        h.hold(true, 3);
        h.hold(false, 500);
        assert_eq!(h.events(), (1, 0, 0));
    }

    #[test]
    fn test_click_reported_while_next_press_held() {
        let mut h = Harness::new();
        h.hold(true, 100);
        h.hold(false, 200);
        // Second press outlasts the gap: first click is reported mid-press
        h.hold(true, 100);
        assert_eq!(h.events(), (1, 0, 0));
        assert!(matches!(h.classifier.state(), ButtonState::Pressed { .. }));

        // The held press is then measured from its own start
        h.hold(false, 500);
        assert_eq!(h.events(), (2, 0, 0));
    }

    #[test]
    fn test_timestamps_wrap() {
        let mut h = Harness::new();
        h.now_ms = u32::MAX - 40;
        h.hold(true, 100);
        h.hold(false, 300);
        assert_eq!(h.events(), (1, 0, 0));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut classifier = ButtonClassifier::default();
        // Once a click is pending with no press held, a release is a no-op
        assert_eq!(classifier.update(true, 0), None);
        assert_eq!(classifier.update(false, 100), None);
        let state = classifier.state();
        assert_eq!(
            state.on_release(120, classifier.timings()),
            (state, None)
        );
    }
}
