//! Pushbutton click classification
//!
//! Turns the sampled (already active-low decoded) pressed level and a
//! millisecond timestamp into click, long-click and double-click events.

pub mod classifier;

pub use classifier::{ButtonClassifier, ButtonState, ReleaseKind};
