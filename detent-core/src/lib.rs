//! Board-agnostic debouncing core for mechanical rotary encoders
//!
//! This crate turns raw, bouncing pin levels into clean events without
//! interrupts, timers or blocking waits. Everything runs inside
//! [`RotaryEncoder::poll`], which the application calls from its main loop:
//!
//! - Rotary decoding, by one of two algorithms ([`rotary`])
//! - Click / long-click / double-click classification ([`button`])
//! - Event types delivered to the registered callbacks ([`events`])
//! - Runtime configuration of mode and button timings ([`config`])

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod config;
pub mod encoder;
pub mod events;
pub mod rotary;

pub use config::{ButtonTimings, DebounceMode, EncoderConfig};
pub use encoder::RotaryEncoder;
pub use events::{ButtonEvent, Direction, EncoderEvent};

// Collaborator traits, so applications only need one import
pub use detent_hal::{InputPin, MonotonicClock, NoButton};
