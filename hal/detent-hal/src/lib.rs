//! Detent Hardware Abstraction Layer
//!
//! This crate defines the two collaborators the encoder core consumes: a
//! digital input that can be sampled synchronously, and a monotonic
//! millisecond clock. Chip-specific code implements these traits (or uses
//! the optional adapters) so the same debouncing logic runs on any board
//! and on the host under test.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (main loop, callbacks)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-core (decoders, classifier)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │ embassy-time  │
//! │    inputs     │       │    Instant    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input sampled once per poll
//! - [`clock::MonotonicClock`] - Millisecond timestamps for button timing

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use clock::MonotonicClock;
pub use gpio::{InputPin, NoButton};

#[cfg(feature = "embassy-time")]
pub use clock::EmbassyClock;
#[cfg(feature = "embedded-hal")]
pub use gpio::HalInput;
