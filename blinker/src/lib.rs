//! Portable core of the blink firmware.
//!
//! A single output pin is driven through a two-state machine (`Light::On`,
//! `Light::Off`), with one log line and one blocking delay per transition.
//! Everything here is generic over the `embedded-hal` 1.0 traits, so the
//! board crate only has to hand over a pin, a delay and a log sink.

#![cfg_attr(not(test), no_std)]

mod driver;
mod error;
mod led;
mod light;

pub use driver::Blinker;
pub use error::Error;
pub use led::Led;
pub use light::Light;

/// Time spent in each state, in milliseconds.
pub const INTERVAL_MS: u32 = 1_000;

/// Line written when a pin write fails and the state is about to be retried.
pub const RETRY_MESSAGE: &str = "pin write failed, retrying";
