//! Square-wave tone generation
//!
//! Two ways to sound a tone on a GPIO pin:
//!
//! - [`ToneEngine`]: non-blocking. A hardware timer interrupt toggles the
//!   pin every half period. Only one pin and one timer at a time; starting
//!   a new tone supersedes the previous one.
//! - [`BlockingTone`]: busy-waits with explicit delays. Needs no timer, can
//!   skew the duty cycle to approximate volume, and cannot be cancelled.
//!
//! # Interrupt wiring
//!
//! ```ignore
//! static TONE: SharedTone<Pins, Timers, Clock> = SharedTone::new();
//!
//! fn tone_isr() {
//!     TONE.on_tick();
//! }
//!
//! TONE.install(ToneEngine::new(pins, timers, clock, tone_isr, ToneConfig::default()));
//! TONE.tone_for(PinId(4), 440, 250);
//! ```

mod blocking;
mod engine;
#[cfg(test)]
mod mock;
mod shared;

pub use blocking::BlockingTone;
pub use engine::{ToneConfig, ToneEngine};
pub use shared::SharedTone;
