//! Arduette Hardware Abstraction Layer
//!
//! This crate defines the hardware traits consumed by the Arduette
//! drivers. Chip-specific code implements them once; the tone generator
//! and serial printer then run unchanged on any board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application / board support            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  arduette-drivers (tone, serial print)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  arduette-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::DigitalOutput`] - Pin-indexed digital output
//! - [`timer::ToneTimer`] - Periodic interrupt timers
//! - [`clock::Clock`] - Monotonic millisecond/microsecond time
//! - [`uart::UartTx`] - Serial transmit
//!
//! Busy-wait delays come from [`embedded_hal::delay::DelayNs`] and are not
//! redefined here.
//!
//! [`embedded_hal::delay::DelayNs`]: https://docs.rs/embedded-hal/1/embedded_hal/delay/trait.DelayNs.html

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use gpio::{DigitalOutput, PinId};
pub use timer::{TimerId, ToneTimer};
pub use uart::UartTx;
