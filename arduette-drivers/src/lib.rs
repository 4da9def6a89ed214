//! Hardware driver implementations
//!
//! This crate builds on the traits in arduette-hal and the logic in
//! arduette-core:
//!
//! - Interrupt-driven tone generation on one timer and one pin
//! - Busy-wait tone generation with duty-cycle volume
//! - A critical-section wrapper sharing the tone engine with its interrupt
//! - A `Print` sink over any UART transmitter

#![no_std]
#![deny(unsafe_code)]

pub mod serial;
pub mod tone;

pub use serial::UartPrinter;
pub use tone::{BlockingTone, SharedTone, ToneConfig, ToneEngine};
