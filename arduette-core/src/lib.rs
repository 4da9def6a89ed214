//! Board-agnostic core logic for Arduette
//!
//! This crate contains everything that does not touch hardware:
//!
//! - The [`print::Print`] capability: text, integers in any base, an
//!   approximate float renderer and a small `printf` engine, all built on a
//!   single `write_byte` primitive
//! - Memory-backed print sinks
//! - Tone timing math and state types shared with the tone drivers

#![no_std]
#![deny(unsafe_code)]

pub mod print;
pub mod tone;

pub use print::{Base, Print, Printable};
pub use tone::{DutyCycle, ToneState};
