//! Tone engine shared between foreground code and the timer interrupt
//!
//! The interrupt handler and foreground calls both update the active pin,
//! the tone state and the deadline. Every access goes through a critical
//! section so a multi-field update is never seen half done.

use core::cell::RefCell;

use arduette_core::ToneState;
use arduette_hal::{Clock, DigitalOutput, PinId, TimerId, ToneTimer};
use critical_section::Mutex;

use super::ToneEngine;

/// Interrupt-safe home for a [`ToneEngine`]
///
/// `const`-constructible, so it can live in a `static` that the timer
/// interrupt handler reaches. Calls made before [`SharedTone::install`]
/// do nothing.
pub struct SharedTone<G, T, C> {
    inner: Mutex<RefCell<Option<ToneEngine<G, T, C>>>>,
}

impl<G, T, C> SharedTone<G, T, C> {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }
}

impl<G, T, C> Default for SharedTone<G, T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: DigitalOutput, T: ToneTimer, C: Clock> SharedTone<G, T, C> {
    /// Place `engine` in the slot, returning any previous engine
    pub fn install(&self, engine: ToneEngine<G, T, C>) -> Option<ToneEngine<G, T, C>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(engine))
    }

    /// Remove the engine from the slot
    pub fn take(&self) -> Option<ToneEngine<G, T, C>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Run `f` on the engine inside a critical section
    ///
    /// Returns `None` if no engine is installed. Keep `f` short: the timer
    /// interrupt is held off while it runs.
    pub fn with<R>(&self, f: impl FnOnce(&mut ToneEngine<G, T, C>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// See [`ToneEngine::tone`]
    pub fn tone(&self, pin: PinId, freq_hz: u32) {
        self.with(|engine| engine.tone(pin, freq_hz));
    }

    /// See [`ToneEngine::tone_for`]
    pub fn tone_for(&self, pin: PinId, freq_hz: u32, duration_ms: u32) {
        self.with(|engine| engine.tone_for(pin, freq_hz, duration_ms));
    }

    /// See [`ToneEngine::no_tone`]
    pub fn no_tone(&self, pin: PinId) {
        self.with(|engine| engine.no_tone(pin));
    }

    /// See [`ToneEngine::set_tone_timer`]
    pub fn set_tone_timer(&self, timer: TimerId) {
        self.with(|engine| engine.set_tone_timer(timer));
    }

    /// Timer interrupt entry point
    pub fn on_tick(&self) {
        self.with(|engine| engine.on_tick());
    }

    /// Current tone state, `Off` when no engine is installed
    pub fn state(&self) -> ToneState {
        self.with(|engine| engine.state()).unwrap_or_default()
    }

    /// Check if a tone is sounding
    pub fn is_playing(&self) -> bool {
        self.with(|engine| engine.is_playing()).unwrap_or(false)
    }
}
