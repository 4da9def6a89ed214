//! Interrupt-driven tone engine
//!
//! The engine owns the pin port, the timer block and the clock. The timer
//! interrupt calls [`ToneEngine::on_tick`] once per half period; everything
//! else runs in the foreground. Share it between the two through
//! [`super::SharedTone`].
//!
//! # Timed tones
//!
//! [`ToneEngine::tone_for`] starts the waveform and then drops the state
//! back to [`ToneState::Off`]. The tone keeps sounding: `Off` with a
//! deadline set means "armed to expire". The first tick after the deadline
//! stops it, so a timed tone ends on a half-period boundary rather than
//! exactly at the deadline.

use arduette_core::tone::{half_period_us, is_valid_frequency, MAX_TONE_FREQUENCY_HZ};
use arduette_core::ToneState;
use arduette_hal::timer::TimerHandler;
use arduette_hal::{Clock, DigitalOutput, PinId, TimerId, ToneTimer};

/// Tone engine configuration
#[derive(Debug, Clone)]
pub struct ToneConfig {
    /// Timer used until [`ToneEngine::set_tone_timer`] picks another
    pub default_timer: TimerId,
    /// Frequencies above this stop the tone instead of starting it
    ///
    /// Capped at [`MAX_TONE_FREQUENCY_HZ`]; the timer period is whole
    /// microseconds, so anything faster would round to 0.
    pub max_frequency_hz: u32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            default_timer: TimerId(0),
            max_frequency_hz: MAX_TONE_FREQUENCY_HZ,
        }
    }
}

/// Non-blocking square-wave generator on one timer and one pin
pub struct ToneEngine<G, T, C> {
    gpio: G,
    timer: T,
    clock: C,
    /// Interrupt handler registered when a timer is (re)initialized
    handler: TimerHandler,
    config: ToneConfig,
    /// Timer the next tone will use
    current_timer: TimerId,
    /// Timer initialized by the previous start, if any
    bound_timer: Option<TimerId>,
    state: ToneState,
    /// Pin toggled by the interrupt
    active_pin: Option<PinId>,
    /// Deadline of a timed tone (ms on `clock`)
    stop_at_ms: u64,
}

impl<G: DigitalOutput, T: ToneTimer, C: Clock> ToneEngine<G, T, C> {
    /// Create an idle engine
    ///
    /// `handler` is registered with the timer on first use. It must end up
    /// calling [`ToneEngine::on_tick`] on this engine, usually through a
    /// `static` [`super::SharedTone`].
    pub fn new(gpio: G, timer: T, clock: C, handler: TimerHandler, config: ToneConfig) -> Self {
        Self {
            gpio,
            timer,
            clock,
            handler,
            current_timer: config.default_timer,
            config,
            bound_timer: None,
            state: ToneState::Off,
            active_pin: None,
            stop_at_ms: 0,
        }
    }

    /// Select the timer used by the next call to [`ToneEngine::tone`]
    ///
    /// A tone already playing keeps its timer until it is restarted.
    pub fn set_tone_timer(&mut self, timer: TimerId) {
        self.current_timer = timer;
    }

    /// Start a continuous 50% square wave on `pin`
    ///
    /// A frequency of 0 or above the configured maximum is treated as
    /// [`ToneEngine::no_tone`]. Any tone already playing is superseded.
    pub fn tone(&mut self, pin: PinId, freq_hz: u32) {
        let period_us = match half_period_us(freq_hz) {
            Some(period) if is_valid_frequency(freq_hz, self.frequency_limit()) => period,
            _ => {
                self.no_tone(pin);
                return;
            }
        };

        if let Some(previous) = self.active_pin {
            if previous != pin {
                self.gpio.set_low(previous);
            }
        }
        self.active_pin = Some(pin);
        self.state = ToneState::On;

        let timer = self.current_timer;
        if self.bound_timer == Some(timer) {
            self.timer.set_period(timer, period_us);
            self.timer.enable(timer);
        } else {
            if let Some(previous) = self.bound_timer {
                self.timer.disable(previous);
            }
            #[cfg(feature = "defmt")]
            defmt::debug!("tone: binding timer {} at {} us", timer, period_us);
            self.timer.init_periodic(timer, period_us, self.handler);
            self.timer.enable(timer);
            self.bound_timer = Some(timer);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("tone: {} Hz on pin {}", freq_hz, pin);
    }

    /// Sound `pin` at `freq_hz` for `duration_ms`, then stop by itself
    ///
    /// An invalid frequency or a zero duration is treated as
    /// [`ToneEngine::no_tone`].
    pub fn tone_for(&mut self, pin: PinId, freq_hz: u32, duration_ms: u32) {
        if duration_ms == 0 || !is_valid_frequency(freq_hz, self.frequency_limit()) {
            self.no_tone(pin);
            return;
        }

        self.stop_at_ms = self.clock.now_ms() + u64::from(duration_ms);
        self.tone(pin, freq_hz);
        // Armed to expire on the first tick past the deadline
        self.state = ToneState::Off;
    }

    /// Stop the tone and drive `pin` low
    ///
    /// Safe to call when nothing is playing.
    pub fn no_tone(&mut self, pin: PinId) {
        if let Some(timer) = self.bound_timer {
            self.timer.disable(timer);
        }
        self.gpio.set_low(pin);
        self.state = ToneState::Off;
        self.active_pin = None;

        #[cfg(feature = "defmt")]
        defmt::debug!("tone: stopped on pin {}", pin);
    }

    fn frequency_limit(&self) -> u32 {
        self.config.max_frequency_hz.min(MAX_TONE_FREQUENCY_HZ)
    }

    /// Timer interrupt body: one call per half period
    pub fn on_tick(&mut self) {
        let Some(pin) = self.active_pin else {
            return;
        };

        self.gpio.toggle(pin);

        if self.state == ToneState::Off && self.clock.now_ms() > self.stop_at_ms {
            self.no_tone(pin);
        }
    }

    /// Get the logical tone state
    pub fn state(&self) -> ToneState {
        self.state
    }

    /// Pin currently driven by the interrupt
    pub fn active_pin(&self) -> Option<PinId> {
        self.active_pin
    }

    /// Check if a tone (continuous or timed) is sounding
    pub fn is_playing(&self) -> bool {
        self.active_pin.is_some()
    }

    /// Timer selected for the next start
    pub fn current_timer(&self) -> TimerId {
        self.current_timer
    }

    /// Timer configured by the previous start
    pub fn bound_timer(&self) -> Option<TimerId> {
        self.bound_timer
    }

    /// Deadline of the last timed tone (ms)
    pub fn stop_at_ms(&self) -> u64 {
        self.stop_at_ms
    }

    /// Get the configuration
    pub fn config(&self) -> &ToneConfig {
        &self.config
    }

    /// Get access to the pin port
    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    /// Get access to the timer block
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Get access to the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Take the hardware back
    pub fn release(self) -> (G, T, C) {
        (self.gpio, self.timer, self.clock)
    }
}
