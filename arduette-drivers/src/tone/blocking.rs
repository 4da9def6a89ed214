//! Busy-wait tone generation
//!
//! Toggles the pin from the foreground with explicit delays. Uses no timer,
//! so it can run alongside [`super::ToneEngine`], but it holds the CPU for
//! the whole duration and cannot be stopped early.
//!
//! Every call runs at least one full cycle, then keeps cycling until the
//! clock reaches the deadline, and always leaves the pin low.

use arduette_core::DutyCycle;
use arduette_hal::{Clock, DigitalOutput, PinId};
use embedded_hal::delay::DelayNs;

/// Deadline on one of the two clock resolutions
#[derive(Debug, Clone, Copy)]
enum Deadline {
    Millis(u64),
    Micros(u64),
}

/// Blocking square-wave generator
pub struct BlockingTone<G, C, D> {
    gpio: G,
    clock: C,
    delay: D,
}

impl<G: DigitalOutput, C: Clock, D: DelayNs> BlockingTone<G, C, D> {
    pub fn new(gpio: G, clock: C, delay: D) -> Self {
        Self { gpio, clock, delay }
    }

    /// 50% square wave on `pin` for `duration_ms`
    ///
    /// Returns immediately for 0 Hz.
    pub fn tone_block(&mut self, pin: PinId, freq_hz: u32, duration_ms: u32) {
        let deadline = Deadline::Millis(self.clock.now_ms() + u64::from(duration_ms));
        if let Some(cycle) = DutyCycle::square(freq_hz) {
            self.run(pin, cycle, deadline);
        }
    }

    /// Square wave with duty-cycle volume (0-100) for `duration_ms`
    ///
    /// Volume 100 is a symmetric wave; lower volumes shorten the high time.
    /// Returns immediately for 0 Hz.
    pub fn tone_block_volume(&mut self, pin: PinId, freq_hz: u32, duration_ms: u32, volume: u8) {
        let deadline = Deadline::Millis(self.clock.now_ms() + u64::from(duration_ms));
        if let Some(cycle) = DutyCycle::from_volume(freq_hz, volume) {
            self.run(pin, cycle, deadline);
        }
    }

    /// Like [`BlockingTone::tone_block_volume`] with a duration in µs
    pub fn tone_block_volume_us(&mut self, pin: PinId, freq_hz: u32, duration_us: u32, volume: u8) {
        let deadline = Deadline::Micros(self.clock.now_us() + u64::from(duration_us));
        if let Some(cycle) = DutyCycle::from_volume(freq_hz, volume) {
            self.run(pin, cycle, deadline);
        }
    }

    /// Take the hardware back
    pub fn release(self) -> (G, C, D) {
        (self.gpio, self.clock, self.delay)
    }

    fn run(&mut self, pin: PinId, cycle: DutyCycle, deadline: Deadline) {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "tone_block: pin {} high {} us low {} us",
            pin,
            cycle.high_us,
            cycle.low_us
        );

        loop {
            self.gpio.set_high(pin);
            self.delay.delay_us(cycle.high_us);
            self.gpio.set_low(pin);
            self.delay.delay_us(cycle.low_us);

            if self.reached(deadline) {
                break;
            }
        }
        self.gpio.set_low(pin);
    }

    fn reached(&self, deadline: Deadline) -> bool {
        match deadline {
            Deadline::Millis(at) => self.clock.now_ms() >= at,
            Deadline::Micros(at) => self.clock.now_us() >= at,
        }
    }
}
