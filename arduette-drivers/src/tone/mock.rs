//! Mock hardware for the tone tests

use core::cell::Cell;

use arduette_hal::timer::TimerHandler;
use arduette_hal::{Clock, DigitalOutput, PinId, TimerId, ToneTimer};
use embedded_hal::delay::DelayNs;

pub fn noop_handler() {}

/// Output latches for up to 16 pins
pub struct MockPins {
    levels: [bool; 16],
    pub toggles: u32,
}

impl MockPins {
    pub fn new() -> Self {
        Self {
            levels: [false; 16],
            toggles: 0,
        }
    }
}

impl DigitalOutput for MockPins {
    fn set_high(&mut self, pin: PinId) {
        self.levels[usize::from(pin.0)] = true;
    }

    fn set_low(&mut self, pin: PinId) {
        self.levels[usize::from(pin.0)] = false;
    }

    fn toggle(&mut self, pin: PinId) {
        self.toggles += 1;
        let level = &mut self.levels[usize::from(pin.0)];
        *level = !*level;
    }

    fn is_set_high(&self, pin: PinId) -> bool {
        self.levels[usize::from(pin.0)]
    }
}

#[derive(Clone, Copy, Default)]
struct TimerSlot {
    enabled: bool,
    period_us: u32,
    handler: Option<TimerHandler>,
}

/// Four timers recording their configuration
pub struct MockTimer {
    slots: [TimerSlot; 4],
    pub inits: u32,
    pub period_updates: u32,
    pub disables: u32,
}

impl MockTimer {
    pub fn new() -> Self {
        Self {
            slots: [TimerSlot::default(); 4],
            inits: 0,
            period_updates: 0,
            disables: 0,
        }
    }

    pub fn is_enabled(&self, timer: TimerId) -> bool {
        self.slots[usize::from(timer.0)].enabled
    }

    pub fn period_us(&self, timer: TimerId) -> u32 {
        self.slots[usize::from(timer.0)].period_us
    }

    pub fn handler(&self, timer: TimerId) -> Option<TimerHandler> {
        self.slots[usize::from(timer.0)].handler
    }
}

impl ToneTimer for MockTimer {
    fn init_periodic(&mut self, timer: TimerId, period_us: u32, handler: TimerHandler) {
        self.inits += 1;
        self.slots[usize::from(timer.0)] = TimerSlot {
            enabled: false,
            period_us,
            handler: Some(handler),
        };
    }

    fn set_period(&mut self, timer: TimerId, period_us: u32) {
        self.period_updates += 1;
        self.slots[usize::from(timer.0)].period_us = period_us;
    }

    fn enable(&mut self, timer: TimerId) {
        self.slots[usize::from(timer.0)].enabled = true;
    }

    fn disable(&mut self, timer: TimerId) {
        self.disables += 1;
        self.slots[usize::from(timer.0)].enabled = false;
    }
}

/// Manually advanced clock with nanosecond resolution
pub struct MockClock {
    now_ns: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { now_ns: Cell::new(0) }
    }

    pub fn set_ms(&self, ms: u64) {
        self.now_ns.set(ms * 1_000_000);
    }

    pub fn advance_ns(&self, ns: u64) {
        self.now_ns.set(self.now_ns.get() + ns);
    }

    pub fn now_ns(&self) -> u64 {
        self.now_ns.get()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now_ns.get() / 1_000_000
    }

    fn now_us(&self) -> u64 {
        self.now_ns.get() / 1_000
    }
}

/// Delay that advances a [`MockClock`] instead of waiting
pub struct MockDelay<'a> {
    clock: &'a MockClock,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockClock) -> Self {
        Self { clock }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.clock.advance_ns(u64::from(us) * 1_000);
    }
}

/// Single-pin output that accumulates time spent high and low
pub struct TracePin<'a> {
    clock: &'a MockClock,
    pin: PinId,
    level: bool,
    since_ns: u64,
    pub high_ns: u64,
    pub low_ns: u64,
    pub rising_edges: u32,
    pub writes: u32,
}

impl<'a> TracePin<'a> {
    pub fn new(clock: &'a MockClock, pin: PinId) -> Self {
        Self {
            clock,
            pin,
            level: false,
            since_ns: clock.now_ns(),
            high_ns: 0,
            low_ns: 0,
            rising_edges: 0,
            writes: 0,
        }
    }

    fn write(&mut self, pin: PinId, high: bool) {
        assert_eq!(pin, self.pin, "write to an untraced pin");
        self.writes += 1;

        let now = self.clock.now_ns();
        let elapsed = now - self.since_ns;
        if self.level {
            self.high_ns += elapsed;
        } else {
            self.low_ns += elapsed;
        }
        if high && !self.level {
            self.rising_edges += 1;
        }
        self.level = high;
        self.since_ns = now;
    }
}

impl DigitalOutput for TracePin<'_> {
    fn set_high(&mut self, pin: PinId) {
        self.write(pin, true);
    }

    fn set_low(&mut self, pin: PinId) {
        self.write(pin, false);
    }

    fn is_set_high(&self, pin: PinId) -> bool {
        pin == self.pin && self.level
    }
}
