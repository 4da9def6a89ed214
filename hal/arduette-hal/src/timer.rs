//! Periodic timer abstractions
//!
//! A tone is produced by toggling a pin from a periodic timer interrupt.
//! Most parts have several general-purpose timers, so each call names the
//! timer it acts on.

/// Identifier of a hardware timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerId(pub u8);

/// Interrupt handler invoked on every timer period
pub type TimerHandler = fn();

/// Hardware timer able to fire a periodic interrupt
///
/// Periods are expressed in microseconds. Implementations round to the
/// nearest period the prescaler can express.
pub trait ToneTimer {
    /// Configure `timer` from scratch: period, interrupt handler and
    /// interrupt priority. Leaves the timer disabled.
    fn init_periodic(&mut self, timer: TimerId, period_us: u32, handler: TimerHandler);

    /// Change the period of an already initialized timer
    fn set_period(&mut self, timer: TimerId, period_us: u32);

    /// Start counting and firing interrupts
    fn enable(&mut self, timer: TimerId);

    /// Stop counting; no further interrupts fire
    fn disable(&mut self, timer: TimerId);
}
