//! GPIO pin abstractions
//!
//! Pins are addressed by number rather than owned one object per pin. The
//! tone generator rebinds to a different pin on every call, so it needs a
//! port-level view of the outputs.

/// Identifier of a GPIO pin on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl From<u8> for PinId {
    fn from(pin: u8) -> Self {
        Self(pin)
    }
}

/// Digital outputs addressed by pin number
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip. Pins are assumed to be configured as push-pull
/// outputs before they are handed to a driver.
pub trait DigitalOutput {
    /// Set the pin high (logic 1)
    fn set_high(&mut self, pin: PinId);

    /// Set the pin low (logic 0)
    fn set_low(&mut self, pin: PinId);

    /// Toggle the pin state
    fn toggle(&mut self, pin: PinId) {
        if self.is_set_high(pin) {
            self.set_low(pin);
        } else {
            self.set_high(pin);
        }
    }

    /// Set the pin to a specific state
    fn set_state(&mut self, pin: PinId, high: bool) {
        if high {
            self.set_high(pin);
        } else {
            self.set_low(pin);
        }
    }

    /// Check if the pin output latch is currently high
    fn is_set_high(&self, pin: PinId) -> bool;

    /// Check if the pin output latch is currently low
    fn is_set_low(&self, pin: PinId) -> bool {
        !self.is_set_high(pin)
    }
}
