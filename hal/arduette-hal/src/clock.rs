//! Monotonic time source

/// Monotonic clock
///
/// Both readings count from the same arbitrary epoch (usually boot) and
/// never go backwards. 64-bit counters do not wrap in practice.
pub trait Clock {
    /// Milliseconds since the epoch
    fn now_ms(&self) -> u64;

    /// Microseconds since the epoch
    fn now_us(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
