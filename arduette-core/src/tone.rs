//! Tone timing
//!
//! Square waves are made by toggling a pin once per half period. These
//! helpers hold the arithmetic shared by the interrupt-driven and the
//! busy-wait tone drivers.

/// Highest frequency a tone may be started at
///
/// At this rate the half period is 1 µs, the shortest a timer is asked for.
pub const MAX_TONE_FREQUENCY_HZ: u32 = 500_000;

/// Microseconds in half a second: `HALF_SECOND_US / freq` is a half period
const HALF_SECOND_US: u32 = 500_000;

/// Logical tone state
///
/// `Off` covers both "silent" and "timed tone armed to expire": a timed
/// tone keeps sounding in the `Off` state until its deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneState {
    #[default]
    Off,
    /// Continuous tone, only stopped explicitly
    On,
}

/// Check that `freq_hz` is in `1..=max_hz`
pub const fn is_valid_frequency(freq_hz: u32, max_hz: u32) -> bool {
    freq_hz != 0 && freq_hz <= max_hz
}

/// Half period of `freq_hz` in microseconds (50% duty toggle interval)
///
/// Returns `None` for 0 Hz.
pub const fn half_period_us(freq_hz: u32) -> Option<u32> {
    if freq_hz == 0 {
        None
    } else {
        Some(HALF_SECOND_US / freq_hz)
    }
}

/// High and low times of one busy-wait cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyCycle {
    /// Time the pin is held high (µs)
    pub high_us: u32,
    /// Time the pin is held low (µs)
    pub low_us: u32,
}

impl DutyCycle {
    /// Full volume; the same as a plain 50% square wave
    pub const MAX_VOLUME: u8 = 100;

    /// Split one period of `freq_hz` according to `volume` (0-100)
    ///
    /// `high = half * volume / 100`, `low = 2 * half - high`. Volume 100 is
    /// a symmetric square wave, 0 holds the pin low for the whole period.
    /// Volumes above 100 are clamped. Returns `None` for 0 Hz.
    pub fn from_volume(freq_hz: u32, volume: u8) -> Option<Self> {
        let half = half_period_us(freq_hz)?;
        let volume = u32::from(volume.min(Self::MAX_VOLUME));
        let high_us = half * volume / u32::from(Self::MAX_VOLUME);
        Some(Self {
            high_us,
            low_us: 2 * half - high_us,
        })
    }

    /// Symmetric square wave at `freq_hz`
    pub fn square(freq_hz: u32) -> Option<Self> {
        Self::from_volume(freq_hz, Self::MAX_VOLUME)
    }

    /// Full period in microseconds
    pub fn period_us(&self) -> u32 {
        self.high_us + self.low_us
    }
}
