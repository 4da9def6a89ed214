//! Integer to text conversion

use super::Print;

/// Digits needed for the widest integer in the narrowest base (u64 in base 2)
pub const NUMBER_BUFFER_LEN: usize = 8 * core::mem::size_of::<u64>();

/// Numeric base for integer printing
///
/// Either a radix in `2..=36`, or [`Base::BYTE`], which prints the low byte
/// of the value verbatim instead of any textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Base(u8);

impl Base {
    /// Emit the raw low byte rather than digits
    pub const BYTE: Base = Base(0);
    pub const BIN: Base = Base(2);
    pub const OCT: Base = Base(8);
    pub const DEC: Base = Base(10);
    pub const HEX: Base = Base(16);

    /// Largest supported radix (digits 0-9 then A-Z)
    pub const MAX_RADIX: u8 = 36;

    /// Create a base from a raw radix
    ///
    /// `0` maps to [`Base::BYTE`]. Returns `None` for 1 and anything above
    /// [`Base::MAX_RADIX`].
    pub const fn new(radix: u8) -> Option<Self> {
        match radix {
            0 | 2..=36 => Some(Self(radix)),
            _ => None,
        }
    }

    /// Raw radix (0 for [`Base::BYTE`])
    pub const fn radix(self) -> u8 {
        self.0
    }

    /// Check if this is the raw-byte sentinel
    pub const fn is_byte(self) -> bool {
        self.0 == 0
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::DEC
    }
}

/// ASCII character for a digit value below 36 (`0-9`, then `A-Z`)
pub const fn digit_char(digit: u8) -> u8 {
    if digit < 10 {
        b'0' + digit
    } else {
        b'A' + digit - 10
    }
}

/// Print `n` in `base`, most significant digit first
///
/// Callers handle [`Base::BYTE`] before getting here.
pub(crate) fn print_number<P: Print + ?Sized>(out: &mut P, mut n: u64, base: Base) -> usize {
    debug_assert!(!base.is_byte());

    if n == 0 {
        return out.write_byte(b'0');
    }

    let radix = u64::from(base.radix());
    let mut buf = [0u8; NUMBER_BUFFER_LEN];
    let mut len = 0;
    while n > 0 {
        buf[len] = (n % radix) as u8;
        n /= radix;
        len += 1;
    }

    buf[..len]
        .iter()
        .rev()
        .map(|&digit| out.write_byte(digit_char(digit)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    fn render(n: u64, base: Base) -> Vec<u8, NUMBER_BUFFER_LEN> {
        let mut out = Vec::new();
        print_number(&mut out, n, base);
        out
    }

    #[test]
    fn test_base_validation() {
        assert_eq!(Base::new(0), Some(Base::BYTE));
        assert_eq!(Base::new(1), None);
        assert_eq!(Base::new(2), Some(Base::BIN));
        assert_eq!(Base::new(36).map(Base::radix), Some(36));
        assert_eq!(Base::new(37), None);
        assert_eq!(Base::default(), Base::DEC);
    }

    #[test]
    fn test_digit_chars() {
        assert_eq!(digit_char(0), b'0');
        assert_eq!(digit_char(9), b'9');
        assert_eq!(digit_char(10), b'A');
        assert_eq!(digit_char(35), b'Z');
    }

    #[test]
    fn test_zero_in_every_base() {
        for radix in 2..=Base::MAX_RADIX {
            let base = Base::new(radix).unwrap();
            assert_eq!(&render(0, base)[..], b"0");
        }
    }

    #[test]
    fn test_common_bases() {
        assert_eq!(&render(255, Base::HEX)[..], b"FF");
        assert_eq!(&render(8, Base::OCT)[..], b"10");
        assert_eq!(&render(10, Base::BIN)[..], b"1010");
        assert_eq!(&render(35, Base::new(36).unwrap())[..], b"Z");
        assert_eq!(&render(36, Base::new(36).unwrap())[..], b"10");
    }

    #[test]
    fn test_widest_value_fits_buffer() {
        let out = render(u64::MAX, Base::BIN);
        assert_eq!(out.len(), NUMBER_BUFFER_LEN);
    }
}
