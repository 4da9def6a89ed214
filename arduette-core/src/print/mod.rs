//! Formatted output over a byte sink
//!
//! [`Print`] needs exactly one primitive, [`Print::write_byte`]. Everything
//! else (strings, integers in any base from 2 to 36, approximate floats,
//! `core::fmt` arguments, [`Printable`] values and the optional `printf`
//! engine) is derived from it.
//!
//! ```ignore
//! let mut out: heapless::Vec<u8, 32> = heapless::Vec::new();
//! out.print_str("t=");
//! out.print_int(-42i16, Base::DEC);
//! out.println_float(3.14159, 2);
//! assert_eq!(&out[..], b"t=-423.14\r\n");
//! ```
//!
//! Integers of every width funnel into [`Print::print_i64`] or
//! [`Print::print_u64`], so base, sign and byte-count behavior is the same
//! whatever type the caller starts from.

mod float;
#[cfg(feature = "printf")]
pub mod format;
mod number;
pub mod sink;

use core::fmt;

pub use float::LARGE_DOUBLE_THRESHOLD;
#[cfg(feature = "printf")]
pub use format::{sprintf, Arg, MAX_FIELD_WIDTH};
pub use number::{digit_char, Base, NUMBER_BUFFER_LEN};
pub use sink::SliceSink;

/// Line terminator appended by every `println_*` method
pub const LINE_TERMINATOR: &[u8; 2] = b"\r\n";

/// A byte sink with text and number printing
///
/// All methods return the number of bytes the sink accepted. A sink that
/// drops a byte reports 0 for it, so a short count is the only sign of a
/// failed write.
pub trait Print {
    /// Emit one byte
    ///
    /// Returns 1 if the byte was accepted, 0 otherwise. Must not panic.
    fn write_byte(&mut self, byte: u8) -> usize;

    /// Emit a buffer
    ///
    /// The default loops over [`Print::write_byte`]. Sinks with a real bulk
    /// path should override it and keep the same count semantics.
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        bytes.iter().map(|&b| self.write_byte(b)).sum()
    }

    /// Emit the UTF-8 bytes of a string
    fn write_str(&mut self, s: &str) -> usize {
        self.write_bytes(s.as_bytes())
    }

    /// Print a character (UTF-8 encoded)
    fn print_char(&mut self, c: char) -> usize {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf))
    }

    /// Print a string
    fn print_str(&mut self, s: &str) -> usize {
        self.write_str(s)
    }

    /// Print a signed integer in `base`
    ///
    /// With [`Base::BYTE`] the low byte of `n` is emitted verbatim.
    fn print_i64(&mut self, n: i64, base: Base) -> usize {
        if base.is_byte() {
            return self.write_byte(n as u8);
        }
        if n < 0 {
            let sign = self.write_byte(b'-');
            // i64::MIN negates to itself; as u64 it is still the right magnitude
            return sign + number::print_number(self, n.wrapping_neg() as u64, base);
        }
        number::print_number(self, n as u64, base)
    }

    /// Print an unsigned integer in `base`
    ///
    /// With [`Base::BYTE`] the low byte of `n` is emitted verbatim.
    fn print_u64(&mut self, n: u64, base: Base) -> usize {
        if base.is_byte() {
            self.write_byte(n as u8)
        } else {
            number::print_number(self, n, base)
        }
    }

    /// Print any signed integer no wider than 64 bits
    fn print_int<T: Into<i64>>(&mut self, n: T, base: Base) -> usize
    where
        Self: Sized,
    {
        self.print_i64(n.into(), base)
    }

    /// Print any unsigned integer no wider than 64 bits
    fn print_uint<T: Into<u64>>(&mut self, n: T, base: Base) -> usize
    where
        Self: Sized,
    {
        self.print_u64(n.into(), base)
    }

    /// Print a float with `digits` decimals
    ///
    /// Approximate: the last digit may differ from a correctly rounded
    /// formatter, and magnitudes at or above [`LARGE_DOUBLE_THRESHOLD`]
    /// print as `<large double>`. Do not use where exact output matters.
    fn print_float(&mut self, n: f64, digits: u8) -> usize {
        float::print_float(self, n, digits)
    }

    /// Print a value that knows how to render itself
    fn print_printable<T: Printable + ?Sized>(&mut self, value: &T) -> usize
    where
        Self: Sized,
    {
        value.print_to(self)
    }

    /// Print pre-formatted `core::fmt` arguments
    ///
    /// ```ignore
    /// out.print_fmt(format_args!("{}:{:02}", minutes, seconds));
    /// ```
    fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> usize {
        let mut adapter = FmtAdapter {
            out: self,
            count: 0,
        };
        // The adapter never fails; an error can only come from a Display impl
        let _ = fmt::write(&mut adapter, args);
        adapter.count
    }

    /// Print according to a runtime format string
    ///
    /// Supports `%s %d %x %X %u %c %%`, the `-` and `0` flags and a decimal
    /// field width. Returns the number of characters produced.
    #[cfg(feature = "printf")]
    fn printf(&mut self, format: &str, args: &[Arg<'_>]) -> usize {
        format::render(self, format, args)
    }

    /// Emit the line terminator (`"\r\n"`)
    fn println(&mut self) -> usize {
        self.write_byte(LINE_TERMINATOR[0]) + self.write_byte(LINE_TERMINATOR[1])
    }

    /// [`Print::print_char`] followed by the line terminator
    fn println_char(&mut self, c: char) -> usize {
        self.print_char(c) + self.println()
    }

    /// [`Print::print_str`] followed by the line terminator
    fn println_str(&mut self, s: &str) -> usize {
        self.print_str(s) + self.println()
    }

    /// [`Print::print_i64`] followed by the line terminator
    fn println_i64(&mut self, n: i64, base: Base) -> usize {
        self.print_i64(n, base) + self.println()
    }

    /// [`Print::print_u64`] followed by the line terminator
    fn println_u64(&mut self, n: u64, base: Base) -> usize {
        self.print_u64(n, base) + self.println()
    }

    /// [`Print::print_int`] followed by the line terminator
    fn println_int<T: Into<i64>>(&mut self, n: T, base: Base) -> usize
    where
        Self: Sized,
    {
        self.print_int(n, base) + self.println()
    }

    /// [`Print::print_uint`] followed by the line terminator
    fn println_uint<T: Into<u64>>(&mut self, n: T, base: Base) -> usize
    where
        Self: Sized,
    {
        self.print_uint(n, base) + self.println()
    }

    /// [`Print::print_float`] followed by the line terminator
    fn println_float(&mut self, n: f64, digits: u8) -> usize {
        self.print_float(n, digits) + self.println()
    }

    /// [`Print::print_printable`] followed by the line terminator
    fn println_printable<T: Printable + ?Sized>(&mut self, value: &T) -> usize
    where
        Self: Sized,
    {
        self.print_printable(value) + self.println()
    }

    /// [`Print::print_fmt`] followed by the line terminator
    fn println_fmt(&mut self, args: fmt::Arguments<'_>) -> usize {
        self.print_fmt(args) + self.println()
    }
}

impl<P: Print + ?Sized> Print for &mut P {
    fn write_byte(&mut self, byte: u8) -> usize {
        (**self).write_byte(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        (**self).write_bytes(bytes)
    }

    fn write_str(&mut self, s: &str) -> usize {
        (**self).write_str(s)
    }
}

/// A value that can render itself onto any [`Print`] sink
///
/// ```ignore
/// struct Celsius(i16);
///
/// impl Printable for Celsius {
///     fn print_to(&self, out: &mut dyn Print) -> usize {
///         out.print_i64(self.0.into(), Base::DEC) + out.print_str(" C")
///     }
/// }
/// ```
pub trait Printable {
    /// Render onto `out`, returning the bytes accepted
    fn print_to(&self, out: &mut dyn Print) -> usize;
}

impl Printable for str {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        out.write_str(self)
    }
}

impl<const N: usize> Printable for heapless::String<N> {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        out.write_str(self.as_str())
    }
}

impl<T: Printable + ?Sized> Printable for &T {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        (**self).print_to(out)
    }
}

/// Bridges `core::fmt::Write` onto a [`Print`] sink while counting bytes
struct FmtAdapter<'a, P: ?Sized> {
    out: &'a mut P,
    count: usize,
}

impl<P: Print + ?Sized> fmt::Write for FmtAdapter<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += self.out.write_str(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    type Capture = Vec<u8, 128>;

    /// Sink that accepts a fixed number of bytes then refuses the rest
    struct Limited {
        accepted: usize,
        limit: usize,
    }

    impl Print for Limited {
        fn write_byte(&mut self, _byte: u8) -> usize {
            if self.accepted < self.limit {
                self.accepted += 1;
                1
            } else {
                0
            }
        }
    }

    struct Celsius(i16);

    impl Printable for Celsius {
        fn print_to(&self, out: &mut dyn Print) -> usize {
            out.print_i64(self.0.into(), Base::DEC) + out.print_str(" C")
        }
    }

    #[test]
    fn test_print_str_and_char() {
        let mut out = Capture::new();
        assert_eq!(out.print_str("abc"), 3);
        assert_eq!(out.print_char('!'), 1);
        assert_eq!(out.print_char('µ'), 2);
        assert_eq!(&out[..], "abc!µ".as_bytes());
    }

    #[test]
    fn test_narrow_integers_widen() {
        let mut out = Capture::new();
        out.print_int(-5i8, Base::DEC);
        out.print_str(",");
        out.print_int(i16::MIN, Base::DEC);
        out.print_str(",");
        out.print_uint(u8::MAX, Base::HEX);
        out.print_str(",");
        out.print_uint(5u32, Base::BIN);
        assert_eq!(&out[..], b"-5,-32768,FF,101");
    }

    #[test]
    fn test_sign_counted() {
        let mut out = Capture::new();
        assert_eq!(out.print_i64(-120, Base::DEC), 4);
        assert_eq!(&out[..], b"-120");
    }

    #[test]
    fn test_byte_base_emits_raw_low_byte() {
        let mut out = Capture::new();
        assert_eq!(out.print_i64(0x141, Base::BYTE), 1);
        assert_eq!(out.print_u64(0x0A, Base::BYTE), 1);
        assert_eq!(out.print_i64(-1, Base::BYTE), 1);
        assert_eq!(&out[..], &[0x41, 0x0A, 0xFF]);
    }

    #[test]
    fn test_extreme_values() {
        let mut out = Capture::new();
        out.print_u64(u64::MAX, Base::DEC);
        assert_eq!(&out[..], b"18446744073709551615");

        out.clear();
        out.print_i64(i64::MIN, Base::DEC);
        assert_eq!(&out[..], b"-9223372036854775808");

        out.clear();
        out.print_u64(u64::MAX, Base::BIN);
        assert_eq!(out.len(), 64);
        assert!(out.iter().all(|&b| b == b'1'));
    }

    #[test]
    fn test_println_appends_crlf() {
        let mut out = Capture::new();
        assert_eq!(out.println(), 2);
        assert_eq!(out.println_str("hi"), 4);
        assert_eq!(out.println_int(-7i32, Base::DEC), 4);
        assert_eq!(out.println_char('x'), 3);
        assert_eq!(&out[..], b"\r\nhi\r\n-7\r\nx\r\n");
    }

    #[test]
    fn test_printable() {
        let mut out = Capture::new();
        assert_eq!(out.println_printable(&Celsius(-3)), 6);
        out.print_printable("plain");
        let mut s: heapless::String<8> = heapless::String::new();
        s.push_str("+hs").unwrap();
        out.print_printable(&s);
        assert_eq!(&out[..], b"-3 C\r\nplain+hs");
    }

    #[test]
    fn test_print_fmt() {
        let mut out = Capture::new();
        let n = out.print_fmt(format_args!("{}:{:02}", 4, 7));
        assert_eq!(n, 4);
        out.println_fmt(format_args!("{:>3}", "z"));
        assert_eq!(&out[..], b"4:07  z\r\n");
    }

    #[test]
    fn test_short_count_on_refusing_sink() {
        let mut sink = Limited {
            accepted: 0,
            limit: 3,
        };
        assert_eq!(sink.print_u64(123456, Base::DEC), 3);
        assert_eq!(sink.println(), 0);
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn emit<P: Print>(mut sink: P) -> usize {
            sink.print_uint(255u8, Base::OCT)
        }

        let mut out = Capture::new();
        assert_eq!(emit(&mut out), 3);
        assert_eq!(&out[..], b"377");
    }
}
