//! Minimal runtime format strings
//!
//! A deliberately small `printf`: directives `%s %d %x %X %u %c %%`, the
//! `-` (left-justify) and `0` (zero-fill) flags and a decimal field width.
//! Integers follow 32-bit C promotion, so `%x`, `%X` and `%u` reinterpret a
//! negative `Int` as `u32`.
//!
//! Any other character after the flags and width is consumed without
//! output and without consuming an argument. A lone `%` at the very end of
//! the format string stops processing.
//!
//! ```ignore
//! let mut buf = [0u8; 16];
//! let n = sprintf(&mut buf, "%05d|%-3s|", &[Arg::Int(-3), Arg::from("ab")]);
//! assert_eq!(&buf[..n], b"-0003|ab |");
//! assert_eq!(buf[n], 0);
//! ```

use super::{Print, SliceSink};

/// Enough for a sign and the ten decimal digits of a 32-bit value
const INT_BUF_LEN: usize = 12;

const NULL_TEXT: &[u8] = b"(null)";

/// A format argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Signed integer (`%d`, or reinterpreted by `%x %X %u`)
    Int(i32),
    /// Unsigned integer
    Uint(u32),
    /// Single byte for `%c`
    Char(u8),
    /// String for `%s`; `None` prints `(null)`
    Str(Option<&'a str>),
}

impl Arg<'_> {
    /// Integer view of the argument, as a C varargs `int` would read it
    fn as_i32(self) -> i32 {
        match self {
            Arg::Int(n) => n,
            Arg::Uint(n) => n as i32,
            Arg::Char(c) => i32::from(c),
            Arg::Str(_) => 0,
        }
    }
}

impl From<i32> for Arg<'_> {
    fn from(n: i32) -> Self {
        Arg::Int(n)
    }
}

impl From<u32> for Arg<'_> {
    fn from(n: u32) -> Self {
        Arg::Uint(n)
    }
}

impl From<u8> for Arg<'_> {
    fn from(c: u8) -> Self {
        Arg::Char(c)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(Some(s))
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(s: Option<&'a str>) -> Self {
        Arg::Str(s)
    }
}

/// Widest field a directive can request; longer width prefixes are capped
pub const MAX_FIELD_WIDTH: usize = 255;

/// Flags and width parsed from one directive
#[derive(Debug, Clone, Copy, Default)]
struct FieldSpec {
    width: usize,
    left: bool,
    zero: bool,
}

/// Format into a caller-sized buffer, always NUL-terminated
///
/// Output that does not fit is dropped; the buffer still ends in a NUL.
/// Returns the number of characters the format produced, which exceeds
/// the bytes stored when the buffer was too small.
pub fn sprintf(buf: &mut [u8], format: &str, args: &[Arg<'_>]) -> usize {
    let mut sink = SliceSink::new(buf);
    let count = render(&mut sink, format, args);
    sink.terminate();
    count
}

/// Run the format engine against any sink
pub(crate) fn render<P: Print + ?Sized>(out: &mut P, format: &str, args: &[Arg<'_>]) -> usize {
    let mut args = args.iter().copied();
    let mut chars = format.bytes();
    let mut count = 0;

    'directives: while let Some(byte) = chars.next() {
        if byte != b'%' {
            out.write_byte(byte);
            count += 1;
            continue;
        }

        let Some(mut c) = chars.next() else { break 'directives };
        if c == b'%' {
            out.write_byte(b'%');
            count += 1;
            continue;
        }

        let mut spec = FieldSpec::default();
        if c == b'-' {
            spec.left = true;
            let Some(next) = chars.next() else { break 'directives };
            c = next;
        }
        while c == b'0' {
            spec.zero = true;
            let Some(next) = chars.next() else { break 'directives };
            c = next;
        }
        while c.is_ascii_digit() {
            spec.width = spec
                .width
                .saturating_mul(10)
                .saturating_add(usize::from(c - b'0'))
                .min(MAX_FIELD_WIDTH);
            let Some(next) = chars.next() else { break 'directives };
            c = next;
        }

        count += match c {
            b's' => match args.next() {
                Some(Arg::Str(Some(s))) => pad(out, s.as_bytes(), spec),
                Some(_) => pad(out, NULL_TEXT, spec),
                None => 0,
            },
            b'd' => args.next().map_or(0, |arg| {
                print_integer(out, arg.as_i32(), 10, true, spec, b'a')
            }),
            b'x' => args.next().map_or(0, |arg| {
                print_integer(out, arg.as_i32(), 16, false, spec, b'a')
            }),
            b'X' => args.next().map_or(0, |arg| {
                print_integer(out, arg.as_i32(), 16, false, spec, b'A')
            }),
            b'u' => args.next().map_or(0, |arg| {
                print_integer(out, arg.as_i32(), 10, false, spec, b'a')
            }),
            b'c' => args.next().map_or(0, |arg| {
                let byte = [arg.as_i32() as u8];
                // A NUL char is an empty string to the padder
                let len = usize::from(byte[0] != 0);
                pad(out, &byte[..len], spec)
            }),
            _ => 0,
        };
    }

    count
}

/// Emit `text` padded to the field width
fn pad<P: Print + ?Sized>(out: &mut P, text: &[u8], spec: FieldSpec) -> usize {
    let fill_byte = if spec.zero { b'0' } else { b' ' };
    let fill = spec.width.saturating_sub(text.len());

    if !spec.left {
        fill_with(out, fill_byte, fill);
    }
    for &b in text {
        out.write_byte(b);
    }
    if spec.left {
        fill_with(out, fill_byte, fill);
    }

    fill + text.len()
}

fn fill_with<P: Print + ?Sized>(out: &mut P, byte: u8, n: usize) {
    for _ in 0..n {
        out.write_byte(byte);
    }
}

fn print_integer<P: Print + ?Sized>(
    out: &mut P,
    value: i32,
    radix: u32,
    signed: bool,
    mut spec: FieldSpec,
    letter_base: u8,
) -> usize {
    if value == 0 {
        return pad(out, b"0", spec);
    }

    let negative = signed && radix == 10 && value < 0;
    let mut magnitude = if negative {
        value.wrapping_neg() as u32
    } else {
        value as u32
    };

    let mut buf = [0u8; INT_BUF_LEN];
    let mut start = INT_BUF_LEN;
    while magnitude != 0 {
        let digit = (magnitude % radix) as u8;
        start -= 1;
        buf[start] = if digit >= 10 {
            letter_base + digit - 10
        } else {
            b'0' + digit
        };
        magnitude /= radix;
    }

    let mut count = 0;
    if negative {
        if spec.width > 0 && spec.zero {
            // Sign goes before the zero fill
            out.write_byte(b'-');
            count += 1;
            spec.width -= 1;
        } else {
            start -= 1;
            buf[start] = b'-';
        }
    }

    count + pad(out, &buf[start..], spec)
}
