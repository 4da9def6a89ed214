//! Approximate floating point rendering
//!
//! Small and cheap, not accurate. The value is biased by half a unit in the
//! last requested place, the integer part goes through the integer printer,
//! then each decimal is peeled off by multiplying the remainder by ten.
//! Results can differ from a correctly rounded formatter in the last digit,
//! and values near the `i64` range are refused outright.
//!
//! See Steele & White, "How to Print Floating-Point Numbers Accurately" for
//! what a correct implementation involves.

use super::{Base, Print};

/// Magnitudes at or above this print as `<large double>`
///
/// Kept below `i64::MAX` (about 9.22e18) so the integer part always fits.
pub const LARGE_DOUBLE_THRESHOLD: f64 = 9.1e18;

const LARGE_DOUBLE_TEXT: &str = "<large double>";

pub(crate) fn print_float<P: Print + ?Sized>(out: &mut P, number: f64, digits: u8) -> usize {
    let mut count = 0;

    if number >= LARGE_DOUBLE_THRESHOLD || number <= -LARGE_DOUBLE_THRESHOLD {
        if number < 0.0 {
            count += out.write_byte(b'-');
        }
        return count + out.write_str(LARGE_DOUBLE_TEXT);
    }

    let mut number = number;
    if number < 0.0 {
        count += out.write_byte(b'-');
        number = -number;
    }

    // Round half up: print(1.999, 2) gives "2.00"
    let mut rounding = 0.5;
    for _ in 0..digits {
        rounding /= 10.0;
    }
    number += rounding;

    let int_part = number as i64;
    let mut remainder = number - int_part as f64;
    count += out.print_i64(int_part, Base::DEC);

    if digits > 0 {
        count += out.write_byte(b'.');
    }

    for _ in 0..digits {
        remainder *= 10.0;
        let digit = remainder as i64;
        count += out.print_i64(digit, Base::DEC);
        remainder -= digit as f64;
    }

    count
}
