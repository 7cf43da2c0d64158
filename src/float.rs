//! Fixed-point rendering of doubles.
//!
//! Rounding is half-up at the requested precision by adding
//! `0.5 / 10^precision` before truncating, so inputs whose binary value sits
//! just under a rounding boundary may round down (`2.005` gives `2.00`).
//! NaN, infinities and integer parts that do not fit the native word are not
//! handled specially; float to integer casts saturate.

use crate::arg::Word;
use crate::num::{write_unsigned, Base};
use crate::sink::Sink;

/// `10^n` by repeated multiplication; `core` has no `powi`.
fn pow10(n: u8) -> f64 {
    let mut p = 1.0_f64;
    for _ in 0..n {
        p *= 10.0;
    }
    p
}

/// Renders `value` as `[-]int.frac` with `precision` fractional digits.
///
/// `width` covers the whole field: the integer part is padded with `fill` to
/// `width - precision - 1` columns, the fraction is always zero padded.
#[inline(never)]
pub fn write_float<S: Sink + ?Sized>(sink: &mut S, value: f64, width: u8, precision: u8, fill: u8) {
    let (mut magnitude, negative) = if value < 0.0 { (-value, true) } else { (value, false) };

    let scale = pow10(precision);
    magnitude += 0.5 / scale;

    let int_width = width.saturating_sub(precision).saturating_sub(1);
    let integer = magnitude as Word;
    write_unsigned(sink, integer, Base::Decimal, int_width, fill, negative);

    sink.write(b'.');

    let fraction = ((magnitude - integer as f64) * scale) as Word;
    write_unsigned(sink, fraction, Base::Decimal, precision, b'0', false);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sink::BufSink;

    macro_rules! assert_float {
        ($v:expr, $width:expr, $prec:expr, $fill:expr, $expected:expr) => {{
            let mut out = [0_u8; 64];
            let mut sink = BufSink::new(&mut out);
            write_float(&mut sink, $v, $width, $prec, $fill);
            assert_eq!(
                core::str::from_utf8(sink.as_bytes()).unwrap(),
                $expected,
                "value {} width {} precision {}",
                $v,
                $width,
                $prec
            );
        }};
    }

    #[test]
    fn pow10_small() {
        assert_eq!(pow10(0), 1.0);
        assert_eq!(pow10(3), 1000.0);
        assert_eq!(pow10(9), 1e9);
    }

    #[test]
    fn basic() {
        assert_float!(3.14159, 0, 2, b' ', "3.14");
        assert_float!(123.456, 0, 3, b' ', "123.456");
        assert_float!(0.125, 0, 2, b' ', "0.13");
    }

    #[test]
    fn negative() {
        assert_float!(-3.14159, 0, 2, b' ', "-3.14");
        assert_float!(-0.5, 0, 1, b' ', "-0.5");
    }

    #[test]
    fn rounding_bias_fixtures() {
        // 2.005 is stored as 2.00499999..., the bias lands exactly on 2.01 and
        // the fraction (2.01 - 2) * 100 truncates to 0.
        assert_float!(2.005, 0, 2, b' ', "2.00");
        assert_float!(1.005, 0, 2, b' ', "1.00");
        assert_float!(2.675, 0, 2, b' ', "2.67");
        assert_float!(9.999, 0, 2, b' ', "10.00");
    }

    #[test]
    fn zero_precision_still_has_a_fraction_digit() {
        assert_float!(1.5, 0, 0, b' ', "2.0");
        assert_float!(3.7, 0, 0, b' ', "4.0");
    }

    #[test]
    fn width_reserves_fraction_and_point() {
        assert_float!(3.14159, 8, 2, b' ', "    3.14");
        assert_float!(3.14159, 8, 2, b'0', "00003.14");
        assert_float!(-3.14159, 8, 2, b' ', "   -3.14");
        // Width smaller than fraction plus point leaves the integer unpadded.
        assert_float!(3.14159, 2, 2, b' ', "3.14");
    }

    #[test]
    fn fraction_always_zero_padded() {
        assert_float!(1.05, 0, 2, b' ', "1.05");
        assert_float!(7.0, 0, 3, b' ', "7.000");
    }
}
