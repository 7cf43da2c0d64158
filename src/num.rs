//! Unsigned magnitude to digits, with sign and padding.

use crate::sink::Sink;

/// Numeric base of an integer conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Base {
    Binary = 2,
    Decimal = 10,
    Hex = 16,
}

/// An unsigned integer the renderer can take apart digit by digit.
pub trait Magnitude: Copy {
    /// Returns `(self / base, self % base)`.
    fn div_rem(self, base: u8) -> (Self, u8);
    fn is_zero(self) -> bool;
}

macro_rules! impl_magnitude {
    ($($t:ty),*) => {$(
        impl Magnitude for $t {
            #[inline]
            fn div_rem(self, base: u8) -> (Self, u8) {
                let base = base as $t;
                (self / base, (self % base) as u8)
            }
            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }
        }
    )*};
}

impl_magnitude!(u32, u64);

/// 64 binary digits and a sign. Padding never pushes the total past the
/// requested width, so widths are clamped to this.
pub const SCRATCH_LEN: usize = 66;

/// Digits are built backwards from the end.
struct Scratch {
    buf: [u8; SCRATCH_LEN],
    pos: usize,
}

impl Scratch {
    #[inline]
    fn new() -> Self {
        Self {
            buf: [0; SCRATCH_LEN],
            pos: SCRATCH_LEN,
        }
    }

    #[inline]
    fn push_front(&mut self, b: u8) {
        debug_assert!(self.pos > 0, "numeric scratch overflow");
        if self.pos > 0 {
            self.pos -= 1;
            self.buf[self.pos] = b;
        }
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.buf[self.pos..]
    }
}

#[inline]
fn digit(d: u8) -> u8 {
    if d < 10 {
        b'0' + d
    } else {
        b'A' + (d - 10)
    }
}

/// Renders `magnitude` right-aligned in a field of `width` columns.
///
/// Order of construction is digits, then `-` when `negative`, then `fill`
/// until the width is used up. Each step only spends width that is left, so
/// a number wider than the field is never cut. Zero renders as one digit.
#[inline(never)]
pub fn write_unsigned<S, M>(sink: &mut S, magnitude: M, base: Base, width: u8, fill: u8, negative: bool)
where
    S: Sink + ?Sized,
    M: Magnitude,
{
    let mut scratch = Scratch::new();
    let mut width = (width as usize).min(SCRATCH_LEN);
    let mut value = magnitude;
    loop {
        let (rest, d) = value.div_rem(base as u8);
        scratch.push_front(digit(d));
        value = rest;
        width = width.saturating_sub(1);
        if value.is_zero() {
            break;
        }
    }
    if negative {
        scratch.push_front(b'-');
        width = width.saturating_sub(1);
    }
    for _ in 0..width {
        scratch.push_front(fill);
    }
    for &b in scratch.as_bytes() {
        sink.write(b);
    }
}
