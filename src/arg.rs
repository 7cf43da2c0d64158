//! Typed arguments and the rules for fetching them at the width a directive
//! asks for.
//!
//! Widths follow the C types of the target (`core::ffi`), so `%d`, `%ld` and
//! `%lld` keep the meaning they have on the platform the firmware runs on.

use core::ffi::{c_int, c_long, c_longlong, c_uint, c_ulong, c_ulonglong, CStr};

use crate::directive::WidthModifier;

/// Native magnitude handled by the numeric renderer.
pub type Word = c_ulong;
/// Magnitude of the wide renderer, used for `ll` when the `wide` feature is on.
pub type WideWord = c_ulonglong;

/// One formatting argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Int(c_int),
    UInt(c_uint),
    Long(c_long),
    ULong(c_ulong),
    LongLong(c_longlong),
    ULongLong(c_ulonglong),
    Double(f64),
    /// Pointer address, for `%p`.
    Ptr(usize),
    /// Bytes for `%s`, read up to the first NUL or the end of the slice.
    Str(&'a [u8]),
}

/// An integer argument reduced to magnitude and sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integer {
    Native { magnitude: Word, negative: bool },
    #[cfg(feature = "wide")]
    Wide { magnitude: WideWord, negative: bool },
}

impl<'a> Arg<'a> {
    /// Raw bit pattern, sign-extended to 64 bits for signed kinds.
    fn bits(&self) -> u64 {
        match *self {
            Arg::Int(v) => v as i64 as u64,
            Arg::UInt(v) => v as u64,
            Arg::Long(v) => v as i64 as u64,
            Arg::ULong(v) => v as u64,
            Arg::LongLong(v) => v as i64 as u64,
            Arg::ULongLong(v) => v as u64,
            Arg::Double(v) => v as i64 as u64,
            Arg::Ptr(v) => v as u64,
            Arg::Str(s) => s.as_ptr() as usize as u64,
        }
    }

    /// Fetches the argument as an integer of the width `modifier` selects.
    ///
    /// The value is first narrowed to `int`, `long` or `long long`, which
    /// sign-extends it for signed conversions and zero-extends it otherwise.
    /// Without the `wide` feature `ll` is fetched as `l`.
    pub fn integer(&self, modifier: WidthModifier, signed: bool) -> Integer {
        let bits = self.bits();
        match modifier {
            #[cfg(feature = "wide")]
            WidthModifier::LongLong => {
                if signed {
                    let v = bits as c_longlong;
                    Integer::Wide {
                        magnitude: v.unsigned_abs() as WideWord,
                        negative: v < 0,
                    }
                } else {
                    Integer::Wide {
                        magnitude: bits as c_ulonglong,
                        negative: false,
                    }
                }
            }
            #[cfg(not(feature = "wide"))]
            WidthModifier::LongLong => native(bits as c_long, bits as c_ulong, signed),
            WidthModifier::Long => native(bits as c_long, bits as c_ulong, signed),
            WidthModifier::Default => native(bits as c_int as c_long, bits as c_uint as c_ulong, signed),
        }
    }

    /// `%c` takes the low byte of the `int`-promoted value.
    pub fn byte(&self) -> u8 {
        self.bits() as c_int as u8
    }

    /// `%f` always fetches a double.
    pub fn double(&self) -> f64 {
        match *self {
            Arg::Int(v) => v as f64,
            Arg::UInt(v) => v as f64,
            Arg::Long(v) => v as f64,
            Arg::ULong(v) => v as f64,
            Arg::LongLong(v) => v as f64,
            Arg::ULongLong(v) => v as f64,
            Arg::Double(v) => v,
            Arg::Ptr(v) => v as f64,
            Arg::Str(_) => 0.0,
        }
    }

    /// `%s` bytes, without the terminator. Non-string arguments have none.
    pub fn c_str(&self) -> &'a [u8] {
        match *self {
            Arg::Str(s) => {
                let end = s.iter().position(|&b| b == 0).unwrap_or(s.len());
                &s[..end]
            }
            _ => &[],
        }
    }
}

#[inline]
fn native(signed_value: c_long, unsigned_value: c_ulong, signed: bool) -> Integer {
    if signed {
        Integer::Native {
            magnitude: signed_value.unsigned_abs() as Word,
            negative: signed_value < 0,
        }
    } else {
        Integer::Native {
            magnitude: unsigned_value,
            negative: false,
        }
    }
}

macro_rules! impl_from {
    ($($t:ty => $variant:ident as $c:ty),* $(,)?) => {$(
        impl From<$t> for Arg<'_> {
            #[inline]
            fn from(v: $t) -> Self {
                Arg::$variant(v as $c)
            }
        }
    )*};
}

impl_from! {
    i8 => Int as c_int,
    i16 => Int as c_int,
    i32 => Int as c_int,
    u8 => UInt as c_uint,
    u16 => UInt as c_uint,
    u32 => UInt as c_uint,
    i64 => LongLong as c_longlong,
    u64 => ULongLong as c_ulonglong,
    isize => LongLong as c_longlong,
    usize => ULongLong as c_ulonglong,
    f32 => Double as f64,
    f64 => Double as f64,
    char => Int as c_int,
}

/// Values `%s` accepts.
pub trait StrArg<'a> {
    fn c_bytes(self) -> &'a [u8];
}

impl<'a> StrArg<'a> for &'a [u8] {
    #[inline]
    fn c_bytes(self) -> &'a [u8] {
        self
    }
}

impl<'a, const N: usize> StrArg<'a> for &'a [u8; N] {
    #[inline]
    fn c_bytes(self) -> &'a [u8] {
        self
    }
}

impl<'a> StrArg<'a> for &'a str {
    #[inline]
    fn c_bytes(self) -> &'a [u8] {
        self.as_bytes()
    }
}

impl<'a> StrArg<'a> for &'a CStr {
    #[inline]
    fn c_bytes(self) -> &'a [u8] {
        self.to_bytes()
    }
}

/// Values `%p` accepts: references, raw pointers and plain addresses.
pub trait PointerArg {
    fn address(self) -> usize;
}

impl<T: ?Sized> PointerArg for &T {
    #[inline]
    fn address(self) -> usize {
        (self as *const T).cast::<u8>() as usize
    }
}

impl<T: ?Sized> PointerArg for &mut T {
    #[inline]
    fn address(self) -> usize {
        (self as *const T).cast::<u8>() as usize
    }
}

impl<T: ?Sized> PointerArg for *const T {
    #[inline]
    fn address(self) -> usize {
        self.cast::<u8>() as usize
    }
}

impl<T: ?Sized> PointerArg for *mut T {
    #[inline]
    fn address(self) -> usize {
        self.cast::<u8>() as usize
    }
}

impl PointerArg for usize {
    #[inline]
    fn address(self) -> usize {
        self
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(s: &'a [u8]) -> Self {
        Arg::Str(s)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        Arg::Str(s)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s.c_bytes())
    }
}

impl<'a> From<&'a CStr> for Arg<'a> {
    fn from(s: &'a CStr) -> Self {
        Arg::Str(s.c_bytes())
    }
}

impl<T> From<*const T> for Arg<'_> {
    fn from(p: *const T) -> Self {
        Arg::Ptr(p.address())
    }
}

impl<T> From<*mut T> for Arg<'_> {
    fn from(p: *mut T) -> Self {
        Arg::Ptr(p.address())
    }
}
