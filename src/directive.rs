//! Format directives and the scanner that splits a format string into
//! literal runs and directives.
//!
//! Grammar, left to right, everything but the conversion byte optional:
//!
//! ```text
//! '%' ['0'] [width 0-9] ['.' precision 0-9] ['l'] ['l'] conversion
//! ```

use crate::num::Base;

/// Which rendering path a directive takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `c`
    Char,
    /// `s`
    Str,
    /// `d`
    Signed,
    /// `u`
    Unsigned,
    /// `x`
    Hex,
    /// `b`
    Binary,
    /// `p`
    Pointer,
    /// `f`
    Float,
    /// Anything else. The byte is echoed and no argument is consumed.
    Literal(u8),
}

impl Conversion {
    pub fn from_byte(c: u8) -> Self {
        match c {
            b'c' => Conversion::Char,
            b's' => Conversion::Str,
            b'd' => Conversion::Signed,
            b'u' => Conversion::Unsigned,
            b'x' => Conversion::Hex,
            b'b' => Conversion::Binary,
            b'p' => Conversion::Pointer,
            b'f' => Conversion::Float,
            other => Conversion::Literal(other),
        }
    }

    pub fn base(self) -> Base {
        match self {
            Conversion::Hex | Conversion::Pointer => Base::Hex,
            Conversion::Binary => Base::Binary,
            _ => Base::Decimal,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, Conversion::Signed)
    }
}

/// Length modifier: `l` and `ll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthModifier {
    #[default]
    Default,
    Long,
    LongLong,
}

/// One parsed `%` conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub conversion: Conversion,
    pub modifier: WidthModifier,
    /// Minimum output width, 0 for none.
    pub width: u8,
    /// Digits after the decimal point, `f` only.
    pub precision: u8,
    /// `b' '` or `b'0'`.
    pub fill: u8,
}

impl Directive {
    pub const fn new(conversion: Conversion) -> Self {
        Self {
            conversion,
            modifier: WidthModifier::Default,
            width: 0,
            precision: 0,
            fill: b' ',
        }
    }

    /// `p` overrides: zero fill, two hex digits per pointer byte and the
    /// integer width that matches a pointer.
    pub fn pointer(self) -> Self {
        const PTR_BYTES: usize = core::mem::size_of::<usize>();
        let modifier = match PTR_BYTES {
            8 => WidthModifier::LongLong,
            4 => WidthModifier::Long,
            _ => WidthModifier::Default,
        };
        Self {
            modifier,
            width: (PTR_BYTES * 2) as u8,
            fill: b'0',
            ..self
        }
    }
}

/// A piece of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'f> {
    /// Bytes copied to the sink as they are.
    Literal(&'f [u8]),
    Directive(Directive),
}

/// Walks a format string. The string ends at the first NUL byte or at the
/// end of the slice; a directive cut short by that end is dropped.
pub struct Scanner<'f> {
    fmt: &'f [u8],
    pos: usize,
}

impl<'f> Scanner<'f> {
    pub fn new(fmt: &'f [u8]) -> Self {
        let end = fmt.iter().position(|&b| b == 0).unwrap_or(fmt.len());
        Self {
            fmt: &fmt[..end],
            pos: 0,
        }
    }

    #[inline]
    fn next_byte(&mut self) -> Option<u8> {
        let c = *self.fmt.get(self.pos)?;
        self.pos += 1;
        Some(c)
    }

    fn directive(&mut self) -> Option<Directive> {
        let mut d = Directive::new(Conversion::Literal(b'%'));
        let mut c = self.next_byte()?;
        if c == b'0' {
            d.fill = b'0';
            c = self.next_byte()?;
        }
        if c.is_ascii_digit() {
            d.width = c - b'0';
            c = self.next_byte()?;
        }
        if c == b'.' {
            // The byte after '.' is always consumed, digit or not.
            c = self.next_byte()?;
            if c.is_ascii_digit() {
                d.precision = c - b'0';
            }
            c = self.next_byte()?;
        }
        if c == b'l' {
            d.modifier = WidthModifier::Long;
            c = self.next_byte()?;
            if c == b'l' {
                d.modifier = WidthModifier::LongLong;
                c = self.next_byte()?;
            }
        }
        d.conversion = Conversion::from_byte(c);
        Some(d)
    }
}

impl<'f> Iterator for Scanner<'f> {
    type Item = Token<'f>;

    fn next(&mut self) -> Option<Token<'f>> {
        let fmt = self.fmt;
        let rest = &fmt[self.pos..];
        match rest.iter().position(|&b| b == b'%') {
            Some(0) => {
                self.pos += 1;
                let d = self.directive();
                if d.is_none() {
                    self.pos = self.fmt.len();
                }
                d.map(Token::Directive)
            }
            Some(n) => {
                self.pos += n;
                Some(Token::Literal(&rest[..n]))
            }
            None if rest.is_empty() => None,
            None => {
                self.pos = self.fmt.len();
                Some(Token::Literal(rest))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    extern crate std;
    use std::vec::Vec;

    fn tokens(fmt: &[u8]) -> Vec<Token<'_>> {
        Scanner::new(fmt).collect()
    }

    fn single(fmt: &[u8]) -> Directive {
        match tokens(fmt).as_slice() {
            [Token::Directive(d)] => *d,
            other => panic!("expected one directive, got {:?}", other),
        }
    }

    #[test]
    fn splits_literals_and_directives() {
        let t = tokens(b"a=%d, b=%s!");
        assert_eq!(t.len(), 5);
        assert_eq!(t[0], Token::Literal(b"a="));
        assert!(matches!(t[1], Token::Directive(d) if d.conversion == Conversion::Signed));
        assert_eq!(t[2], Token::Literal(b", b="));
        assert!(matches!(t[3], Token::Directive(d) if d.conversion == Conversion::Str));
        assert_eq!(t[4], Token::Literal(b"!"));
    }

    #[test]
    fn parses_fill_width_precision() {
        let d = single(b"%08.3f");
        assert_eq!(d.fill, b'0');
        assert_eq!(d.width, 8);
        assert_eq!(d.precision, 3);
        assert_eq!(d.conversion, Conversion::Float);

        let d = single(b"%5u");
        assert_eq!(d.fill, b' ');
        assert_eq!(d.width, 5);
        assert_eq!(d.precision, 0);
    }

    #[test]
    fn zero_alone_is_fill_not_width() {
        let d = single(b"%0x");
        assert_eq!(d.fill, b'0');
        assert_eq!(d.width, 0);
        assert_eq!(d.conversion, Conversion::Hex);
    }

    #[test]
    fn length_modifiers() {
        assert_eq!(single(b"%d").modifier, WidthModifier::Default);
        assert_eq!(single(b"%ld").modifier, WidthModifier::Long);
        assert_eq!(single(b"%llu").modifier, WidthModifier::LongLong);
        assert_eq!(single(b"%3lx").width, 3);
    }

    #[test]
    fn dot_always_eats_one_byte() {
        // "%.xd": 'x' is swallowed as a (non-digit) precision.
        let d = single(b"%.xd");
        assert_eq!(d.precision, 0);
        assert_eq!(d.conversion, Conversion::Signed);
    }

    #[test]
    fn unknown_conversion_is_literal() {
        assert_eq!(single(b"%z").conversion, Conversion::Literal(b'z'));
        assert_eq!(single(b"%%").conversion, Conversion::Literal(b'%'));
        assert_eq!(single(b"%5z").conversion, Conversion::Literal(b'z'));
    }

    #[test]
    fn truncated_directive_ends_scan() {
        assert_eq!(tokens(b"abc%"), [Token::Literal(b"abc")]);
        assert_eq!(tokens(b"abc%0"), [Token::Literal(b"abc")]);
        assert!(tokens(b"%5.2l").is_empty());
    }

    #[test]
    fn stops_at_nul() {
        assert_eq!(tokens(b"hi\0%d"), [Token::Literal(b"hi")]);
        assert!(tokens(b"%\0d").is_empty());
    }

    #[test]
    fn pointer_overrides() {
        let d = single(b"%3p").pointer();
        assert_eq!(d.fill, b'0');
        assert_eq!(d.width as usize, core::mem::size_of::<usize>() * 2);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(d.modifier, WidthModifier::LongLong);
        #[cfg(target_pointer_width = "32")]
        assert_eq!(d.modifier, WidthModifier::Long);
    }

    #[test]
    fn bases() {
        assert_eq!(Conversion::Hex.base(), Base::Hex);
        assert_eq!(Conversion::Pointer.base(), Base::Hex);
        assert_eq!(Conversion::Binary.base(), Base::Binary);
        assert_eq!(Conversion::Unsigned.base(), Base::Decimal);
        assert!(Conversion::Signed.is_signed());
        assert!(!Conversion::Unsigned.is_signed());
    }
}
