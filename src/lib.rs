//! ioprintf - printf-style output straight into a byte sink
//!
//! # Design objective:
//! 1. No allocation, no `core::fmt`: digits are built in a small stack
//!    scratch buffer and handed to the sink one byte at a time, so the
//!    target can be a UART data register or any other byte port.
//! 2. The classic embedded printf subset, nothing more:
//!
//! ```text
//! '%' ['0'] [width 0-9] ['.' precision 0-9] ['l'] ['l'] conversion
//! ```
//!
//! | conversion | output |
//! |---|---|
//! | `c` | one byte |
//! | `s` | bytes up to NUL, width and fill ignored |
//! | `f` | fixed point, `precision` fractional digits, rounded half up |
//! | `d` / `u` | signed / unsigned decimal |
//! | `x` | hexadecimal, uppercase digits |
//! | `b` | binary |
//! | `p` | `0x` and the zero-padded address |
//! | other | the byte itself, no argument consumed |
//!
//! 3. Never fails. Malformed directives degrade to literal output and a
//!    missing argument renders nothing; the `printf!` family checks argument
//!    count and kinds at compile time so that does not happen by accident.
//!
//! # Examples
//!
//! ```rust
//! let mut buf = [0_u8; 64];
//! let n = ioprintf::bprintf!(&mut buf, "%s: %5d 0x%04x %.2f", "adc", -17, 0xBEEF_u32, 3.14159);
//! assert_eq!(&buf[..n], b"adc:   -17 0xBEEF 3.14");
//!
//! let mut uart = ioprintf::FnSink(|_byte: u8| { /* write data register */ });
//! ioprintf::printfln!(&mut uart, "boot %u ms", 42_u32);
//! ```
//!
//! # Features
//!
//! `wide` (default): `ll` directives use a 64-bit renderer. Without it `ll`
//! is fetched and rendered as `l`, as on 8-bit targets.

#![no_std]

extern crate self as ioprintf;

pub mod arg;
pub mod directive;
pub mod float;
pub mod logger;
pub mod num;
pub mod printf;
pub mod sink;
pub mod stream;

pub use arg::Arg;
pub use directive::{Conversion, Directive, Scanner, Token, WidthModifier};
pub use logger::StreamLogger;
pub use num::Base;
pub use printf::vprintf;
pub use sink::{BufSink, FnSink, Sink, SinkWriter};
pub use stream::IoStream;

pub use ioprintf_macros::{bprintf, printf, printfln};

/// Whether `ll` directives get the wide renderer in this build.
pub const WIDE: bool = cfg!(feature = "wide");

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn macros_resolve_inside_the_crate() {
        let mut buf = [0_u8; 16];
        let n = bprintf!(&mut buf, "%d%c", 4, b'2');
        assert_eq!(&buf[..n], b"42");

        let mut sink = BufSink::new(&mut buf);
        printf!(&mut sink, "%x", 171);
        assert_eq!(sink.as_bytes(), b"AB");
    }

    #[test]
    fn wide_flag_matches_feature() {
        assert_eq!(WIDE, cfg!(feature = "wide"));
    }
}
