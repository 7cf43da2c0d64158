//! The formatting loop: scan, fetch, render, emit.

use crate::arg::{Arg, Integer};
use crate::directive::{Conversion, Directive, Scanner, Token};
use crate::float::write_float;
use crate::num::write_unsigned;
use crate::sink::Sink;

/// Formats `format` with `args` into `sink`, one byte per `Sink::write`.
///
/// There is no error channel. Unrecognized conversions are echoed, a
/// directive with no argument left renders nothing, and arguments of the
/// wrong kind are reinterpreted on a best-effort basis (see [`Arg`]). Extra
/// arguments are ignored. Output stops at the first NUL in `format`.
pub fn vprintf<S: Sink + ?Sized>(sink: &mut S, format: &[u8], args: &[Arg<'_>]) {
    let mut args = args.iter();
    for token in Scanner::new(format) {
        match token {
            Token::Literal(bytes) => sink.write_bytes(bytes),
            Token::Directive(d) => {
                if let Conversion::Literal(c) = d.conversion {
                    log::trace!(target: "ioprintf", "unrecognized conversion {:?}", c as char);
                    sink.write(c);
                    continue;
                }
                match args.next() {
                    Some(arg) => write_directive(sink, &d, arg),
                    None => log::trace!(target: "ioprintf", "no argument left for {:?}", d.conversion),
                }
            }
        }
    }
}

fn write_directive<S: Sink + ?Sized>(sink: &mut S, d: &Directive, arg: &Arg<'_>) {
    match d.conversion {
        Conversion::Char => sink.write(arg.byte()),
        Conversion::Str => sink.write_bytes(arg.c_str()),
        Conversion::Float => write_float(sink, arg.double(), d.width, d.precision, d.fill),
        Conversion::Pointer => {
            sink.write(b'0');
            sink.write(b'x');
            write_integer(sink, &d.pointer(), arg);
        }
        Conversion::Signed | Conversion::Unsigned | Conversion::Hex | Conversion::Binary => {
            write_integer(sink, d, arg)
        }
        Conversion::Literal(c) => sink.write(c),
    }
}

fn write_integer<S: Sink + ?Sized>(sink: &mut S, d: &Directive, arg: &Arg<'_>) {
    let base = d.conversion.base();
    match arg.integer(d.modifier, d.conversion.is_signed()) {
        Integer::Native { magnitude, negative } => {
            write_unsigned(sink, magnitude, base, d.width, d.fill, negative)
        }
        #[cfg(feature = "wide")]
        Integer::Wide { magnitude, negative } => {
            write_unsigned(sink, magnitude, base, d.width, d.fill, negative)
        }
    }
}
