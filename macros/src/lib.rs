//!
//! ioprintf-macros
//! Compile-time front-end for `ioprintf::vprintf`: the format literal is
//! scanned with the same grammar as the runtime, the argument count is
//! checked, and every argument is wrapped in the `ioprintf::Arg` kind its
//! directive fetches.
//!

extern crate proc_macro;
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse_macro_input,
    Expr, LitByteStr, LitStr, Token,
    parse::{self, Parse, ParseStream },
    punctuated::Punctuated,
};

/// `printf!(sink, "format", args...)` where `sink` is a `&mut impl Sink`.
#[proc_macro]
pub fn printf(input: TokenStream) -> TokenStream {
    sink_printf(input, false)
}

/// Like `printf!` with a trailing `\n`.
#[proc_macro]
pub fn printfln(input: TokenStream) -> TokenStream {
    sink_printf(input, true)
}

/// `bprintf!(buf, "format", args...)` formats into `buf: &mut [u8]`,
/// dropping what does not fit, and evaluates to the number of bytes stored.
#[proc_macro]
pub fn bprintf(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as SinkInput);
    let format = input.input.format.value();
    let buf = &input.sink;
    let ident = syn::Ident::new("__ioprintf_buf", Span::mixed_site());
    ioformat(&format, &input.input, |format, args| {
        let tokens = quote!{{
            let mut #ident = ::ioprintf::BufSink::new(#buf);
            ::ioprintf::vprintf(&mut #ident, #format, &[#(#args),*]);
            #ident.len()
        }};
        tokens.into()
    })
}

fn sink_printf(input: TokenStream, ln: bool) -> TokenStream {
    let input = parse_macro_input!(input as SinkInput);
    let mut format = input.input.format.value();
    if ln {
        format.push('\n');
    }
    let sink = &input.sink;
    ioformat(&format, &input.input, |format, args| {
        let tokens = quote!{ ::ioprintf::vprintf(#sink, #format, &[#(#args),*]) };
        tokens.into()
    })
}

fn ioformat<F>(format: &str, input: &Input, f: F) -> TokenStream
    where F: Fn(&LitByteStr, &Vec<proc_macro2::TokenStream>) -> TokenStream
{
    let span = input.format.span();
    let pieces = match parse(format, span) {
        Err(e) => return e.to_compile_error().into(),
        Ok(pieces) => pieces,
    };

    let argc: usize = input.args.len();
    if argc != pieces.len() {
        return parse::Error::new(span,
            &format!("format string required {} arguments but {} were supplied",
                pieces.len(), argc)).to_compile_error().into();
    }

    let args = pieces.iter().zip(input.args.iter()).map(|(piece, arg)| {
        match piece {
            Piece::Char => quote!(::ioprintf::Arg::Int((#arg) as ::core::ffi::c_int)),
            Piece::Str => quote!(::ioprintf::Arg::Str(::ioprintf::arg::StrArg::c_bytes(#arg))),
            Piece::Float => quote!(::ioprintf::Arg::Double((#arg) as f64)),
            Piece::Pointer => quote!(::ioprintf::Arg::Ptr(::ioprintf::arg::PointerArg::address(#arg))),
            Piece::Signed(Modifier::Default) => quote!(::ioprintf::Arg::Int((#arg) as ::core::ffi::c_int)),
            Piece::Signed(Modifier::Long) => quote!(::ioprintf::Arg::Long((#arg) as ::core::ffi::c_long)),
            Piece::Signed(Modifier::LongLong) => quote!(::ioprintf::Arg::LongLong((#arg) as ::core::ffi::c_longlong)),
            // Through c_longlong first, so `-1` is accepted and keeps its bits.
            Piece::Unsigned(Modifier::Default) => quote!(::ioprintf::Arg::UInt((#arg) as ::core::ffi::c_longlong as ::core::ffi::c_uint)),
            Piece::Unsigned(Modifier::Long) => quote!(::ioprintf::Arg::ULong((#arg) as ::core::ffi::c_longlong as ::core::ffi::c_ulong)),
            Piece::Unsigned(Modifier::LongLong) => quote!(::ioprintf::Arg::ULongLong((#arg) as ::core::ffi::c_longlong as ::core::ffi::c_ulonglong)),
        }
    }).collect::<Vec<_>>();

    let literal = LitByteStr::new(format.as_bytes(), span);
    f(&literal, &args)
}

struct Input {
    format: LitStr,
    _comma: Option<Token![,]>,
    args:   Punctuated<Expr, Token![,]>,
}

impl Parse for Input {
    fn parse(input: ParseStream) -> parse::Result<Self> {
        let format = input.parse()?;
        if input.is_empty() {
            Ok(Input {
                format: format,
                _comma: None,
                args:   Punctuated::new(),
            })
        } else {
            Ok(Input {
                format: format,
                _comma: input.parse()?,
                args:   Punctuated::parse_terminated(input)?,
            })
        }
    }
}

struct SinkInput {
    sink: Expr,
    input: Input,
}

impl Parse for SinkInput {
    fn parse(input: ParseStream) -> parse::Result<Self> {
        let sink = input.parse()?;
        let _: Token![,] = input.parse()?;
        let input = Input::parse(input)?;
        Ok(SinkInput {
            sink: sink,
            input: input,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
    Default,
    Long,
    LongLong,
}

/// A directive that consumes an argument. Unrecognized conversions are
/// echoed by the runtime and take none, so they never show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Char,
    Str,
    Float,
    Pointer,
    Signed(Modifier),
    Unsigned(Modifier),
}

fn parse(format: &str, span: Span) -> parse::Result<Vec<Piece>> {
    const ERR: &str = "invalid format string: ends inside a % directive";
    let mut pieces = vec![];
    let mut bytes = format.bytes().take_while(|&b| b != 0);
    while let Some(b) = bytes.next() {
        if b != b'%' {
            continue;
        }
        let mut next = || bytes.next().ok_or_else(|| parse::Error::new(span, ERR));

        let mut c = next()?;
        if c == b'0' {
            c = next()?;
        }
        if c.is_ascii_digit() {
            c = next()?;
        }
        if c == b'.' {
            next()?;
            c = next()?;
        }
        let mut modifier = Modifier::Default;
        if c == b'l' {
            modifier = Modifier::Long;
            c = next()?;
            if c == b'l' {
                modifier = Modifier::LongLong;
                c = next()?;
            }
        }
        match c {
            b'c' => pieces.push(Piece::Char),
            b's' => pieces.push(Piece::Str),
            b'f' => pieces.push(Piece::Float),
            b'p' => pieces.push(Piece::Pointer),
            b'd' => pieces.push(Piece::Signed(modifier)),
            b'u' | b'x' | b'b' => pieces.push(Piece::Unsigned(modifier)),
            _ => {}
        }
    }

    Ok(pieces)
}

#[cfg(test)]
mod test {
    use super::*;

    fn pieces(format: &str) -> Vec<Piece> {
        parse(format, Span::call_site()).unwrap()
    }

    #[test]
    fn counts_consuming_directives() {
        assert!(pieces("no directives").is_empty());
        assert_eq!(
            pieces("%c %s %5.2f %p"),
            vec![Piece::Char, Piece::Str, Piece::Float, Piece::Pointer]
        );
        assert!(pieces("100%% %z").is_empty());
    }

    #[test]
    fn modifiers() {
        assert_eq!(
            pieces("%d %ld %lld %08lx %llb"),
            vec![
                Piece::Signed(Modifier::Default),
                Piece::Signed(Modifier::Long),
                Piece::Signed(Modifier::LongLong),
                Piece::Unsigned(Modifier::Long),
                Piece::Unsigned(Modifier::LongLong),
            ]
        );
    }

    #[test]
    fn stops_at_nul() {
        assert_eq!(pieces("%d\0%d"), vec![Piece::Signed(Modifier::Default)]);
    }

    #[test]
    fn rejects_truncated_directive() {
        assert!(parse("value %", Span::call_site()).is_err());
        assert!(parse("value %5.", Span::call_site()).is_err());
        assert!(parse("value %ll", Span::call_site()).is_err());
    }
}
