use std::io::Write;

use ioprintf::{Arg, FnSink, IoStream, StreamLogger};

fn putc(byte: u8) {
    let _ = std::io::stdout().write_all(&[byte]);
}

static LOGGER: StreamLogger = StreamLogger::new(putc, log::LevelFilter::Info);

fn main() {
    let mut stdout = FnSink(putc);
    let value = 0x5A_u8;

    ioprintf::printfln!(
        &mut stdout,
        "d = %d u = %u x = %x b = %08b f = %8.3f p = %p c = %c s = %s",
        -100,
        200_u32,
        0xBEEF_u32,
        value,
        -3.14159,
        &value,
        b'!',
        "hello"
    );

    let mut b = [0_u8; 32];
    let n = ioprintf::bprintf!(&mut b, "bprintf(%s) = %lld", "wide", i64::MIN);
    ioprintf::printfln!(&mut stdout, "%s (%u bytes)", &b[..n], n);

    let mut uart = IoStream::new(FnSink(putc));
    uart.printf(b"%02u:%02u:%02u", &[Arg::from(9_u8), Arg::from(5_u8), Arg::from(3_u8)])
        .write(b'\n');

    if StreamLogger::init(&LOGGER).is_ok() {
        log::info!("logger up, wide renderer: {}", ioprintf::WIDE);
    }
}
