//! Degraded directives leave a `trace` record under target `ioprintf`.
//! Kept in its own test binary: it installs the global logger.

use std::sync::Mutex;

use ioprintf::{vprintf, Arg, BufSink, StreamLogger};
use log::LevelFilter;

static WIRE: Mutex<Vec<u8>> = Mutex::new(Vec::new());

fn putc(b: u8) {
    WIRE.lock().unwrap().push(b);
}

static LOGGER: StreamLogger = StreamLogger::new(putc, LevelFilter::Trace);

fn take_wire() -> String {
    String::from_utf8(std::mem::take(&mut *WIRE.lock().unwrap())).unwrap()
}

#[test]
fn degraded_directives_are_traced() {
    StreamLogger::init(&LOGGER).unwrap();

    let mut buf = [0_u8; 64];
    let mut sink = BufSink::new(&mut buf);

    vprintf(&mut sink, b"%05d %s %.2f", &[Arg::Int(7), Arg::from("ok"), Arg::Double(1.5)]);
    assert_eq!(sink.as_bytes(), b"00007 ok 1.50");
    assert_eq!(take_wire(), "");

    sink.clear();
    vprintf(&mut sink, b"%z", &[]);
    assert_eq!(sink.as_bytes(), b"z");
    assert_eq!(take_wire(), "[TRACE] ioprintf: unrecognized conversion 'z'\n");

    sink.clear();
    vprintf(&mut sink, b"<%d>", &[]);
    assert_eq!(sink.as_bytes(), b"<>");
    assert_eq!(take_wire(), "[TRACE] ioprintf: no argument left for Signed\n");
}
