use core::fmt::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::arg::Arg;
use crate::printf::vprintf;
use crate::sink::{FnSink, Sink, SinkWriter};

/// `log` backend that writes every record to a byte port, one byte at a time.
///
/// Records look like `[LEVEL] target: message\n`.
pub struct StreamLogger {
    putc: fn(u8),
    max_level: LevelFilter,
}

impl StreamLogger {
    pub const fn new(putc: fn(u8), max_level: LevelFilter) -> Self {
        Self { putc, max_level }
    }

    /// Installs `logger` as the global logger. Call once during early init.
    pub fn init(logger: &'static StreamLogger) -> Result<(), SetLoggerError> {
        log::set_logger(logger)?;
        log::set_max_level(logger.max_level);
        Ok(())
    }
}

impl Log for StreamLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut port = FnSink(self.putc);
        vprintf(
            &mut port,
            b"[%s] %s: ",
            &[
                Arg::from(record.level().as_str()),
                Arg::from(record.target()),
            ],
        );
        let mut w = SinkWriter(&mut port);
        let _ = w.write_fmt(*record.args());
        w.0.write(b'\n');
    }

    fn flush(&self) {}
}
