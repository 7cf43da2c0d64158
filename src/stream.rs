use crate::arg::Arg;
use crate::printf::vprintf;
use crate::sink::Sink;

/// A byte device with printf on top.
///
/// `printf` returns the stream, so output can be chained:
///
/// ```rust
/// use ioprintf::{Arg, BufSink, IoStream};
///
/// let mut buf = [0_u8; 32];
/// let mut out = IoStream::new(BufSink::new(&mut buf));
/// out.printf(b"x=%d", &[Arg::Int(3)]).write(b' ').printf(b"%s", &[Arg::from("ok")]);
/// assert_eq!(out.device().as_bytes(), b"x=3 ok");
/// ```
pub struct IoStream<D: Sink> {
    device: D,
}

impl<D: Sink> IoStream<D> {
    pub const fn new(device: D) -> Self {
        Self { device }
    }

    pub fn printf(&mut self, format: &[u8], args: &[Arg<'_>]) -> &mut Self {
        vprintf(&mut self.device, format, args);
        self
    }

    pub fn write(&mut self, byte: u8) -> &mut Self {
        self.device.write(byte);
        self
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.device.write_bytes(bytes);
        self
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_inner(self) -> D {
        self.device
    }
}

impl<D: Sink> Sink for IoStream<D> {
    #[inline]
    fn write(&mut self, byte: u8) {
        self.device.write(byte)
    }
}
