/// Byte-oriented output device.
///
/// The engine calls `write` once per output byte, in generation order. What
/// happens when the device is full (block, drop, buffer) is up to the
/// implementation; the engine never observes it.
pub trait Sink {
    fn write(&mut self, byte: u8);

    fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write(b);
        }
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn write(&mut self, byte: u8) {
        (**self).write(byte)
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes)
    }
}

/// Adapts a closure or a plain `fn(u8)` such as a UART `putc`.
pub struct FnSink<F: FnMut(u8)>(pub F);

impl<F: FnMut(u8)> Sink for FnSink<F> {
    #[inline]
    fn write(&mut self, byte: u8) {
        (self.0)(byte)
    }
}

/// Writes into a borrowed byte buffer and drops whatever does not fit.
pub struct BufSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
    requested: usize,
}

impl<'a> BufSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            requested: 0,
        }
    }

    /// Bytes actually stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Bytes the writer attempted to store, including dropped ones.
    /// Greater than `len()` when the output was truncated.
    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    pub fn clear(&mut self) {
        self.pos = 0;
        self.requested = 0;
    }
}

impl Sink for BufSink<'_> {
    fn write(&mut self, byte: u8) {
        self.requested += 1;
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = byte;
            self.pos += 1;
        }
    }
}

/// Bridges a [`Sink`] to `core::fmt::Write`.
pub struct SinkWriter<S: Sink>(pub S);

impl<S: Sink> core::fmt::Write for SinkWriter<S> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.0.write_bytes(s.as_bytes());
        Ok(())
    }
}
