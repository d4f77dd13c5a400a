use crate::{buffer::OutputBuffer, error::Error};

/// Destination for escaped output.
pub(crate) trait Sink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error>;
}

/// Cursor over a caller-supplied buffer with a hard capacity.
///
/// Every write checks the remaining space first and fails without touching
/// the buffer when it does not fit. The NUL terminator is counted against
/// the same capacity.
#[derive(Debug)]
pub(crate) struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> BoundedWriter<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn exhausted(&self, needed: usize) -> Error {
        let capacity = self.buf.len();
        debug_event!(
            capacity,
            written = self.pos,
            needed,
            "escape output buffer exhausted"
        );
        Error::CapacityExceeded { capacity }
    }

    /// Writes the terminator and returns the number of bytes before it.
    pub(crate) fn finish(self) -> Result<usize, Error> {
        if self.remaining() == 0 {
            return Err(self.exhausted(1));
        }
        self.buf[self.pos] = 0;
        Ok(self.pos)
    }
}

impl Sink for BoundedWriter<'_> {
    #[inline]
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if self.remaining() < bytes.len() {
            return Err(self.exhausted(bytes.len()));
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}

impl Sink for OutputBuffer {
    #[inline]
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.extend(bytes);
        Ok(())
    }
}
