//! `std::io` adapters for the ring buffer.
//!
//! The stream boundary on both sides of the buffer speaks plain bytes, so
//! the standard traits are the natural seam: a transport engine writes
//! inbound data through [`std::io::Write`] and a session consumer drains
//! through [`std::io::Read`]. The adapters add no state and preserve every
//! buffer invariant.
//!
//! Writes never evict: a full buffer reports 0 bytes accepted and the
//! caller polls [`RingBuffer::free`] and retries once the consumer has
//! drained. Eviction stays an explicit choice via
//! [`RingBuffer::add`] with `overwrite` set.

use std::io;

use super::buffer::RingBuffer;

impl io::Write for RingBuffer<'_> {
    /// Stage the largest prefix of `buf` that fits, returning its length.
    ///
    /// Returns `Ok(0)` when the buffer is full - the polling signal, not
    /// an error.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let count = buf.len().min(self.free());
        self.add(&buf[..count], false)
            .map_err(|e| io::Error::new(io::ErrorKind::WriteZero, e))?;
        Ok(count)
    }

    /// No-op: there is no downstream device to sync.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for RingBuffer<'_> {
    /// Remove up to `buf.len()` staged bytes, oldest first.
    ///
    /// Returns `Ok(0)` when nothing is staged.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(RingBuffer::read(self, buf))
    }
}
