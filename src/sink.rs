//! Stream adapters (C9): [`std::io::Write`]/[`std::io::Read`] wrappers
//! around [`crate::transcode::Transcoder`].
//!
//! Grounded on `utf8dec-rs`'s `UTF8DecWriter`/`UTF8DecReader`, which wrap an
//! inner writer/reader and apply a decode-then-re-encode pass transparently;
//! here the pass is a full from-encoding-to-encoding transcode rather than a
//! UTF-8-specific validity filter. Also stands in for the original's
//! `zlutfputiusA`/`zlutfputiusW`/`zlutfputusW` file-sink helpers, which
//! pushed one code point at a time into a `FILE*`.

use crate::encoding::Encoding;
use crate::transcode::Transcoder;
use std::io::{self, Read, Write};

/// Wraps an inner [`Write`], transcoding every byte written into it from
/// `from` to `to` before it reaches the inner writer.
///
/// Call [`TranscodingWriter::finish`] once after the last `write` to flush
/// any buffered partial input and spilled encoder output; dropping without
/// finishing silently discards them, matching `std::io::BufWriter`'s own
/// drop behavior.
pub struct TranscodingWriter<W: Write> {
    inner: W,
    t: Transcoder,
    scratch: Vec<u8>,
}

impl<W: Write> TranscodingWriter<W> {
    /// Wraps `inner`, transcoding from `from` to `to`.
    pub fn new(inner: W, from: Encoding, to: Encoding) -> Self {
        Self {
            inner,
            t: Transcoder::new(from, to),
            scratch: vec![0u8; 4096],
        }
    }

    /// Enables `'?'` fallback substitution instead of hard errors.
    pub fn set_allow_fallback(&mut self, allow: bool) {
        self.t.set_allow_fallback(allow);
    }

    /// Flushes any buffered partial input and spilled encoder output to the
    /// inner writer. Must be called once after the last `write`.
    pub fn finish(&mut self) -> io::Result<()> {
        loop {
            let step = self.t.flush(&mut self.scratch);
            if step.written > 0 {
                self.inner.write_all(&self.scratch[..step.written])?;
            }
            if step.written < self.scratch.len() {
                break;
            }
        }
        self.inner.flush()
    }

    /// Unwraps this adapter, returning the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for TranscodingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut total_consumed = 0;
        loop {
            let step = self.t.transcode(&buf[total_consumed..], &mut self.scratch);
            if step.written > 0 {
                self.inner.write_all(&self.scratch[..step.written])?;
            }
            total_consumed += step.consumed;
            if step.consumed == 0 || total_consumed >= buf.len() {
                break;
            }
        }
        Ok(total_consumed)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Wraps an inner [`Read`], transcoding every byte read from it from `from`
/// to `to` before it reaches the caller.
pub struct TranscodingReader<R: Read> {
    inner: R,
    t: Transcoder,
    inbuf: Vec<u8>,
    in_len: usize,
    in_off: usize,
    eof: bool,
}

impl<R: Read> TranscodingReader<R> {
    /// Wraps `inner`, transcoding from `from` to `to`.
    pub fn new(inner: R, from: Encoding, to: Encoding) -> Self {
        Self {
            inner,
            t: Transcoder::new(from, to),
            inbuf: vec![0u8; 4096],
            in_len: 0,
            in_off: 0,
            eof: false,
        }
    }

    /// Enables `'?'` fallback substitution instead of hard errors.
    pub fn set_allow_fallback(&mut self, allow: bool) {
        self.t.set_allow_fallback(allow);
    }

    fn refill(&mut self) -> io::Result<()> {
        if self.in_off > 0 {
            self.inbuf.copy_within(self.in_off..self.in_len, 0);
            self.in_len -= self.in_off;
            self.in_off = 0;
        }
        if self.in_len == self.inbuf.len() {
            return Ok(());
        }
        let n = self.inner.read(&mut self.inbuf[self.in_len..])?;
        if n == 0 {
            self.eof = true;
        }
        self.in_len += n;
        Ok(())
    }
}

impl<R: Read> Read for TranscodingReader<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        loop {
            let step = self.t.transcode(&self.inbuf[self.in_off..self.in_len], out);
            self.in_off += step.consumed;
            if step.written > 0 {
                return Ok(step.written);
            }
            if self.eof {
                let step = self.t.flush(out);
                return Ok(step.written);
            }
            self.refill()?;
        }
    }
}
