//! Tests for streaming functionality.
//!
//! Covers chunked byte-stream transfer through [`StreamReader`] and
//! [`StreamWriter`], and the [`Delay`] line over an upstream reader.

use std::io::{self, Read, Write};

use super::*;
use crate::{AudioSample, AudioSampleResult};


/// Ramp of bytes `0, 1, ..., 255, 0, 1, ...` of the given length.
pub(crate) fn byte_ramp(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i & 0xff) as u8).collect()
}

/// Reader that yields at most `step` bytes per call and then fails with
/// `error` once `limit` bytes were produced.
pub(crate) struct TrickleReader {
    data: Vec<u8>,
    position: usize,
    step: usize,
    limit: usize,
    error: io::ErrorKind,
}

impl TrickleReader {
    pub(crate) fn new(data: Vec<u8>, step: usize) -> Self {
        let limit = data.len();
        Self {
            data,
            position: 0,
            step,
            limit,
            error: io::ErrorKind::UnexpectedEof,
        }
    }

    pub(crate) fn failing_after(mut self, limit: usize, error: io::ErrorKind) -> Self {
        self.limit = limit;
        self.error = error;
        self
    }
}

impl Read for TrickleReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.position >= self.limit {
            if self.limit < self.data.len() {
                return Err(io::Error::new(self.error, "trickle reader failure"));
            }
            return Ok(0);
        }
        let n = buf.len().min(self.step).min(self.limit - self.position);
        buf[..n].copy_from_slice(&self.data[self.position..self.position + n]);
        self.position += n;
        Ok(n)
    }
}

/// Writer that accepts `capacity` bytes and then refuses with `WriteZero`.
pub(crate) struct LimitedWriter {
    pub(crate) written: Vec<u8>,
    capacity: usize,
}

impl LimitedWriter {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            written: Vec::new(),
            capacity,
        }
    }
}

impl Write for LimitedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.capacity - self.written.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory sample source that counts how many samples were requested.
pub(crate) struct VecReader<T> {
    samples: Vec<T>,
    position: usize,
    pub(crate) requested: usize,
}

impl<T: AudioSample> VecReader<T> {
    pub(crate) fn new(samples: Vec<T>) -> Self {
        Self {
            samples,
            position: 0,
            requested: 0,
        }
    }
}

impl<T: AudioSample> SampleReader<T> for VecReader<T> {
    fn read_samples(&mut self, dst: &mut [T]) -> AudioSampleResult<usize> {
        self.requested += dst.len();
        let available = self.samples.len() - self.position;
        let n = dst.len().min(available);
        dst[..n].copy_from_slice(&self.samples[self.position..self.position + n]);
        self.position += n;
        if n < dst.len() {
            return Err(crate::AudioSampleError::transfer(
                n,
                io::Error::new(io::ErrorKind::UnexpectedEof, "vec reader exhausted"),
            ));
        }
        Ok(n)
    }
}
