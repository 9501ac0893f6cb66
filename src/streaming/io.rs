//! Sample readers and writers over byte streams.

use std::io::{Read, Write};

use super::traits::{SampleReader, SampleWriter};
use crate::codec::{CodecConfig, decode_from_chunked, encode_to_chunked};
use crate::{AudioSample, AudioSampleResult};

/// Decodes samples of any [`AudioSample`] kind from a [`Read`] implementation.
///
/// ```rust
/// use audio_dsp::streaming::{SampleReader, StreamReader};
/// use audio_dsp::{ByteOrder, CodecConfig};
///
/// let bytes: &[u8] = &[0x7f, 0xff, 0x80, 0x00];
/// let mut reader = StreamReader::new(bytes, CodecConfig::new(ByteOrder::BigEndian));
/// let mut samples = [0i16; 2];
/// reader.read_samples(&mut samples).unwrap();
/// assert_eq!(samples, [i16::MAX, i16::MIN]);
/// ```
#[derive(Debug)]
pub struct StreamReader<R> {
    inner: R,
    config: CodecConfig,
}

impl<R: Read> StreamReader<R> {
    /// Wraps `inner` with the given codec settings.
    pub const fn new(inner: R, config: CodecConfig) -> Self {
        Self {
            inner,
            config,
        }
    }

    /// Codec settings in use.
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Borrows the wrapped stream.
    pub const fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consumes the reader and returns the wrapped stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read, T: AudioSample> SampleReader<T> for StreamReader<R> {
    fn read_samples(&mut self, dst: &mut [T]) -> AudioSampleResult<usize> {
        decode_from_chunked(
            dst,
            &mut self.inner,
            self.config.byte_order,
            self.config.chunk_size,
        )
    }
}

/// Encodes samples of any [`AudioSample`] kind into a [`Write`] implementation.
#[derive(Debug)]
pub struct StreamWriter<W> {
    inner: W,
    config: CodecConfig,
}

impl<W: Write> StreamWriter<W> {
    /// Wraps `inner` with the given codec settings.
    pub const fn new(inner: W, config: CodecConfig) -> Self {
        Self {
            inner,
            config,
        }
    }

    /// Codec settings in use.
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Borrows the wrapped stream.
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consumes the writer and returns the wrapped stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write, T: AudioSample> SampleWriter<T> for StreamWriter<W> {
    fn write_samples(&mut self, src: &[T]) -> AudioSampleResult<usize> {
        encode_to_chunked(
            src,
            &mut self.inner,
            self.config.byte_order,
            self.config.chunk_size,
        )
    }
}
