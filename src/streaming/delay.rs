//! Fixed delay line over an upstream [`SampleReader`].

use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use super::traits::SampleReader;
use crate::{AudioSample, AudioSampleError, AudioSampleResult, ParameterError};

/// Delays the samples of an upstream reader by a fixed duration.
///
/// The first `channels × round(sample_rate × delay)` samples read are silence;
/// after that the upstream samples follow in order. A zero delay reads straight
/// through.
///
/// When refilling the line from upstream fails, `dst` is still complete and
/// the error carries `dst.len()`. The samples upstream did deliver stay in the
/// line and the rest of it is silenced. A line already emptied into `dst` is
/// silenced too, so a later read never repeats stale samples.
///
/// ```rust
/// use std::time::Duration;
/// use audio_dsp::streaming::{Delay, SampleReader, StreamReader};
/// use audio_dsp::CodecConfig;
///
/// let upstream: &[u8] = &[1, 2, 3, 4, 5, 6];
/// let reader = StreamReader::new(upstream, CodecConfig::default());
/// let mut delay = Delay::<u8, _>::new(reader, 1, 1_000, Duration::from_millis(2)).unwrap();
///
/// let mut out = [0u8; 6];
/// delay.read_samples(&mut out).unwrap();
/// assert_eq!(out, [0, 0, 1, 2, 3, 4]);
/// ```
pub struct Delay<T, R> {
    upstream: R,
    line: Vec<T>,
    delay: Duration,
    _sample: PhantomData<fn() -> T>,
}

impl<T: AudioSample, R: SampleReader<T>> Delay<T, R> {
    /// Creates a delay line of `delay` over `upstream`.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] when `channels` is zero.
    pub fn new(
        upstream: R,
        channels: usize,
        sample_rate: u32,
        delay: Duration,
    ) -> AudioSampleResult<Self> {
        if channels < 1 {
            return Err(ParameterError::invalid_value("channels", "need at least 1 channel").into());
        }
        let frames = (f64::from(sample_rate) * delay.as_secs_f64()).round() as usize;
        let len = channels * frames;
        tracing::debug!(channels, sample_rate, ?delay, samples = len, "creating delay line");
        Ok(Self {
            upstream,
            line: vec![T::zero(); len],
            delay,
            _sample: PhantomData,
        })
    }

    /// Creates a delay line from a delay in seconds.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] when `channels` is zero or `seconds` is
    /// negative or not finite.
    pub fn with_secs_f64(
        upstream: R,
        channels: usize,
        sample_rate: u32,
        seconds: f64,
    ) -> AudioSampleResult<Self> {
        let delay = Duration::try_from_secs_f64(seconds).map_err(|_| {
            ParameterError::invalid_value(
                "delay",
                format!("must be a finite, non-negative number of seconds, got {seconds}"),
            )
        })?;
        Self::new(upstream, channels, sample_rate, delay)
    }

    /// Configured delay.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of samples held back, across all channels.
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Returns true for a zero-length delay, which reads straight through.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Borrows the upstream reader.
    pub const fn get_ref(&self) -> &R {
        &self.upstream
    }

    /// Consumes the delay line and returns the upstream reader.
    pub fn into_inner(self) -> R {
        self.upstream
    }
}

impl<T: AudioSample, R: SampleReader<T>> SampleReader<T> for Delay<T, R> {
    fn read_samples(&mut self, dst: &mut [T]) -> AudioSampleResult<usize> {
        if self.line.is_empty() {
            return self.upstream.read_samples(dst);
        }

        let n = dst.len().min(self.line.len());
        dst[..n].copy_from_slice(&self.line[..n]);
        if dst.len() > n {
            if let Err(err) = self.upstream.read_samples(&mut dst[n..]) {
                self.line.fill(T::zero());
                return Err(offset_transfer(err, n));
            }
        }

        self.line.copy_within(n.., 0);
        let tail = self.line.len() - n;
        if let Err(err) = self.upstream.read_samples(&mut self.line[tail..]) {
            let filled = tail + err.transferred().unwrap_or(0).min(n);
            self.line[filled..].fill(T::zero());
            return Err(with_count(err, dst.len()));
        }

        Ok(dst.len())
    }
}

/// Adds `offset` samples already written to the count carried by `err`.
fn offset_transfer(err: AudioSampleError, offset: usize) -> AudioSampleError {
    match err {
        AudioSampleError::Transfer {
            transferred,
            source,
        } => AudioSampleError::transfer(offset + transferred, source),
        other => other,
    }
}

/// Replaces the count carried by `err` with `written`.
fn with_count(err: AudioSampleError, written: usize) -> AudioSampleError {
    match err {
        AudioSampleError::Transfer { source, .. } => AudioSampleError::transfer(written, source),
        other => other,
    }
}

impl<T, R> fmt::Display for Delay<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delay {:?}", self.delay)
    }
}

impl<T, R> fmt::Debug for Delay<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delay")
            .field("delay", &self.delay)
            .field("samples", &self.line.len())
            .finish_non_exhaustive()
    }
}
