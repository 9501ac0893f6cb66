//! Core traits for moving blocks of samples.

use crate::{AudioSample, AudioSampleResult};

/// A source of samples.
///
/// Implementations fill the whole destination or fail. On failure, the error
/// reports how many samples were written before it happened (see
/// [`AudioSampleError::transferred`](crate::AudioSampleError::transferred)).
pub trait SampleReader<T: AudioSample> {
    /// Fills `dst` with the next `dst.len()` samples and returns that count.
    ///
    /// # Errors
    /// Implementation specific. Byte-stream readers return
    /// [`AudioSampleError::Transfer`](crate::AudioSampleError::Transfer) when
    /// the stream ends early.
    fn read_samples(&mut self, dst: &mut [T]) -> AudioSampleResult<usize>;
}

/// A sink of samples.
pub trait SampleWriter<T: AudioSample> {
    /// Writes every sample of `src` and returns the count.
    ///
    /// # Errors
    /// Implementation specific.
    fn write_samples(&mut self, src: &[T]) -> AudioSampleResult<usize>;
}

impl<T: AudioSample, R: SampleReader<T> + ?Sized> SampleReader<T> for &mut R {
    fn read_samples(&mut self, dst: &mut [T]) -> AudioSampleResult<usize> {
        (**self).read_samples(dst)
    }
}

impl<T: AudioSample, W: SampleWriter<T> + ?Sized> SampleWriter<T> for &mut W {
    fn write_samples(&mut self, src: &[T]) -> AudioSampleResult<usize> {
        (**self).write_samples(src)
    }
}

impl<T: AudioSample, R: SampleReader<T> + ?Sized> SampleReader<T> for Box<R> {
    fn read_samples(&mut self, dst: &mut [T]) -> AudioSampleResult<usize> {
        (**self).read_samples(dst)
    }
}

impl<T: AudioSample, W: SampleWriter<T> + ?Sized> SampleWriter<T> for Box<W> {
    fn write_samples(&mut self, src: &[T]) -> AudioSampleResult<usize> {
        (**self).write_samples(src)
    }
}
