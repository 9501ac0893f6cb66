//! Core trait definitions for sample operations.
//!
//! Each trait groups one concern. Implementations live in the sibling
//! modules ([`statistics`](super::statistics), [`processing`](super::processing)).

use crate::{AudioSample, AudioSampleResult};

/// Statistical analysis of a sample sequence.
///
/// Every method returns zero for an empty sequence.
pub trait AudioStatistics<T: AudioSample> {
    /// Returns the smallest sample.
    fn min(&self) -> T;

    /// Returns the largest sample.
    fn max(&self) -> T;

    /// Returns the largest absolute value, `max(|min|, |max|)`.
    ///
    /// Signed integers saturate, so `i16::MIN` has a peak of `i16::MAX`.
    fn peak(&self) -> T;

    /// Returns the arithmetic mean.
    ///
    /// The sum is accumulated with exact partial sums, so sequences mixing
    /// very large and very small values keep their precision. Integer kinds
    /// truncate the result toward zero.
    fn mean(&self) -> T;

    /// Returns the root mean square, `sqrt(Σ v² / n)`.
    ///
    /// Computed on raw values in `f64`. Integer kinds truncate the result.
    fn rms(&self) -> T;
}

/// In-place processing of a sample sequence.
pub trait AudioProcessing<T: AudioSample> {
    /// Limits every sample to `[min, max]`.
    ///
    /// # Errors
    /// Returns a [`ParameterError`](crate::ParameterError) when `min > max`.
    fn clip(&mut self, min: T, max: T) -> AudioSampleResult<()>;

    /// Divides every sample by [`AudioStatistics::peak`].
    ///
    /// Integer kinds use integer division. An empty or silent sequence is
    /// left unchanged.
    fn normalize(&mut self);

    /// Subtracts the mean from every sample.
    ///
    /// The subtraction is done in `f64`; integer kinds truncate and saturate.
    fn remove_dc(&mut self);
}
