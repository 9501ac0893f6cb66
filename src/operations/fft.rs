//! Fast Fourier Transform engines.
//!
//! [`Radix2Fft`] is an iterative decimation-in-time transform for power-of-two
//! lengths. [`RustFftEngine`] wraps the `rustfft` planner for every other
//! length. Both implement [`FftEngine`], which also provides the inverse
//! transform and circular convolution on top of the forward transform.
//!
//! ```rust
//! use audio_dsp::operations::{fft, ifft};
//! use num_complex::Complex;
//!
//! let signal: Vec<Complex<f64>> = (0..8).map(|i| Complex::new(i as f64, 0.0)).collect();
//! let spectrum = fft(&signal).unwrap();
//! assert_eq!(spectrum[0].re, 28.0);
//!
//! let restored = ifft(&spectrum).unwrap();
//! assert!((restored[3].re - 3.0).abs() < 1e-9);
//! ```

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::Arc;

use num_complex::Complex;
use rustfft::FftPlanner;

use super::types::FftBackend;
use crate::{AudioSampleResult, LayoutError, ParameterError};

/// A forward Fourier transform over complex `f64` data.
///
/// Only [`FftEngine::forward`] is required. The inverse transform and
/// convolution are derived from it.
pub trait FftEngine {
    /// Replaces `data` with its unscaled forward transform.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] when the engine cannot transform a buffer
    /// of this length.
    fn forward(&mut self, data: &mut [Complex<f64>]) -> AudioSampleResult<()>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Replaces `data` with its inverse transform, scaled by `1 / n`.
    ///
    /// The input is mirrored (index 0 stays, indices `1..n` are reversed),
    /// transformed forward and divided by `n`.
    ///
    /// # Errors
    /// Propagates errors from [`FftEngine::forward`].
    fn inverse(&mut self, data: &mut [Complex<f64>]) -> AudioSampleResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        data[1..].reverse();
        self.forward(data)?;
        let scale = 1.0 / data.len() as f64;
        for value in data.iter_mut() {
            *value *= scale;
        }
        Ok(())
    }

    /// Circular convolution of `x` and `y` via the frequency domain.
    ///
    /// # Errors
    /// Returns a [`LayoutError::DimensionMismatch`] when the lengths differ.
    fn convolve(
        &mut self,
        x: &[Complex<f64>],
        y: &[Complex<f64>],
    ) -> AudioSampleResult<Vec<Complex<f64>>> {
        if x.len() != y.len() {
            return Err(LayoutError::dimension_mismatch("convolve", x.len(), y.len()).into());
        }
        let mut a = x.to_vec();
        let mut b = y.to_vec();
        self.forward(&mut a)?;
        self.forward(&mut b)?;
        for (a, b) in a.iter_mut().zip(&b) {
            *a *= *b;
        }
        self.inverse(&mut a)?;
        Ok(a)
    }
}

/// Iterative radix-2 decimation-in-time FFT.
///
/// Twiddle factors are computed once per length and cached.
#[derive(Debug, Default)]
pub struct Radix2Fft {
    twiddles: HashMap<usize, Arc<[Complex<f64>]>>,
}

impl Radix2Fft {
    /// Creates an engine with an empty twiddle cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `exp(-2πi k / n)` for `k` in `0..n/2`, computing it on first use.
    fn twiddles(&mut self, n: usize) -> Arc<[Complex<f64>]> {
        self.twiddles
            .entry(n)
            .or_insert_with(|| {
                tracing::debug!(len = n, "computing radix-2 twiddle factors");
                (0..n / 2)
                    .map(|k| Complex::from_polar(1.0, -2.0 * PI * k as f64 / n as f64))
                    .collect()
            })
            .clone()
    }

    /// Forward transform of `input` into a new vector.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] when the length is not a power of two.
    pub fn fft(&mut self, input: &[Complex<f64>]) -> AudioSampleResult<Vec<Complex<f64>>> {
        let mut data = input.to_vec();
        self.forward(&mut data)?;
        Ok(data)
    }

    /// Inverse transform of `input` into a new vector.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] when the length is not a power of two.
    pub fn ifft(&mut self, input: &[Complex<f64>]) -> AudioSampleResult<Vec<Complex<f64>>> {
        let mut data = input.to_vec();
        self.inverse(&mut data)?;
        Ok(data)
    }
}

/// Reorders `data` so that every index is swapped with its bit-reversed index.
fn bit_reverse(data: &mut [Complex<f64>]) {
    let n = data.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            data.swap(i, j);
        }
    }
}

impl FftEngine for Radix2Fft {
    fn forward(&mut self, data: &mut [Complex<f64>]) -> AudioSampleResult<()> {
        let n = data.len();
        if n <= 1 {
            return Ok(());
        }
        if !n.is_power_of_two() {
            return Err(ParameterError::invalid_value(
                "fft_size",
                format!("radix-2 transform needs a power of two length, got {n}"),
            )
            .into());
        }

        let factors = self.twiddles(n);
        bit_reverse(data);

        for pair in data.chunks_exact_mut(2) {
            let (a, b) = (pair[0], pair[1]);
            pair[0] = a + b;
            pair[1] = a - b;
        }

        let mut stage = 4;
        while stage <= n {
            let blocks = n / stage;
            let half = stage / 2;
            for batch in data.chunks_exact_mut(stage) {
                let (lower, upper) = batch.split_at_mut(half);
                for (k, (a, b)) in lower.iter_mut().zip(upper.iter_mut()).enumerate() {
                    let factorized = *b * factors[blocks * k];
                    let even = *a;
                    *a = even + factorized;
                    *b = even - factorized;
                }
            }
            stage <<= 1;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "radix-2"
    }
}

/// Mixed-radix FFT backed by the `rustfft` planner.
pub struct RustFftEngine {
    planner: FftPlanner<f64>,
    last_len: Option<usize>,
}

impl RustFftEngine {
    /// Creates an engine with an empty planner.
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            last_len: None,
        }
    }
}

impl Default for RustFftEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RustFftEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RustFftEngine")
            .field("last_len", &self.last_len)
            .finish_non_exhaustive()
    }
}

impl FftEngine for RustFftEngine {
    fn forward(&mut self, data: &mut [Complex<f64>]) -> AudioSampleResult<()> {
        let n = data.len();
        if n <= 1 {
            return Ok(());
        }
        if self.last_len != Some(n) {
            tracing::debug!(len = n, "planning rustfft transform");
            self.last_len = Some(n);
        }
        self.planner.plan_fft_forward(n).process(data);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "rustfft"
    }
}

impl FftBackend {
    /// Creates a fresh engine for this backend.
    pub fn engine(self) -> Box<dyn FftEngine> {
        match self {
            FftBackend::Radix2 => Box::new(Radix2Fft::new()),
            FftBackend::RustFft => Box::new(RustFftEngine::new()),
        }
    }
}

/// Forward radix-2 transform of `input`.
///
/// # Errors
/// Returns a [`ParameterError`] when the length is not a power of two.
pub fn fft(input: &[Complex<f64>]) -> AudioSampleResult<Vec<Complex<f64>>> {
    Radix2Fft::new().fft(input)
}

/// Inverse radix-2 transform of `input`, scaled by `1 / n`.
///
/// # Errors
/// Returns a [`ParameterError`] when the length is not a power of two.
pub fn ifft(input: &[Complex<f64>]) -> AudioSampleResult<Vec<Complex<f64>>> {
    Radix2Fft::new().ifft(input)
}

/// Circular convolution of `x` and `y` using the radix-2 transform.
///
/// # Errors
/// Returns a [`LayoutError::DimensionMismatch`] when the lengths differ, or a
/// [`ParameterError`] when they are not a power of two.
pub fn convolve(x: &[Complex<f64>], y: &[Complex<f64>]) -> AudioSampleResult<Vec<Complex<f64>>> {
    Radix2Fft::new().convolve(x, y)
}
