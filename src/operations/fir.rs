//! Windowed-sinc FIR filter design and time-domain convolution.
//!
//! [`SincFilter`] designs low-pass and high-pass kernels. [`FirFilter`] runs
//! a kernel over a signal. [`low_pass`] and [`high_pass`] combine the two
//! with a fixed 62-tap design.
//!
//! ```rust
//! use audio_dsp::operations::{SincFilter, WindowType};
//!
//! let filter = SincFilter::new(1_000.0, 8_000, 62, WindowType::Hamming).unwrap();
//! let kernel = filter.low_pass_coefficients();
//! assert_eq!(kernel.len(), 63);
//! assert_eq!(kernel[0], kernel[62]);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::sync::{Arc, OnceLock};

use super::types::WindowType;
use super::window::WindowFunction;
use crate::{AudioSampleResult, LayoutError, ParameterError};

/// Number of taps used by [`low_pass`] and [`high_pass`].
pub const DEFAULT_TAPS: usize = 62;

/// Windowed-sinc filter design.
///
/// The configuration is fixed at construction. Coefficients are computed on
/// first request and cached; the `with_*` methods return a new filter with an
/// empty cache.
#[derive(Clone)]
pub struct SincFilter {
    cutoff_hz: f64,
    sample_rate: u32,
    taps: usize,
    window: Arc<dyn WindowFunction + Send + Sync>,
    low_pass: OnceLock<Vec<f64>>,
    high_pass: OnceLock<Vec<f64>>,
}

impl SincFilter {
    /// Creates a filter design.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] when `taps` is odd or smaller than 2,
    /// `sample_rate` is zero, or `cutoff_hz` is not inside `(0, sample_rate / 2)`.
    pub fn new<W>(cutoff_hz: f64, sample_rate: u32, taps: usize, window: W) -> AudioSampleResult<Self>
    where
        W: WindowFunction + Send + Sync + 'static,
    {
        Self::with_shared_window(cutoff_hz, sample_rate, taps, Arc::new(window))
    }

    fn with_shared_window(
        cutoff_hz: f64,
        sample_rate: u32,
        taps: usize,
        window: Arc<dyn WindowFunction + Send + Sync>,
    ) -> AudioSampleResult<Self> {
        if taps < 2 || taps % 2 != 0 {
            return Err(ParameterError::invalid_value(
                "taps",
                format!("must be even and at least 2, got {taps}"),
            )
            .into());
        }
        if sample_rate == 0 {
            return Err(ParameterError::invalid_value("sample_rate", "must be greater than 0").into());
        }
        let nyquist = f64::from(sample_rate) / 2.0;
        if !(cutoff_hz > 0.0 && cutoff_hz < nyquist) {
            return Err(ParameterError::out_of_range("cutoff_hz", cutoff_hz, 0.0, nyquist).into());
        }
        Ok(Self {
            cutoff_hz,
            sample_rate,
            taps,
            window,
            low_pass: OnceLock::new(),
            high_pass: OnceLock::new(),
        })
    }

    /// Returns a new design with a different cutoff frequency.
    ///
    /// # Errors
    /// See [`SincFilter::new`].
    pub fn with_cutoff(&self, cutoff_hz: f64) -> AudioSampleResult<Self> {
        Self::with_shared_window(cutoff_hz, self.sample_rate, self.taps, Arc::clone(&self.window))
    }

    /// Returns a new design with a different sample rate.
    ///
    /// # Errors
    /// See [`SincFilter::new`].
    pub fn with_sample_rate(&self, sample_rate: u32) -> AudioSampleResult<Self> {
        Self::with_shared_window(self.cutoff_hz, sample_rate, self.taps, Arc::clone(&self.window))
    }

    /// Returns a new design with a different number of taps.
    ///
    /// # Errors
    /// See [`SincFilter::new`].
    pub fn with_taps(&self, taps: usize) -> AudioSampleResult<Self> {
        Self::with_shared_window(self.cutoff_hz, self.sample_rate, taps, Arc::clone(&self.window))
    }

    /// Returns a new design with a different window.
    pub fn with_window<W>(&self, window: W) -> Self
    where
        W: WindowFunction + Send + Sync + 'static,
    {
        Self {
            cutoff_hz: self.cutoff_hz,
            sample_rate: self.sample_rate,
            taps: self.taps,
            window: Arc::new(window),
            low_pass: OnceLock::new(),
            high_pass: OnceLock::new(),
        }
    }

    /// Cutoff frequency in Hz.
    pub const fn cutoff_hz(&self) -> f64 {
        self.cutoff_hz
    }

    /// Sample rate in Hz.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of taps. Kernels hold `taps + 1` coefficients.
    pub const fn taps(&self) -> usize {
        self.taps
    }

    /// Cutoff as a fraction of the sample rate.
    pub fn transition_frequency(&self) -> f64 {
        self.cutoff_hz / f64::from(self.sample_rate)
    }

    fn window_coefficients(&self) -> Vec<f64> {
        let size = self.taps + 1;
        let mut w = self.window.coefficients(size);
        // A misbehaving window must not shorten the kernel.
        w.resize(size, 0.0);
        w
    }

    /// Low-pass kernel of `taps + 1` coefficients, symmetric about the center.
    pub fn low_pass_coefficients(&self) -> &[f64] {
        self.low_pass.get_or_init(|| {
            let size = self.taps + 1;
            let half = self.taps / 2;
            let ft = self.transition_frequency();
            let w = self.window_coefficients();
            tracing::debug!(taps = self.taps, ft, "computing low-pass sinc coefficients");

            let mut lp = vec![0.0; size];
            for i in 0..half {
                let c = i as f64 - half as f64;
                lp[i] = (2.0 * PI * ft * c).sin() / (PI * c) * w[i];
                lp[size - 1 - i] = lp[i];
            }
            lp[half] = 2.0 * ft * w[half];
            lp
        })
    }

    /// High-pass kernel: the low-pass kernel with every non-center tap negated
    /// and a center tap of `(1 - 2·ft)·w[center]`.
    pub fn high_pass_coefficients(&self) -> &[f64] {
        self.high_pass.get_or_init(|| {
            let half = self.taps / 2;
            let ft = self.transition_frequency();
            tracing::debug!(taps = self.taps, ft, "computing high-pass sinc coefficients");

            let mut hp: Vec<f64> = self.low_pass_coefficients().iter().map(|c| -c).collect();
            hp[half] = (1.0 - 2.0 * ft) * self.window_coefficients()[half];
            hp
        })
    }
}

impl fmt::Debug for SincFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SincFilter")
            .field("cutoff_hz", &self.cutoff_hz)
            .field("sample_rate", &self.sample_rate)
            .field("taps", &self.taps)
            .finish_non_exhaustive()
    }
}

/// Finite impulse response filter driven by a [`SincFilter`] design.
#[derive(Debug, Clone)]
pub struct FirFilter {
    sinc: SincFilter,
}

impl FirFilter {
    /// Creates a filter from a design.
    pub const fn new(sinc: SincFilter) -> Self {
        Self { sinc }
    }

    /// The underlying design.
    pub const fn sinc(&self) -> &SincFilter {
        &self.sinc
    }

    /// Applies the low-pass kernel to `src`.
    ///
    /// # Errors
    /// See [`FirFilter::convolve`].
    pub fn low_pass(&self, src: &[f64]) -> AudioSampleResult<Vec<f64>> {
        Self::convolve(src, self.sinc.low_pass_coefficients())
    }

    /// Applies the high-pass kernel to `src`.
    ///
    /// # Errors
    /// See [`FirFilter::convolve`].
    pub fn high_pass(&self, src: &[f64]) -> AudioSampleResult<Vec<f64>> {
        Self::convolve(src, self.sinc.high_pass_coefficients())
    }

    /// Convolves `src` with `kernel`, producing `src.len()` samples.
    ///
    /// `out[i] = Σ src[i - m] · kernel[m]` for `m` in `0..=min(i, k - 1)`:
    /// samples before the start of the signal count as zero.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] unless `kernel` is strictly shorter than `src`.
    pub fn convolve(src: &[f64], kernel: &[f64]) -> AudioSampleResult<Vec<f64>> {
        let mut dst = vec![0.0; src.len()];
        Self::convolve_into(&mut dst, src, kernel)?;
        Ok(dst)
    }

    /// Convolves into a caller-provided slice of `src.len()` samples.
    ///
    /// # Errors
    /// - [`ParameterError`] unless `kernel` is strictly shorter than `src`.
    /// - [`LayoutError::DimensionMismatch`] when `dst.len() != src.len()`.
    pub fn convolve_into(dst: &mut [f64], src: &[f64], kernel: &[f64]) -> AudioSampleResult<()> {
        if kernel.len() >= src.len() {
            return Err(ParameterError::invalid_value(
                "kernel",
                format!(
                    "must be shorter than the signal ({} >= {})",
                    kernel.len(),
                    src.len()
                ),
            )
            .into());
        }
        if dst.len() != src.len() {
            return Err(LayoutError::dimension_mismatch("convolve", src.len(), dst.len()).into());
        }

        for (i, out) in dst.iter_mut().enumerate() {
            let taps = kernel.len().min(i + 1);
            *out = kernel[..taps]
                .iter()
                .enumerate()
                .map(|(m, k)| src[i - m] * k)
                .sum();
        }
        Ok(())
    }
}

/// Low-pass filters `src` with a 62-tap Hamming-windowed sinc.
///
/// # Errors
/// Returns a [`ParameterError`] for an invalid cutoff or sample rate, or
/// when `src` is not longer than the kernel.
pub fn low_pass(src: &[f64], cutoff_hz: f64, sample_rate: u32) -> AudioSampleResult<Vec<f64>> {
    let sinc = SincFilter::new(cutoff_hz, sample_rate, DEFAULT_TAPS, WindowType::Hamming)?;
    FirFilter::new(sinc).low_pass(src)
}

/// High-pass filters `src` with a 62-tap Blackman-windowed sinc.
///
/// # Errors
/// Returns a [`ParameterError`] for an invalid cutoff or sample rate, or
/// when `src` is not longer than the kernel.
pub fn high_pass(src: &[f64], cutoff_hz: f64, sample_rate: u32) -> AudioSampleResult<Vec<f64>> {
    let sinc = SincFilter::new(cutoff_hz, sample_rate, DEFAULT_TAPS, WindowType::Blackman)?;
    FirFilter::new(sinc).high_pass(src)
}
