//! Magnitude spectrum analysis.
//!
//! [`SpectrumAnalyzer`] turns a chunk of samples into one
//! [`FrequencyMagnitude`] per FFT bin between DC and Nyquist (both excluded).
//!
//! ```rust
//! use audio_dsp::operations::{SpectrumAnalyzer, peak_frequency};
//!
//! let sample_rate = 8_000;
//! let tone: Vec<i16> = (0..256)
//!     .map(|i| {
//!         let t = i as f64 / sample_rate as f64;
//!         ((2.0 * std::f64::consts::PI * 1_000.0 * t).sin() * 16_000.0) as i16
//!     })
//!     .collect();
//!
//! let mut analyzer = SpectrumAnalyzer::<i16>::new(sample_rate).unwrap();
//! let spectrum = analyzer.analyze(&tone).unwrap();
//! assert_eq!(spectrum.len(), 127);
//! assert_eq!(peak_frequency(&spectrum).unwrap().frequency, 1_000);
//! ```

use std::fmt;
use std::marker::PhantomData;

use num_complex::Complex;

use super::fft::FftEngine;
use super::types::{FftBackend, FrequencyMagnitude, SpectrumConfig};
use super::window::WindowFunction;
use crate::{AudioSample, AudioSampleResult, LayoutError, ParameterError, conversions};

/// Smallest chunk that yields at least one bin.
const MIN_CHUNK: usize = 4;

/// Working buffers reused across calls while the chunk length stays the same.
#[derive(Debug, Default)]
struct Scratch {
    samples: Vec<f64>,
    spectrum: Vec<Complex<f64>>,
}

impl Scratch {
    fn resize_if_needed(&mut self, len: usize) {
        if self.samples.len() != len {
            self.samples.resize(len, 0.0);
            self.spectrum.resize(len, Complex::new(0.0, 0.0));
        }
    }
}

/// Computes magnitude spectra of sample chunks.
///
/// Holds reusable scratch buffers, so analysis takes `&mut self`. Use one
/// analyzer per thread.
pub struct SpectrumAnalyzer<T> {
    sample_rate: u32,
    window: Option<Box<dyn WindowFunction>>,
    engine: Box<dyn FftEngine>,
    scratch: Scratch,
    _sample: PhantomData<fn(&[T])>,
}

impl<T: AudioSample> SpectrumAnalyzer<T> {
    /// Creates an analyzer without a window, using the radix-2 transform.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] when `sample_rate` is zero.
    pub fn new(sample_rate: u32) -> AudioSampleResult<Self> {
        if sample_rate == 0 {
            return Err(ParameterError::invalid_value("sample_rate", "must be greater than 0").into());
        }
        Ok(Self {
            sample_rate,
            window: None,
            engine: FftBackend::Radix2.engine(),
            scratch: Scratch::default(),
            _sample: PhantomData,
        })
    }

    /// Creates an analyzer from a [`SpectrumConfig`].
    ///
    /// # Errors
    /// Returns a [`ParameterError`] when the sample rate is zero.
    pub fn from_config(config: &SpectrumConfig) -> AudioSampleResult<Self> {
        let mut analyzer = Self::new(config.sample_rate)?.with_backend(config.backend);
        if let Some(window) = config.window {
            analyzer = analyzer.with_window(window);
        }
        Ok(analyzer)
    }

    /// Applies `window` to every chunk before the transform.
    pub fn with_window<W>(mut self, window: W) -> Self
    where
        W: WindowFunction + 'static,
    {
        self.window = Some(Box::new(window));
        self
    }

    /// Uses the given FFT backend.
    pub fn with_backend(mut self, backend: FftBackend) -> Self {
        self.engine = backend.engine();
        self
    }

    /// Sample rate in Hz.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Analyzes `chunk` and returns `chunk.len() / 2 - 1` bins.
    ///
    /// Bin `i` (for `i` in `1..N/2`) reports `i * sample_rate / N` Hz, rounded
    /// down, and the magnitude `sqrt(re² + im²)` of the transform.
    ///
    /// # Errors
    /// - [`ParameterError`] when the chunk is shorter than 4 samples, has an
    ///   odd length, or the FFT backend cannot handle its length.
    /// - [`LayoutError::DimensionMismatch`] when the window returns the wrong
    ///   number of coefficients.
    pub fn analyze(&mut self, chunk: &[T]) -> AudioSampleResult<Vec<FrequencyMagnitude>> {
        let mut dst = vec![
            FrequencyMagnitude {
                frequency: 0,
                magnitude: 0.0,
            };
            chunk.len().saturating_sub(2) / 2
        ];
        self.analyze_into(chunk, &mut dst)?;
        Ok(dst)
    }

    /// Analyzes `chunk` into a caller-provided slice of `chunk.len() / 2 - 1` bins.
    ///
    /// # Errors
    /// As [`SpectrumAnalyzer::analyze`], plus a [`LayoutError::DimensionMismatch`]
    /// when `dst` has the wrong length.
    pub fn analyze_into(
        &mut self,
        chunk: &[T],
        dst: &mut [FrequencyMagnitude],
    ) -> AudioSampleResult<()> {
        let n = chunk.len();
        if n < MIN_CHUNK || n % 2 != 0 {
            return Err(ParameterError::invalid_value(
                "chunk",
                format!("length must be even and at least {MIN_CHUNK}, got {n}"),
            )
            .into());
        }
        let bins = n / 2 - 1;
        if dst.len() != bins {
            return Err(LayoutError::dimension_mismatch("analyze", bins, dst.len()).into());
        }

        self.scratch.resize_if_needed(n);
        conversions::to_float(chunk, &mut self.scratch.samples)?;
        if let Some(window) = &self.window {
            window.apply(&mut self.scratch.samples)?;
        }
        for (c, s) in self.scratch.spectrum.iter_mut().zip(&self.scratch.samples) {
            *c = Complex::new(*s, 0.0);
        }
        self.engine.forward(&mut self.scratch.spectrum)?;

        let rate = u64::from(self.sample_rate);
        for (i, bin) in dst.iter_mut().enumerate() {
            let index = i + 1;
            let value = self.scratch.spectrum[index];
            *bin = FrequencyMagnitude {
                frequency: (index as u64 * rate / n as u64) as u32,
                magnitude: (value.re * value.re + value.im * value.im).sqrt(),
            };
        }
        Ok(())
    }
}

impl<T> fmt::Debug for SpectrumAnalyzer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectrumAnalyzer")
            .field("sample_rate", &self.sample_rate)
            .field("windowed", &self.window.is_some())
            .field("engine", &self.engine.name())
            .finish()
    }
}

/// Returns the bin with the largest magnitude, or `None` for an empty spectrum.
pub fn peak_frequency(spectrum: &[FrequencyMagnitude]) -> Option<FrequencyMagnitude> {
    spectrum
        .iter()
        .copied()
        .max_by(|a, b| a.magnitude.total_cmp(&b.magnitude))
}

/// Signal-to-quantization-noise ratio in dB for `bits` bits of resolution,
/// `20 · log10(2^bits)`.
pub fn sqnr(bits: u32) -> f64 {
    20.0 * 2f64.powi(bits as i32).log10()
}
