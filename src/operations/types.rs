//! Supporting types and configuration for the operations modules.

use serde::{Deserialize, Serialize};

/// Window function types for spectral analysis and filter design.
///
/// Each window trades main-lobe width against side-lobe leakage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowType {
    /// Rectangular window (no windowing) - best frequency resolution but high leakage.
    Rectangular,
    /// Hanning window - good general-purpose window with moderate leakage.
    Hanning,
    /// Hamming window - similar to Hanning but does not reach zero at the edges.
    Hamming,
    /// Blackman window - low leakage but wider main lobe.
    Blackman,
}

/// FFT implementation used by the spectrum analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FftBackend {
    /// Built-in iterative radix-2 transform. Lengths must be powers of two.
    #[default]
    Radix2,
    /// `rustfft` planner. Accepts any length.
    RustFft,
}

/// One bin of a magnitude spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyMagnitude {
    /// Center frequency of the bin in Hz, rounded down.
    pub frequency: u32,
    /// Magnitude of the bin, `sqrt(re² + im²)`.
    pub magnitude: f64,
}

/// Configuration for [`SpectrumAnalyzer`](crate::operations::SpectrumAnalyzer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumConfig {
    /// Sample rate of the analyzed signal in Hz.
    pub sample_rate: u32,
    /// Window applied to each chunk before the transform.
    pub window: Option<WindowType>,
    /// Transform implementation.
    pub backend: FftBackend,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            window: Some(WindowType::Hanning),
            backend: FftBackend::Radix2,
        }
    }
}

impl SpectrumConfig {
    /// Creates a configuration for the given sample rate with the default window and backend.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    /// Sets the window.
    pub const fn with_window(mut self, window: Option<WindowType>) -> Self {
        self.window = window;
        self
    }

    /// Sets the FFT backend.
    pub const fn with_backend(mut self, backend: FftBackend) -> Self {
        self.backend = backend;
        self
    }
}
