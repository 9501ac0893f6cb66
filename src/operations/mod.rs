//! Audio processing operations and spectral analysis.
//!
//! ## Module Organization
//!
//! - [`traits`] - Core trait definitions
//! - [`statistics`] - Statistical analysis operations
//! - [`processing`] - Clipping, normalization and DC removal
//! - [`window`] - Window functions
//! - [`fft`] - FFT engines and convolution (`spectral-analysis` feature)
//! - [`spectrum`] - Magnitude spectrum analysis (`spectral-analysis` feature)
//! - [`fir`] - Windowed-sinc FIR filters (`fir` feature)
//! - [`types`] - Supporting types and enums
//!
//! ## Quick Start
//!
//! ```rust
//! use audio_dsp::Samples;
//! use audio_dsp::operations::{AudioProcessing, AudioStatistics};
//!
//! let mut samples = Samples::from(vec![0.5f32, -2.0, 1.0]);
//! assert_eq!(samples.peak(), 2.0);
//!
//! samples.normalize();
//! assert_eq!(samples.as_slice(), &[0.25, -1.0, 0.5]);
//! ```

// Public module declarations
pub mod traits;
pub mod types;

pub mod processing;
pub mod statistics;
pub mod window;

#[cfg(feature = "spectral-analysis")]
pub mod fft;
#[cfg(feature = "fir")]
pub mod fir;
#[cfg(feature = "spectral-analysis")]
pub mod spectrum;

pub use traits::{AudioProcessing, AudioStatistics};

pub use types::{FftBackend, FrequencyMagnitude, SpectrumConfig, WindowType};

pub use window::{WindowFunction, generate_window};

#[cfg(feature = "spectral-analysis")]
pub use fft::{FftEngine, Radix2Fft, RustFftEngine, convolve, fft, ifft};
#[cfg(feature = "spectral-analysis")]
pub use spectrum::{SpectrumAnalyzer, peak_frequency, sqnr};

#[cfg(feature = "fir")]
pub use fir::{DEFAULT_TAPS, FirFilter, SincFilter, high_pass, low_pass};
