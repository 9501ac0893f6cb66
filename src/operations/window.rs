//! Window functions for spectral analysis and filter design.
//!
//! A window is anything that can produce `len` coefficients. [`WindowType`]
//! covers the classic windows, and any `Fn(usize) -> Vec<f64>` closure can be
//! used wherever a [`WindowFunction`] is expected.
//!
//! ```rust
//! use audio_dsp::operations::{WindowFunction, WindowType};
//!
//! let hamming = WindowType::Hamming.coefficients(5);
//! assert!((hamming[2] - 1.0).abs() < 1e-12);
//!
//! let flat = |len: usize| vec![0.5; len];
//! assert_eq!(flat.coefficients(3), vec![0.5, 0.5, 0.5]);
//! ```

use std::f64::consts::PI;

use super::types::WindowType;
use crate::{AudioSampleResult, LayoutError};

/// A strategy that produces window coefficients for a given length.
pub trait WindowFunction {
    /// Returns exactly `len` coefficients.
    fn coefficients(&self, len: usize) -> Vec<f64>;

    /// Multiplies `samples` elementwise by `coefficients(samples.len())`.
    ///
    /// # Errors
    /// Returns a [`LayoutError::DimensionMismatch`] when the window produces a
    /// different number of coefficients than requested.
    fn apply(&self, samples: &mut [f64]) -> AudioSampleResult<()> {
        let coefficients = self.coefficients(samples.len());
        if coefficients.len() != samples.len() {
            return Err(LayoutError::dimension_mismatch(
                "window",
                samples.len(),
                coefficients.len(),
            )
            .into());
        }
        for (s, w) in samples.iter_mut().zip(coefficients) {
            *s *= w;
        }
        Ok(())
    }
}

impl WindowFunction for WindowType {
    fn coefficients(&self, len: usize) -> Vec<f64> {
        generate_window(len, *self)
    }
}

impl<F> WindowFunction for F
where
    F: Fn(usize) -> Vec<f64>,
{
    fn coefficients(&self, len: usize) -> Vec<f64> {
        self(len)
    }
}

/// Generates `size` coefficients of the given window type.
///
/// Windows of length 0 or 1 are all ones.
pub fn generate_window(size: usize, window_type: WindowType) -> Vec<f64> {
    if size <= 1 {
        return vec![1.0; size];
    }
    let n_max = (size - 1) as f64;
    match window_type {
        WindowType::Rectangular => vec![1.0; size],
        WindowType::Hanning => (0..size)
            .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / n_max).cos()))
            .collect(),
        WindowType::Hamming => (0..size)
            .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f64 / n_max).cos())
            .collect(),
        WindowType::Blackman => (0..size)
            .map(|i| {
                let n = i as f64;
                0.42 - 0.5 * (2.0 * PI * n / n_max).cos() + 0.08 * (4.0 * PI * n / n_max).cos()
            })
            .collect(),
    }
}
