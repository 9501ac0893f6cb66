//! # Sample Format Conversions
//!
//! Elementwise conversions from any [`AudioSample`] representation into the
//! three analysis domains: normalized `f64`, complex `f64` and 16-bit PCM.
//!
//! Three layers are provided:
//!
//! - slice functions ([`to_float`], [`to_complex`], [`to_int16`]) writing into
//!   a caller-provided destination of the same length
//! - the [`AudioTypeConversion`] trait, implemented for [`Samples`] and
//!   [`DynSamples`], returning freshly allocated vectors
//! - per-channel helpers on [`Buffer`]
//!
//! ```rust
//! use audio_dsp::{AudioTypeConversion, Samples};
//!
//! let pcm = Samples::from(vec![0i16, 16384, -32768]);
//! assert_eq!(pcm.to_float().unwrap(), vec![0.0, 0.5, -1.0]);
//! ```

use num_complex::Complex;

use crate::repr::dispatch;
use crate::{
    AudioSample, AudioSampleResult, AudioTypeConversion, Buffer, ConversionError, DynSamples,
    LayoutError, Samples,
};

fn check_lengths(operation: &'static str, src: usize, dst: usize) -> AudioSampleResult<()> {
    if src != dst {
        return Err(LayoutError::dimension_mismatch(operation, src, dst).into());
    }
    Ok(())
}

/// Converts `src` into the normalized `f64` domain.
///
/// # Errors
/// Returns a [`LayoutError::DimensionMismatch`] when the lengths differ.
pub fn to_float<T: AudioSample>(src: &[T], dst: &mut [f64]) -> AudioSampleResult<()> {
    check_lengths("to_float", src.len(), dst.len())?;
    for (d, s) in dst.iter_mut().zip(src) {
        *d = s.to_float();
    }
    Ok(())
}

/// Converts `src` into complex values with a zero imaginary part.
///
/// # Errors
/// Returns a [`LayoutError::DimensionMismatch`] when the lengths differ.
pub fn to_complex<T: AudioSample>(src: &[T], dst: &mut [Complex<f64>]) -> AudioSampleResult<()> {
    check_lengths("to_complex", src.len(), dst.len())?;
    for (d, s) in dst.iter_mut().zip(src) {
        *d = Complex::new(s.to_float(), 0.0);
    }
    Ok(())
}

/// Converts `src` into 16-bit PCM.
///
/// See [`AudioSample::to_int16`] for the rounding rules.
///
/// # Errors
/// Returns a [`LayoutError::DimensionMismatch`] when the lengths differ.
pub fn to_int16<T: AudioSample>(src: &[T], dst: &mut [i16]) -> AudioSampleResult<()> {
    check_lengths("to_int16", src.len(), dst.len())?;
    for (d, s) in dst.iter_mut().zip(src) {
        *d = s.to_int16();
    }
    Ok(())
}

impl<T: AudioSample> AudioTypeConversion for Samples<T> {
    fn to_float(&self) -> AudioSampleResult<Vec<f64>> {
        Ok(self.iter().map(|s| s.to_float()).collect())
    }

    fn to_complex(&self) -> AudioSampleResult<Vec<Complex<f64>>> {
        Ok(self.iter().map(|s| Complex::new(s.to_float(), 0.0)).collect())
    }

    fn to_int16(&self) -> AudioSampleResult<Vec<i16>> {
        Ok(self.iter().map(|s| s.to_int16()).collect())
    }
}

impl AudioTypeConversion for DynSamples {
    fn to_float(&self) -> AudioSampleResult<Vec<f64>> {
        dispatch!(
            self,
            s => s.to_float(),
            _c => Err(ConversionError::unsupported(self.format(), "to_float").into())
        )
    }

    fn to_complex(&self) -> AudioSampleResult<Vec<Complex<f64>>> {
        dispatch!(
            self,
            s => s.to_complex(),
            _c => Err(ConversionError::unsupported(self.format(), "to_complex").into())
        )
    }

    fn to_int16(&self) -> AudioSampleResult<Vec<i16>> {
        dispatch!(
            self,
            s => s.to_int16(),
            _c => Err(ConversionError::unsupported(self.format(), "to_int16").into())
        )
    }
}

impl<T: AudioSample> Buffer<T> {
    /// Converts each channel into the normalized `f64` domain.
    pub fn to_float(&self) -> Buffer<f64> {
        self.iter()
            .map(|channel| channel.iter().map(|s| s.to_float()).collect::<Samples<f64>>())
            .collect::<Vec<_>>()
            .into()
    }

    /// Averages all channels into one normalized `f64` channel.
    ///
    /// Only the first [`Buffer::samples`] positions are used. A buffer without
    /// channels yields an empty result.
    pub fn to_mono(&self) -> Samples<f64> {
        let len = self.samples();
        match self.channels() {
            0 => Samples::new(),
            1 => self.iter().flat_map(|c| c[..len].iter().map(|s| s.to_float())).collect(),
            channels => {
                let mut mono = vec![0.0; len];
                for channel in self.iter() {
                    for (m, s) in mono.iter_mut().zip(&channel[..len]) {
                        *m += s.to_float();
                    }
                }
                let scale = 1.0 / channels as f64;
                mono.iter_mut().for_each(|m| *m *= scale);
                Samples::from(mono)
            }
        }
    }

    /// Averages all channels into one channel of the same kind.
    ///
    /// Raw values are summed in `f64` and the mean is converted back with
    /// [`AudioSample::from_f64`], so integer kinds truncate toward zero.
    pub fn mix_to_mono(&self) -> Samples<T> {
        let len = self.samples();
        match self.channels() {
            0 => Samples::new(),
            1 => self.iter().flat_map(|c| c[..len].iter().copied()).collect(),
            channels => (0..len)
                .map(|i| {
                    let total: f64 = self.iter().map(|c| c[i].as_f64()).sum();
                    T::from_f64(total / channels as f64)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AudioSampleError, SampleFormat};

    #[test]
    fn test_slice_to_float() {
        let src = [0i8, 64, -128, 127];
        let mut dst = [0.0; 4];
        to_float(&src, &mut dst).unwrap();
        assert_eq!(dst[..3], [0.0, 0.5, -1.0]);
        assert!(dst[3] < 1.0);
    }

    #[test]
    fn test_slice_length_mismatch() {
        let mut dst = [0.0; 2];
        let err = to_float(&[1u8, 2, 3], &mut dst).unwrap_err();
        assert!(matches!(err, AudioSampleError::Layout(_)));

        let mut dst = [Complex::new(0.0, 0.0); 1];
        assert!(to_complex(&[1u8, 2], &mut dst).is_err());

        let mut dst = [0i16; 3];
        assert!(to_int16(&[1u8, 2], &mut dst).is_err());
    }

    #[test]
    fn test_empty_conversions() {
        let empty: [f32; 0] = [];
        to_float(&empty, &mut []).unwrap();
        to_int16(&empty, &mut []).unwrap();
        assert!(Samples::<u8>::new().to_complex().unwrap().is_empty());
    }

    #[test]
    fn test_to_complex_has_zero_imaginary_part() {
        let src = Samples::from(vec![0u16, 32768, 65535]);
        let complex = src.to_complex().unwrap();
        let float = src.to_float().unwrap();
        for (c, f) in complex.iter().zip(&float) {
            assert_eq!(c.re, *f);
            assert_eq!(c.im, 0.0);
        }
        assert_eq!(complex[0].re, -1.0);
        assert_eq!(complex[1].re, 0.0);
    }

    #[test]
    fn test_f32_passthrough() {
        let src = Samples::from(vec![0.25f32, -0.75, 1.0]);
        assert_eq!(src.to_float().unwrap(), vec![0.25, -0.75, 1.0]);
        assert_eq!(src.to_int16().unwrap(), vec![8192, -24576, i16::MAX]);
    }

    #[test]
    fn test_dyn_samples_dispatch() {
        let samples = DynSamples::from(Samples::from(vec![0x4000i16, -0x4000]));
        assert_eq!(samples.to_float().unwrap(), vec![0.5, -0.5]);
        assert_eq!(samples.to_int16().unwrap(), vec![0x4000, -0x4000]);

        let samples = DynSamples::from(Samples::from(vec![0x8000_0000u32]));
        assert_eq!(samples.to_complex().unwrap(), vec![Complex::new(0.0, 0.0)]);
    }

    #[test]
    fn test_complex_source_is_unsupported() {
        for format in [SampleFormat::Complex64, SampleFormat::Complex128] {
            let samples = DynSamples::silence(format, 2);
            for result in [
                samples.to_float().map(|_| ()),
                samples.to_complex().map(|_| ()),
                samples.to_int16().map(|_| ()),
            ] {
                match result {
                    Err(AudioSampleError::Conversion(ConversionError::UnsupportedRepresentation {
                        format: rejected,
                        ..
                    })) => assert_eq!(rejected, format),
                    other => panic!("expected unsupported representation, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_buffer_to_float_converts_each_channel() {
        let buffer = Buffer::from(vec![vec![0i16, 16384], vec![-16384, -32768]]);
        let float = buffer.to_float();
        assert_eq!(float.channel(0).unwrap().as_slice(), &[0.0, 0.5]);
        assert_eq!(float.channel(1).unwrap().as_slice(), &[-0.5, -1.0]);
    }

    #[test]
    fn test_buffer_to_mono() {
        let buffer = Buffer::from(vec![vec![16384i16, 0, 8192], vec![-16384, 16384]]);
        assert_eq!(buffer.to_mono().as_slice(), &[0.0, 0.25]);

        let mono = Buffer::from(vec![vec![0u8, 128]]);
        assert_eq!(mono.to_mono().as_slice(), &[-1.0, 0.0]);

        assert!(Buffer::<f32>::default().to_mono().is_empty());
    }

    #[test]
    fn test_buffer_mix_to_mono_keeps_kind() {
        let buffer = Buffer::from(vec![vec![3i16, 0, 8], vec![-1, 4]]);
        assert_eq!(buffer.mix_to_mono().as_slice(), &[1, 2]);

        let unsigned = Buffer::from(vec![vec![255u8, 10], vec![0, 20]]);
        assert_eq!(unsigned.mix_to_mono().as_slice(), &[127, 15]);

        let mono = Buffer::from(vec![vec![0.5f32, -0.25]]);
        assert_eq!(mono.mix_to_mono().as_slice(), &[0.5, -0.25]);

        assert!(Buffer::<i32>::default().mix_to_mono().is_empty());
    }
}
