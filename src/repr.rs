//! Core audio sample representation and data structures.
//!
//! - [`Samples<T>`] - one channel of samples, in temporal order
//! - [`Buffer<T>`] - one [`Samples<T>`] per channel
//! - [`SampleFormat`] - runtime tag for a sample representation
//! - [`DynSamples`] - a channel whose representation is only known at runtime
//!
//! # Examples
//!
//! ```rust
//! use audio_dsp::{Buffer, Samples};
//!
//! let left = Samples::from(vec![0i16, 1, 2, 3]);
//! let right = Samples::from(vec![10i16, 11, 12]);
//! let stereo = Buffer::new(vec![left, right]);
//!
//! assert_eq!(stereo.channels(), 2);
//! // The shortest channel bounds every multi-channel operation.
//! assert_eq!(stereo.samples(), 3);
//! assert_eq!(stereo.interleave().as_slice(), &[0, 10, 1, 11, 2, 12]);
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::{AudioSample, AudioSampleResult, LayoutError, ParameterError};

/// Runtime tag describing how a sample is stored.
///
/// The ten real kinds mirror the [`AudioSample`] implementations. The two
/// complex kinds can be stored and coded as bytes, but they are not a valid
/// source for the conversion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer.
    U16,
    /// Unsigned 32-bit integer.
    U32,
    /// Unsigned 64-bit integer.
    U64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Pair of 32-bit floats (real, imaginary).
    Complex64,
    /// Pair of 64-bit floats (real, imaginary).
    Complex128,
}

impl SampleFormat {
    /// Every supported format.
    pub const ALL: [SampleFormat; 12] = [
        SampleFormat::I8,
        SampleFormat::I16,
        SampleFormat::I32,
        SampleFormat::I64,
        SampleFormat::U8,
        SampleFormat::U16,
        SampleFormat::U32,
        SampleFormat::U64,
        SampleFormat::F32,
        SampleFormat::F64,
        SampleFormat::Complex64,
        SampleFormat::Complex128,
    ];

    /// Number of bits required to store one sample.
    pub const fn bits_per_sample(self) -> usize {
        match self {
            SampleFormat::I8 | SampleFormat::U8 => 8,
            SampleFormat::I16 | SampleFormat::U16 => 16,
            SampleFormat::I32 | SampleFormat::U32 | SampleFormat::F32 => 32,
            SampleFormat::I64 | SampleFormat::U64 | SampleFormat::F64 => 64,
            SampleFormat::Complex64 => 64,
            SampleFormat::Complex128 => 128,
        }
    }

    /// Number of bytes required to store one sample.
    pub const fn bytes_per_sample(self) -> usize {
        self.bits_per_sample() / 8
    }

    /// Returns true for the two complex kinds.
    pub const fn is_complex(self) -> bool {
        matches!(self, SampleFormat::Complex64 | SampleFormat::Complex128)
    }

    /// Returns true for the real floating point kinds.
    pub const fn is_float(self) -> bool {
        matches!(self, SampleFormat::F32 | SampleFormat::F64)
    }

    /// Returns true for the unsigned integer kinds.
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            SampleFormat::U8 | SampleFormat::U16 | SampleFormat::U32 | SampleFormat::U64
        )
    }

    /// Short lowercase name, e.g. `"i16"`.
    pub const fn name(self) -> &'static str {
        match self {
            SampleFormat::I8 => "i8",
            SampleFormat::I16 => "i16",
            SampleFormat::I32 => "i32",
            SampleFormat::I64 => "i64",
            SampleFormat::U8 => "u8",
            SampleFormat::U16 => "u16",
            SampleFormat::U32 => "u32",
            SampleFormat::U64 => "u64",
            SampleFormat::F32 => "f32",
            SampleFormat::F64 => "f64",
            SampleFormat::Complex64 => "complex64",
            SampleFormat::Complex128 => "complex128",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleFormat {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        SampleFormat::ALL
            .into_iter()
            .find(|format| format.name() == lower)
            .ok_or_else(|| {
                ParameterError::invalid_value("sample_format", format!("unknown format '{s}'"))
            })
    }
}

/// A mono sequence of samples, or a single channel.
///
/// Insertion order is temporal order. Dereferences to `[T]`, so slice methods
/// (`len`, `iter`, indexing, ...) are available directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Samples<T> {
    data: Vec<T>,
}

impl<T: AudioSample> Samples<T> {
    /// Creates an empty sequence.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a sequence of `len` silent (zero) samples.
    pub fn silence(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    /// Number of bits required to store one sample.
    pub const fn bits_per_sample(&self) -> usize {
        T::BITS as usize
    }

    /// Runtime tag of the sample representation.
    pub const fn format(&self) -> SampleFormat {
        T::FORMAT
    }

    /// Appends samples to the end.
    pub fn push<I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.data.extend(samples);
    }

    /// Removes and returns the last sample, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Removes `n` samples from the start and returns them in order.
    ///
    /// # Errors
    /// Returns a [`LayoutError::DimensionMismatch`] when fewer than `n`
    /// samples are held.
    pub fn shift(&mut self, n: usize) -> AudioSampleResult<Samples<T>> {
        if n > self.data.len() {
            return Err(LayoutError::dimension_mismatch("shift", n, self.data.len()).into());
        }
        Ok(self.data.drain(..n).collect())
    }

    /// Inserts samples at the start, keeping their order.
    pub fn unshift(&mut self, samples: &[T]) {
        self.data.splice(0..0, samples.iter().copied());
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Native-endian byte view of the samples.
    pub fn as_ne_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Consumes the sequence and returns the inner vector.
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T> Deref for Samples<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for Samples<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> From<Vec<T>> for Samples<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Copy> From<&[T]> for Samples<T> {
    fn from(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Samples<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Samples<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Samples<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// A multi-channel audio buffer: one [`Samples<T>`] per channel.
///
/// Channels may differ in length. Operations that walk all channels together
/// use [`Buffer::samples`], the length of the shortest channel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Buffer<T> {
    channels: Vec<Samples<T>>,
}

impl<T: AudioSample> Buffer<T> {
    /// Creates a buffer from per-channel sequences.
    pub const fn new(channels: Vec<Samples<T>>) -> Self {
        Self { channels }
    }

    /// Creates a buffer of `channels` silent channels, `samples` long each.
    pub fn silence(channels: usize, samples: usize) -> Self {
        Self {
            channels: (0..channels).map(|_| Samples::silence(samples)).collect(),
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel: the length of the shortest channel.
    ///
    /// Returns 0 for a buffer without channels.
    pub fn samples(&self) -> usize {
        self.channels.iter().map(|c| c.len()).min().unwrap_or(0)
    }

    /// Number of bits required to store one sample.
    pub const fn bits_per_sample(&self) -> usize {
        T::BITS as usize
    }

    /// Borrow one channel.
    pub fn channel(&self, index: usize) -> Option<&Samples<T>> {
        self.channels.get(index)
    }

    /// Mutably borrow one channel.
    pub fn channel_mut(&mut self, index: usize) -> Option<&mut Samples<T>> {
        self.channels.get_mut(index)
    }

    /// Appends a channel.
    pub fn push_channel(&mut self, channel: Samples<T>) {
        self.channels.push(channel);
    }

    /// Iterates over the channels.
    pub fn iter(&self) -> std::slice::Iter<'_, Samples<T>> {
        self.channels.iter()
    }

    /// Iterates mutably over the channels.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Samples<T>> {
        self.channels.iter_mut()
    }

    /// Consumes the buffer and returns the channels.
    pub fn into_channels(self) -> Vec<Samples<T>> {
        self.channels
    }

    /// Interleaves the channels into a single sequence (round-robin by channel).
    ///
    /// Only the first [`Buffer::samples`] samples of each channel are used.
    pub fn interleave(&self) -> Samples<T> {
        let mut dst = vec![T::zero(); self.channels() * self.samples()];
        self.write_interleaved(&mut dst);
        Samples::from(dst)
    }

    /// Interleaves into a caller-provided slice.
    ///
    /// # Errors
    /// Returns a [`LayoutError::DimensionMismatch`] when `dst` does not hold
    /// exactly `channels() * samples()` samples.
    pub fn interleave_into(&self, dst: &mut [T]) -> AudioSampleResult<()> {
        let expected = self.channels() * self.samples();
        if dst.len() != expected {
            return Err(LayoutError::dimension_mismatch("interleave", expected, dst.len()).into());
        }
        self.write_interleaved(dst);
        Ok(())
    }

    fn write_interleaved(&self, dst: &mut [T]) {
        let channels = self.channels();
        if channels == 0 {
            return;
        }
        if channels == 1 {
            dst.copy_from_slice(&self.channels[0][..dst.len()]);
            return;
        }
        for (c, channel) in self.channels.iter().enumerate() {
            for (frame, sample) in dst.chunks_exact_mut(channels).zip(channel.iter()) {
                frame[c] = *sample;
            }
        }
    }

    /// Splits interleaved samples into `channels` channels.
    ///
    /// A trailing partial frame is ignored.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] when `channels` is zero.
    pub fn deinterleave(src: &[T], channels: usize) -> AudioSampleResult<Self> {
        if channels == 0 {
            return Err(ParameterError::invalid_value("channels", "must be at least 1").into());
        }
        let mut buffer = Self::silence(channels, src.len() / channels);
        buffer.write_deinterleaved(src);
        Ok(buffer)
    }

    /// Splits interleaved samples into the existing channels of this buffer.
    ///
    /// A buffer without channels accepts only an empty `src` and is left as is.
    ///
    /// # Errors
    /// Returns a [`LayoutError::DimensionMismatch`] when `src` does not hold
    /// exactly `channels() * samples()` samples.
    pub fn deinterleave_from(&mut self, src: &[T]) -> AudioSampleResult<()> {
        let expected = self.channels() * self.samples();
        if src.len() != expected {
            return Err(LayoutError::dimension_mismatch("deinterleave", expected, src.len()).into());
        }
        self.write_deinterleaved(src);
        Ok(())
    }

    fn write_deinterleaved(&mut self, src: &[T]) {
        let channels = self.channels();
        if channels == 0 {
            return;
        }
        if channels == 1 {
            let n = src.len();
            self.channels[0][..n].copy_from_slice(src);
            return;
        }
        for (i, frame) in src.chunks_exact(channels).enumerate() {
            for (channel, sample) in self.channels.iter_mut().zip(frame) {
                channel[i] = *sample;
            }
        }
    }
}

impl<T> From<Vec<Samples<T>>> for Buffer<T> {
    fn from(channels: Vec<Samples<T>>) -> Self {
        Self { channels }
    }
}

impl<T: AudioSample> From<Vec<Vec<T>>> for Buffer<T> {
    fn from(channels: Vec<Vec<T>>) -> Self {
        Self {
            channels: channels.into_iter().map(Samples::from).collect(),
        }
    }
}

/// A single channel whose representation is selected at runtime.
///
/// Every [`SampleFormat`] has exactly one variant, so dispatch is an
/// exhaustive `match` rather than a fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum DynSamples {
    /// `i8` samples.
    I8(Samples<i8>),
    /// `i16` samples.
    I16(Samples<i16>),
    /// `i32` samples.
    I32(Samples<i32>),
    /// `i64` samples.
    I64(Samples<i64>),
    /// `u8` samples.
    U8(Samples<u8>),
    /// `u16` samples.
    U16(Samples<u16>),
    /// `u32` samples.
    U32(Samples<u32>),
    /// `u64` samples.
    U64(Samples<u64>),
    /// `f32` samples.
    F32(Samples<f32>),
    /// `f64` samples.
    F64(Samples<f64>),
    /// Complex samples with `f32` parts.
    Complex64(Vec<Complex<f32>>),
    /// Complex samples with `f64` parts.
    Complex128(Vec<Complex<f64>>),
}

/// Applies the same expression to whichever real `Samples<T>` a [`DynSamples`]
/// holds, and a second expression to the complex vectors.
macro_rules! dispatch {
    ($value:expr, $s:ident => $real:expr, $c:ident => $complex:expr) => {
        match $value {
            DynSamples::I8($s) => $real,
            DynSamples::I16($s) => $real,
            DynSamples::I32($s) => $real,
            DynSamples::I64($s) => $real,
            DynSamples::U8($s) => $real,
            DynSamples::U16($s) => $real,
            DynSamples::U32($s) => $real,
            DynSamples::U64($s) => $real,
            DynSamples::F32($s) => $real,
            DynSamples::F64($s) => $real,
            DynSamples::Complex64($c) => $complex,
            DynSamples::Complex128($c) => $complex,
        }
    };
}
pub(crate) use dispatch;

impl DynSamples {
    /// Creates `len` zero samples of the given format.
    pub fn silence(format: SampleFormat, len: usize) -> Self {
        match format {
            SampleFormat::I8 => DynSamples::I8(Samples::silence(len)),
            SampleFormat::I16 => DynSamples::I16(Samples::silence(len)),
            SampleFormat::I32 => DynSamples::I32(Samples::silence(len)),
            SampleFormat::I64 => DynSamples::I64(Samples::silence(len)),
            SampleFormat::U8 => DynSamples::U8(Samples::silence(len)),
            SampleFormat::U16 => DynSamples::U16(Samples::silence(len)),
            SampleFormat::U32 => DynSamples::U32(Samples::silence(len)),
            SampleFormat::U64 => DynSamples::U64(Samples::silence(len)),
            SampleFormat::F32 => DynSamples::F32(Samples::silence(len)),
            SampleFormat::F64 => DynSamples::F64(Samples::silence(len)),
            SampleFormat::Complex64 => DynSamples::Complex64(vec![Complex::new(0.0, 0.0); len]),
            SampleFormat::Complex128 => DynSamples::Complex128(vec![Complex::new(0.0, 0.0); len]),
        }
    }

    /// Runtime tag of the held representation.
    pub fn format(&self) -> SampleFormat {
        match self {
            DynSamples::I8(_) => SampleFormat::I8,
            DynSamples::I16(_) => SampleFormat::I16,
            DynSamples::I32(_) => SampleFormat::I32,
            DynSamples::I64(_) => SampleFormat::I64,
            DynSamples::U8(_) => SampleFormat::U8,
            DynSamples::U16(_) => SampleFormat::U16,
            DynSamples::U32(_) => SampleFormat::U32,
            DynSamples::U64(_) => SampleFormat::U64,
            DynSamples::F32(_) => SampleFormat::F32,
            DynSamples::F64(_) => SampleFormat::F64,
            DynSamples::Complex64(_) => SampleFormat::Complex64,
            DynSamples::Complex128(_) => SampleFormat::Complex128,
        }
    }

    /// Number of bits required to store one sample.
    pub fn bits_per_sample(&self) -> usize {
        self.format().bits_per_sample()
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        dispatch!(self, s => s.len(), c => c.len())
    }

    /// Returns true when no samples are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_dyn_from {
    ($($type:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<Samples<$type>> for DynSamples {
                fn from(samples: Samples<$type>) -> Self {
                    DynSamples::$variant(samples)
                }
            }
        )+
    };
}

impl_dyn_from!(
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    f32 => F32, f64 => F64,
);

impl From<Vec<Complex<f32>>> for DynSamples {
    fn from(samples: Vec<Complex<f32>>) -> Self {
        DynSamples::Complex64(samples)
    }
}

impl From<Vec<Complex<f64>>> for DynSamples {
    fn from(samples: Vec<Complex<f64>>) -> Self {
        DynSamples::Complex128(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_shift_unshift() {
        let mut samples: Samples<i16> = Samples::new();
        samples.push([1, 2, 3]);
        samples.push(vec![4, 5]);
        assert_eq!(samples.as_slice(), &[1, 2, 3, 4, 5]);

        assert_eq!(samples.pop(), Some(5));
        assert_eq!(samples.as_slice(), &[1, 2, 3, 4]);

        let shifted = samples.shift(2).unwrap();
        assert_eq!(shifted.as_slice(), &[1, 2]);
        assert_eq!(samples.as_slice(), &[3, 4]);

        samples.unshift(&[9, 8]);
        assert_eq!(samples.as_slice(), &[9, 8, 3, 4]);
    }

    #[test]
    fn test_pop_and_shift_on_short_sequences() {
        let mut samples: Samples<u8> = Samples::new();
        assert_eq!(samples.pop(), None);
        assert!(samples.shift(1).is_err());
        assert!(samples.shift(0).unwrap().is_empty());
    }

    #[test]
    fn test_sample_bits_per_sample() {
        assert_eq!(Samples::<i8>::new().bits_per_sample(), 8);
        assert_eq!(Samples::<u16>::new().bits_per_sample(), 16);
        assert_eq!(Samples::<f32>::new().bits_per_sample(), 32);
        assert_eq!(Samples::<u64>::new().bits_per_sample(), 64);
        assert_eq!(Buffer::<i32>::default().bits_per_sample(), 32);
        assert_eq!(SampleFormat::Complex64.bits_per_sample(), 64);
        assert_eq!(SampleFormat::Complex128.bits_per_sample(), 128);
    }

    #[test]
    fn test_buffer_samples_is_shortest_channel() {
        let buffer = Buffer::from(vec![vec![0i16; 8], vec![0; 5], vec![0; 6]]);
        assert_eq!(buffer.channels(), 3);
        assert_eq!(buffer.samples(), 5);
        assert_eq!(Buffer::<i16>::default().samples(), 0);
    }

    #[test]
    fn test_interleave() {
        let buffer = Buffer::from(vec![
            vec![0u8, 0, 0, 0],
            vec![1, 1, 1, 1],
            vec![2, 2, 2, 2],
            vec![3, 3, 3, 3],
        ]);
        let interleaved = buffer.interleave();
        assert_eq!(
            interleaved.as_slice(),
            &[0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]
        );
    }

    #[test]
    fn test_interleave_empty() {
        let buffer: Buffer<u8> = Buffer::default();
        assert!(buffer.interleave().is_empty());
    }

    #[test]
    fn test_interleave_into_checks_length() {
        let buffer = Buffer::from(vec![vec![1i32, 2], vec![3, 4]]);
        let mut dst = [0i32; 3];
        assert!(buffer.interleave_into(&mut dst).is_err());
        let mut dst = [0i32; 4];
        buffer.interleave_into(&mut dst).unwrap();
        assert_eq!(dst, [1, 3, 2, 4]);
    }

    #[test]
    fn test_deinterleave() {
        let src = [0u8, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3];
        let buffer = Buffer::deinterleave(&src, 4).unwrap();
        assert_eq!(buffer.channels(), 4);
        for (c, channel) in buffer.iter().enumerate() {
            assert_eq!(channel.as_slice(), &[c as u8; 4]);
        }
    }

    #[test]
    fn test_deinterleave_mono() {
        let src: Vec<u8> = (0..16).collect();
        let buffer = Buffer::deinterleave(&src, 1).unwrap();
        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.channel(0).unwrap().as_slice(), src.as_slice());
    }

    #[test]
    fn test_deinterleave_zero_channels() {
        assert!(Buffer::<u8>::deinterleave(&[], 0).is_err());
    }

    #[test]
    fn test_deinterleave_from_empty_buffer() {
        let mut buffer = Buffer::<i16>::default();
        buffer.deinterleave_from(&[]).unwrap();
        assert_eq!(buffer.channels(), 0);
        assert!(buffer.deinterleave_from(&[1]).is_err());

        let mut dst: [i16; 0] = [];
        buffer.interleave_into(&mut dst).unwrap();
    }

    #[test]
    fn test_deinterleave_from_existing_buffer() {
        let mut buffer = Buffer::<i16>::silence(2, 3);
        buffer.deinterleave_from(&[1, -1, 2, -2, 3, -3]).unwrap();
        assert_eq!(buffer.channel(0).unwrap().as_slice(), &[1, 2, 3]);
        assert_eq!(buffer.channel(1).unwrap().as_slice(), &[-1, -2, -3]);
        assert!(buffer.deinterleave_from(&[1, 2]).is_err());
    }

    #[test]
    fn test_interleave_round_trip() {
        for channels in 1..=5usize {
            for samples in [0usize, 1, 7, 32] {
                let buffer: Buffer<i32> = (0..channels)
                    .map(|c| {
                        (0..samples)
                            .map(|i| (c * 1000 + i) as i32)
                            .collect::<Samples<i32>>()
                    })
                    .collect::<Vec<_>>()
                    .into();
                let restored = Buffer::deinterleave(&buffer.interleave(), channels).unwrap();
                assert_eq!(restored, buffer);
            }
        }
    }

    #[test]
    fn test_sample_format_parse_and_display() {
        for format in SampleFormat::ALL {
            assert_eq!(format.to_string().parse::<SampleFormat>().unwrap(), format);
        }
        assert_eq!(" I16 ".parse::<SampleFormat>().unwrap(), SampleFormat::I16);
        assert!("i24".parse::<SampleFormat>().is_err());
    }

    #[test]
    fn test_dyn_samples_format_and_len() {
        let samples = DynSamples::from(Samples::from(vec![1u16, 2, 3]));
        assert_eq!(samples.format(), SampleFormat::U16);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples.bits_per_sample(), 16);

        for format in SampleFormat::ALL {
            let silent = DynSamples::silence(format, 4);
            assert_eq!(silent.format(), format);
            assert_eq!(silent.len(), 4);
        }
    }

    #[test]
    fn test_native_byte_view() {
        let samples = Samples::from(vec![0x0102u16]);
        assert_eq!(samples.as_ne_bytes(), &0x0102u16.to_ne_bytes());
    }
}
