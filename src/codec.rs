//! Byte-exact encoding and decoding of samples.
//!
//! Every sample occupies `BITS / 8` bytes. The bytes are read as an unsigned
//! integer in the chosen [`ByteOrder`] and the bits are reinterpreted as the
//! sample type, so floats round-trip through their IEEE-754 bit patterns.
//!
//! ```rust
//! use audio_dsp::{ByteOrder, decode_samples, encode_samples};
//!
//! let mut bytes = [0u8; 4];
//! encode_samples(&[1i16, -2], &mut bytes, ByteOrder::BigEndian).unwrap();
//! assert_eq!(bytes, [0x00, 0x01, 0xff, 0xfe]);
//!
//! let mut samples = [0i16; 2];
//! decode_samples(&mut samples, &bytes, ByteOrder::BigEndian).unwrap();
//! assert_eq!(samples, [1, -2]);
//! ```

use std::io::{Read, Write};

use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::repr::dispatch;
use crate::{
    AudioSample, AudioSampleError, AudioSampleResult, DynSamples, LayoutError, SampleFormat, Samples,
};

/// Order of the bytes inside one encoded sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Most significant byte first.
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// Byte order of the target platform.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    /// Returns true when this order matches the target platform.
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::native()),
            (ByteOrder::BigEndian, ByteOrder::BigEndian)
                | (ByteOrder::LittleEndian, ByteOrder::LittleEndian)
        )
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}

/// Settings for streaming sample transfer over byte streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Byte order of the encoded stream.
    pub byte_order: ByteOrder,
    /// Number of samples moved per read or write call.
    pub chunk_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::native(),
            chunk_size: 1024,
        }
    }
}

impl CodecConfig {
    /// Creates a configuration with the given byte order and the default chunk size.
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ..Self::default()
        }
    }

    /// Sets the chunk size.
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

/// Decodes `dst.len()` samples from the front of `bytes`.
///
/// # Errors
/// Returns a [`LayoutError::DimensionMismatch`] when `bytes` holds fewer than
/// `dst.len() * T::BYTES` bytes.
pub fn decode_samples<T: AudioSample>(
    dst: &mut [T],
    bytes: &[u8],
    order: ByteOrder,
) -> AudioSampleResult<()> {
    let required = dst.len() * T::BYTES;
    if bytes.len() < required {
        return Err(LayoutError::dimension_mismatch("decode", required, bytes.len()).into());
    }
    let bytes = &bytes[..required];

    if order.is_native() {
        bytemuck::cast_slice_mut::<T, u8>(dst).copy_from_slice(bytes);
        return Ok(());
    }

    for (sample, raw) in dst.iter_mut().zip(bytes.chunks_exact(T::BYTES)) {
        *sample = T::read_bytes(raw, order);
    }
    Ok(())
}

/// Encodes every sample of `src` into the front of `bytes`.
///
/// # Errors
/// Returns a [`LayoutError::DimensionMismatch`] when `bytes` holds fewer than
/// `src.len() * T::BYTES` bytes.
pub fn encode_samples<T: AudioSample>(
    src: &[T],
    bytes: &mut [u8],
    order: ByteOrder,
) -> AudioSampleResult<()> {
    let required = src.len() * T::BYTES;
    if bytes.len() < required {
        return Err(LayoutError::dimension_mismatch("encode", required, bytes.len()).into());
    }
    let bytes = &mut bytes[..required];

    if order.is_native() {
        bytes.copy_from_slice(bytemuck::cast_slice::<T, u8>(src));
        return Ok(());
    }

    for (sample, raw) in src.iter().zip(bytes.chunks_exact_mut(T::BYTES)) {
        sample.write_bytes(raw, order);
    }
    Ok(())
}

/// Decodes as many whole samples as `bytes` holds. Trailing bytes are ignored.
pub fn decode_bytes<T: AudioSample>(bytes: &[u8], order: ByteOrder) -> Samples<T> {
    bytes
        .chunks_exact(T::BYTES)
        .map(|raw| T::read_bytes(raw, order))
        .collect()
}

/// Encodes every sample of `src` into a new byte vector.
pub fn encode_bytes<T: AudioSample>(src: &[T], order: ByteOrder) -> Vec<u8> {
    let mut bytes = vec![0u8; src.len() * T::BYTES];
    for (sample, raw) in src.iter().zip(bytes.chunks_exact_mut(T::BYTES)) {
        sample.write_bytes(raw, order);
    }
    bytes
}

/// Fills `dst` from `reader`, `chunk_size` samples at a time.
///
/// Returns the number of samples decoded, which is always `dst.len()` on
/// success. The last chunk holds `dst.len() % chunk_size` samples when the
/// length is not a multiple of the chunk size. Each chunk is read with
/// [`Read::read_exact`], so readers returning fewer bytes per call are retried.
///
/// # Errors
/// - [`AudioSampleError::ShortBuffer`] when `dst` is empty or `chunk_size` is 0.
/// - [`AudioSampleError::Transfer`] when the reader fails or ends early. The
///   error carries the number of samples decoded by the preceding chunks.
pub fn decode_from_chunked<T, R>(
    dst: &mut [T],
    reader: &mut R,
    order: ByteOrder,
    chunk_size: usize,
) -> AudioSampleResult<usize>
where
    T: AudioSample,
    R: Read + ?Sized,
{
    if dst.is_empty() || chunk_size == 0 {
        return Err(AudioSampleError::short_buffer("decode"));
    }

    let mut raw = vec![0u8; chunk_size.min(dst.len()) * T::BYTES];
    let mut transferred = 0;
    for chunk in dst.chunks_mut(chunk_size) {
        let bytes = &mut raw[..chunk.len() * T::BYTES];
        reader
            .read_exact(bytes)
            .map_err(|err| AudioSampleError::transfer(transferred, err))?;
        decode_samples(chunk, bytes, order)?;
        tracing::trace!(
            offset = transferred,
            samples = chunk.len(),
            bytes = bytes.len(),
            "decoded chunk"
        );
        transferred += chunk.len();
    }
    Ok(transferred)
}

/// Writes every sample of `src` to `writer`, `chunk_size` samples at a time.
///
/// # Errors
/// - [`AudioSampleError::ShortBuffer`] when `src` is empty or `chunk_size` is 0.
/// - [`AudioSampleError::Transfer`] when the writer fails or accepts fewer
///   bytes than offered.
pub fn encode_to_chunked<T, W>(
    src: &[T],
    writer: &mut W,
    order: ByteOrder,
    chunk_size: usize,
) -> AudioSampleResult<usize>
where
    T: AudioSample,
    W: Write + ?Sized,
{
    if src.is_empty() || chunk_size == 0 {
        return Err(AudioSampleError::short_buffer("encode"));
    }

    let mut raw = vec![0u8; chunk_size.min(src.len()) * T::BYTES];
    let mut transferred = 0;
    for chunk in src.chunks(chunk_size) {
        let bytes = &mut raw[..chunk.len() * T::BYTES];
        encode_samples(chunk, bytes, order)?;
        writer
            .write_all(bytes)
            .map_err(|err| AudioSampleError::transfer(transferred, err))?;
        tracing::trace!(
            offset = transferred,
            samples = chunk.len(),
            bytes = bytes.len(),
            "encoded chunk"
        );
        transferred += chunk.len();
    }
    Ok(transferred)
}

/// Fills `dst` from `reader` in a single chunk.
///
/// # Errors
/// See [`decode_from_chunked`].
pub fn decode_from<T, R>(dst: &mut [T], reader: &mut R, order: ByteOrder) -> AudioSampleResult<usize>
where
    T: AudioSample,
    R: Read + ?Sized,
{
    let len = dst.len();
    decode_from_chunked(dst, reader, order, len)
}

/// Writes every sample of `src` to `writer` in a single chunk.
///
/// # Errors
/// See [`encode_to_chunked`].
pub fn encode_to<T, W>(src: &[T], writer: &mut W, order: ByteOrder) -> AudioSampleResult<usize>
where
    T: AudioSample,
    W: Write + ?Sized,
{
    encode_to_chunked(src, writer, order, src.len())
}

fn decode_complex<F: AudioSample>(
    dst: &mut [Complex<F>],
    bytes: &[u8],
    order: ByteOrder,
) -> AudioSampleResult<()> {
    let required = dst.len() * 2 * F::BYTES;
    if bytes.len() < required {
        return Err(LayoutError::dimension_mismatch("decode", required, bytes.len()).into());
    }
    for (value, raw) in dst.iter_mut().zip(bytes.chunks_exact(2 * F::BYTES)) {
        let (re, im) = raw.split_at(F::BYTES);
        *value = Complex::new(F::read_bytes(re, order), F::read_bytes(im, order));
    }
    Ok(())
}

fn encode_complex<F: AudioSample>(
    src: &[Complex<F>],
    bytes: &mut [u8],
    order: ByteOrder,
) -> AudioSampleResult<()> {
    let required = src.len() * 2 * F::BYTES;
    if bytes.len() < required {
        return Err(LayoutError::dimension_mismatch("encode", required, bytes.len()).into());
    }
    for (value, raw) in src.iter().zip(bytes.chunks_exact_mut(2 * F::BYTES)) {
        let (re, im) = raw.split_at_mut(F::BYTES);
        value.re.write_bytes(re, order);
        value.im.write_bytes(im, order);
    }
    Ok(())
}

impl DynSamples {
    /// Decodes as many whole samples of `format` as `bytes` holds.
    ///
    /// Complex kinds are stored as interleaved real and imaginary parts.
    pub fn decode(
        format: SampleFormat,
        bytes: &[u8],
        order: ByteOrder,
    ) -> AudioSampleResult<Self> {
        let mut samples = Self::silence(format, bytes.len() / format.bytes_per_sample());
        samples.decode_into(bytes, order)?;
        Ok(samples)
    }

    /// Overwrites every held sample with values decoded from `bytes`.
    ///
    /// # Errors
    /// Returns a [`LayoutError::DimensionMismatch`] when `bytes` is too short.
    pub fn decode_into(&mut self, bytes: &[u8], order: ByteOrder) -> AudioSampleResult<()> {
        dispatch!(self, s => decode_samples(s, bytes, order), c => decode_complex(c, bytes, order))
    }

    /// Encodes every held sample into a new byte vector.
    pub fn encode(&self, order: ByteOrder) -> AudioSampleResult<Vec<u8>> {
        let mut bytes = vec![0u8; self.len() * self.format().bytes_per_sample()];
        self.encode_into(&mut bytes, order)?;
        Ok(bytes)
    }

    /// Encodes every held sample into the front of `bytes`.
    ///
    /// # Errors
    /// Returns a [`LayoutError::DimensionMismatch`] when `bytes` is too short.
    pub fn encode_into(&self, bytes: &mut [u8], order: ByteOrder) -> AudioSampleResult<()> {
        dispatch!(self, s => encode_samples(s, bytes, order), c => encode_complex(c, bytes, order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS: [ByteOrder; 2] = [ByteOrder::BigEndian, ByteOrder::LittleEndian];

    fn round_trip<T: AudioSample>(values: &[T]) {
        for order in ORDERS {
            let mut bytes = vec![0u8; values.len() * T::BYTES];
            encode_samples(values, &mut bytes, order).unwrap();
            let mut decoded = vec![T::zero(); values.len()];
            decode_samples(&mut decoded, &bytes, order).unwrap();
            for (a, b) in values.iter().zip(&decoded) {
                assert_eq!(
                    bytemuck::bytes_of(a),
                    bytemuck::bytes_of(b),
                    "{} round trip failed for {a:?} ({order:?})",
                    T::FORMAT
                );
            }
        }
    }

    #[test]
    fn test_round_trip_every_kind() {
        round_trip(&[i8::MIN, -1, 0, 1, i8::MAX]);
        round_trip(&[u8::MIN, 1, 128, u8::MAX]);
        round_trip(&[i16::MIN, -1, 0, 1, i16::MAX]);
        round_trip(&[u16::MIN, 1, 32768, u16::MAX]);
        round_trip(&[i32::MIN, -1, 0, 0x1234_5678, i32::MAX]);
        round_trip(&[u32::MIN, 1, 0xdead_beef, u32::MAX]);
        round_trip(&[i64::MIN, -1, 0, i64::MAX]);
        round_trip(&[u64::MIN, 1, u64::MAX]);
        round_trip(&[0.0f32, -0.0, 1.5, f32::MIN_POSITIVE, f32::INFINITY, f32::NAN]);
        round_trip(&[0.0f64, -0.0, -2.25, f64::MAX, f64::NEG_INFINITY, f64::NAN]);
    }

    #[test]
    fn test_big_endian_i16() {
        let mut dst = [0i16; 1];
        decode_samples(&mut dst, &[0x7f, 0xff], ByteOrder::BigEndian).unwrap();
        assert_eq!(dst, [32767]);
        decode_samples(&mut dst, &[0x7f, 0xff], ByteOrder::LittleEndian).unwrap();
        assert_eq!(dst, [-129]);
    }

    #[test]
    fn test_byte_order_is_ignored_for_8_bit_kinds() {
        let values = [0i8, 1, 2, 3, -4, -5, -6, -7];
        for order in ORDERS {
            assert_eq!(encode_bytes(&values, order), [0, 1, 2, 3, 252, 251, 250, 249]);
        }
    }

    #[test]
    fn test_i32_big_endian() {
        let values = [0i32, 1, 2, 3, -4, -5, -6, -7];
        let bytes = encode_bytes(&values, ByteOrder::BigEndian);
        assert_eq!(&bytes[4..8], &[0, 0, 0, 1]);
        assert_eq!(&bytes[16..20], &[0xff, 0xff, 0xff, 0xfc]);
        assert_eq!(decode_bytes::<i32>(&bytes, ByteOrder::BigEndian).as_slice(), &values);
    }

    #[test]
    fn test_u64_little_endian() {
        let bytes = encode_bytes(&[0x0102_0304_0506_0708u64], ByteOrder::LittleEndian);
        assert_eq!(bytes, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_f32_big_endian_bit_patterns() {
        let values = [0.0f32, 1.0, 2.0, 3.0, -4.0, -5.0, -6.0, -7.0];
        let bytes = encode_bytes(&values, ByteOrder::BigEndian);
        let expected: [[u8; 4]; 8] = [
            [0x00, 0x00, 0x00, 0x00],
            [0x3f, 0x80, 0x00, 0x00],
            [0x40, 0x00, 0x00, 0x00],
            [0x40, 0x40, 0x00, 0x00],
            [0xc0, 0x80, 0x00, 0x00],
            [0xc0, 0xa0, 0x00, 0x00],
            [0xc0, 0xc0, 0x00, 0x00],
            [0xc0, 0xe0, 0x00, 0x00],
        ];
        assert_eq!(bytes, expected.concat());
    }

    #[test]
    fn test_short_byte_slice_is_rejected() {
        let mut dst = [0i32; 2];
        let err = decode_samples(&mut dst, &[0; 7], ByteOrder::BigEndian).unwrap_err();
        assert!(matches!(err, AudioSampleError::Layout(_)));

        let mut bytes = [0u8; 3];
        assert!(encode_samples(&[1i16, 2], &mut bytes, ByteOrder::LittleEndian).is_err());
    }

    #[test]
    fn test_decode_bytes_ignores_trailing_partial_sample() {
        let decoded = decode_bytes::<i16>(&[0, 1, 0, 2, 9], ByteOrder::BigEndian);
        assert_eq!(decoded.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_dyn_samples_round_trip() {
        let samples = vec![
            DynSamples::from(Samples::from(vec![1i16, -2, 3])),
            DynSamples::from(Samples::from(vec![0.5f64, -0.25])),
            DynSamples::from(vec![Complex::new(1.0f32, -1.0), Complex::new(0.5, 2.0)]),
            DynSamples::from(vec![Complex::new(-3.0f64, 0.125)]),
        ];
        for original in samples {
            for order in ORDERS {
                let bytes = original.encode(order).unwrap();
                assert_eq!(bytes.len(), original.len() * original.format().bytes_per_sample());
                let decoded = DynSamples::decode(original.format(), &bytes, order).unwrap();
                assert_eq!(decoded, original);
            }
        }
    }

    #[test]
    fn test_complex_is_stored_as_real_then_imaginary() {
        let samples = DynSamples::from(vec![Complex::new(1.0f32, -4.0)]);
        let bytes = samples.encode(ByteOrder::BigEndian).unwrap();
        assert_eq!(bytes, [0x3f, 0x80, 0, 0, 0xc0, 0x80, 0, 0]);
        assert_eq!(
            DynSamples::decode(SampleFormat::Complex64, &bytes, ByteOrder::BigEndian)
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_codec_config_default() {
        let config = CodecConfig::default();
        assert_eq!(config.byte_order, ByteOrder::native());
        assert_eq!(config.chunk_size, 1024);
        assert!(config.byte_order.is_native());
        assert_eq!(CodecConfig::new(ByteOrder::BigEndian).with_chunk_size(3).chunk_size, 3);
    }
}
