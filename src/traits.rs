use num_traits::{Bounded, Num, NumCast, Zero};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::ByteOrder;
use crate::repr::SampleFormat;
use crate::AudioSampleResult;
use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// Core trait defining the interface for audio sample types.
///
/// Implemented for the closed set of PCM representations:
///
/// - `i8`, `i16`, `i32`, `i64`: signed integer PCM, mapped onto `[-1.0, 1.0)`
/// - `u8`, `u16`, `u32`, `u64`: unsigned integer PCM, biased by half their range
/// - `f32`, `f64`: floating point samples, assumed to be normalized already
///
/// The trait is sealed. Each implementation is generated by one of the macros
/// below so that every kind gets its own conversion and byte-coding code,
/// selected at compile time.
pub trait AudioSample:
    // Standard library traits
    Copy
    + Default
    + Display
    + Debug
    + Send
    + Sync
    + PartialEq
    + PartialOrd
    + 'static

    // External crate traits
    + bytemuck::Pod // plain-old-data, used for native-endian byte views
    + Num // num-traits arithmetic
    + NumCast // num-traits casting between numeric types
    + Bounded // num-traits min/max value
    + Zero
    + Serialize
    + DeserializeOwned
    + sealed::Sealed
{
    /// Runtime tag for this representation.
    const FORMAT: SampleFormat;
    /// Bit depth of this sample type.
    const BITS: u8;
    /// Number of bytes one sample occupies in an encoded stream.
    const BYTES: usize = Self::BITS as usize / 8;

    /// Normalizes this sample into the `f64` domain.
    ///
    /// Signed integers divide by `2^(BITS-1)`. Unsigned integers subtract the
    /// half-range bias first and then apply the same scale. Floats pass through.
    fn to_float(self) -> f64;

    /// Converts this sample to 16-bit PCM.
    ///
    /// Integers keep their top 16 bits (unsigned kinds lose their bias first).
    /// Floats are scaled by 32768, rounded half away from zero and saturated, so
    /// positive and negative values round symmetrically.
    fn to_int16(self) -> i16;

    /// Raw numeric value as `f64`, without normalization.
    fn as_f64(self) -> f64;

    /// Builds a sample from a raw `f64` value.
    ///
    /// Integer kinds truncate toward zero and saturate at their bounds.
    fn from_f64(value: f64) -> Self;

    /// Absolute value. Signed integers saturate, so `MIN` maps to `MAX`.
    fn magnitude(self) -> Self;

    /// Reads one sample from the first [`Self::BYTES`] bytes of `bytes`.
    ///
    /// The bytes are taken as an unsigned integer in `order` and the bits are
    /// reinterpreted as `Self`. `order` is irrelevant for 8-bit kinds.
    ///
    /// # Panics
    /// Panics if `bytes` is shorter than [`Self::BYTES`]. The codec checks
    /// lengths before calling this.
    fn read_bytes(bytes: &[u8], order: ByteOrder) -> Self;

    /// Writes this sample into the first [`Self::BYTES`] bytes of `out`.
    ///
    /// # Panics
    /// Panics if `out` is shorter than [`Self::BYTES`].
    fn write_bytes(self, out: &mut [u8], order: ByteOrder);
}

/// Allocating conversions from a sample container into the analysis domains.
///
/// Implemented for [`Samples`](crate::Samples) and for the runtime-tagged
/// [`DynSamples`](crate::DynSamples). The latter can hold complex data, which
/// is not a valid source, so every method is fallible.
pub trait AudioTypeConversion {
    /// Converts every sample into the normalized `f64` domain.
    fn to_float(&self) -> AudioSampleResult<Vec<f64>>;

    /// Converts every sample into a complex value with a zero imaginary part.
    fn to_complex(&self) -> AudioSampleResult<Vec<num_complex::Complex<f64>>>;

    /// Converts every sample into 16-bit PCM.
    fn to_int16(&self) -> AudioSampleResult<Vec<i16>>;
}

// ========================
// Sample Implementation Macros
// ========================

/// Shared byte coding for every primitive kind.
macro_rules! impl_byte_coding {
    ($type:ty) => {
        #[inline(always)]
        fn read_bytes(bytes: &[u8], order: ByteOrder) -> Self {
            let mut raw = [0u8; std::mem::size_of::<$type>()];
            raw.copy_from_slice(&bytes[..std::mem::size_of::<$type>()]);
            match order {
                ByteOrder::BigEndian => <$type>::from_be_bytes(raw),
                ByteOrder::LittleEndian => <$type>::from_le_bytes(raw),
            }
        }

        #[inline(always)]
        fn write_bytes(self, out: &mut [u8], order: ByteOrder) {
            let raw = match order {
                ByteOrder::BigEndian => self.to_be_bytes(),
                ByteOrder::LittleEndian => self.to_le_bytes(),
            };
            out[..std::mem::size_of::<$type>()].copy_from_slice(&raw);
        }

        #[inline(always)]
        fn as_f64(self) -> f64 {
            self as f64
        }

        #[inline(always)]
        fn from_f64(value: f64) -> Self {
            value as $type
        }
    };
}

/// Generates a signed integer sample. `$scale` is `2^(BITS-1)`.
macro_rules! impl_signed_sample {
    ($type:ty, $format:ident, $bits:expr, |$v:ident| $to_i16:expr) => {
        impl sealed::Sealed for $type {}

        impl AudioSample for $type {
            const FORMAT: SampleFormat = SampleFormat::$format;
            const BITS: u8 = $bits;

            #[inline(always)]
            fn to_float(self) -> f64 {
                const SCALE: f64 = (1u64 << ($bits - 1)) as f64;
                self as f64 / SCALE
            }

            #[inline(always)]
            fn to_int16(self) -> i16 {
                let $v = self;
                $to_i16
            }

            #[inline(always)]
            fn magnitude(self) -> Self {
                self.saturating_abs()
            }

            impl_byte_coding!($type);
        }
    };
}

/// Generates an unsigned integer sample. The half-range bias is removed by
/// flipping the top bit, which maps `u*` onto the matching `i*` two's
/// complement value.
macro_rules! impl_unsigned_sample {
    ($type:ty, $signed:ty, $format:ident, $bits:expr, |$v:ident| $to_i16:expr) => {
        impl sealed::Sealed for $type {}

        impl AudioSample for $type {
            const FORMAT: SampleFormat = SampleFormat::$format;
            const BITS: u8 = $bits;

            #[inline(always)]
            fn to_float(self) -> f64 {
                const SCALE: f64 = (1u64 << ($bits - 1)) as f64;
                (self as f64 - SCALE) / SCALE
            }

            #[inline(always)]
            fn to_int16(self) -> i16 {
                let $v = (self ^ (1 << ($bits - 1))) as $signed;
                $to_i16
            }

            #[inline(always)]
            fn magnitude(self) -> Self {
                self
            }

            impl_byte_coding!($type);
        }
    };
}

/// Generates a floating point sample.
macro_rules! impl_float_sample {
    ($type:ty, $format:ident, $bits:expr) => {
        impl sealed::Sealed for $type {}

        impl AudioSample for $type {
            const FORMAT: SampleFormat = SampleFormat::$format;
            const BITS: u8 = $bits;

            #[inline(always)]
            fn to_float(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn to_int16(self) -> i16 {
                // `as` saturates out-of-range values and maps NaN to 0.
                (self as f64 * I16_SCALE).round() as i16
            }

            #[inline(always)]
            fn magnitude(self) -> Self {
                self.abs()
            }

            impl_byte_coding!($type);
        }
    };
}

const I16_SCALE: f64 = 32768.0;

// ========================
// AudioSample Implementations
// ========================

impl_signed_sample!(i8, I8, 8, |v| (v as i16) << 8);
impl_signed_sample!(i16, I16, 16, |v| v);
impl_signed_sample!(i32, I32, 32, |v| (v >> 16) as i16);
impl_signed_sample!(i64, I64, 64, |v| (v >> 48) as i16);

impl_unsigned_sample!(u8, i8, U8, 8, |v| (v as i16) << 8);
impl_unsigned_sample!(u16, i16, U16, 16, |v| v);
impl_unsigned_sample!(u32, i32, U32, 32, |v| (v >> 16) as i16);
impl_unsigned_sample!(u64, i64, U64, 64, |v| (v >> 48) as i16);

impl_float_sample!(f32, F32, 32);
impl_float_sample!(f64, F64, 64);

#[cfg(test)]
mod conversion_tests {
    use super::*;

    macro_rules! assert_close {
        ($left:expr, $right:expr, $tolerance:expr) => {
            assert!(
                ($left - $right).abs() < $tolerance,
                "assertion failed: `{} ≈ {}` (tolerance: {})",
                $left,
                $right,
                $tolerance
            );
        };
    }

    #[test]
    fn bits_per_sample_per_kind() {
        assert_eq!(<i8 as AudioSample>::BITS, 8);
        assert_eq!(<u8 as AudioSample>::BITS, 8);
        assert_eq!(<i16 as AudioSample>::BITS, 16);
        assert_eq!(<u16 as AudioSample>::BITS, 16);
        assert_eq!(<i32 as AudioSample>::BITS, 32);
        assert_eq!(<u32 as AudioSample>::BITS, 32);
        assert_eq!(<f32 as AudioSample>::BITS, 32);
        assert_eq!(<i64 as AudioSample>::BITS, 64);
        assert_eq!(<u64 as AudioSample>::BITS, 64);
        assert_eq!(<f64 as AudioSample>::BITS, 64);
        assert_eq!(<i32 as AudioSample>::BYTES, 4);
    }

    #[test]
    fn signed_edge_cases_to_float() {
        assert_eq!(i16::MIN.to_float(), -1.0);
        assert_eq!(0i16.to_float(), 0.0);
        assert_close!(i16::MAX.to_float(), 32767.0 / 32768.0, 1e-12);
        assert_eq!(i8::MIN.to_float(), -1.0);
        assert_eq!(64i8.to_float(), 0.5);
        assert_eq!(i32::MIN.to_float(), -1.0);
        assert_eq!(i64::MIN.to_float(), -1.0);
        assert!(i64::MAX.to_float() <= 1.0);
    }

    #[test]
    fn unsigned_edge_cases_to_float() {
        assert_eq!(0u8.to_float(), -1.0);
        assert_eq!(128u8.to_float(), 0.0);
        assert_close!(255u8.to_float(), 127.0 / 128.0, 1e-12);
        assert_eq!(0u16.to_float(), -1.0);
        assert_eq!(32768u16.to_float(), 0.0);
        assert_eq!(0u32.to_float(), -1.0);
        assert_eq!(0u64.to_float(), -1.0);
        assert!(u64::MAX.to_float() <= 1.0);
    }

    #[test]
    fn to_float_is_bounded_and_monotonic_over_8_and_16_bits() {
        let mut previous = f64::NEG_INFINITY;
        for v in i8::MIN..=i8::MAX {
            let f = v.to_float();
            assert!((-1.0..=1.0).contains(&f));
            assert!(f > previous);
            previous = f;
        }

        let mut previous = f64::NEG_INFINITY;
        for v in u16::MIN..=u16::MAX {
            let f = v.to_float();
            assert!((-1.0..=1.0).contains(&f));
            assert!(f > previous);
            previous = f;
        }
    }

    #[test]
    fn to_float_is_bounded_for_wide_kinds() {
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert!((-1.0..=1.0).contains(&v.to_float()));
        }
        for v in [u32::MIN, u32::MAX / 2, u32::MAX] {
            assert!((-1.0..=1.0).contains(&v.to_float()));
        }
        for v in [i64::MIN, 0, i64::MAX] {
            assert!((-1.0..=1.0).contains(&v.to_float()));
        }
        assert!(u64::MIN.to_float() < u64::MAX.to_float());
    }

    #[test]
    fn integer_to_int16_keeps_top_bits() {
        assert_eq!(0x7fi8.to_int16(), 0x7f00);
        assert_eq!(i8::MIN.to_int16(), i16::MIN);
        assert_eq!((-1i8).to_int16(), -256);
        assert_eq!(1234i16.to_int16(), 1234);
        assert_eq!(0x1234_5678i32.to_int16(), 0x1234);
        assert_eq!((-65536i32).to_int16(), -1);
        assert_eq!(i64::MIN.to_int16(), i16::MIN);
        assert_eq!(i64::MAX.to_int16(), i16::MAX);
    }

    #[test]
    fn unsigned_to_int16_matches_float_domain() {
        assert_eq!(0u8.to_int16(), i16::MIN);
        assert_eq!(128u8.to_int16(), 0);
        assert_eq!(255u8.to_int16(), 0x7f00);
        assert_eq!(0u16.to_int16(), i16::MIN);
        assert_eq!(32768u16.to_int16(), 0);
        assert_eq!(u16::MAX.to_int16(), i16::MAX);
        assert_eq!(0u32.to_int16(), i16::MIN);
        assert_eq!(u32::MAX.to_int16(), i16::MAX);
        assert_eq!(u64::MAX.to_int16(), i16::MAX);

        for v in [0u16, 1, 1000, 32767, 32768, 40000, 65535] {
            assert_eq!(v.to_int16() as f64, v.to_float() * 32768.0);
        }
    }

    #[test]
    fn float_to_int16_rounds_symmetrically() {
        assert_eq!(0.5f32.to_int16(), 16384);
        assert_eq!((-0.5f32).to_int16(), -16384);
        let half_step = 0.5 / 32768.0;
        assert_eq!((3.0 * half_step).to_int16(), 2);
        assert_eq!((-3.0 * half_step).to_int16(), -2);
        assert_eq!(1.0f64.to_int16(), i16::MAX);
        assert_eq!((-1.0f64).to_int16(), i16::MIN);
        assert_eq!(f64::NAN.to_int16(), 0);
    }

    #[test]
    fn magnitude_saturates_signed_minimum() {
        assert_eq!(i8::MIN.magnitude(), i8::MAX);
        assert_eq!((-7i8).magnitude(), 7);
        assert_eq!(200u8.magnitude(), 200);
        assert_eq!((-2.5f64).magnitude(), 2.5);
    }

    #[test]
    fn byte_coding_honours_order() {
        let mut out = [0u8; 2];
        0x1234i16.write_bytes(&mut out, ByteOrder::BigEndian);
        assert_eq!(out, [0x12, 0x34]);
        0x1234i16.write_bytes(&mut out, ByteOrder::LittleEndian);
        assert_eq!(out, [0x34, 0x12]);
        assert_eq!(i16::read_bytes(&[0x7f, 0xff], ByteOrder::BigEndian), 32767);
        assert_eq!(f32::read_bytes(&[0x3f, 0x80, 0, 0], ByteOrder::BigEndian), 1.0);
        assert_eq!(u8::read_bytes(&[0xfc], ByteOrder::LittleEndian), 252);
    }

    #[test]
    fn from_f64_saturates() {
        assert_eq!(i8::from_f64(128.0), i8::MAX);
        assert_eq!(i8::from_f64(-4.9), -4);
        assert_eq!(u8::from_f64(-3.0), 0);
        assert_eq!(f32::from_f64(0.25), 0.25);
    }
}
