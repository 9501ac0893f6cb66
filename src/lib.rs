// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)] // Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::box_collection)] // Warns on boxed `Vec`, `String`, etc.
#![warn(clippy::vec_box)] // Avoids using `Vec<Box<T>>` when unnecessary
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_safety_doc)] // Docs for `unsafe` functions
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # audio_dsp
//!
//! Generic PCM sample handling with byte-exact codecs, statistics, spectral
//! analysis, windowed-sinc FIR filtering and a streaming delay line.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! audio_dsp = "0.1.0"
//! ```
//!
//! Optional parts sit behind features, all enabled by default:
//!
//! - `spectral-analysis`: FFT engines and [`operations::SpectrumAnalyzer`]
//! - `fir`: windowed-sinc FIR filters
//! - `streaming`: sample readers, writers and the delay line
//!
//! ## Sample Kinds
//!
//! Ten real kinds implement [`AudioSample`]: `i8`, `u8`, `i16`, `u16`,
//! `i32`, `u32`, `i64`, `u64`, `f32` and `f64`. [`SampleFormat`] also names
//! the two complex kinds, which [`DynSamples`] can carry.
//!
//! ```rust
//! use audio_dsp::{AudioTypeConversion, Samples};
//!
//! let samples = Samples::from(vec![0u8, 128, 255]);
//! let floats = samples.to_float().unwrap();
//! assert_eq!(floats[1], 0.0);
//! ```
//!
//! ## Byte Codec
//!
//! ```rust
//! use audio_dsp::{ByteOrder, decode_bytes, encode_bytes};
//!
//! let bytes = encode_bytes(&[1i16, -2], ByteOrder::BigEndian);
//! assert_eq!(bytes, [0x00, 0x01, 0xff, 0xfe]);
//! let samples = decode_bytes::<i16>(&bytes, ByteOrder::BigEndian);
//! assert_eq!(samples.as_slice(), &[1, -2]);
//! ```
//!
//! ## Error Handling
//!
//! The library uses a hierarchical error system:
//!
//! ```rust
//! use audio_dsp::{AudioSampleError, AudioSampleResult, ParameterError};
//!
//! let result: AudioSampleResult<()> = Err(AudioSampleError::Parameter(
//!     ParameterError::invalid_value("taps", "must be even"),
//! ));
//!
//! match result {
//!     Ok(()) => {}
//!     Err(AudioSampleError::Parameter(err)) => eprintln!("Invalid parameter: {err}"),
//!     Err(other) => eprintln!("Other error: {other}"),
//! }
//! ```
//!
//! ## Logging
//!
//! Filter design, FFT planning and stream transfers emit [`tracing`] events
//! at `debug` and `trace` level. Install any subscriber to see them.

pub mod codec;
pub mod conversions;
mod error;
pub mod operations;
pub mod repr;
#[cfg(feature = "streaming")]
pub mod streaming;
mod traits;

pub use crate::codec::{
    ByteOrder, CodecConfig, decode_bytes, decode_from, decode_from_chunked, decode_samples,
    encode_bytes, encode_samples, encode_to, encode_to_chunked,
};
pub use crate::error::{
    AudioSampleError, AudioSampleResult, ConversionError, LayoutError, ParameterError,
};
pub use crate::operations::{AudioProcessing, AudioStatistics};
pub use crate::repr::{Buffer, DynSamples, SampleFormat, Samples};
pub use crate::traits::{AudioSample, AudioTypeConversion};
