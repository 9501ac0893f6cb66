//! Sample streaming over readers and writers.
//!
//! This module connects the byte codec to block-oriented sample transfer:
//!
//! - [`SampleReader`] / [`SampleWriter`] - the minimal interface every source
//!   and sink implements
//! - [`StreamReader`] / [`StreamWriter`] - codec-backed adapters over
//!   [`std::io::Read`] and [`std::io::Write`]
//! - [`Delay`] - a fixed delay line over any [`SampleReader`]
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use std::time::Duration;
//! use audio_dsp::streaming::{Delay, SampleReader, SampleWriter, StreamReader, StreamWriter};
//! use audio_dsp::{ByteOrder, CodecConfig};
//!
//! let config = CodecConfig::new(ByteOrder::LittleEndian).with_chunk_size(64);
//!
//! let mut writer = StreamWriter::new(Vec::new(), config);
//! writer.write_samples(&[1i16, 2, 3, 4]).unwrap();
//!
//! let reader = StreamReader::new(Cursor::new(writer.into_inner()), config);
//! let mut delay = Delay::<i16, _>::new(reader, 1, 1_000, Duration::from_millis(1)).unwrap();
//! let mut out = [0i16; 3];
//! delay.read_samples(&mut out).unwrap();
//! assert_eq!(out, [0, 1, 2]);
//! ```

pub mod delay;
pub mod io;
pub mod traits;

pub use delay::Delay;
pub use io::{StreamReader, StreamWriter};
pub use traits::{SampleReader, SampleWriter};

#[cfg(test)]
mod tests;
