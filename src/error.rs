//! Error types and result utilities for audio sample operations.
//!
//! Errors are grouped by the kind of problem so callers can match on the
//! category they care about:
//!
//! - [`ConversionError`] - a sample representation cannot take part in an operation
//! - [`ParameterError`] - an argument was rejected before any work was done
//! - [`LayoutError`] - buffer sizes do not line up
//!
//! I/O problems from byte streams and sample sources are reported as
//! [`AudioSampleError::Transfer`] together with the number of samples that were
//! moved before the failure. An empty destination or a zero chunk size is a
//! distinct [`AudioSampleError::ShortBuffer`] condition.

use thiserror::Error;

use crate::repr::SampleFormat;

/// Convenience type alias for results that may contain [`AudioSampleError`].
pub type AudioSampleResult<T> = Result<T, AudioSampleError>;

/// Error types that can occur during audio sample operations.
#[derive(Error, Debug)]
pub enum AudioSampleError {
    /// A sample representation could not be converted.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// An invalid parameter was supplied.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Buffer dimensions do not match.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The destination was empty or the chunk size was zero.
    #[error("short buffer: {operation} needs a non-empty buffer and a chunk size of at least 1")]
    ShortBuffer {
        /// Operation that rejected the buffer.
        operation: &'static str,
    },

    /// An I/O collaborator failed after `transferred` samples were moved.
    #[error("transfer failed after {transferred} samples: {source}")]
    Transfer {
        /// Samples successfully transferred before the failure.
        transferred: usize,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl AudioSampleError {
    /// Creates a [`AudioSampleError::ShortBuffer`] for the given operation.
    pub const fn short_buffer(operation: &'static str) -> Self {
        Self::ShortBuffer { operation }
    }

    /// Wraps an I/O error with the number of samples already transferred.
    pub fn transfer(transferred: usize, source: std::io::Error) -> Self {
        Self::Transfer {
            transferred,
            source,
        }
    }

    /// Number of samples transferred before a [`AudioSampleError::Transfer`] failure.
    ///
    /// Returns `None` for every other error kind.
    pub const fn transferred(&self) -> Option<usize> {
        match self {
            Self::Transfer { transferred, .. } => Some(*transferred),
            _ => None,
        }
    }

    /// Returns `true` for [`AudioSampleError::ShortBuffer`].
    pub const fn is_short_buffer(&self) -> bool {
        matches!(self, Self::ShortBuffer { .. })
    }
}

/// Errors raised when a sample representation cannot be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The representation is outside the set an operation understands.
    #[error("unsupported representation {format} for {operation}")]
    UnsupportedRepresentation {
        /// Representation that was rejected.
        format: SampleFormat,
        /// Operation that rejected it.
        operation: &'static str,
    },
}

impl ConversionError {
    /// Creates an [`ConversionError::UnsupportedRepresentation`] error.
    pub const fn unsupported(format: SampleFormat, operation: &'static str) -> Self {
        Self::UnsupportedRepresentation { format, operation }
    }
}

/// Errors raised for rejected parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// The value of a parameter is not acceptable.
    #[error("invalid value for '{parameter}': {reason}")]
    InvalidValue {
        /// Parameter name.
        parameter: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A numeric parameter lies outside its valid range.
    #[error("'{parameter}' = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Parameter name.
        parameter: String,
        /// Rejected value.
        value: String,
        /// Lower bound.
        min: String,
        /// Upper bound.
        max: String,
    },
}

impl ParameterError {
    /// Creates an [`ParameterError::InvalidValue`] error.
    pub fn invalid_value(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`ParameterError::OutOfRange`] error.
    pub fn out_of_range(
        parameter: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            parameter: parameter.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Errors raised when buffer sizes do not line up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Two buffers that must agree in length do not.
    #[error("{operation}: expected {expected} elements, got {actual}")]
    DimensionMismatch {
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
        /// Operation that detected the mismatch.
        operation: &'static str,
    },
}

impl LayoutError {
    /// Creates an [`LayoutError::DimensionMismatch`] error.
    pub const fn dimension_mismatch(
        operation: &'static str,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::DimensionMismatch {
            expected,
            actual,
            operation,
        }
    }
}
