//! Encoder error type

use crate::formats::CompressionMethod;

/// Error returned by the OCTM writer
///
/// After any error the sink contents are undefined and should be discarded.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The method has a reserved header code but no encoder
    #[error("compression method {0} is not supported (only RAW is implemented)")]
    UnsupportedCompressionMethod(CompressionMethod),

    /// The sink failed; the I/O error is passed through unchanged
    #[error("failed to write to sink: {0}")]
    SinkWrite(#[from] std::io::Error),

    /// A count or string length does not fit in the format's i32 fields
    #[error("{field} of {count} exceeds the i32 range of the format")]
    CountOverflow { field: &'static str, count: usize },
}

/// Result alias for encoder operations
pub type Result<T, E = EncodeError> = std::result::Result<T, E>;
