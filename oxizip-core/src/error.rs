//! Error types for OxiZip operations.
//!
//! Every failure of a driver call is reported as one [`OxiZipError`]. The
//! first failure encountered wins: the drivers return as soon as an engine
//! status maps to an error, and the engine session is released by scope end.

use std::fmt;
use std::io;
use thiserror::Error;

/// The point in a driver call at which a failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Creating the decompression session.
    InflateInit,
    /// Stepping the decompression session.
    Inflate,
    /// Creating the compression session.
    DeflateInit,
    /// Running the compression session.
    Deflate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InflateInit => "inflateInit2",
            Self::Inflate => "inflate",
            Self::DeflateInit => "deflateInit2",
            Self::Deflate => "deflate",
        };
        f.write_str(name)
    }
}

/// The main error type for OxiZip operations.
#[derive(Debug, Error)]
pub enum OxiZipError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended with a byte count other than the declared size, or
    /// the input ran out before the stream ended.
    #[error("Unexpected end of stream: expected {expected} bytes, produced {produced}")]
    UnexpectedEndOfStream {
        /// Declared decompressed size.
        expected: u64,
        /// Bytes actually produced.
        produced: u64,
    },

    /// The compressed input is malformed.
    #[error("Compressed data corrupted: {message}")]
    CorruptedData {
        /// Description reported by the engine.
        message: String,
    },

    /// The engine ran out of memory.
    #[error("Out of memory in {stage}")]
    OutOfMemory {
        /// Where the exhaustion happened.
        stage: Stage,
    },

    /// An engine status with no more specific meaning.
    #[error("Internal error in {stage}: {message}")]
    Internal {
        /// Where the status was observed.
        stage: Stage,
        /// Description of the status.
        message: String,
    },

    /// The output buffer cannot hold the complete compressed stream.
    #[error("Buffer too small: {capacity} bytes cannot hold the compressed stream")]
    BufferTooSmall {
        /// Capacity of the supplied output buffer.
        capacity: usize,
    },

    /// A buffer is longer than the engine can count.
    #[error("Buffer too large: {len} bytes exceeds engine limit of {limit}")]
    BufferTooLarge {
        /// Length of the offending buffer.
        len: usize,
        /// Largest length the engine accepts.
        limit: usize,
    },

    /// Invalid compressed resource header.
    #[error("Invalid resource header: {message}")]
    InvalidResourceHeader {
        /// Description of the header error.
        message: String,
    },

    /// No decompressor is registered under the given name.
    #[error("Unknown decompressor: {name}")]
    UnknownDecompressor {
        /// Name looked up in the registry.
        name: String,
    },

    /// No string starts at the given offset of the string table.
    #[error("No string at offset {offset} in string table")]
    StringNotFound {
        /// Offset into the table.
        offset: u32,
    },

    /// A string table grew past the range of a `u32` offset.
    #[error("String table full: offset {len} does not fit in 32 bits")]
    StringTableFull {
        /// Table length at which the next string would start.
        len: usize,
    },

    /// A fully decompressed resource has the wrong length.
    #[error("Resource size mismatch: expected {expected} bytes, got {actual}")]
    ResourceSizeMismatch {
        /// Size recorded for the resource.
        expected: u64,
        /// Size obtained after decompression.
        actual: u64,
    },
}

/// Fieldless classification of [`OxiZipError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`OxiZipError::Io`].
    Io,
    /// See [`OxiZipError::UnexpectedEndOfStream`].
    UnexpectedEndOfStream,
    /// See [`OxiZipError::CorruptedData`].
    CorruptedData,
    /// See [`OxiZipError::OutOfMemory`].
    OutOfMemory,
    /// See [`OxiZipError::Internal`].
    Internal,
    /// See [`OxiZipError::BufferTooSmall`].
    BufferTooSmall,
    /// See [`OxiZipError::BufferTooLarge`].
    BufferTooLarge,
    /// Any compressed resource container error.
    Resource,
}

/// Result type alias for OxiZip operations.
pub type Result<T> = std::result::Result<T, OxiZipError>;

impl OxiZipError {
    /// Create an unexpected end of stream error.
    pub fn unexpected_end(expected: u64, produced: u64) -> Self {
        Self::UnexpectedEndOfStream { expected, produced }
    }

    /// Create a corrupted data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Self::CorruptedData {
            message: message.into(),
        }
    }

    /// Create an out of memory error.
    pub fn out_of_memory(stage: Stage) -> Self {
        Self::OutOfMemory { stage }
    }

    /// Create an internal error.
    pub fn internal(stage: Stage, message: impl Into<String>) -> Self {
        Self::Internal {
            stage,
            message: message.into(),
        }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(capacity: usize) -> Self {
        Self::BufferTooSmall { capacity }
    }

    /// Create a buffer too large error.
    pub fn buffer_too_large(len: usize, limit: usize) -> Self {
        Self::BufferTooLarge { len, limit }
    }

    /// Create an invalid resource header error.
    pub fn invalid_resource_header(message: impl Into<String>) -> Self {
        Self::InvalidResourceHeader {
            message: message.into(),
        }
    }

    /// Create an unknown decompressor error.
    pub fn unknown_decompressor(name: impl Into<String>) -> Self {
        Self::UnknownDecompressor { name: name.into() }
    }

    /// Create a string not found error.
    pub fn string_not_found(offset: u32) -> Self {
        Self::StringNotFound { offset }
    }

    /// Create a string table full error.
    pub fn string_table_full(len: usize) -> Self {
        Self::StringTableFull { len }
    }

    /// Create a resource size mismatch error.
    pub fn resource_size_mismatch(expected: u64, actual: u64) -> Self {
        Self::ResourceSizeMismatch { expected, actual }
    }

    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::UnexpectedEndOfStream { .. } => ErrorKind::UnexpectedEndOfStream,
            Self::CorruptedData { .. } => ErrorKind::CorruptedData,
            Self::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            Self::Internal { .. } => ErrorKind::Internal,
            Self::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
            Self::BufferTooLarge { .. } => ErrorKind::BufferTooLarge,
            Self::InvalidResourceHeader { .. }
            | Self::UnknownDecompressor { .. }
            | Self::StringNotFound { .. }
            | Self::StringTableFull { .. }
            | Self::ResourceSizeMismatch { .. } => ErrorKind::Resource,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiZipError::unexpected_end(17, 16);
        assert!(err.to_string().contains("Unexpected end of stream"));
        assert!(err.to_string().contains("17"));

        let err = OxiZipError::out_of_memory(Stage::DeflateInit);
        assert_eq!(err.to_string(), "Out of memory in deflateInit2");

        let err = OxiZipError::internal(Stage::Deflate, "stream error");
        assert!(err.to_string().starts_with("Internal error in deflate"));

        let err = OxiZipError::buffer_too_small(1);
        assert!(err.to_string().contains("Buffer too small"));
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            OxiZipError::corrupted("invalid code").kind(),
            ErrorKind::CorruptedData
        );
        assert_eq!(
            OxiZipError::buffer_too_large(10, 5).kind(),
            ErrorKind::BufferTooLarge
        );
        assert_eq!(
            OxiZipError::unknown_decompressor("compact-cp").kind(),
            ErrorKind::Resource
        );
        assert_eq!(
            OxiZipError::string_table_full(usize::MAX).kind(),
            ErrorKind::Resource
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiZipError = io_err.into();
        assert!(matches!(err, OxiZipError::Io(_)));
    }
}
