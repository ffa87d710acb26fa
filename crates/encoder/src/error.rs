//! Error types for text-to-RTF conversion

use thiserror::Error;

/// Errors that can occur while converting text to RTF.
///
/// The character transform itself is total; every variant here belongs to
/// the I/O boundary around it.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// IO error (permission denied, disk full, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source file does not exist
    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    /// Source bytes are not valid UTF-8
    #[error("Source is not valid UTF-8 (byte offset {offset})")]
    SourceDecode { offset: usize },

    /// Staging or persisting the output file failed
    #[error("Failed to write output to {path}: {source}")]
    SinkWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl EncodeError {
    /// Create a sink-write error for a destination path
    pub fn sink_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SinkWrite {
            path: path.into(),
            source,
        }
    }
}

/// Result type for conversion operations
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;
