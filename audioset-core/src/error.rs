//! Error types for AudioSet container operations

/// Errors that can occur while interpreting an AudioSet record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioSetError {
    /// Header fields violate the format invariants
    MalformedHeader,
    /// The byte source ended before a block was complete
    TruncatedInput,
    /// Waveform and label row counts (or a matrix shape) disagree
    ShapeMismatch,
    /// A label value other than 0 or 1
    InvalidLabel,
    /// Declared block sizes do not fit in memory addressing
    SizeOverflow,
    /// Bytes remain after the record ends
    TrailingBytes,
    /// A clip range string could not be parsed or is reversed
    InvalidRange,
}

/// Coarse grouping of errors for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Problems with the on-disk layout
    Format,
    /// Problems with caller-supplied matrix shapes
    Shape,
    /// Problems with caller-supplied values
    Data,
}

impl AudioSetError {
    /// Get the category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            AudioSetError::MalformedHeader
            | AudioSetError::TruncatedInput
            | AudioSetError::SizeOverflow
            | AudioSetError::TrailingBytes => ErrorCategory::Format,
            AudioSetError::ShapeMismatch => ErrorCategory::Shape,
            AudioSetError::InvalidLabel | AudioSetError::InvalidRange => ErrorCategory::Data,
        }
    }
}

impl core::fmt::Display for AudioSetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            AudioSetError::MalformedHeader => "Malformed AudioSet header",
            AudioSetError::TruncatedInput => "Input ended before the record was complete",
            AudioSetError::ShapeMismatch => "Waveform and label shapes do not match",
            AudioSetError::InvalidLabel => "Label values must be 0 or 1",
            AudioSetError::SizeOverflow => "Record size overflows addressable memory",
            AudioSetError::TrailingBytes => "Unexpected bytes after the record",
            AudioSetError::InvalidRange => "Invalid range",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for AudioSetError {}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorCategory::Format => write!(f, "format"),
            ErrorCategory::Shape => write!(f, "shape"),
            ErrorCategory::Data => write!(f, "data"),
        }
    }
}

/// Result type for AudioSet core operations
pub type Result<T> = core::result::Result<T, AudioSetError>;
