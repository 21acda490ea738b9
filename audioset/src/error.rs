//! Error type for AudioSet reading and writing

use audioset_core::{AudioSetError, ErrorCategory};

/// Errors returned by the codec and its file and network collaborators
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The record layout or a caller-supplied shape is invalid
    #[error("{0}")]
    Format(#[from] AudioSetError),

    /// Waveform and label matrices disagree on the number of clips
    #[error("Waveform has {waveform_rows} rows but labels have {label_rows}")]
    ShapeMismatch {
        waveform_rows: usize,
        label_rows: usize,
    },

    /// A label is neither 0 nor 1
    #[error("Label at row {row}, class {class} is not 0 or 1")]
    InvalidLabel { row: usize, class: usize },

    /// The underlying byte channel failed
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// The HTTP transport failed
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[cfg(feature = "http")]
    #[error("HTTP request failed with status {0}")]
    HttpStatus(u16),

    /// JSON serialization or parsing failed
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        // read_exact reports a short source as UnexpectedEof
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::Format(AudioSetError::TruncatedInput)
        } else {
            Error::Io(err)
        }
    }
}

impl Error {
    /// Category of format, shape and data errors; `None` for transport failures
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Error::Format(err) => Some(err.category()),
            Error::ShapeMismatch { .. } => Some(ErrorCategory::Shape),
            Error::InvalidLabel { .. } => Some(ErrorCategory::Data),
            _ => None,
        }
    }

    /// Whether the source ended before the record was complete
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::Format(AudioSetError::TruncatedInput))
    }
}

/// Result type for AudioSet operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_eof_maps_to_truncated() {
        let err: Error = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(err.is_truncated());
        assert_eq!(err.category(), Some(ErrorCategory::Format));
    }

    #[test]
    fn test_other_io_errors_propagate() {
        let err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        match err {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_status_message() {
        let err = Error::HttpStatus(416);
        assert_eq!(err.to_string(), "HTTP request failed with status 416");
        assert_eq!(err.category(), None);
    }

    #[test]
    fn test_messages() {
        let err = Error::ShapeMismatch {
            waveform_rows: 3,
            label_rows: 4,
        };
        assert_eq!(err.to_string(), "Waveform has 3 rows but labels have 4");
        assert_eq!(
            Error::from(AudioSetError::MalformedHeader).to_string(),
            "Malformed AudioSet header"
        );
    }
}
