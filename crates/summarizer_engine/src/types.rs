use std::fmt;

/// Result of a successful upload round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UploadCompleted {
        result: Result<UploadOutcome, UploadError>,
    },
}

/// All upload failures collapse into one path for the UI; the kind exists
/// for log readability, not for differentiated recovery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UploadError {
    pub kind: FailureKind,
    pub message: String,
}

impl UploadError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    FileRead,
    Network,
    HttpStatus(u16),
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::FileRead => write!(f, "file read error"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}
