
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    //Collection errors
    /// The capture collaborator could not produce a stats report, e.g. the
    /// automation session is gone or the getStats() script failed.
    #[error("capture failed for {peer_connection}: {reason}")]
    ErrCaptureFailed {
        peer_connection: String,
        reason: String,
    },
    #[error("stats collection interval must be greater than zero")]
    ErrZeroCollectionInterval,
    #[error("no peer connection to collect stats from")]
    ErrNoPeerConnections,
    #[error("stats collection cancelled")]
    ErrCollectionCancelled,

    //Configuration errors
    #[error("invalid getStats config: {0}")]
    ErrInvalidConfig(String),

    #[error("json: {0}")]
    Json(String),
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Builds a capture failure for the given peer connection.
    pub fn capture_failed(peer_connection: impl Into<String>, reason: impl ToString) -> Self {
        Error::ErrCaptureFailed {
            peer_connection: peer_connection.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true when the error aborted a collection because the capture
    /// collaborator failed.
    pub fn is_capture_failure(&self) -> bool {
        matches!(self, Error::ErrCaptureFailed { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
