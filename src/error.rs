use modelist_core::ListModelsError;
use thiserror::Error;

/// The ways a listing run can fail, each with its own user-facing message.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Connection failure, timeout, a non-success status or a body that is
    /// not JSON.
    #[error("❌ Request failed: {0}")]
    Transport(#[source] ListModelsError),

    /// The response was JSON but not of the expected shape.
    #[error("❌ Malformed response, missing or invalid field: {0}")]
    Schema(#[source] ListModelsError),

    #[error("❌ Unexpected error: {0}")]
    Unknown(#[source] anyhow::Error),
}

impl From<ListModelsError> for ListingError {
    fn from(err: ListModelsError) -> Self {
        if err.is_transport() {
            Self::Transport(err)
        } else if matches!(err, ListModelsError::ParseError(_)) {
            Self::Schema(err)
        } else {
            Self::Unknown(anyhow::Error::new(err))
        }
    }
}

impl From<std::io::Error> for ListingError {
    fn from(err: std::io::Error) -> Self {
        Self::Unknown(anyhow::Error::new(err))
    }
}
