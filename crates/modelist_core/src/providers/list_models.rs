use thiserror::Error;

use crate::models::Model;

#[async_trait::async_trait]
pub trait ListModelsProvider: Send + Sync {
    /// Fetches the provider's models in the order the provider returns them.
    async fn list_models(&self) -> Result<Vec<Model>, ListModelsError>;
}

#[derive(Debug, Error)]
pub enum ListModelsError {
    #[error("Failed to build the request: {0}.")]
    RequestBuildFailed(#[source] anyhow::Error),

    #[error("Failed to retrieve the response: {0}.")]
    ResponseFetchFailed(#[source] anyhow::Error),

    #[error("The request failed with status {status}: {message}.")]
    RequestError { status: u16, message: String },

    #[error("The response body is not valid JSON: {0}.")]
    InvalidBody(#[source] anyhow::Error),

    #[error("Failed to parse response: {0}.")]
    ParseError(#[source] anyhow::Error),
}

impl ListModelsError {
    /// Whether the failure happened on the wire: no response, a non-success
    /// status, or a body that is not JSON at all.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ResponseFetchFailed(_) | Self::RequestError { .. } | Self::InvalidBody(_)
        )
    }
}
