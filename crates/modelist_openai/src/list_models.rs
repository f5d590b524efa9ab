use anyhttp::HttpClient;
use bytes::Bytes;
use http::Request;
use modelist_core::{
    models::Model,
    providers::list_models::{ListModelsError, ListModelsProvider},
};
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::OpenAiProvider;

#[async_trait::async_trait]
impl<C: HttpClient> ListModelsProvider for OpenAiProvider<C> {
    async fn list_models(&self) -> Result<Vec<Model>, ListModelsError> {
        let url = format!("{}/v1/models", self.url);
        tracing::debug!(%url, "requesting model list");

        let request = Request::get(url.as_str())
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .body(Vec::new())
            .map_err(|e| ListModelsError::RequestBuildFailed(anyhow::Error::new(e)))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ListModelsError::ResponseFetchFailed)?;

        let status = response.status();
        if !status.is_success() {
            let err_body = response
                .bytes()
                .await
                .unwrap_or_else(|_| Bytes::from_static(b"<failed to read>"));

            tracing::warn!(%url, status = status.as_u16(), "model list request rejected");

            return Err(ListModelsError::RequestError {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&err_body).into_owned(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(ListModelsError::ResponseFetchFailed)?;

        // A body that is not JSON at all (a gateway's HTML page, a truncated
        // read) is a failed request; JSON of the wrong shape is a parse error.
        let openai_response: OpenAiModelsResponse =
            serde_json::from_slice(&body).map_err(|e| {
                if e.is_syntax() || e.is_eof() {
                    ListModelsError::InvalidBody(anyhow::Error::new(e))
                } else {
                    ListModelsError::ParseError(anyhow::Error::new(e))
                }
            })?;

        let models: Vec<Model> = openai_response
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|m| Model {
                id: m.id,
                owned_by: m.owned_by,
                created: m.created,
            })
            .collect();

        tracing::debug!(count = models.len(), "received model list");

        Ok(models)
    }
}

/// `data` may be absent or `null`, both of which mean no models.
#[derive(Deserialize)]
struct OpenAiModelsResponse {
    data: Option<Vec<OpenAiModel>>,
}

#[derive(Deserialize)]
struct OpenAiModel {
    id: Option<String>,
    owned_by: Option<String>,
    created: Option<serde_json::Number>,
}
