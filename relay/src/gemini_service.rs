use crate::config::{Credentials, RelayConfig};
use crate::error::UpstreamError;
use crate::models::*;
use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

pub struct GeminiService {
    client: Client,
    api_base: String,
    model: String,
}

impl GeminiService {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    /// Asks the model to answer `query` from the configured file search store.
    ///
    /// One POST, no retries. Every failure comes back as an [`UpstreamError`]
    /// so the caller decides how it is presented.
    pub async fn generate_content(
        &self,
        credentials: Credentials<'_>,
        query: &str,
    ) -> Result<String, UpstreamError> {
        let request = GenerateContentRequest::grounded(query, credentials.store_id);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", credentials.api_key)])
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(UpstreamError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(UpstreamError::transport)?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(UpstreamError::InvalidJson)?;

        // A body of the wrong shape is treated like one without an answer.
        let gemini_response: GenerateContentResponse = match from_object(value) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::debug!("Unexpected generateContent shape: {}", e);
                return Err(UpstreamError::NoAnswer);
            }
        };

        gemini_response
            .first_text()
            .map(str::to_string)
            .ok_or(UpstreamError::NoAnswer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(api_base: &str) -> RelayConfig {
        RelayConfig {
            api_key: Some("test-key".to_string()),
            store_id: Some("fileSearchStores/test".to_string()),
            model: "gemini-test".to_string(),
            api_base: api_base.to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn endpoint_names_model_and_method() {
        let service = GeminiService::new(&config("https://example.invalid/v1beta")).unwrap();
        assert_eq!(
            service.endpoint(),
            "https://example.invalid/v1beta/models/gemini-test:generateContent"
        );
    }

    #[tokio::test]
    async fn closed_port_is_a_transport_error_without_the_key() {
        let config = config("http://127.0.0.1:1/v1beta");
        let service = GeminiService::new(&config).unwrap();

        let err = service
            .generate_content(config.credentials().unwrap(), "hello")
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Transport(_)));
        assert!(!err.to_string().contains("test-key"));
    }
}
