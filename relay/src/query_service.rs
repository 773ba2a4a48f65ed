use crate::config::{Credentials, RelayConfig};
use crate::error::{ConfigError, UpstreamError};
use crate::gemini_service::GeminiService;
use crate::models::ChatResponse;
use std::sync::Arc;

pub const NO_ANSWER: &str = "I couldn't find an answer in the documents.";

pub struct QueryService {
    config: Arc<RelayConfig>,
    gemini_service: Arc<GeminiService>,
}

impl QueryService {
    pub fn new(config: Arc<RelayConfig>, gemini_service: Arc<GeminiService>) -> Self {
        Self {
            config,
            gemini_service,
        }
    }

    /// The key and store for one request, or the error that stops it.
    pub fn credentials(&self) -> Result<Credentials<'_>, ConfigError> {
        self.config.credentials()
    }

    /// Relays one query. Every upstream failure is folded into the answer
    /// text, so this always produces a response.
    pub async fn answer(&self, credentials: Credentials<'_>, query: &str) -> ChatResponse {
        log::info!("Relaying query ({} chars)", query.chars().count());

        let outcome = self.gemini_service.generate_content(credentials, query).await;

        match &outcome {
            Ok(_) => log::info!("Answer received from {}", self.gemini_service.model()),
            Err(UpstreamError::NoAnswer) => log::info!("No answer text in upstream response"),
            Err(e) => log::warn!("Upstream call failed: {}", e),
        }

        ChatResponse {
            answer: render_answer(outcome),
        }
    }
}

pub fn render_answer(outcome: Result<String, UpstreamError>) -> String {
    match outcome {
        Ok(text) => text,
        Err(UpstreamError::Status { code, body }) => format!("Google Error ({}): {}", code, body),
        Err(UpstreamError::NoAnswer) => NO_ANSWER.to_string(),
        Err(e @ (UpstreamError::Transport(_) | UpstreamError::InvalidJson(_))) => {
            format!("Error contacting Google: {}", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service(api_key: Option<&str>, store_id: Option<&str>, api_base: &str) -> QueryService {
        let config = Arc::new(RelayConfig {
            api_key: api_key.map(str::to_string),
            store_id: store_id.map(str::to_string),
            model: "gemini-test".to_string(),
            api_base: api_base.to_string(),
            timeout: Duration::from_secs(5),
        });
        let gemini_service = Arc::new(GeminiService::new(&config).unwrap());
        QueryService::new(config, gemini_service)
    }

    #[test]
    fn extracted_text_is_returned_verbatim() {
        assert_eq!(render_answer(Ok("  spaced\nanswer ".to_string())), "  spaced\nanswer ");
    }

    #[test]
    fn status_errors_echo_code_and_body() {
        let answer = render_answer(Err(UpstreamError::Status {
            code: 404,
            body: "{\"error\":\"not found\"}".to_string(),
        }));
        assert_eq!(answer, "Google Error (404): {\"error\":\"not found\"}");
    }

    #[test]
    fn missing_answer_uses_fallback() {
        assert_eq!(render_answer(Err(UpstreamError::NoAnswer)), NO_ANSWER);
    }

    #[test]
    fn invalid_json_reads_as_contact_error() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let answer = render_answer(Err(UpstreamError::InvalidJson(err)));
        assert!(answer.starts_with("Error contacting Google: response was not valid JSON"));
    }

    #[test]
    fn missing_configuration_has_no_credentials() {
        let service = service(Some("key"), None, "http://127.0.0.1:1/v1beta");
        let err = service.credentials().unwrap_err();
        assert_eq!(err.to_string(), "Missing API Key or Store ID");
    }

    #[tokio::test]
    async fn transport_failure_is_folded_into_answer() {
        let service = service(Some("key"), Some("fileSearchStores/x"), "http://127.0.0.1:1/v1beta");
        let credentials = service.credentials().unwrap();

        let response = service.answer(credentials, "hello").await;

        assert!(response.answer.starts_with("Error contacting Google: "));
        assert!(response.answer.len() > "Error contacting Google: ".len());
    }
}
