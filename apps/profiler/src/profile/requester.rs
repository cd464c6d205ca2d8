//! Profile Requester: validates the company name and fetches generated text.
//!
//! `ProfileSource` is the seam between the handlers and the remote endpoint.
//! `AppState` carries an `Arc<dyn ProfileSource>`; `CompletionClient` is the
//! production implementation.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{CompletionClient, CompletionError};
use crate::profile::variants::ProfileVariant;

/// A validated company name. Always non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequest {
    company_name: String,
}

impl ProfileRequest {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let company_name = raw.trim();
        if company_name.is_empty() {
            return Err(AppError::Validation(
                "Please enter a valid company name.".to_string(),
            ));
        }
        Ok(Self {
            company_name: company_name.to_string(),
        })
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponse {
    pub raw_text: String,
    pub citations: Vec<String>,
}

impl ProfileResponse {
    /// Stand-in text when the service returned nothing usable.
    pub const NO_CONTENT: &'static str = "No content available.";
    /// Stand-in text when the call itself failed.
    pub const ERROR_CONTENT: &'static str = "Error fetching content.";

    pub fn new(raw_text: Option<String>, citations: Vec<String>) -> Self {
        Self {
            raw_text: raw_text.unwrap_or_else(|| Self::NO_CONTENT.to_string()),
            citations,
        }
    }

    pub fn error_placeholder() -> Self {
        Self {
            raw_text: Self::ERROR_CONTENT.to_string(),
            citations: Vec::new(),
        }
    }

    pub fn has_content(&self) -> bool {
        self.raw_text != Self::NO_CONTENT && self.raw_text != Self::ERROR_CONTENT
    }
}

#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(
        &self,
        variant: ProfileVariant,
        request: &ProfileRequest,
    ) -> Result<ProfileResponse, CompletionError>;
}

#[async_trait]
impl ProfileSource for CompletionClient {
    async fn fetch(
        &self,
        variant: ProfileVariant,
        request: &ProfileRequest,
    ) -> Result<ProfileResponse, CompletionError> {
        let name = request.company_name();
        info!("Requesting {variant} profile for '{name}'");

        let completion = self
            .complete(
                &variant.system_prompt(name),
                &variant.user_prompt(name),
                variant.completion_options(),
            )
            .await?;

        if completion.content.is_none() {
            warn!("Completion for '{name}' returned no content");
        }

        Ok(ProfileResponse::new(completion.content, completion.citations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_request_trims_name() {
        let request = ProfileRequest::new("  Acme Works \n").unwrap();
        assert_eq!(request.company_name(), "Acme Works");
    }

    #[test]
    fn test_request_rejects_blank_name() {
        assert!(matches!(ProfileRequest::new(""), Err(AppError::Validation(_))));
        assert!(matches!(ProfileRequest::new(" \t\n "), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_response_defaults_to_no_content() {
        let response = ProfileResponse::new(None, Vec::new());
        assert_eq!(response.raw_text, ProfileResponse::NO_CONTENT);
        assert!(!response.has_content());
    }

    #[test]
    fn test_error_placeholder() {
        let response = ProfileResponse::error_placeholder();
        assert_eq!(response.raw_text, ProfileResponse::ERROR_CONTENT);
        assert!(response.citations.is_empty());
        assert!(!response.has_content());
    }

    #[test]
    fn test_real_text_has_content() {
        assert!(ProfileResponse::new(Some("Overview:\nx".to_string()), vec![]).has_content());
    }

    #[tokio::test]
    async fn test_completion_client_fetch_uses_variant_prompts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "messages": [
                    {"role": "system", "content": ProfileVariant::Sales.system_prompt("Acme")},
                    {"role": "user", "content": "Build a company profile for: Acme"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"text": "Competitors:\nGlobex\n"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = CompletionClient::new(
            server.uri(),
            "sonar-pro".to_string(),
            "test-key".to_string(),
        )
        .unwrap();
        let request = ProfileRequest::new("Acme").unwrap();
        let response = client.fetch(ProfileVariant::Sales, &request).await.unwrap();

        // Sales reads the `text` fallback.
        assert_eq!(response.raw_text, "Competitors:\nGlobex\n");
        assert!(response.citations.is_empty());
    }

    #[tokio::test]
    async fn test_completion_client_fetch_missing_content_is_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"text": "ignored without fallback"}],
                "citations": ["https://example.com"]
            })))
            .mount(&server)
            .await;

        let client = CompletionClient::new(
            server.uri(),
            "sonar-pro".to_string(),
            "test-key".to_string(),
        )
        .unwrap();
        let request = ProfileRequest::new("Acme").unwrap();
        let response = client.fetch(ProfileVariant::Standard, &request).await.unwrap();

        assert_eq!(response.raw_text, ProfileResponse::NO_CONTENT);
        assert_eq!(response.citations, vec!["https://example.com".to_string()]);
    }
}
