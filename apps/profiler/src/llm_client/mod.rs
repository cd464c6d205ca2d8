/// Completion client, the single point of entry for calls to the remote
/// chat-completions endpoint.
///
/// One POST per profile run. No retries and no explicit timeout: a failed call
/// ends that run and the user triggers a new one.
use reqwest::{header::CONTENT_TYPE, Client};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Per-call generation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub top_p: f32,
    /// Read `choices[0].text` when `choices[0].message.content` is absent.
    pub text_fallback: bool,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_p: 0.9,
            text_fallback: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// Every response field is optional; missing pieces decode as "no content".
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
    citations: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Choice {
    message: Option<ChoiceMessage>,
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Generated text and the citations returned alongside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    pub content: Option<String>,
    pub citations: Vec<String>,
}

impl ChatResponse {
    fn into_completion(self, text_fallback: bool) -> Completion {
        let first = self.choices.and_then(|choices| choices.into_iter().next());
        let content = first.and_then(|choice| {
            let Choice { message, text } = choice;
            match message.and_then(|m| m.content) {
                Some(content) => Some(content),
                None if text_fallback => text,
                None => None,
            }
        });
        Completion {
            content,
            citations: self.citations.unwrap_or_default(),
        }
    }
}

/// Decodes a 2xx response body. A body that is not JSON, or JSON of the wrong
/// shape, yields an empty completion rather than an error.
fn decode_completion(body: &str, text_fallback: bool) -> Completion {
    match serde_json::from_str::<ChatResponse>(body) {
        Ok(response) => response.into_completion(text_fallback),
        Err(e) => {
            warn!("Completion response was not valid JSON: {e}");
            Completion::default()
        }
    }
}

#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(api_url: String, model: String, api_key: String) -> Result<Self, CompletionError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_url,
            model,
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one system/user message pair and returns the first choice's text
    /// plus any citations. Non-2xx statuses become `CompletionError::Api`.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        options: CompletionOptions,
    ) -> Result<Completion, CompletionError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: options.temperature,
            top_p: options.top_p,
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion = decode_completion(&body, options.text_fallback);

        debug!(
            "Completion call succeeded: has_content={}, citations={}",
            completion.content.is_some(),
            completion.citations.len()
        );

        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CompletionClient {
        CompletionClient::new(
            format!("{}/chat/completions", server.uri()),
            "sonar-pro".to_string(),
            "test-key".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_message_content() {
        let body = r#"{"choices":[{"message":{"content":"Overview:\nAcme"}}],"citations":["https://a.example"]}"#;
        let completion = decode_completion(body, false);
        assert_eq!(completion.content.as_deref(), Some("Overview:\nAcme"));
        assert_eq!(completion.citations, vec!["https://a.example".to_string()]);
    }

    #[test]
    fn test_decode_text_fallback_only_when_enabled() {
        let body = r#"{"choices":[{"text":"Plain text"}]}"#;
        assert_eq!(decode_completion(body, false).content, None);
        assert_eq!(
            decode_completion(body, true).content.as_deref(),
            Some("Plain text")
        );
    }

    #[test]
    fn test_decode_prefers_message_over_text() {
        let body = r#"{"choices":[{"message":{"content":"from message"},"text":"from text"}]}"#;
        assert_eq!(
            decode_completion(body, true).content.as_deref(),
            Some("from message")
        );
    }

    #[test]
    fn test_decode_missing_fields_is_empty() {
        assert_eq!(decode_completion("{}", true), Completion::default());
        assert_eq!(
            decode_completion(r#"{"choices":[],"citations":null}"#, false),
            Completion::default()
        );
    }

    #[test]
    fn test_decode_non_json_is_empty() {
        assert_eq!(decode_completion("<html>oops</html>", false), Completion::default());
    }

    #[tokio::test]
    async fn test_complete_sends_expected_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "model": "sonar-pro",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "usr"}
                ],
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "Summary:\nfine"}}],
                "citations": ["a", "b"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let completion = client_for(&server)
            .complete("sys", "usr", CompletionOptions::default())
            .await
            .unwrap();

        assert_eq!(completion.content.as_deref(), Some("Summary:\nfine"));
        assert_eq!(completion.citations, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_complete_non_success_status_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"error": {"message": "invalid api key"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete("sys", "usr", CompletionOptions::default())
            .await
            .unwrap_err();

        match err {
            CompletionError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_complete_raw_error_body_kept_when_not_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete("sys", "usr", CompletionOptions::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("upstream exploded"));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_complete_connection_failure_is_http_error() {
        let client = CompletionClient::new(
            "http://127.0.0.1:1/chat/completions".to_string(),
            "sonar-pro".to_string(),
            "test-key".to_string(),
        )
        .unwrap();

        let err = client
            .complete("sys", "usr", CompletionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Http(_)));
    }
}
