use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    domain::generation::{errors::GenerationError, value_objects::CompletionOptions},
    infrastructure::llm::transport::send_json,
};

/// Client for providers speaking the OpenAI chat-completions dialect
/// (Groq, OpenRouter).
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    provider: &'static str,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAICompatibleClient {
    pub fn new(
        provider: &'static str,
        base_url: impl Into<String>,
        api_key: String,
        model: String,
        temperature: f32,
        client: Client,
    ) -> Self {
        Self {
            provider,
            base_url: base_url.into(),
            api_key,
            model,
            temperature,
            client,
        }
    }

    pub fn provider(&self) -> &'static str {
        self.provider
    }

    #[instrument(skip(self, prompt), fields(provider = self.provider, model = %self.model))]
    pub async fn complete(
        &self,
        prompt: String,
        options: CompletionOptions,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: options.max_output_tokens,
        };

        let request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body);

        let response: ChatCompletionResponse = send_json(self.provider, request).await?;
        debug!("{} returned {} choices", self.provider, response.choices.len());

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::MalformedResponse {
                provider: self.provider.to_string(),
                reason: "missing choices[0].message.content".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    use super::*;

    fn client(base_url: String) -> OpenAICompatibleClient {
        OpenAICompatibleClient::new(
            "Groq",
            base_url,
            "test-key".to_string(),
            "llama-3.3-70b-versatile".to_string(),
            0.7,
            Client::new(),
        )
    }

    fn options() -> CompletionOptions {
        CompletionOptions {
            max_output_tokens: 4096,
        }
    }

    #[tokio::test]
    async fn test_complete_reads_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "llama-3.3-70b-versatile",
                "max_tokens": 4096,
                "messages": [{"role": "user", "content": "hello"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "[]"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client(server.uri())
            .complete("hello".to_string(), options())
            .await
            .unwrap();

        assert_eq!(text, "[]");
    }

    #[tokio::test]
    async fn test_rate_limit_keeps_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("too many requests"))
            .mount(&server)
            .await;

        let err = client(server.uri())
            .complete("hello".to_string(), options())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GenerationError::Provider {
                provider: "Groq".to_string(),
                status: 429,
                body: "too many requests".to_string(),
            }
        );
        assert!(err.to_string().contains("rate limit"));
    }

    #[tokio::test]
    async fn test_missing_choices_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = client(server.uri())
            .complete("hello".to_string(), options())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(server.uri())
            .complete("hello".to_string(), options())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let err = client("http://127.0.0.1:1".to_string())
            .complete("hello".to_string(), options())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Transport { .. }));
    }
}
